//! Small helpers for reading and writing bit-aligned and length-delimited data.
//!
//! ## Notable features
//!
//! - [`BitReader`]: reads individual bits, MSB first, from any [`std::io::Read`].
//! - [`BitWriter`]: the writing counterpart of [`BitReader`].
//! - [`BytesCursorExt`]: bounds-checked extraction of byte runs from an [`std::io::Cursor`].
//!
//! None of the readers ever index past the end of their input. Running out of
//! data is reported as [`std::io::ErrorKind::UnexpectedEof`].
#![cfg_attr(feature = "docs", doc = "## Feature flags")]
#![cfg_attr(feature = "docs", doc = document_features::document_features!())]
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or [Apache-2.0](./LICENSE.Apache-2.0) license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(unreachable_pub)]

mod bit_read;
mod bit_write;
mod bytes_cursor;

pub use bit_read::BitReader;
pub use bit_write::BitWriter;
pub use bytes_cursor::BytesCursorExt;
