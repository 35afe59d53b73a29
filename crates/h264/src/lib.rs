//! Splits H.264 elementary streams into NAL units and reads the few header
//! fields needed to route them.
//!
//! ## Notable features
//!
//! - Annex-B byte streams (`00 00 01` / `00 00 00 01` start codes) with
//!   [`bitstream_to_nalus`], including removal of emulation prevention bytes.
//! - Length-prefixed (AVCC style) streams with [`stream_to_nalus`], which also
//!   counts IDR slices.
//! - [`nalu_type`], [`sps_id`] and [`pps_id`] on extracted NAL units.
//! - [`write_bitstream`] and [`write_length_prefixed`] to go the other way.
//!
//! ## Examples
//!
//! ```rust
//! use nalsplit_h264::{NALUnitType, bitstream_to_nalus, nalu_type, pps_id};
//!
//! let nalus = bitstream_to_nalus(&[0x00, 0x00, 0x01, 0x68, 0xEB, 0xE3, 0xCB, 0x00, 0x00, 0x01, 0x65, 0x88])?;
//!
//! assert_eq!(nalu_type(&nalus[0])?, NALUnitType::PPS);
//! assert_eq!(pps_id(&nalus[0])?, 0);
//! assert_eq!(nalu_type(&nalus[1])?, NALUnitType::IDRSliceLayerWithoutPartitioning);
//! # Ok::<(), nalsplit_h264::NaluError>(())
//! ```
//!
//! ## Malformed input
//!
//! Nothing here validates that a stream conforms to ISO/IEC 14496-10. Input
//! that would make a scanner run past its buffer is reported as a
//! [`NaluError`] instead; well-formed input never hits these errors.
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
#![deny(clippy::missing_const_for_fn)]

mod annexb;
mod emulation_prevention;
mod enums;
mod length_prefixed;
mod nal_unit_header;
mod parameter_set;

pub mod error;

pub use self::annexb::{START_CODE, append_bitstream_nalus, bitstream_to_nalus, write_bitstream};
pub use self::emulation_prevention::{EMULATION_PREVENTION_SEQUENCE, remove_emulation_prevention};
pub use self::enums::NALUnitType;
pub use self::error::NaluError;
pub use self::length_prefixed::{
    LENGTH_PREFIX_SIZE, LengthPrefixedNalus, append_stream_nalus, stream_to_nalus, write_length_prefixed,
};
pub use self::nal_unit_header::{NALUnitHeader, nalu_type};
pub use self::parameter_set::{PPS_ID_OFFSET, SPS_ID_OFFSET, pps_id, sps_id};

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests;
