//! A set of helper functions to encode and decode exponential-golomb values.
//!
//! This crate extends the [`BitReader`] and [`BitWriter`] from
//! `nalsplit-bytes-util` with `read_exp_golomb`, `read_signed_exp_golomb`,
//! `write_exp_golomb` and `write_signed_exp_golomb`.
//!
//! ## Usage
//!
//! ```rust
//! # use std::io;
//! use nalsplit_bytes_util::BitReader;
//! use nalsplit_expgolomb::BitReaderExpGolombExt;
//!
//! // `010` is the code for 1, `011` the code for 2.
//! let mut reader = BitReader::new_from_slice([0b0100_1100u8]);
//! assert_eq!(reader.read_exp_golomb()?, 1);
//! assert_eq!(reader.read_exp_golomb()?, 2);
//! # Ok::<(), io::Error>(())
//! ```
//!
//! ## Limits
//!
//! A code may carry at most [`MAX_LEADING_ZERO_BITS`] leading zero bits. Longer
//! prefixes cannot come from any real H.264 syntax element and are rejected
//! with [`io::ErrorKind::InvalidData`] instead of scanning on through the
//! input.
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

use std::io;

use nalsplit_bytes_util::{BitReader, BitWriter};

/// The longest run of leading zero bits accepted in a single code.
///
/// With 32 leading zeros the largest decodable value is `2^33 - 2`, which
/// still fits comfortably in a `u64`.
pub const MAX_LEADING_ZERO_BITS: u8 = 32;

/// Extension trait for reading exponential-golomb encoded numbers from a bit reader.
pub trait BitReaderExpGolombExt {
    /// Reads an unsigned exponential-golomb encoded number (`ue(v)`).
    fn read_exp_golomb(&mut self) -> io::Result<u64>;

    /// Reads a signed exponential-golomb encoded number (`se(v)`).
    fn read_signed_exp_golomb(&mut self) -> io::Result<i64> {
        let code_num = self.read_exp_golomb()?;

        if code_num % 2 == 0 {
            Ok(-((code_num / 2) as i64))
        } else {
            Ok(code_num.div_ceil(2) as i64)
        }
    }
}

impl<R: io::Read> BitReaderExpGolombExt for BitReader<R> {
    fn read_exp_golomb(&mut self) -> io::Result<u64> {
        let mut leading_zero_bits = 0;
        while !self.read_bit()? {
            leading_zero_bits += 1;
            if leading_zero_bits > MAX_LEADING_ZERO_BITS {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("exp-golomb code has more than {MAX_LEADING_ZERO_BITS} leading zero bits"),
                ));
            }
        }

        let suffix = self.read_bits(leading_zero_bits)?;
        Ok((1 << leading_zero_bits) - 1 + suffix)
    }
}

/// Extension trait for writing exponential-golomb encoded numbers to a bit writer.
pub trait BitWriterExpGolombExt {
    /// Writes an unsigned exponential-golomb encoded number (`ue(v)`).
    fn write_exp_golomb(&mut self, value: u64) -> io::Result<()>;

    /// Writes a signed exponential-golomb encoded number (`se(v)`).
    fn write_signed_exp_golomb(&mut self, value: i64) -> io::Result<()> {
        let code_num = if value > 0 {
            value as u64 * 2 - 1
        } else {
            value.unsigned_abs().checked_mul(2).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "value is out of range for exp-golomb")
            })?
        };

        self.write_exp_golomb(code_num)
    }
}

impl<W: io::Write> BitWriterExpGolombExt for BitWriter<W> {
    fn write_exp_golomb(&mut self, value: u64) -> io::Result<()> {
        let code = value
            .checked_add(1)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "value is out of range for exp-golomb"))?;

        let leading_zero_bits = (63 - code.leading_zeros()) as u8;
        if leading_zero_bits > MAX_LEADING_ZERO_BITS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("value needs more than {MAX_LEADING_ZERO_BITS} leading zero bits"),
            ));
        }

        self.write_bits(0, leading_zero_bits)?;
        self.write_bits(code, leading_zero_bits + 1)
    }
}
