use std::io;

use nalsplit_bytes_util::BitReader;

use crate::NALUnitType;
use crate::error::{NaluError, Result};

/// The one byte header at the start of every H.264 NAL unit.
///
/// ISO/IEC 14496-10:2022 - 7.3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NALUnitHeader {
    /// `forbidden_zero_bit`, always `false` in a conforming stream.
    ///
    /// It is reported rather than rejected, conformance is not checked here.
    pub forbidden_zero_bit: bool,
    /// `nal_ref_idc`, two bits. Zero means the unit is not used for reference.
    pub nal_ref_idc: u8,
    /// `nal_unit_type`, five bits.
    pub nal_unit_type: NALUnitType,
}

impl NALUnitHeader {
    /// Parses the header from the next eight bits of `bit_reader`.
    pub fn parse<R: io::Read>(bit_reader: &mut BitReader<R>) -> io::Result<Self> {
        let forbidden_zero_bit = bit_reader.read_bit()?;
        let nal_ref_idc = bit_reader.read_bits(2)? as u8;
        let nal_unit_type = NALUnitType::from(bit_reader.read_bits(5)? as u8);

        Ok(Self {
            forbidden_zero_bit,
            nal_ref_idc,
            nal_unit_type,
        })
    }

    /// Parses the header of a complete NAL unit.
    pub fn from_nalu(nalu: &[u8]) -> Result<Self> {
        let &[header, ..] = nalu else {
            return Err(NaluError::TruncatedStream {
                offset: 0,
                needed: 1,
                remaining: 0,
            });
        };

        Ok(Self::parse(&mut BitReader::new_from_slice([header]))?)
    }
}

/// Returns the type of a NAL unit, the low five bits of its first byte.
///
/// The type is read straight from the header byte, so this works on escaped and
/// unescaped NAL units alike.
pub const fn nalu_type(nalu: &[u8]) -> Result<NALUnitType> {
    match nalu.first() {
        Some(&header) => Ok(NALUnitType::from_header_byte(header)),
        None => Err(NaluError::TruncatedStream {
            offset: 0,
            needed: 1,
            remaining: 0,
        }),
    }
}
