use std::io::{self, Write};

use bytes::Bytes;

use crate::emulation_prevention::{EmulationPreventionWriter, unescape_span};
use crate::error::Result;

/// The four byte start code written in front of every NAL unit by [`write_bitstream`].
pub const START_CODE: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

/// Splits an Annex-B byte stream into NAL units.
///
/// See [`append_bitstream_nalus`] for the rules used to find unit boundaries.
pub fn bitstream_to_nalus(bitstream: &[u8]) -> Result<Vec<Bytes>> {
    let mut nalus = Vec::new();
    append_bitstream_nalus(bitstream, &mut nalus)?;
    Ok(nalus)
}

/// Splits an Annex-B byte stream into NAL units and appends them to `nalus`, in stream order.
///
/// A start code is a `0x01` preceded by at least two `0x00`, which covers both
/// the three and four byte forms. A NAL unit runs from the byte after its start
/// code up to the zero run of the next start code, or to the end of the input.
/// Bytes before the first start code are ignored. Every unit has its emulation
/// prevention bytes removed as described in
/// [`remove_emulation_prevention`](crate::remove_emulation_prevention).
///
/// Fails with [`NaluError::EmptySpan`](crate::NaluError::EmptySpan) when two start codes are adjacent or the
/// input ends on a start code. Units found before the error stay in `nalus`.
pub fn append_bitstream_nalus(bitstream: &[u8], nalus: &mut Vec<Bytes>) -> Result<()> {
    let first = nalus.len();
    let mut zeroes = 0;
    let mut begin = None;

    for (i, &byte) in bitstream.iter().enumerate() {
        match byte {
            0x00 => zeroes += 1,
            0x01 if zeroes >= 2 => {
                if let Some(begin) = begin {
                    nalus.push(unescape_span(&bitstream[begin..i - zeroes], begin)?);
                }

                begin = Some(i + 1);
                zeroes = 0;
            }
            _ => zeroes = 0,
        }
    }

    if let Some(begin) = begin {
        nalus.push(unescape_span(&bitstream[begin..], begin)?);
    }

    tracing::debug!(len = bitstream.len(), nalus = nalus.len() - first, "split annex-b bitstream");

    Ok(())
}

/// Writes NAL units as an Annex-B byte stream, each preceded by [`START_CODE`].
///
/// Everything after the header byte is escaped: an emulation prevention byte is
/// inserted wherever two zero bytes are followed by a byte in `0x00..=0x03`, so
/// no unit can contain a false start code. Reading the stream back gives the
/// original units, except when an escape lands in the last three bytes of a unit
/// (those are kept verbatim on read) or a unit ends in `0x00` (that zero is taken
/// as part of the next start code). Empty units are rejected with [`io::ErrorKind::InvalidInput`] since they
/// cannot be read back.
pub fn write_bitstream<I, W>(nalus: I, writer: &mut W) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
    W: io::Write,
{
    for nalu in nalus {
        let nalu = nalu.as_ref();
        if nalu.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "cannot write an empty nal unit"));
        }

        writer.write_all(&START_CODE)?;
        EmulationPreventionWriter::new(&mut *writer).write_all(nalu)?;
    }

    Ok(())
}
