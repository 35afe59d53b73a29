use std::io;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use nalsplit_bytes_util::BytesCursorExt;

use crate::error::{NaluError, Result};
use crate::nalu_type;

/// Size of the big-endian length field in front of every NAL unit.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// The NAL units of a length-prefixed stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LengthPrefixedNalus {
    /// The NAL units, in stream order.
    pub nalus: Vec<Bytes>,
    /// How many of `nalus` are IDR slices.
    pub idr_count: usize,
}

/// Splits a length-prefixed stream into NAL units.
///
/// See [`append_stream_nalus`].
pub fn stream_to_nalus(stream: &[u8]) -> Result<LengthPrefixedNalus> {
    let mut nalus = Vec::new();
    let idr_count = append_stream_nalus(stream, &mut nalus)?;

    Ok(LengthPrefixedNalus { nalus, idr_count })
}

/// Splits a length-prefixed stream into NAL units, appends them to `nalus` and
/// returns how many of the appended units are IDR slices.
///
/// The stream is a sequence of a 4 byte big-endian length followed by that many
/// bytes of NAL unit, as found in AVCC samples. Units are copied verbatim, no
/// emulation prevention bytes are removed.
///
/// The length fields are trusted to frame the stream. A length field cut short
/// by the end of the input, or announcing more bytes than are left, fails with
/// [`NaluError::TruncatedStream`]; a zero length fails with
/// [`NaluError::EmptySpan`]. Units found before the error stay in `nalus`.
pub fn append_stream_nalus(stream: &[u8], nalus: &mut Vec<Bytes>) -> Result<usize> {
    let mut cursor = io::Cursor::new(stream);
    let mut count = 0;
    let mut idr_count = 0;

    while cursor.remaining() > 0 {
        let offset = cursor.position() as usize;
        let remaining = cursor.remaining();

        let nalu_size = cursor.read_u32::<BigEndian>().map_err(|_| NaluError::TruncatedStream {
            offset,
            needed: LENGTH_PREFIX_SIZE,
            remaining,
        })? as usize;

        let offset = offset + LENGTH_PREFIX_SIZE;
        if nalu_size == 0 {
            return Err(NaluError::EmptySpan { offset });
        }

        let remaining = cursor.remaining();
        let data = cursor.extract_slice(nalu_size).map_err(|_| NaluError::TruncatedStream {
            offset,
            needed: nalu_size,
            remaining,
        })?;

        let nal_unit_type = nalu_type(data)?;
        if nal_unit_type.is_idr() {
            idr_count += 1;
        }

        tracing::trace!(offset, len = nalu_size, nal_unit_type = ?nal_unit_type, "extracted nal unit");

        nalus.push(Bytes::copy_from_slice(data));
        count += 1;
    }

    tracing::debug!(len = stream.len(), nalus = count, idr_count, "split length-prefixed stream");

    Ok(idr_count)
}

/// Writes NAL units as a length-prefixed stream, each preceded by its length as a
/// 4 byte big-endian integer.
///
/// Empty units, and units longer than `u32::MAX`, are rejected with
/// [`io::ErrorKind::InvalidInput`].
pub fn write_length_prefixed<I, W>(nalus: I, writer: &mut W) -> io::Result<()>
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

        let len = u32::try_from(nalu.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "nal unit is too long for a 4 byte length"))?;

        writer.write_u32::<BigEndian>(len)?;
        writer.write_all(nalu)?;
    }

    Ok(())
}
