use std::io;

use bytes::{BufMut, Bytes, BytesMut};

use crate::NALUnitType;
use crate::error::{NaluError, Result};

/// The three byte sequence in which the `0x03` is an `emulation_prevention_three_byte`.
///
/// ISO/IEC 14496-10:2022 - 7.4.1
pub const EMULATION_PREVENTION_SEQUENCE: [u8; 3] = [0x00, 0x00, 0x03];

/// Copies a complete NAL unit, dropping its emulation prevention bytes.
///
/// The header byte is copied as is. In the rest of the unit every `00 00 03`
/// becomes `00 00`, except that the last three bytes of the unit are always
/// copied verbatim: a sequence that reaches into them is kept, including its
/// `0x03`.
///
/// ```rust
/// # use nalsplit_h264::remove_emulation_prevention;
/// let nalu = remove_emulation_prevention(&[0x67, 0x00, 0x00, 0x03, 0x01, 0x00, 0x00, 0x03, 0x02])?;
/// assert_eq!(nalu.as_ref(), &[0x67, 0x00, 0x00, 0x01, 0x00, 0x00, 0x03, 0x02]);
/// # Ok::<(), nalsplit_h264::NaluError>(())
/// ```
pub fn remove_emulation_prevention(nalu: &[u8]) -> Result<Bytes> {
    unescape_span(nalu, 0)
}

/// Does the work of [`remove_emulation_prevention`] for a span found at `offset`
/// in a larger stream. The offset is only used for errors and logging.
pub(crate) fn unescape_span(span: &[u8], offset: usize) -> Result<Bytes> {
    let Some((&header, _)) = span.split_first() else {
        return Err(NaluError::EmptySpan { offset });
    };

    let mut nalu = BytesMut::with_capacity(span.len());
    nalu.put_u8(header);

    // Start of the verbatim tail. Never before the first payload byte.
    let tail = span.len().saturating_sub(3).max(1);
    let mut removed = 0;
    let mut i = 1;
    while i < tail {
        if i + 3 <= tail && span[i..i + 3] == EMULATION_PREVENTION_SEQUENCE {
            nalu.put_slice(&[0x00, 0x00]);
            removed += 1;
            i += 3;
        } else {
            nalu.put_u8(span[i]);
            i += 1;
        }
    }

    nalu.put_slice(&span[i..]);

    tracing::trace!(
        offset,
        len = nalu.len(),
        removed,
        nal_unit_type = ?NALUnitType::from_header_byte(header),
        "extracted nal unit"
    );

    Ok(nalu.freeze())
}

/// A [`io::Write`] adapter that inserts an emulation prevention byte wherever two
/// zero bytes are followed by a byte in `0x00..=0x03`.
///
/// Each NAL unit needs a fresh writer, the zero run does not carry over from one
/// unit to the next.
pub(crate) struct EmulationPreventionWriter<W> {
    inner: W,
    zero_count: u8,
}

impl<W> EmulationPreventionWriter<W> {
    pub(crate) const fn new(inner: W) -> Self {
        Self { inner, zero_count: 0 }
    }
}

impl<W: io::Write> io::Write for EmulationPreventionWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            if self.zero_count >= 2 && byte <= 0x03 {
                self.inner.write_all(&[EMULATION_PREVENTION_SEQUENCE[2]])?;
                self.zero_count = 0;
            }

            self.inner.write_all(&[byte])?;
            if byte == 0x00 {
                self.zero_count += 1;
            } else {
                self.zero_count = 0;
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
