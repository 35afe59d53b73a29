//! Error types.

use std::io;

/// Result type.
pub type Result<T> = std::result::Result<T, NaluError>;

/// Error returned when NAL units cannot be extracted or inspected.
///
/// Every variant describes malformed input that would otherwise make a scanner
/// read outside of its buffer or loop without bound.
#[derive(Debug, thiserror::Error)]
pub enum NaluError {
    /// The input ends before the data it announces.
    #[error("stream truncated at offset {offset}: {needed} bytes needed, {remaining} remaining")]
    TruncatedStream {
        /// Offset in the input where the missing data was expected.
        offset: usize,
        /// Minimum number of bytes required from `offset`.
        needed: usize,
        /// Number of bytes actually available from `offset`.
        remaining: usize,
    },
    /// An exp-golomb code has a longer leading zero run than allowed.
    #[error("exp-golomb code at offset {offset} has more than {max} leading zero bits")]
    UnboundedCodeLength {
        /// Offset in the input where the code starts.
        offset: usize,
        /// The maximum accepted number of leading zero bits.
        max: u8,
    },
    /// A NAL unit with no bytes would have been emitted.
    #[error("empty nal unit at offset {offset}")]
    EmptySpan {
        /// Offset in the input where the empty unit starts.
        offset: usize,
    },
    /// IO error.
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl NaluError {
    /// Maps an error from reading the exp-golomb code that makes up the start of
    /// `code`, found at `offset` in the input.
    pub(crate) fn from_exp_golomb(err: io::Error, offset: usize, code: &[u8]) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::TruncatedStream {
                offset,
                needed: exp_golomb_len(code),
                remaining: code.len(),
            },
            io::ErrorKind::InvalidData => Self::UnboundedCodeLength {
                offset,
                max: nalsplit_expgolomb::MAX_LEADING_ZERO_BITS,
            },
            _ => Self::Io(err),
        }
    }
}

/// Number of bytes spanned by the exp-golomb code at the start of `code`: the
/// zero prefix, the marker bit and a suffix as long as the prefix.
///
/// When the prefix itself runs off the end the full length is unknown, and one
/// byte more than `code` holds is the best lower bound.
fn exp_golomb_len(code: &[u8]) -> usize {
    let leading_zero_bits = code
        .iter()
        .enumerate()
        .find(|(_, byte)| **byte != 0)
        .map(|(i, byte)| i * 8 + byte.leading_zeros() as usize);

    match leading_zero_bits {
        Some(leading_zero_bits) => (2 * leading_zero_bits + 1).div_ceil(8),
        None => code.len() + 1,
    }
}

impl From<NaluError> for io::Error {
    fn from(err: NaluError) -> Self {
        match err {
            NaluError::Io(err) => err,
            NaluError::TruncatedStream { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            _ => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}
