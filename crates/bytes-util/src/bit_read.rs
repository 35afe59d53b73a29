use std::io;

/// A reader that reads individual bits from a stream, most significant bit first.
///
/// The reader keeps the byte it is currently consuming together with a mask
/// selecting the next bit. A new byte is only pulled from the inner reader once
/// every bit of the current one has been handed out, so the cursor never moves
/// backwards and never reads ahead.
#[derive(Debug)]
#[must_use]
pub struct BitReader<T> {
    data: T,
    current_byte: u8,
    mask: u8,
}

impl<T> BitReader<T> {
    /// Creates a new `BitReader` from a reader.
    pub const fn new(data: T) -> Self {
        Self {
            data,
            current_byte: 0,
            mask: 0,
        }
    }

    pub(crate) const fn is_aligned(&self) -> bool {
        self.mask == 0
    }
}

impl<B: AsRef<[u8]>> BitReader<io::Cursor<B>> {
    /// Creates a new `BitReader` over an in-memory buffer.
    pub const fn new_from_slice(data: B) -> Self {
        Self::new(io::Cursor::new(data))
    }
}

impl<T: io::Read> BitReader<T> {
    /// Reads a single bit.
    pub fn read_bit(&mut self) -> io::Result<bool> {
        if self.is_aligned() {
            let mut byte = [0; 1];
            self.data.read_exact(&mut byte)?;
            self.current_byte = byte[0];
            self.mask = 0x80;
        }

        let bit = self.current_byte & self.mask != 0;
        self.mask >>= 1;

        Ok(bit)
    }

    /// Reads `count` bits and returns them as the low bits of a `u64`, first bit read
    /// being the most significant.
    ///
    /// Reading zero bits always yields `0` without touching the underlying reader.
    pub fn read_bits(&mut self, count: u8) -> io::Result<u64> {
        if count > 64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot read more than 64 bits at once",
            ));
        }

        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u64;
        }

        Ok(value)
    }
}
