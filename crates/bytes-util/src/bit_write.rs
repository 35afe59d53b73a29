use std::io;

/// A writer that writes individual bits to a stream, most significant bit first.
///
/// Bits are collected into a byte and handed to the inner writer once eight
/// bits are present. Call [`BitWriter::finish`] to pad the last partial byte
/// with zeros and flush it.
#[derive(Debug)]
#[must_use]
pub struct BitWriter<W> {
    writer: W,
    bit_pos: u8,
    current_byte: u8,
}

impl<W> BitWriter<W> {
    /// Creates a new `BitWriter` around a writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            bit_pos: 0,
            current_byte: 0,
        }
    }

    const fn is_aligned(&self) -> bool {
        self.bit_pos == 0
    }
}

impl<W: io::Write> BitWriter<W> {
    /// Writes a single bit.
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        if bit {
            self.current_byte |= 0x80 >> self.bit_pos;
        }

        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.writer.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bit_pos = 0;
        }

        Ok(())
    }

    /// Writes the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u64, count: u8) -> io::Result<()> {
        if count > 64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot write more than 64 bits at once",
            ));
        }

        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 == 1)?;
        }

        Ok(())
    }

    fn align(&mut self) -> io::Result<()> {
        while !self.is_aligned() {
            self.write_bit(false)?;
        }

        Ok(())
    }

    /// Aligns, flushes and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.align()?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
