use std::io;

/// Bounds-checked access to the unread part of an [`io::Cursor`].
pub trait BytesCursorExt {
    /// Returns the number of bytes between the cursor position and the end of the buffer.
    fn remaining(&self) -> usize;

    /// Returns the next `size` bytes and advances past them.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] without moving the cursor if
    /// fewer than `size` bytes remain.
    fn extract_slice(&mut self, size: usize) -> io::Result<&[u8]>;
}

impl<T: AsRef<[u8]>> BytesCursorExt for io::Cursor<T> {
    fn remaining(&self) -> usize {
        let len = self.get_ref().as_ref().len();
        len.saturating_sub(self.position() as usize)
    }

    fn extract_slice(&mut self, size: usize) -> io::Result<&[u8]> {
        if self.remaining() < size {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "not enough data"));
        }

        let len = self.get_ref().as_ref().len();
        let start = (self.position() as usize).min(len);
        self.set_position((start + size) as u64);

        Ok(&self.get_ref().as_ref()[start..start + size])
    }
}
