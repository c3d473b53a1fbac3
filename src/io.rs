//! `std::io` integration.

use std::io;

use crate::buffer::ByteBuffer;
use crate::error::BufferError;

/// Reads as many bytes as remain, up to `buf.len()`. Returns `Ok(0)` at the end of the buffer.
impl io::Read for ByteBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(self.remaining());
        Ok(ByteBuffer::read(self, &mut buf[..len])?)
    }
}

/// Writes all of `buf` or nothing, following the growth rules of [`ByteBuffer::write`].
impl io::Write for ByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ByteBuffer::write(self, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<BufferError> for io::Error {
    fn from(e: BufferError) -> Self {
        let kind = match e {
            BufferError::OutOfRange { .. } => io::ErrorKind::UnexpectedEof,
            BufferError::CannotEncode { .. } => io::ErrorKind::InvalidInput,
            BufferError::InvalidUtf8 => io::ErrorKind::InvalidData,
            BufferError::InvalidOperation | BufferError::Released => io::ErrorKind::Other,
        };
        io::Error::new(kind, e)
    }
}
