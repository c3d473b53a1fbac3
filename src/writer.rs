use zerocopy::IntoBytes;

use crate::buffer::ByteBuffer;
use crate::codec::{swap_bytes, Primitive, INT_SIZE};
use crate::error::{BufferError, Result};

impl ByteBuffer {
    /// Writes a fixed-width value at the cursor.
    ///
    /// The value is written using its in-memory representation. If
    /// [`swap_byte_order`](Self::swap_byte_order) is set, the order of its bytes is reversed
    /// first.
    pub fn write_value<T: Primitive>(&mut self, value: T) -> Result<()> {
        let mut value = value;
        let bytes = value.as_mut_bytes();
        if self.swap_byte_order && T::SIZE > 1 {
            swap_bytes(bytes);
        }
        self.write(bytes)
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a single `u16` value
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a single `i16` value
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a single `u32` value
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a single `i32` value
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a single `u64` value
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a single `i64` value
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_value(value)
    }

    /// Writes an `f32` value, using its 4-byte in-memory representation.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_value(value)
    }

    /// Writes an `f64` value, using its 8-byte in-memory representation.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Writes a byte string in length-prefixed form: a `u32` byte count, followed by the bytes.
    ///
    /// Room for the prefix and the payload is made before anything is written, so a failed call
    /// leaves the buffer unchanged. A growable buffer grows first for the prefix and then for the
    /// payload, so it ends up with the same capacity as writing the prefix with
    /// [`write_u32`](Self::write_u32) followed by the payload with [`write`](Self::write).
    pub fn write_string_bytes(&mut self, s: &[u8]) -> Result<()> {
        let cannot_encode = BufferError::CannotEncode { len: s.len() };
        let len_u32 = u32::try_from(s.len()).map_err(|_| cannot_encode)?;
        let total = INT_SIZE.checked_add(s.len()).ok_or(cannot_encode)?;

        if self.is_growable() {
            self.ensure_writable(INT_SIZE)?;
        }
        self.ensure_writable(total)?;
        self.write_u32(len_u32)?;
        self.write(s)
    }

    /// Writes a UTF-8 string in length-prefixed form.
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        self.write_string_bytes(s.as_bytes())
    }
}
