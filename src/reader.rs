use alloc::string::String;

use tracing::debug;
use zerocopy::{FromZeros, IntoBytes};

use crate::buffer::ByteBuffer;
use crate::codec::{swap_bytes, Primitive};
use crate::error::{BufferError, Result};

impl ByteBuffer {
    /// Reads a fixed-width value at the cursor.
    ///
    /// Exactly `T::SIZE` bytes are read. If [`swap_byte_order`](Self::swap_byte_order) is set,
    /// their order is reversed before they are reinterpreted as `T`.
    pub fn read_value<T: Primitive>(&mut self) -> Result<T> {
        let mut value = T::new_zeroed();
        let bytes = value.as_mut_bytes();
        self.read(bytes)?;
        if self.swap_byte_order && T::SIZE > 1 {
            swap_bytes(bytes);
        }
        Ok(value)
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_value()
    }

    /// Reads a single `i8` value.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_value()
    }

    /// Reads a `u16`.
    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_value()
    }

    /// Reads a `i16`.
    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_value()
    }

    /// Reads a `u32`.
    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_value()
    }

    /// Reads a `i32`.
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_value()
    }

    /// Reads a `u64`.
    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_value()
    }

    /// Reads a `i64`.
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_value()
    }

    /// Reads an `f32` from its 4-byte in-memory representation.
    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_value()
    }

    /// Reads an `f64` from its 8-byte in-memory representation.
    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_value()
    }

    /// Reads a `bool`, encoded as a single byte. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a length-prefixed byte string.
    ///
    /// The prefix is a `u32` byte count, subject to byte-order swapping like any other `u32`. The
    /// payload is returned as a slice into the storage; it is not copied.
    ///
    /// If the prefix claims more bytes than remain, this fails with [`BufferError::OutOfRange`]
    /// and the cursor is left where it was before the prefix.
    pub fn read_string_bytes(&mut self) -> Result<&[u8]> {
        let start = self.offset();
        let prefix = self.read_u32()?;
        let len = usize::try_from(prefix).unwrap_or(usize::MAX);

        let remaining = self.remaining();
        if len > remaining {
            debug!(needed = len, remaining, "string length prefix runs past end of buffer");
            self.set_offset(start);
            return Err(BufferError::OutOfRange {
                needed: len,
                remaining,
            });
        }

        self.read_bytes(len)
    }

    /// Reads a length-prefixed string and returns it as `String`.
    ///
    /// The payload is required to be well-formed UTF-8. If it is not, this fails with
    /// [`BufferError::InvalidUtf8`] and the cursor is left where it was before the prefix.
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.offset();
        let decoded = core::str::from_utf8(self.read_string_bytes()?).map(String::from);
        decoded.map_err(|_| {
            self.set_offset(start);
            BufferError::InvalidUtf8
        })
    }

    /// Reads a length-prefixed string and returns it as `String`.
    ///
    /// Byte sequences that are not valid UTF-8 are replaced with the Unicode replacement
    /// character, and the rest of the string is processed.
    pub fn read_string_lossy(&mut self) -> Result<String> {
        let bytes = self.read_string_bytes()?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Reads a length-prefixed string and returns it as a `bstr::BStr`.
    ///
    /// This does not copy any data, and it does not validate the contents. The caller must
    /// handle validating that the string is well-formed UTF-8, if necessary.
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self) -> Result<&bstr::BStr> {
        Ok(bstr::BStr::new(self.read_string_bytes()?))
    }
}
