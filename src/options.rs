use alloc::vec::Vec;

use crate::buffer::ByteBuffer;
use crate::codec::ByteOrder;

/// Construction settings for a [`ByteBuffer`].
///
/// The default is a fixed-size buffer that uses the target's native byte order. Note that this
/// differs from [`ByteBuffer::default()`], which is an empty growable buffer.
///
/// ```
/// use binary_stream::{BufferOptions, ByteOrder};
///
/// let mut buf = BufferOptions::new()
///     .growable(true)
///     .byte_order(ByteOrder::Big)
///     .build_with_capacity(2);
/// buf.write_u32(0x0a0b0c0d).unwrap();
/// assert_eq!(buf.capacity(), 4);
/// assert_eq!(buf.as_slice().unwrap(), &[0x0a, 0x0b, 0x0c, 0x0d]);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferOptions {
    /// Whether writes past the end reallocate the storage instead of failing.
    pub growable: bool,
    /// Byte order of multi-byte values.
    pub byte_order: ByteOrder,
}

impl BufferOptions {
    /// Constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the buffer may grow.
    pub fn growable(mut self, growable: bool) -> Self {
        self.growable = growable;
        self
    }

    /// Sets the byte order of multi-byte values.
    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Creates a buffer of `capacity` zero bytes.
    pub fn build_with_capacity(self, capacity: usize) -> ByteBuffer {
        self.apply(ByteBuffer::with_capacity(capacity, self.growable))
    }

    /// Creates a buffer holding a copy of `data`.
    pub fn build_from_slice(self, data: &[u8]) -> ByteBuffer {
        self.apply(ByteBuffer::from_slice(data, self.growable))
    }

    /// Creates a buffer that takes ownership of `data`.
    pub fn build_from_vec(self, data: Vec<u8>) -> ByteBuffer {
        self.apply(ByteBuffer::from_vec(data, self.growable))
    }

    fn apply(self, mut buf: ByteBuffer) -> ByteBuffer {
        buf.set_byte_order(self.byte_order);
        buf
    }
}
