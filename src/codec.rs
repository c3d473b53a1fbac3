use zerocopy::{FromBytes, IntoBytes};

/// Encoded size of a `u64`/`i64`.
pub const LONG_SIZE: usize = 8;
/// Encoded size of a `u32`/`i32`. This is also the size of a string length prefix.
pub const INT_SIZE: usize = 4;
/// Encoded size of a `u16`/`i16`.
pub const SHORT_SIZE: usize = 2;
/// Encoded size of a `u8`/`i8`/`bool`.
pub const BYTE_SIZE: usize = 1;
/// Encoded size of an `f32`.
pub const FLOAT_SIZE: usize = 4;
/// Encoded size of an `f64`.
pub const DOUBLE_SIZE: usize = 8;

/// Returns the number of bytes that [`write_string`](crate::ByteBuffer::write_string) produces
/// for `s`: the length prefix plus the UTF-8 bytes of the string.
pub fn string_size(s: &str) -> usize {
    INT_SIZE + s.len()
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar that can be moved through a [`ByteBuffer`](crate::ByteBuffer) using its
/// in-memory representation.
///
/// This trait is sealed. It is implemented for the 8, 16, 32 and 64-bit integers (signed and
/// unsigned) and for `f32` and `f64`.
pub trait Primitive: sealed::Sealed + FromBytes + IntoBytes + Copy {
    /// Number of bytes in the encoded form.
    const SIZE: usize;
}

macro_rules! primitive {
    ($($t:ty => $size:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Primitive for $t {
                const SIZE: usize = $size;
            }
        )*
    };
}

primitive! {
    u8 => BYTE_SIZE,
    i8 => BYTE_SIZE,
    u16 => SHORT_SIZE,
    i16 => SHORT_SIZE,
    u32 => INT_SIZE,
    i32 => INT_SIZE,
    u64 => LONG_SIZE,
    i64 => LONG_SIZE,
    f32 => FLOAT_SIZE,
    f64 => DOUBLE_SIZE,
}

/// Reverses `bytes` in place: for a value of width `n`, byte `i` is exchanged with byte
/// `n - 1 - i`. Applied to the raw representation of a scalar, this converts between its
/// big-endian and little-endian layouts.
#[inline(always)]
pub fn swap_bytes(bytes: &mut [u8]) {
    bytes.reverse();
}

/// The byte order used for multi-byte values on the wire.
///
/// A buffer only stores a "swap" flag; this type computes that flag from the byte order of the
/// compilation target.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// The target's own byte order. Values are never swapped.
    #[default]
    Native,
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
    /// Always swap, whatever the target's byte order is.
    Swapped,
}

impl ByteOrder {
    /// Returns `true` if values must be byte-swapped to be encoded in this order.
    pub fn needs_swap(self) -> bool {
        match self {
            Self::Native => false,
            Self::Little => cfg!(target_endian = "big"),
            Self::Big => cfg!(target_endian = "little"),
            Self::Swapped => true,
        }
    }
}
