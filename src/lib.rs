//! A cursor-based byte buffer for reading and writing primitive values.
//!
//! [`ByteBuffer`] owns a contiguous region of bytes and a single read/write cursor. Values are
//! moved through the cursor using their in-memory representation; when byte-order swapping is
//! enabled, every multi-byte value has its bytes reversed on the way in and on the way out.
//! Strings are encoded as a 4-byte length prefix followed by the raw bytes.
//!
//! A buffer is either fixed-size, in which case writing past its end fails, or growable, in which
//! case its capacity is doubled until the write fits.
//!
//! ```
//! use binary_stream::{ByteBuffer, ByteOrder};
//!
//! let mut buf = ByteBuffer::new(true);
//! buf.set_byte_order(ByteOrder::Big);
//! buf.write_u16(0x0102).unwrap();
//! buf.write_string("hi").unwrap();
//! assert_eq!(buf.as_slice().unwrap(), &[1, 2, 0, 0, 0, 2, b'h', b'i']);
//!
//! buf.rewind();
//! assert_eq!(buf.read_u16(), Ok(0x0102));
//! assert_eq!(buf.read_string().unwrap(), "hi");
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod buffer;
mod codec;
mod error;
#[cfg(feature = "std")]
mod io;
mod options;
mod reader;
mod writer;


pub use buffer::ByteBuffer;
pub use codec::{
    string_size, swap_bytes, ByteOrder, Primitive, BYTE_SIZE, DOUBLE_SIZE, FLOAT_SIZE, INT_SIZE,
    LONG_SIZE, SHORT_SIZE,
};
pub use error::{BufferError, Result};
pub use options::BufferOptions;
