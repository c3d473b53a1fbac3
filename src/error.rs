/// Result type for [`ByteBuffer`](crate::ByteBuffer) operations.
pub type Result<T> = core::result::Result<T, BufferError>;

/// Error type for [`ByteBuffer`](crate::ByteBuffer).
///
/// Every operation that returns one of these errors has left the buffer exactly as it was before
/// the call. No bytes are copied and the cursor does not move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum BufferError {
    /// A read asked for more bytes than remain after the cursor, or a write did not fit in a
    /// buffer that cannot grow.
    ///
    /// For a streaming consumer this usually means "need more data"; the same request can be
    /// retried after more data has been appended.
    #[error("not enough bytes in buffer: need {needed}, have {remaining}")]
    OutOfRange {
        /// Number of bytes the operation required.
        needed: usize,
        /// Number of bytes available between the cursor and the end of the buffer.
        remaining: usize,
    },

    /// The buffer was asked to resize itself, but it was constructed as non-growable.
    #[error("buffer is not growable")]
    InvalidOperation,

    /// The buffer's storage has been moved out by [`release`](crate::ByteBuffer::release).
    #[error("buffer storage has been released")]
    Released,

    /// A string or byte payload is too long to describe with a 32-bit length prefix.
    #[error("payload of {len} bytes cannot be encoded with a 32-bit length prefix")]
    CannotEncode {
        /// Length of the payload, in bytes.
        len: usize,
    },

    /// A length-prefixed string did not contain well-formed UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
}
