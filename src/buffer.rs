use alloc::vec;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::codec::ByteOrder;
use crate::error::{BufferError, Result};

/// State of the storage owned by a [`ByteBuffer`].
#[derive(Clone, Debug)]
enum Storage {
    /// The buffer owns its bytes. The length of the vector is the capacity of the buffer.
    Live(Vec<u8>),
    /// The bytes were moved out by [`ByteBuffer::release`]. `capacity` is what the buffer held
    /// at that point; a fixed-size buffer can only be revived with storage of that length.
    Released { capacity: usize },
}

/// An owned, contiguous byte region with a single read/write cursor.
///
/// Reads and writes start at the cursor and advance it by the number of bytes transferred.
/// Both are all-or-nothing: a request that cannot be satisfied in full fails with
/// [`BufferError::OutOfRange`] and leaves the cursor and the storage untouched.
///
/// The capacity of the buffer is the length of its storage. Reads may consume the whole capacity,
/// regardless of how much of it was actually written. If the buffer was created as growable, a
/// write that does not fit doubles the capacity until it does; otherwise the write fails. The
/// new bytes of a grown buffer are zero.
///
/// Typed accessors (`read_u32`, `write_string`, and so on) move values using their in-memory
/// representation. If [`swap_byte_order`](Self::swap_byte_order) is set, the bytes of every
/// multi-byte value are reversed first. The producer and the consumer of a byte stream must
/// agree on this flag.
#[derive(Clone, Debug)]
pub struct ByteBuffer {
    storage: Storage,
    offset: usize,
    growable: bool,

    /// If `true`, multi-byte values are byte-swapped relative to their native representation.
    /// This is checked by every typed read and write, so it may be changed at any time.
    pub swap_byte_order: bool,
}

impl ByteBuffer {
    fn from_storage(data: Vec<u8>, growable: bool) -> Self {
        Self {
            storage: Storage::Live(data),
            offset: 0,
            growable,
            swap_byte_order: false,
        }
    }

    /// Creates an empty buffer. Unless `growable` is set, nothing can ever be written to it.
    pub fn new(growable: bool) -> Self {
        Self::from_storage(Vec::new(), growable)
    }

    /// Creates a buffer of `capacity` zero bytes.
    pub fn with_capacity(capacity: usize, growable: bool) -> Self {
        Self::from_storage(vec![0; capacity], growable)
    }

    /// Creates a buffer holding a copy of `data`. The capacity is `data.len()`.
    pub fn from_slice(data: &[u8], growable: bool) -> Self {
        Self::from_storage(data.to_vec(), growable)
    }

    /// Creates a buffer that takes ownership of `data` without copying it. The capacity is
    /// `data.len()`.
    pub fn from_vec(data: Vec<u8>, growable: bool) -> Self {
        Self::from_storage(data, growable)
    }

    fn live(&self) -> Result<&Vec<u8>> {
        match &self.storage {
            Storage::Live(data) => Ok(data),
            Storage::Released { .. } => Err(BufferError::Released),
        }
    }

    fn live_mut(&mut self) -> Result<&mut Vec<u8>> {
        match &mut self.storage {
            Storage::Live(data) => Ok(data),
            Storage::Released { .. } => Err(BufferError::Released),
        }
    }

    /// Returns `true` if the buffer may reallocate its storage when a write does not fit.
    pub fn is_growable(&self) -> bool {
        self.growable
    }

    /// Returns `true` if the storage has been moved out by [`release`](Self::release).
    pub fn is_released(&self) -> bool {
        matches!(self.storage, Storage::Released { .. })
    }

    /// The current cursor position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: usize) {
        debug_assert!(offset <= self.capacity());
        self.offset = offset;
    }

    /// The size of the storage, in bytes. A released buffer has no capacity.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Live(data) => data.len(),
            Storage::Released { .. } => 0,
        }
    }

    /// Number of bytes between the cursor and the end of the storage.
    ///
    /// For a growable buffer, this is also the number of bytes that can be written before the
    /// storage is reallocated.
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.offset)
    }

    /// Sets [`swap_byte_order`](Self::swap_byte_order) so that multi-byte values are encoded in
    /// `order` on this target.
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.swap_byte_order = order.needs_swap();
    }

    /// Returns the whole storage, from offset 0 to the capacity, independent of the cursor.
    pub fn as_slice(&self) -> Result<&[u8]> {
        Ok(self.live()?.as_slice())
    }

    /// Copies `dst.len()` bytes from the cursor into `dst` and advances the cursor.
    ///
    /// An empty `dst` always succeeds and reads nothing. Otherwise, if fewer than `dst.len()`
    /// bytes remain, this fails with [`BufferError::OutOfRange`] and reads nothing.
    ///
    /// On success, returns `dst.len()`.
    pub fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        let src = self.read_bytes(dst.len())?;
        dst.copy_from_slice(src);
        Ok(dst.len())
    }

    /// Reads a slice of bytes whose length is `len` and advances the cursor. This function
    /// returns a slice reference into the storage; it does not copy the bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        let start = self.offset;
        let data = self.live()?;
        if len == 0 {
            return Ok(&[]);
        }

        let remaining = data.len() - start;
        if len > remaining {
            debug!(needed = len, remaining, "read past end of buffer");
            return Err(BufferError::OutOfRange {
                needed: len,
                remaining,
            });
        }

        self.offset = start + len;
        Ok(&self.live()?[start..start + len])
    }

    /// Copies `src` into the storage at the cursor and advances the cursor by `src.len()`.
    ///
    /// If `src` does not fit in the remaining bytes, a growable buffer is grown first (see
    /// [`resize`](Self::resize)) and a non-growable buffer fails with
    /// [`BufferError::OutOfRange`] without writing anything.
    pub fn write(&mut self, src: &[u8]) -> Result<()> {
        self.ensure_writable(src.len())?;

        let start = self.offset;
        let end = start + src.len();
        self.live_mut()?[start..end].copy_from_slice(src);
        self.offset = end;
        Ok(())
    }

    /// Makes sure that `len` bytes can be written at the cursor, growing the buffer if needed
    /// and allowed.
    pub(crate) fn ensure_writable(&mut self, len: usize) -> Result<()> {
        let remaining = self.live()?.len() - self.offset;
        if len <= remaining {
            return Ok(());
        }

        let out_of_range = BufferError::OutOfRange {
            needed: len,
            remaining,
        };
        if !self.growable {
            debug!(needed = len, remaining, "write past end of fixed-size buffer");
            return Err(out_of_range);
        }

        let required = self.offset.checked_add(len).ok_or(out_of_range)?;
        self.resize(required)
    }

    /// Grows the storage so that its capacity is at least `minimal`.
    ///
    /// The capacity is doubled until it reaches `minimal`. A buffer with no capacity at all
    /// cannot be doubled, so it is grown to exactly `minimal` instead. Existing bytes and the
    /// cursor are preserved; the new bytes are zero. Does nothing if the capacity is already
    /// large enough.
    ///
    /// Fails with [`BufferError::InvalidOperation`] if the buffer is not growable.
    pub fn resize(&mut self, minimal: usize) -> Result<()> {
        if !self.growable {
            debug!(minimal, "resize requested on fixed-size buffer");
            return Err(BufferError::InvalidOperation);
        }

        let data = self.live_mut()?;
        let old_capacity = data.len();
        if minimal <= old_capacity {
            return Ok(());
        }

        let new_capacity = grown_capacity(old_capacity, minimal);
        data.resize(new_capacity, 0);
        trace!(old_capacity, new_capacity, minimal, "grew buffer");
        Ok(())
    }

    /// Moves the cursor forward by up to `count` bytes, stopping at the end of the storage.
    ///
    /// Unlike [`read`](Self::read), this never fails. It returns the number of bytes actually
    /// skipped, which is less than `count` near the end of the buffer.
    pub fn skip(&mut self, count: usize) -> usize {
        let skipped = count.min(self.remaining());
        self.offset += skipped;
        skipped
    }

    /// Moves the cursor back to the start of the buffer. The storage is not modified, so a buffer
    /// that was just written can be read back.
    pub fn rewind(&mut self) {
        self.offset = 0;
    }

    /// Returns `true` if the cursor has reached the end of the storage, meaning that no further
    /// bytes can be read. A released buffer is always at its end.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.capacity()
    }

    /// Returns a copy of the whole storage. The buffer is not modified.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(self.live()?.clone())
    }

    /// Moves the storage out of the buffer, without copying it.
    ///
    /// Afterwards every read and write fails with [`BufferError::Released`], until new storage is
    /// installed with [`set_storage`](Self::set_storage).
    pub fn release(&mut self) -> Result<Vec<u8>> {
        match &mut self.storage {
            Storage::Live(data) => {
                let capacity = data.len();
                let data = core::mem::take(data);
                self.storage = Storage::Released { capacity };
                trace!(capacity, "released buffer storage");
                Ok(data)
            }
            Storage::Released { .. } => Err(BufferError::Released),
        }
    }

    /// Consumes the buffer and returns its storage.
    pub fn into_inner(mut self) -> Result<Vec<u8>> {
        self.release()
    }

    /// Replaces the storage with a copy of `data`, and clamps the cursor to its length. This also
    /// makes a released buffer usable again.
    ///
    /// A growable buffer takes `data.len()` as its new capacity. The capacity of a fixed-size
    /// buffer never changes, so `data` must be exactly as long as the storage it replaces (or the
    /// storage that was released); otherwise this fails with [`BufferError::InvalidOperation`]
    /// and the buffer is left unchanged.
    pub fn set_storage(&mut self, data: &[u8]) -> Result<()> {
        if !self.growable {
            let capacity = match &self.storage {
                Storage::Live(current) => current.len(),
                Storage::Released { capacity } => *capacity,
            };
            if data.len() != capacity {
                debug!(
                    capacity,
                    len = data.len(),
                    "storage of wrong size for fixed-size buffer"
                );
                return Err(BufferError::InvalidOperation);
            }
        }

        self.storage = Storage::Live(data.to_vec());
        self.offset = self.offset.min(data.len());
        trace!(capacity = data.len(), offset = self.offset, "replaced buffer storage");
        Ok(())
    }
}

impl Default for ByteBuffer {
    /// An empty, growable buffer, the same as `ByteBuffer::new(true)`.
    ///
    /// This differs from [`BufferOptions::default()`](crate::BufferOptions), which describes a
    /// fixed-size buffer.
    fn default() -> Self {
        Self::new(true)
    }
}

/// Computes the capacity that a buffer of `capacity` bytes grows to in order to hold at least
/// `minimal` bytes.
fn grown_capacity(capacity: usize, minimal: usize) -> usize {
    if capacity == 0 {
        return minimal;
    }

    let mut new_capacity = capacity;
    while new_capacity < minimal {
        new_capacity = match new_capacity.checked_mul(2) {
            Some(doubled) => doubled,
            None => return minimal,
        };
    }
    new_capacity
}
