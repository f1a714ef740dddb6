//! # Float Buffer Module
//!
//! A growable, append-only store of `f32` values that collects emitted mesh
//! geometry before it is handed to a renderer.
//!
//! ## Growth Policy
//!
//! When an append finds the buffer full, the backing store is reallocated to
//! `max(2 * capacity, len + 1)` floats. Appends are therefore amortized O(1), and
//! every previously written value survives the move. Allocation failures are
//! reported as [`AllocationError`] instead of aborting the process, and a failed
//! append leaves the buffer exactly as it was.
//!
//! ## Reuse
//!
//! [`FloatBuffer::clear`] resets the length but keeps the allocation, so the same
//! buffer can back every rebuild of a mesh without touching the allocator again
//! once it has grown to the mesh's size.

use thiserror::Error;

/// Raised when the backing store of a [`FloatBuffer`] cannot be grown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("could not allocate storage for {requested} floats")]
pub struct AllocationError {
    /// The capacity, in floats, that the allocator refused.
    pub requested: usize,
}

/// An owned, growable sequence of `f32` values.
///
/// The buffer only ever grows during a build pass. Reading is done through
/// [`FloatBuffer::snapshot`], which borrows the buffer, so a view can never
/// outlive the allocation it points into.
#[derive(Debug, Default)]
pub struct FloatBuffer {
    /// Backing store; `data.len()` is the logical length.
    data: Vec<f32>,
    /// Number of times the backing store has been reallocated.
    reallocations: usize,
}

impl FloatBuffer {
    /// Creates an empty buffer with room for at least `initial_capacity` floats.
    ///
    /// A hint of zero is treated as one so the buffer always owns storage.
    ///
    /// # Errors
    /// Returns [`AllocationError`] if the storage cannot be obtained.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, AllocationError> {
        let requested = initial_capacity.max(1);
        let mut data = Vec::new();
        data.try_reserve_exact(requested)
            .map_err(|_| AllocationError { requested })?;

        Ok(FloatBuffer {
            data,
            reallocations: 0,
        })
    }

    /// Appends a single value, growing the backing store if it is full.
    ///
    /// # Errors
    /// Returns [`AllocationError`] if growth fails. The buffer is left unchanged.
    pub fn append(&mut self, value: f32) -> Result<(), AllocationError> {
        if self.data.len() == self.data.capacity() {
            self.grow()?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Appends every value of `values` in order.
    ///
    /// Values written before a failed growth stay in the buffer.
    pub fn extend_from_slice(&mut self, values: &[f32]) -> Result<(), AllocationError> {
        for &value in values {
            self.append(value)?;
        }
        Ok(())
    }

    /// Resets the length to zero while keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Borrows the values written so far.
    pub fn snapshot(&self) -> &[f32] {
        &self.data
    }

    /// Borrows the values written so far as raw bytes, ready for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Number of floats written.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of floats the buffer can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Number of reallocations performed over the lifetime of the buffer.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Releases the backing storage.
    pub fn destroy(self) {
        log::debug!(
            "Releasing float buffer of {} floats after {} reallocations",
            self.data.capacity(),
            self.reallocations
        );
    }

    fn grow(&mut self) -> Result<(), AllocationError> {
        let len = self.data.len();
        let requested = self.data.capacity().saturating_mul(2).max(len + 1);
        self.data
            .try_reserve_exact(requested - len)
            .map_err(|_| AllocationError { requested })?;
        self.reallocations += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_hint_still_allocates() {
        let buffer = FloatBuffer::with_capacity(0).unwrap();
        assert!(buffer.capacity() >= 1);
        assert!(buffer.is_empty());
    }

    #[test]
    fn appends_survive_every_reallocation() {
        let mut buffer = FloatBuffer::with_capacity(1).unwrap();
        for i in 0..1000 {
            buffer.append(i as f32).unwrap();
            assert!(buffer.len() <= buffer.capacity());
        }

        assert_eq!(buffer.len(), 1000);
        assert!(buffer.reallocations() > 0);
        for (i, value) in buffer.snapshot().iter().enumerate() {
            assert_eq!(*value, i as f32);
        }
    }

    #[test]
    fn growth_at_least_doubles() {
        let mut buffer = FloatBuffer::with_capacity(4).unwrap();
        for i in 0..4 {
            buffer.append(i as f32).unwrap();
        }
        let before = buffer.capacity();
        buffer.append(4.0).unwrap();
        assert!(buffer.capacity() >= before * 2);
        assert_eq!(buffer.reallocations(), 1);
    }

    #[test]
    fn default_buffer_grows_from_nothing() {
        let mut buffer = FloatBuffer::default();
        assert_eq!(buffer.capacity(), 0);
        buffer.append(1.5).unwrap();
        assert_eq!(buffer.snapshot(), &[1.5]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = FloatBuffer::with_capacity(1).unwrap();
        buffer.extend_from_slice(&[1.0; 100]).unwrap();
        let capacity = buffer.capacity();
        let reallocations = buffer.reallocations();

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);

        buffer.extend_from_slice(&[2.0; 100]).unwrap();
        assert_eq!(buffer.reallocations(), reallocations);
    }

    #[test]
    fn bytes_view_matches_values() {
        let mut buffer = FloatBuffer::with_capacity(2).unwrap();
        buffer.extend_from_slice(&[1.0, -2.0]).unwrap();
        let bytes = buffer.as_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &(-2.0f32).to_ne_bytes());
    }

    #[test]
    fn impossible_capacity_is_an_allocation_error() {
        let err = FloatBuffer::with_capacity(usize::MAX).unwrap_err();
        assert_eq!(err.requested, usize::MAX);
    }
}
