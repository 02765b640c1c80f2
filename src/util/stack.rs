//! Fixed-capacity LIFO stack.

use crate::util::UtilError;

/// A stack that refuses to grow past the capacity given at creation.
///
/// Push on a full stack returns [`UtilError::CapacityExceeded`] and leaves the
/// stack unchanged; pop on an empty stack returns `None`.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Result<Self, UtilError> {
        if capacity == 0 {
            return Err(UtilError::ZeroCapacity);
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Push `item`, failing if the stack is already full.
    pub fn push(&mut self, item: T) -> Result<(), UtilError> {
        if self.is_full() {
            return Err(UtilError::CapacityExceeded {
                capacity: self.capacity,
                needed: self.capacity + 1,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}
