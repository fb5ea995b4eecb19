use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, VectorError};

/// An ordered, growable sequence with checked accessors.
///
/// Elements keep insertion order. Valid indices are `0..len()`. Lookups by
/// value (`contains`, `index`, `remove`, `replace`) use `PartialEq` and act
/// on the lowest matching index.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector { items: Vec::new() }
    }
}

// =============================================================================
// Construction and introspection
// =============================================================================

impl<T> Vector<T> {
    pub fn new() -> Self {
        Vector { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Allocated storage, in elements. Growth is left to `Vec`; treat this
    /// as a diagnostic only.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Empty-check first, then bounds-check.
    fn validate_index(&self, index: usize) -> Result<()> {
        if self.items.is_empty() {
            return Err(VectorError::Empty);
        }
        if index >= self.items.len() {
            return Err(VectorError::Index {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    /// Runs a mutation that may reallocate and traces any change in capacity.
    fn track_growth<R>(&mut self, op: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let before = self.items.capacity();
        let out = op(&mut self.items);
        let after = self.items.capacity();
        if after > before {
            trace!(from = before, to = after, len = self.items.len(), "vector storage grew");
        }
        out
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<T: PartialEq> Vector<T> {
    pub fn add(&mut self, element: T) {
        self.track_growth(|items| items.push(element));
    }

    /// Appends every element of `elements` in iteration order.
    pub fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.track_growth(|items| items.extend(elements));
    }

    /// Inserts `element` so that it ends up at `index`, shifting the tail
    /// right.
    ///
    /// `index` must name an existing element: inserting at `len()` is
    /// rejected with [`VectorError::Index`]. Use [`Vector::add`] to append.
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        self.validate_index(index)?;
        self.track_growth(|items| items.insert(index, element));
        Ok(())
    }

    /// Removes the first element equal to `element`. Returns `false` when
    /// nothing matched.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.index(element) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_index(&mut self, index: usize) -> Result<T> {
        self.validate_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Overwrites the first element equal to `old` with `new`, keeping its
    /// position.
    pub fn replace(&mut self, old: &T, new: T) -> Result<()> {
        let i = self.index(old).ok_or(VectorError::NotFound)?;
        self.items[i] = new;
        Ok(())
    }

    /// Overwrites the element at `index` and hands back the previous value.
    pub fn replace_index(&mut self, index: usize, element: T) -> Result<T> {
        self.validate_index(index)?;
        Ok(std::mem::replace(&mut self.items[index], element))
    }

    pub fn pop_first(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(VectorError::Empty);
        }
        Ok(self.items.remove(0))
    }

    pub fn pop_last(&mut self) -> Result<T> {
        self.items.pop().ok_or(VectorError::Empty)
    }

    /// Drops every element and releases the storage, leaving the vector as
    /// if freshly created.
    pub fn clear(&mut self) {
        self.items = Vec::new();
    }
}

// =============================================================================
// Query and search
// =============================================================================

impl<T: PartialEq> Vector<T> {
    pub fn get(&self, index: usize) -> Result<&T> {
        self.validate_index(index)?;
        Ok(&self.items[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.validate_index(index)?;
        Ok(&mut self.items[index])
    }

    pub fn first(&self) -> Result<&T> {
        self.items.first().ok_or(VectorError::Empty)
    }

    pub fn last(&self) -> Result<&T> {
        self.items.last().ok_or(VectorError::Empty)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index(element).is_some()
    }

    /// True when every element of `elements` is present. An empty input is
    /// trivially contained.
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elements.into_iter().all(|e| self.contains(e))
    }

    /// Lowest index holding a value equal to `element`.
    pub fn index(&self, element: &T) -> Option<usize> {
        self.items.iter().position(|e| e == element)
    }
}

// =============================================================================
// Tests
// =============================================================================
