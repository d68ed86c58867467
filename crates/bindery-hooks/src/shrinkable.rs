//! Remove-only view over an owned candidate sequence.

use std::fmt;

/// Mutable view over an externally-owned `Vec` that supports removal but
/// not insertion, reordering, or replacement.
///
/// Hook callbacks receive their candidate sets through this type, so an
/// implementation can narrow a result set but can never inject an
/// element that was not already a candidate. The restriction is carried
/// by the type itself: no method grows the underlying vector or swaps an
/// element for a different one.
pub struct ShrinkableVec<'a, T> {
    inner: &'a mut Vec<T>,
}

impl<'a, T> ShrinkableVec<'a, T> {
    /// Wrap an owned sequence in a remove-only view.
    pub fn new(inner: &'a mut Vec<T>) -> Self {
        Self { inner }
    }

    /// Number of remaining elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no elements remain.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Iterate over the remaining elements in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left. Returns `None` if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.inner.len() {
            Some(self.inner.remove(index))
        } else {
            None
        }
    }

    /// Keep only the elements for which `keep` returns `true`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(keep);
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T: PartialEq> ShrinkableVec<'_, T> {
    /// Remove the first occurrence of `value`. Returns whether an
    /// element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.inner.iter().position(|element| element == value) {
            Some(index) => {
                self.inner.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<'a, 'b, T> IntoIterator for &'a ShrinkableVec<'b, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ShrinkableVec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
