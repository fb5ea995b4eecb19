//! Rayon-backed transforms.
//!
//! Same contracts as the sequential versions in `transform`: results keep the
//! source order and own their elements. The source is only borrowed, so this
//! does not make `Vector` itself safe for concurrent mutation.

use rayon::prelude::*;

use crate::vector::Vector;

impl<T: PartialEq + Sync> Vector<T> {
    /// Parallel [`Vector::map`].
    pub fn par_map<U, F>(&self, f: F) -> Vector<U>
    where
        U: PartialEq + Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        Vector::from(self.items.par_iter().map(f).collect::<Vec<U>>())
    }

    /// Parallel [`Vector::filter`].
    pub fn par_filter<F>(&self, predicate: F) -> Vector<T>
    where
        T: Clone + Send,
        F: Fn(&T) -> bool + Sync + Send,
    {
        Vector::from(
            self.items
                .par_iter()
                .filter(|e| predicate(e))
                .cloned()
                .collect::<Vec<T>>(),
        )
    }

    /// Applies `f` to each chunk in parallel, using the same boundaries as
    /// [`Vector::chunk`], and returns the results in chunk order.
    ///
    /// Chunks are handed out as borrowed slices; nothing is copied.
    pub fn par_chunk_map<U, F>(&self, size: usize, f: F) -> Vec<U>
    where
        U: Send,
        F: Fn(&[T]) -> U + Sync + Send,
    {
        if size == 0 {
            return Vec::new();
        }
        if size >= self.items.len() {
            return vec![f(&self.items)];
        }
        self.items.par_chunks(size).map(f).collect()
    }
}
