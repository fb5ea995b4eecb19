//! Functional transforms over a `Vector`.
//!
//! Every transform reads the source through `&self` and builds a new,
//! independently owned `Vector`. Nothing returned here shares storage with
//! the source, so mutating a result never shows through to the original.

use tracing::trace;

use crate::vector::Vector;

impl<T: PartialEq> Vector<T> {
    /// Elements for which `predicate` holds, in their original order.
    pub fn filter<F>(&self, mut predicate: F) -> Vector<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|e| predicate(e)).cloned().collect()
    }

    /// `f` applied to each element. The result has the same length and
    /// order as `self`.
    pub fn map<U, F>(&self, f: F) -> Vector<U>
    where
        U: PartialEq,
        F: FnMut(&T) -> U,
    {
        self.items.iter().map(f).collect()
    }

    /// Left fold starting from `initial`. Equivalent to [`reduce`].
    pub fn fold<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.items.iter().fold(initial, f)
    }

    /// Splits into consecutive, non-overlapping copies of `size` elements.
    ///
    /// - `size == 0` yields no chunks.
    /// - `size >= len()` yields a single chunk holding every element (for an
    ///   empty vector that chunk is empty too).
    /// - otherwise every chunk has `size` elements except possibly the last,
    ///   which holds the remainder.
    pub fn chunk(&self, size: usize) -> Vec<Vector<T>>
    where
        T: Clone,
    {
        let chunks: Vec<Vector<T>> = if size == 0 {
            Vec::new()
        } else if size >= self.items.len() {
            vec![self.clone()]
        } else {
            self.items
                .chunks(size)
                .map(|c| Vector::from(c.to_vec()))
                .collect()
        };
        trace!(len = self.items.len(), size, count = chunks.len(), "chunked vector");
        chunks
    }
}

/// Folds `vector` from the left: the accumulator starts at `initial` and
/// becomes `f(acc, element)` for each element in order.
///
/// The accumulator type is independent of the element type.
///
/// ```
/// use vector_list::{reduce, vector};
///
/// let words = vector!["a", "bb", "ccc"];
/// assert_eq!(reduce(&words, 0, |n, w| n + w.len()), 6);
/// ```
pub fn reduce<T, A, F>(vector: &Vector<T>, initial: A, f: F) -> A
where
    T: PartialEq,
    F: FnMut(A, &T) -> A,
{
    vector.fold(initial, f)
}
