//! # vector-list
//!
//! An ordered, growable sequence container with checked accessors and
//! equality-based search.
//!
//! `Vector<T>` wraps a contiguous buffer and exposes a small, explicit API:
//! index-taking operations return [`VectorError`] instead of panicking, and
//! value lookups compare elements with `PartialEq`, acting on the first
//! (lowest index) match.
//!
//! ## Modules
//!
//! 1. **vector** - construction, mutation and queries
//! 2. **transform** - `filter`, `map`, `chunk` and the `reduce` fold
//! 3. **iter** - standard trait integration (iterators, conversions, `Display`)
//! 4. **parallel** - rayon-backed transforms (feature `parallel`)
//!
//! ## Example
//!
//! ```
//! use vector_list::{reduce, vector, VectorError};
//!
//! let mut v = vector![1, 2, 3, 4, 5];
//! assert_eq!(v.chunk(2), vec![vector![1, 2], vector![3, 4], vector![5]]);
//! assert_eq!(v.filter(|x| x % 2 == 0), vector![2, 4]);
//! assert_eq!(reduce(&v, 0, |acc, x| acc + x), 15);
//!
//! v.clear();
//! assert_eq!(v.pop_first(), Err(VectorError::Empty));
//! ```
//!
//! ## Features
//!
//! - `serde` (default) - transparent `Serialize`/`Deserialize` as a sequence
//! - `parallel` (default) - `par_map`, `par_filter`, `par_chunk_map` via rayon

#[macro_use]
mod macros;

mod error;
mod iter;
#[cfg(feature = "parallel")]
mod parallel;
mod transform;
mod vector;

pub use error::{Result, VectorError};
pub use transform::reduce;
pub use vector::Vector;
