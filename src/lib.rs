//! # mqsort
//!
//! `mqsort` is a comparator-driven sorting engine for slices of element references.
//! It offers two classic algorithms behind one ordering capability:
//!
//! - **Merge sort**: stable, top-down, `O(N log N)`, with a single `O(N)` scratch buffer
//!   shared by every merge step of a sort.
//! - **Quicksort**: in-place, randomized pivot, Lomuto partitioning. Not stable.
//!
//! The engine knows nothing about the elements it orders. All ordering decisions are
//! delegated to a [`Comparator`], which any `Fn(&T, &T) -> Ordering` closure satisfies.
//!
//! ## Usage
//!
//! ```rust
//! use mqsort::{merge_sort, quick_sort};
//!
//! let mut words = vec!["delta", "charlie", "bravo", "alpha"];
//! merge_sort(&mut words, &|a: &&str, b: &&str| a.cmp(b)).unwrap();
//! assert_eq!(words, ["alpha", "bravo", "charlie", "delta"]);
//!
//! let mut numbers = vec![4, 3, 2, 1];
//! quick_sort(&mut numbers, &|a: &i32, b: &i32| a.cmp(b));
//! assert_eq!(numbers, [1, 2, 3, 4]);
//! ```
//!
//! ### Sorting references
//!
//! Sorting a `Vec<&Record>` reorders the references only; the records stay where they are.
//!
//! ```rust
//! use mqsort::prelude::*;
//!
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let people = [
//!     Person { name: "Ada", age: 36 },
//!     Person { name: "Alan", age: 41 },
//!     Person { name: "Grace", age: 36 },
//! ];
//! let mut refs: Vec<&Person> = people.iter().collect();
//!
//! let sorter = Sorter::new(Algorithm::Merge)
//!     .comparator(|a: &&Person, b: &&Person| a.age.cmp(&b.age));
//! sorter.sort(&mut refs).unwrap();
//!
//! // Stable: Ada stays ahead of Grace.
//! let names: Vec<_> = refs.iter().map(|p| p.name).collect();
//! assert_eq!(names, ["Ada", "Grace", "Alan"]);
//! ```
//!
//! ## Errors
//!
//! Merge sort reports [`SortError::OutOfMemory`] instead of aborting when its scratch
//! buffer cannot be reserved. A [`Sorter`] without a comparator reports
//! [`SortError::InvalidArgument`]. Neither failure modifies the input.

pub mod core;
pub mod error;
pub mod merge;
pub mod quick;
pub mod record;
pub mod sorter;

pub use crate::core::{Algorithm, Comparator, Natural, Reverse, Signed};
pub use crate::error::{Result, SortError};
pub use crate::merge::{MergeBuffer, merge_sort, merge_sort_with_buffer};
pub use crate::quick::{quick_sort, quick_sort_seeded, quick_sort_with_rng};
pub use crate::sorter::{SortOptions, Sorter, sort_by};

pub mod prelude {
    pub use crate::core::{Algorithm, Comparator, Natural};
    pub use crate::error::SortError;
    pub use crate::merge::merge_sort;
    pub use crate::quick::quick_sort;
    pub use crate::sorter::{SortOptions, Sorter, sort_by};
}
