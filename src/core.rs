//! Core traits and types for mqsort.
//!
//! This module defines:
//! - [`Comparator`]: The ordering capability both sorting drivers are parameterized by.
//! - [`Natural`], [`Signed`] and [`Reverse`]: ready-made comparators and adapters.
//! - [`Algorithm`]: The selectable sorting algorithms.

use crate::error::SortError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An ordering over elements of type `T`.
///
/// Implementations must define a total preorder: the result for a given pair must not
/// change while a sort is in progress, and equal elements may exist. Sorting never
/// inspects elements in any other way.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
///
/// # Examples
///
/// Implementing for a custom ordering:
///
/// ```
/// use mqsort::core::Comparator;
/// use std::cmp::Ordering;
///
/// struct ByLen;
///
/// impl Comparator<str> for ByLen {
///     fn compare(&self, a: &str, b: &str) -> Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
///
/// assert_eq!(ByLen.compare("ab", "abc"), Ordering::Less);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` sorts strictly before `b`.
    #[inline(always)]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a comparator that returns a signed integer.
///
/// Negative means `a` precedes `b`, zero means equivalent, positive means `a` follows `b`.
///
/// ```
/// use mqsort::core::{Comparator, Signed};
/// use std::cmp::Ordering;
///
/// let by_value = Signed(|a: &i64, b: &i64| (*a - *b).signum() as i32);
/// assert_eq!(by_value.compare(&1, &7), Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Signed<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for Signed<F>
where
    F: Fn(&T, &T) -> i32,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}

/// Inverts the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// The sorting algorithms offered by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Stable top-down merge sort.
    #[default]
    Merge,
    /// In-place randomized-pivot quicksort. Not stable.
    Quick,
}

impl Algorithm {
    /// Every algorithm, stable first.
    pub const ALL: [Algorithm; 2] = [Algorithm::Merge, Algorithm::Quick];

    /// Whether equivalent elements keep their original relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the algorithm names as well as the numeric identifiers `1` (merge) and
    /// `2` (quick).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "merge" | "mergesort" | "merge_sort" => Ok(Algorithm::Merge),
            "2" | "quick" | "quicksort" | "quick_sort" => Ok(Algorithm::Quick),
            other => Err(SortError::invalid(format!(
                "unknown algorithm `{other}`, expected 1 (merge) or 2 (quick)"
            ))),
        }
    }
}
