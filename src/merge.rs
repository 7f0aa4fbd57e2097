//! Stable top-down merge sort.
//!
//! Each range is split at `len / 2`, both halves are sorted, and the halves are merged
//! through a scratch buffer. One [`MergeBuffer`] sized to the whole input serves every
//! merge step of a sort, so the total auxiliary allocation is `O(N)`.
//!
//! The buffer is reserved before anything moves. If the reservation fails the sort
//! returns [`SortError::OutOfMemory`] and the input is exactly as it was passed in.

use crate::core::Comparator;
use crate::error::{Result, SortError};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Scratch space for merge steps.
///
/// The buffer holds no elements between merges; only its capacity is reused. A single
/// buffer can serve any number of sorts, growing to the largest input seen, and stays
/// usable after a sort that unwound from a panicking comparator.
#[derive(Debug)]
pub struct MergeBuffer<T> {
    scratch: Vec<T>,
    limit: Option<usize>,
}

impl<T> Default for MergeBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MergeBuffer<T> {
    /// Creates an empty buffer. Nothing is allocated until the first reservation.
    pub fn new() -> Self {
        MergeBuffer {
            scratch: Vec::new(),
            limit: None,
        }
    }

    /// Creates an empty buffer that refuses to grow past `limit` elements.
    ///
    /// Reservations above the limit fail with [`SortError::OutOfMemory`], as they would
    /// if the allocator ran out.
    pub fn bounded(limit: usize) -> Self {
        MergeBuffer {
            scratch: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Creates a buffer able to merge ranges of up to `len` elements.
    pub fn with_capacity(len: usize) -> Result<Self> {
        let mut buf = Self::new();
        buf.reserve(len)?;
        Ok(buf)
    }

    /// Ensures the buffer can merge ranges of up to `len` elements.
    ///
    /// Also drops anything left behind by a merge that did not finish.
    pub fn reserve(&mut self, len: usize) -> Result<()> {
        self.scratch.clear();
        if self.limit.is_some_and(|limit| len > limit) {
            return Err(SortError::OutOfMemory { requested: len });
        }
        if self.scratch.capacity() >= len {
            return Ok(());
        }
        self.scratch
            .try_reserve_exact(len)
            .map_err(|_| SortError::OutOfMemory { requested: len })
    }

    /// Number of elements a merge can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.scratch.capacity()
    }
}

/// Sorts `v` in place. Equivalent elements keep their original relative order.
///
/// # Errors
///
/// Returns [`SortError::OutOfMemory`] if the scratch buffer cannot be reserved. Inputs of
/// fewer than two elements never allocate.
///
/// # Examples
///
/// ```
/// use mqsort::merge_sort;
///
/// let mut v = vec!["delta", "charlie", "bravo", "alpha"];
/// merge_sort(&mut v, &|a: &&str, b: &&str| a.cmp(b)).unwrap();
/// assert_eq!(v, ["alpha", "bravo", "charlie", "delta"]);
/// ```
pub fn merge_sort<T, C>(v: &mut [T], cmp: &C) -> Result<()>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    if v.len() < 2 {
        debug!(algorithm = "merge", len = v.len(), "sorting");
        return Ok(());
    }
    let mut buf = MergeBuffer::with_capacity(v.len())?;
    merge_sort_with_buffer(v, cmp, &mut buf)
}

/// Sorts `v` in place, using `buf` as scratch space.
///
/// `buf` grows to `v.len()` if it is smaller; it is never shrunk.
pub fn merge_sort_with_buffer<T, C>(v: &mut [T], cmp: &C, buf: &mut MergeBuffer<T>) -> Result<()>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    debug!(algorithm = "merge", len = v.len(), "sorting");
    if v.len() < 2 {
        return Ok(());
    }
    buf.reserve(v.len())?;
    recurse(v, cmp, &mut buf.scratch);
    trace!(len = v.len(), "merge sort finished");
    Ok(())
}

/// Merges the sorted runs `v[..middle]` and `v[middle..]` into one sorted run.
///
/// Ties are taken from the left run, which keeps the merge stable.
///
/// # Errors
///
/// Returns [`SortError::InvalidArgument`] if `middle > v.len()` and
/// [`SortError::OutOfMemory`] if `buf` cannot grow to `v.len()`. `v` is untouched in
/// both cases.
pub fn merge<T, C>(v: &mut [T], middle: usize, cmp: &C, buf: &mut MergeBuffer<T>) -> Result<()>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    if middle > v.len() {
        return Err(SortError::invalid(format!(
            "merge split {middle} is past the end of a range of {}",
            v.len()
        )));
    }
    if middle == 0 || middle == v.len() {
        return Ok(());
    }
    buf.reserve(v.len())?;
    merge_runs(v, middle, cmp, &mut buf.scratch);
    Ok(())
}

fn recurse<T, C>(v: &mut [T], cmp: &C, scratch: &mut Vec<T>)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let len = v.len();
    if len <= 1 {
        return;
    }
    let middle = len / 2;
    {
        let (left, right) = v.split_at_mut(middle);
        recurse(left, cmp, scratch);
        recurse(right, cmp, scratch);
    }
    merge_runs(v, middle, cmp, scratch);
}

/// `scratch` must have room for `v.len()` elements.
fn merge_runs<T, C>(v: &mut [T], middle: usize, cmp: &C, scratch: &mut Vec<T>)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    // A panicking comparator can leave a partial merge behind.
    scratch.clear();
    debug_assert!(scratch.capacity() >= v.len());

    let (left, right) = v.split_at(middle);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if cmp.compare(&left[i], &right[j]) != Ordering::Greater {
            scratch.push(left[i].clone());
            i += 1;
        } else {
            scratch.push(right[j].clone());
            j += 1;
        }
    }
    // At most one of these is non-empty.
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);

    v.clone_from_slice(scratch);
    scratch.clear();
}
