//! Randomized-pivot quicksort (Lomuto partition scheme).
//!
//! The sort is in-place and not stable. Pivots are drawn uniformly from each range so that
//! already-sorted or adversarial inputs do not drive it into quadratic behavior.
//!
//! The randomness source belongs to one top-level call. [`quick_sort`] seeds a fresh
//! generator every time, [`quick_sort_seeded`] makes the pivot sequence reproducible and
//! [`quick_sort_with_rng`] lets the caller own the generator.

use crate::core::Comparator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Sorts `v` in place with a freshly seeded pivot generator.
///
/// # Examples
///
/// ```
/// use mqsort::quick_sort;
///
/// let mut v = vec![4, 3, 2, 1];
/// quick_sort(&mut v, &|a: &i32, b: &i32| a.cmp(b));
/// assert_eq!(v, [1, 2, 3, 4]);
/// ```
pub fn quick_sort<T, C>(v: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    if v.len() < 2 {
        debug!(algorithm = "quick", len = v.len(), "sorting");
        return;
    }
    let seed: u64 = rand::rng().random();
    quick_sort_seeded(v, cmp, seed);
}

/// Sorts `v` in place, drawing pivots from a generator seeded with `seed`.
///
/// The final order never depends on the seed, only the work done to reach it.
pub fn quick_sort_seeded<T, C>(v: &mut [T], cmp: &C, seed: u64)
where
    C: Comparator<T> + ?Sized,
{
    trace!(seed, "seeding pivot generator");
    let mut rng = StdRng::seed_from_u64(seed);
    quick_sort_with_rng(v, cmp, &mut rng);
}

/// Sorts `v` in place, drawing pivots from `rng`.
pub fn quick_sort_with_rng<T, C, R>(v: &mut [T], cmp: &C, rng: &mut R)
where
    C: Comparator<T> + ?Sized,
    R: Rng + ?Sized,
{
    debug!(algorithm = "quick", len = v.len(), "sorting");
    // Zero- and one-element ranges are already sorted.
    if v.len() < 2 {
        return;
    }
    recurse(v, cmp, rng);
    trace!(len = v.len(), "quick sort finished");
}

/// Picks a uniformly random index of `v` and moves it to the last slot.
///
/// Does nothing on an empty slice.
pub fn choose_random_pivot<T, R>(v: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let len = v.len();
    if len == 0 {
        return;
    }
    let pivot = rng.random_range(0..len);
    v.swap(pivot, len - 1);
}

/// Partitions `v` around its last element and returns the pivot's final index.
///
/// After the call every element before the returned index compares less than the pivot
/// and no element after it does. Elements equal to the pivot can land on either side.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn partition<T, C>(v: &mut [T], cmp: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let high = v.len() - 1;
    // `i` is the first slot not yet known to hold an element below the pivot.
    let mut i = 0;
    for j in 0..high {
        if cmp.less(&v[j], &v[high]) {
            v.swap(i, j);
            i += 1;
        }
    }
    v.swap(i, high);
    i
}

/// Sorts both sides of each partition.
///
/// Recurses into the shorter side and loops on the longer one, so the stack stays
/// logarithmic in `v.len()` even when the pivots are unlucky.
fn recurse<T, C, R>(mut v: &mut [T], cmp: &C, rng: &mut R)
where
    C: Comparator<T> + ?Sized,
    R: Rng + ?Sized,
{
    while v.len() > 1 {
        choose_random_pivot(v, rng);
        let pivot = partition(v, cmp);

        let (left, rest) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            recurse(left, cmp, rng);
            v = right;
        } else {
            recurse(right, cmp, rng);
            v = left;
        }
    }
}
