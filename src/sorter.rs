//! Configurable entry point over both algorithms.

use crate::core::{Algorithm, Comparator};
use crate::error::{Result, SortError};
use crate::merge::merge_sort;
use crate::quick::{quick_sort, quick_sort_seeded};

/// How a [`Sorter`] sorts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub algorithm: Algorithm,
    /// Pivot seed for [`Algorithm::Quick`]. `None` draws a fresh seed per call.
    /// Ignored by [`Algorithm::Merge`].
    pub seed: Option<u64>,
}

/// A sort configured with an algorithm and, once set, a comparator.
///
/// ```
/// use mqsort::{Algorithm, Sorter};
///
/// let sorter = Sorter::new(Algorithm::Quick)
///     .seed(7)
///     .comparator(|a: &f64, b: &f64| a.total_cmp(b));
///
/// let mut v = vec![4.1, 3.1, 2.1, 1.1];
/// sorter.sort(&mut v).unwrap();
/// assert_eq!(v, [1.1, 2.1, 3.1, 4.1]);
/// ```
#[derive(Clone, Debug)]
pub struct Sorter<C> {
    options: SortOptions,
    comparator: Option<C>,
}

impl<C> Sorter<C> {
    /// Creates a sorter for `algorithm` with a fresh pivot seed per call.
    pub fn new(algorithm: Algorithm) -> Self {
        Self::from_options(SortOptions {
            algorithm,
            seed: None,
        })
    }

    /// Creates a sorter from prepared options. No comparator is set yet.
    pub fn from_options(options: SortOptions) -> Self {
        Sorter {
            options,
            comparator: None,
        }
    }

    /// Fixes the quicksort pivot seed, making pivot choices reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Sets the ordering used by [`Sorter::sort`].
    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// The algorithm and seed this sorter was configured with.
    pub fn options(&self) -> SortOptions {
        self.options
    }

    /// Sorts `v` in place.
    ///
    /// # Errors
    ///
    /// [`SortError::InvalidArgument`] if no comparator was set, and
    /// [`SortError::OutOfMemory`] if a merge sort cannot reserve its scratch buffer.
    /// Neither leaves `v` modified.
    pub fn sort<T>(&self, v: &mut [T]) -> Result<()>
    where
        T: Clone,
        C: Comparator<T>,
    {
        let cmp = self.require_comparator()?;
        dispatch(self.options, v, cmp)
    }

    /// Like [`Sorter::sort`], for callers whose sequence may be absent.
    ///
    /// A missing sequence is rejected with [`SortError::InvalidArgument`].
    pub fn sort_opt<T>(&self, v: Option<&mut [T]>) -> Result<()>
    where
        T: Clone,
        C: Comparator<T>,
    {
        let cmp = self.require_comparator()?;
        let v = v.ok_or_else(|| SortError::invalid("no sequence to sort"))?;
        dispatch(self.options, v, cmp)
    }

    fn require_comparator(&self) -> Result<&C> {
        self.comparator
            .as_ref()
            .ok_or_else(|| SortError::invalid("no comparator configured"))
    }
}

/// Sorts `v` with `algorithm`, drawing a fresh pivot seed if it is [`Algorithm::Quick`].
pub fn sort_by<T, C>(algorithm: Algorithm, v: &mut [T], cmp: &C) -> Result<()>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    dispatch(
        SortOptions {
            algorithm,
            seed: None,
        },
        v,
        cmp,
    )
}

fn dispatch<T, C>(options: SortOptions, v: &mut [T], cmp: &C) -> Result<()>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    match options.algorithm {
        Algorithm::Merge => merge_sort(v, cmp),
        Algorithm::Quick => {
            match options.seed {
                Some(seed) => quick_sort_seeded(v, cmp, seed),
                None => quick_sort(v, cmp),
            }
            Ok(())
        }
    }
}
