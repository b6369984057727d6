//! In-place quicksort built on the Hoare partition scheme.
//!
//! The pivot of every sub-range is picked by a [`PivotMode`]. `Random` draws
//! its offsets from an [`OffsetSource`], which any [`rand::Rng`] provides.

mod error;
mod partition;
mod pivot;

use std::cmp::Ordering;

use rand::rngs::ThreadRng;

pub use error::SortError;
pub use pivot::{OffsetSource, PivotMode, all_pivot_modes};

/// Sorts `data` in non-decreasing order and hands the same slice back.
///
/// Equal elements may be reordered. Returns [`SortError::EmptySequence`] for
/// an empty slice.
pub fn sort<T: Ord>(mode: PivotMode, data: &mut [T]) -> Result<&mut [T], SortError> {
    QuickSort::new(mode).sort(data)
}

pub fn sort_by<T, F>(mode: PivotMode, data: &mut [T], compare: F) -> Result<&mut [T], SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    QuickSort::new(mode).sort_by(data, compare)
}

/// Like [`sort`], with `Random` offsets drawn from `source`.
pub fn sort_with_source<'a, T, S>(
    mode: PivotMode,
    data: &'a mut [T],
    source: &mut S,
) -> Result<&'a mut [T], SortError>
where
    T: Ord,
    S: OffsetSource + ?Sized,
{
    sort_impl(mode, data, source, &mut T::cmp)?;
    Ok(data)
}

fn sort_impl<T, F, S>(
    mode: PivotMode,
    data: &mut [T],
    source: &mut S,
    compare: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    S: OffsetSource + ?Sized,
{
    let offset = mode.offset(data.len(), source)?;
    partition::partition_and_sort(data, offset, mode, source, compare)
}

/// A pivot mode paired with the offset source it draws from.
///
/// Reusing one engine across calls keeps a seeded source advancing, so a
/// sequence of `Random` sorts stays reproducible.
#[derive(Clone, Debug)]
pub struct QuickSort<S = ThreadRng> {
    mode: PivotMode,
    source: S,
}

impl QuickSort<ThreadRng> {
    pub fn new(mode: PivotMode) -> Self {
        Self::with_source(mode, rand::rng())
    }
}

impl Default for QuickSort<ThreadRng> {
    fn default() -> Self {
        Self::new(PivotMode::default())
    }
}

impl<S: OffsetSource> QuickSort<S> {
    pub fn with_source(mode: PivotMode, source: S) -> Self {
        Self { mode, source }
    }

    pub fn mode(&self) -> PivotMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PivotMode) {
        self.mode = mode;
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn sort<'a, T: Ord>(&mut self, data: &'a mut [T]) -> Result<&'a mut [T], SortError> {
        self.sort_by(data, T::cmp)
    }

    pub fn sort_by<'a, T, F>(
        &mut self,
        data: &'a mut [T],
        mut compare: F,
    ) -> Result<&'a mut [T], SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort_impl(self.mode, data, &mut self.source, &mut compare)?;
        Ok(data)
    }
}
