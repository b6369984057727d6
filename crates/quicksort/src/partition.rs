use std::cmp::Ordering;

use crate::{OffsetSource, PivotMode, SortError};

/// Hoare partition of `data` around the element at `pivot`.
///
/// Returns `(left_len, right_start)`: after the call every element of
/// `data[..left_len]` compares `<=` the pivot value, every element of
/// `data[right_start..]` compares `>=` it, and `left_len <= right_start`.
/// Elements in between equal the pivot value.
pub(crate) fn partition_hoare<T, F>(
    data: &mut [T],
    mut pivot: usize,
    compare: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(pivot < data.len());

    // `hi` sits one past the right cursor, which may step to just below index 0.
    let mut lo = 0usize;
    let mut hi = data.len();

    while lo < hi {
        while compare(&data[lo], &data[pivot]) == Ordering::Less {
            lo += 1;
        }
        while compare(&data[hi - 1], &data[pivot]) == Ordering::Greater {
            hi -= 1;
        }

        if lo < hi {
            let right = hi - 1;
            data.swap(lo, right);
            // The pivot value follows its element through swaps.
            if pivot == lo {
                pivot = right;
            } else if pivot == right {
                pivot = lo;
            }
            lo += 1;
            hi -= 1;
        }
    }

    (hi, lo)
}

/// Partitions `data` around the pivot at `offset`, then sorts both sides.
///
/// Only sides holding at least two elements are descended into, left first.
/// A fresh offset is drawn for each side right before its descent.
pub(crate) fn partition_and_sort<T, F, S>(
    data: &mut [T],
    offset: usize,
    mode: PivotMode,
    source: &mut S,
    compare: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    S: OffsetSource + ?Sized,
{
    let (left_len, right_start) = partition_hoare(data, offset, compare);
    let (left, rest) = data.split_at_mut(left_len);
    let right = &mut rest[right_start - left_len..];

    if left.len() > 1 {
        let offset = mode.offset(left.len(), source)?;
        partition_and_sort(left, offset, mode, source, compare)?;
    }

    if right.len() > 1 {
        let offset = mode.offset(right.len(), source)?;
        partition_and_sort(right, offset, mode, source, compare)?;
    }

    Ok(())
}
