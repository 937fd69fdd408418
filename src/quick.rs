//! Iterative quicksort, the crate's default method.
//!
//! Partitioning picks the median of the first, middle and last elements,
//! which also plants sentinels so the inner scans need no bounds checks.
//! Small partitions are finished by straight insertion. Pending partitions
//! go on an explicit fixed-size stack instead of the call stack, with the
//! larger side pushed and the smaller side processed first, so the depth
//! stays logarithmic; running out of stack is reported as an error rather
//! than a panic. Not stable.

use std::cmp::Ordering;

use cuneiform::cuneiform;

use crate::error::{SortError, check_range};
use crate::method::SortingMethod;
use crate::perm::{identity_permutation, swap_with_indices};
use crate::sorter::Sorter;

/// Partitions at or below this size are finished by straight insertion.
const INSERTION_SORT_THRESHOLD: usize = 7;

/// Capacity of the pending-partition stack, in `(low, high)` pairs. With
/// larger-side pushing, depth never exceeds log2 of the input length.
const STACK_SIZE: usize = 64;

// Cache-aligned scratch for pending partition bounds.
#[cuneiform]
struct PartitionStack {
    ranges: [(usize, usize); STACK_SIZE],
}

/// In-place iterative quicksort with median-of-three pivoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuicksortSorter;

fn quicksort_by<T, F>(v: &mut [T], cmp: &mut F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stack = PartitionStack {
        ranges: [(0, 0); STACK_SIZE],
    };
    let mut depth = 0usize;
    let mut l = 0usize;
    let mut ir = v.len() - 1;

    loop {
        if ir - l < INSERTION_SORT_THRESHOLD {
            // Straight insertion finishes the small partition.
            for j in (l + 1)..=ir {
                let mut i = j;
                while i > l && cmp(&v[i - 1], &v[i]) == Ordering::Greater {
                    v.swap(i - 1, i);
                    i -= 1;
                }
            }
            if depth == 0 {
                break;
            }
            depth -= 1;
            (l, ir) = stack.ranges[depth];
        } else {
            // Median of first, middle and last, parked at l + 1 so that
            // v[l] <= v[l + 1] <= v[ir] sentinels the scans.
            let mid = l + (ir - l) / 2;
            v.swap(mid, l + 1);
            if cmp(&v[l], &v[ir]) == Ordering::Greater {
                v.swap(l, ir);
            }
            if cmp(&v[l + 1], &v[ir]) == Ordering::Greater {
                v.swap(l + 1, ir);
            }
            if cmp(&v[l], &v[l + 1]) == Ordering::Greater {
                v.swap(l, l + 1);
            }

            // Converging scans around the pivot at l + 1; it stays put
            // until the final swap drops it between the partitions.
            let mut i = l + 1;
            let mut j = ir;
            loop {
                loop {
                    i += 1;
                    if cmp(&v[i], &v[l + 1]) != Ordering::Less {
                        break;
                    }
                }
                loop {
                    j -= 1;
                    if cmp(&v[j], &v[l + 1]) != Ordering::Greater {
                        break;
                    }
                }
                if j < i {
                    break;
                }
                v.swap(i, j);
            }
            v.swap(l + 1, j);

            if depth == STACK_SIZE {
                return Err(SortError::StackExhausted);
            }
            // Push the larger side, keep working on the smaller.
            if ir - i + 1 >= j - l {
                stack.ranges[depth] = (i, ir);
                ir = j - 1;
            } else {
                stack.ranges[depth] = (l, j - 1);
                l = i;
            }
            depth += 1;
        }
    }
    Ok(())
}

/// Same partitioning as [`quicksort_by`], mirroring every swap into the
/// index vector.
fn quicksort_with_indices_by<T, F>(
    v: &mut [T],
    idx: &mut [usize],
    cmp: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stack = PartitionStack {
        ranges: [(0, 0); STACK_SIZE],
    };
    let mut depth = 0usize;
    let mut l = 0usize;
    let mut ir = v.len() - 1;

    loop {
        if ir - l < INSERTION_SORT_THRESHOLD {
            for j in (l + 1)..=ir {
                let mut i = j;
                while i > l && cmp(&v[i - 1], &v[i]) == Ordering::Greater {
                    swap_with_indices(v, idx, i - 1, i);
                    i -= 1;
                }
            }
            if depth == 0 {
                break;
            }
            depth -= 1;
            (l, ir) = stack.ranges[depth];
        } else {
            let mid = l + (ir - l) / 2;
            swap_with_indices(v, idx, mid, l + 1);
            if cmp(&v[l], &v[ir]) == Ordering::Greater {
                swap_with_indices(v, idx, l, ir);
            }
            if cmp(&v[l + 1], &v[ir]) == Ordering::Greater {
                swap_with_indices(v, idx, l + 1, ir);
            }
            if cmp(&v[l], &v[l + 1]) == Ordering::Greater {
                swap_with_indices(v, idx, l, l + 1);
            }

            let mut i = l + 1;
            let mut j = ir;
            loop {
                loop {
                    i += 1;
                    if cmp(&v[i], &v[l + 1]) != Ordering::Less {
                        break;
                    }
                }
                loop {
                    j -= 1;
                    if cmp(&v[j], &v[l + 1]) != Ordering::Greater {
                        break;
                    }
                }
                if j < i {
                    break;
                }
                swap_with_indices(v, idx, i, j);
            }
            swap_with_indices(v, idx, l + 1, j);

            if depth == STACK_SIZE {
                return Err(SortError::StackExhausted);
            }
            if ir - i + 1 >= j - l {
                stack.ranges[depth] = (i, ir);
                ir = j - 1;
            } else {
                stack.ranges[depth] = (l, j - 1);
                l = i;
            }
            depth += 1;
        }
    }
    Ok(())
}

impl Sorter for QuicksortSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::Quicksort
    }

    fn sort_range_by<T, F>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        mut cmp: F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        check_range(data.len(), from, to)?;
        if to - from < 2 {
            return Ok(());
        }
        quicksort_by(&mut data[from..to], &mut cmp)
    }

    fn sort_range_with_indices_by<T, F>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        mut cmp: F,
    ) -> Result<Vec<usize>, SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        check_range(data.len(), from, to)?;
        let mut indices = identity_permutation(data.len());
        if to - from >= 2 {
            quicksort_with_indices_by(&mut data[from..to], &mut indices[from..to], &mut cmp)?;
        }
        Ok(indices)
    }
}
