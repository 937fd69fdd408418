//! Shell's diminishing-increment sort.
//!
//! Runs insertion-sort passes over interleaved subsequences at shrinking
//! gaps, so elements travel long distances early and the final gap-1 pass
//! meets an almost-sorted slice. Gaps follow the 3h+1 sequence
//! (1, 4, 13, 40, ...), for roughly O(n^1.25) observed cost and O(n^1.5)
//! in the worst case. Not stable.

use std::cmp::Ordering;

use crate::error::{SortError, check_range};
use crate::method::SortingMethod;
use crate::perm::{identity_permutation, swap_with_indices};
use crate::sorter::Sorter;

/// Each successive gap is a third of the previous one.
const GAP_FACTOR: usize = 3;

/// In-place Shell sort over the 3h+1 gap sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSorter;

/// Smallest gap of the 3h+1 sequence exceeding `n`, the starting point for
/// the descending gap schedule.
fn initial_gap(n: usize) -> usize {
    let mut gap = 1;
    loop {
        gap = GAP_FACTOR * gap + 1;
        if gap > n {
            return gap;
        }
    }
}

impl Sorter for ShellSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::Shell
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
        let v = &mut data[from..to];
        let n = v.len();
        let mut gap = initial_gap(n);
        while gap > 1 {
            gap /= GAP_FACTOR;
            for i in gap..n {
                let mut j = i;
                while j >= gap && cmp(&v[j - gap], &v[j]) == Ordering::Greater {
                    v.swap(j - gap, j);
                    j -= gap;
                }
            }
        }
        Ok(())
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
        let v = &mut data[from..to];
        let idx = &mut indices[from..to];
        let n = v.len();
        let mut gap = initial_gap(n);
        while gap > 1 {
            gap /= GAP_FACTOR;
            for i in gap..n {
                let mut j = i;
                while j >= gap && cmp(&v[j - gap], &v[j]) == Ordering::Greater {
                    swap_with_indices(v, idx, j - gap, j);
                    j -= gap;
                }
            }
        }
        Ok(indices)
    }
}
