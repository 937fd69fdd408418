//! Heapsort.
//!
//! Builds a max-heap over the range bottom-up, then repeatedly swaps the
//! root with the last unsorted slot and sifts the new root back down.
//! Guaranteed O(n log n) with no extra space, at the cost of poor cache
//! behavior next to quicksort on typical inputs. Not stable.

use std::cmp::Ordering;

use crate::error::{SortError, check_range};
use crate::method::SortingMethod;
use crate::perm::{identity_permutation, swap_with_indices};
use crate::sorter::Sorter;

/// In-place heapsort.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapsortSorter;

/// Restores the max-heap property for the root at `l`, heap bounded by `r`
/// inclusive.
fn sift_down<T, F>(v: &mut [T], l: usize, r: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut root = l;
    loop {
        let mut child = 2 * root + 1;
        if child > r {
            break;
        }
        if child < r && cmp(&v[child], &v[child + 1]) == Ordering::Less {
            child += 1;
        }
        if cmp(&v[root], &v[child]) != Ordering::Less {
            break;
        }
        v.swap(root, child);
        root = child;
    }
}

/// Same walk as [`sift_down`], mirroring each swap into the index vector.
fn sift_down_with_indices<T, F>(v: &mut [T], idx: &mut [usize], l: usize, r: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut root = l;
    loop {
        let mut child = 2 * root + 1;
        if child > r {
            break;
        }
        if child < r && cmp(&v[child], &v[child + 1]) == Ordering::Less {
            child += 1;
        }
        if cmp(&v[root], &v[child]) != Ordering::Less {
            break;
        }
        swap_with_indices(v, idx, root, child);
        root = child;
    }
}

impl Sorter for HeapsortSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::Heapsort
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
        for start in (0..n / 2).rev() {
            sift_down(v, start, n - 1, &mut cmp);
        }
        for end in (1..n).rev() {
            v.swap(0, end);
            sift_down(v, 0, end - 1, &mut cmp);
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
        for start in (0..n / 2).rev() {
            sift_down_with_indices(v, idx, start, n - 1, &mut cmp);
        }
        for end in (1..n).rev() {
            swap_with_indices(v, idx, 0, end);
            sift_down_with_indices(v, idx, 0, end - 1, &mut cmp);
        }
        Ok(indices)
    }
}
