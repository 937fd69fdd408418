//! Straight insertion sort.
//!
//! The simplest method in the crate: grow a sorted prefix one element at a
//! time, sinking each new element leftward until its left neighbor no
//! longer compares greater. Quadratic, but with minimal constant factors
//! and no allocation, which makes it the method of choice for inputs of a
//! few dozen elements. It is also the only sorter here that is stable.

use std::cmp::Ordering;

use crate::error::{SortError, check_range};
use crate::method::SortingMethod;
use crate::perm::{identity_permutation, swap_with_indices};
use crate::sorter::Sorter;

/// Stable in-place insertion sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightInsertionSorter;

impl Sorter for StraightInsertionSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::StraightInsertion
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
        for j in 1..v.len() {
            let mut i = j;
            while i > 0 && cmp(&v[i - 1], &v[i]) == Ordering::Greater {
                v.swap(i - 1, i);
                i -= 1;
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
        for j in 1..v.len() {
            let mut i = j;
            while i > 0 && cmp(&v[i - 1], &v[i]) == Ordering::Greater {
                swap_with_indices(v, idx, i - 1, i);
                i -= 1;
            }
        }
        Ok(indices)
    }
}
