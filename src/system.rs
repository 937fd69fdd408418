//! Delegation to the platform's built-in slice sorts.
//!
//! Nothing algorithmic lives here. The plain form hands the range to
//! `slice::sort_unstable_by`; the index-tracking form stable-sorts an index
//! window keyed by the data and then applies the resulting permutation in
//! place. Because the index sort is stable, permutations returned by this
//! sorter list equal elements in their original relative order, which also
//! makes them deterministic.

use std::cmp::Ordering;

use crate::error::{SortError, check_range};
use crate::method::SortingMethod;
use crate::perm::{apply_in_place, identity_permutation};
use crate::sorter::Sorter;

/// The platform's built-in slice sort behind the [`Sorter`] contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSorter;

impl Sorter for SystemSorter {
    fn method(&self) -> SortingMethod {
        SortingMethod::System
    }

    fn sort_range_by<T, F>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        cmp: F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        check_range(data.len(), from, to)?;
        data[from..to].sort_unstable_by(cmp);
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
        // Stable sort of the index window by the data it points at; the
        // data itself has not moved yet.
        indices[from..to].sort_by(|&a, &b| cmp(&data[a], &data[b]));
        let rel: Vec<usize> = indices[from..to].iter().map(|&p| p - from).collect();
        apply_in_place(&mut data[from..to], rel);
        Ok(indices)
    }
}
