//! Index permutation helpers.
//!
//! The index-tracking sort operations return a permutation vector `p` such
//! that `sorted[i] == original[p[i]]`. The helpers here build the identity
//! permutation those operations start from and re-apply a returned
//! permutation to any other slice, so parallel arrays can be kept in the
//! same order as the sorted one.

use crate::error::SortError;

/// Returns the identity permutation over `0..len`.
///
/// This is the permutation an index-tracking sort returns for input that is
/// already in order (or for an empty range).
pub fn identity_permutation(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Reorders `values` in place so that `values[i]` becomes
/// `values[permutation[i]]`.
///
/// `permutation` must be a bijection over `0..values.len()`, e.g. one
/// returned by [`Sorter::sort_with_indices`](crate::Sorter::sort_with_indices);
/// entries outside that range cause an index panic.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let mut names = vec!["carol", "alice", "bob"];
/// let mut ages = vec![31, 29, 37];
///
/// let perm = QuicksortSorter.sort_with_indices(&mut names)?;
/// apply_permutation(&mut ages, &perm)?;
///
/// assert_eq!(names, vec!["alice", "bob", "carol"]);
/// assert_eq!(ages, vec![29, 37, 31]);
/// # Ok::<(), sortkit::SortError>(())
/// ```
pub fn apply_permutation<T>(values: &mut [T], permutation: &[usize]) -> Result<(), SortError> {
    if values.len() != permutation.len() {
        return Err(SortError::LengthMismatch {
            data: values.len(),
            indices: permutation.len(),
        });
    }
    apply_in_place(values, permutation.to_vec());
    Ok(())
}

/// Cycle-walking permutation application. Consumes `perm` as visited marks.
pub(crate) fn apply_in_place<T>(data: &mut [T], mut perm: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while perm[current] != i {
            let next = perm[current];
            data.swap(current, next);
            perm[current] = current; // placed
            current = next;
        }
        perm[current] = current;
    }
}

/// Swaps two positions in the data and its index vector in lockstep.
#[inline]
pub(crate) fn swap_with_indices<T>(data: &mut [T], indices: &mut [usize], a: usize, b: usize) {
    data.swap(a, b);
    indices.swap(a, b);
}
