//! The contract shared by every sorting algorithm in the crate.
//!
//! [`Sorter`] requires each algorithm to provide two range operations (plain
//! sorting and index-tracking sorting); everything else, the whole-array and
//! natural-order conveniences plus selection and medians, is defined here
//! once and works identically across algorithms. Selection uses quickselect
//! with median-of-three pivoting, independent of which sorter it is called
//! on, since only partial ordering of the range is needed.

use std::cmp::Ordering;

use crate::average::Average;
use crate::error::{SortError, check_range};
use crate::method::SortingMethod;

/// An in-place sorting algorithm over `[from, to)` ranges of a slice.
///
/// Implementations hold no state; a single instance can be shared freely,
/// including across threads. All operations validate their arguments before
/// moving any element, so an `Err` leaves the slice untouched.
///
/// Natural-order operations (`sort`, `select`, `median`, ...) accept any
/// `T: PartialOrd`; elements that do not compare (for floats, NaN) rank as
/// equal to everything, so their final position is unspecified but the call
/// still terminates. Pass `f64::total_cmp` to a `_by` form for a strict
/// total order over floats.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let mut data = vec![5, 3, 1, 4, 2];
/// HeapsortSorter.sort(&mut data)?;
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
///
/// let mut floats = vec![0.3f64, 0.1, 0.2];
/// ShellSorter.sort_by(&mut floats, f64::total_cmp)?;
/// assert_eq!(floats, vec![0.1, 0.2, 0.3]);
/// # Ok::<(), sortkit::SortError>(())
/// ```
pub trait Sorter {
    /// The tag identifying this algorithm.
    fn method(&self) -> SortingMethod;

    /// Sorts `data[from..to)` in place, ascending under `cmp`.
    ///
    /// Elements outside the range are neither read nor moved. An empty
    /// range (`from == to`) is valid and does nothing.
    ///
    /// # Errors
    ///
    /// [`SortError::InvertedRange`] if `from > to`,
    /// [`SortError::RangeOutOfBounds`] if `to > data.len()`. Quicksort can
    /// additionally report [`SortError::StackExhausted`].
    fn sort_range_by<T, F>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        cmp: F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts `data[from..to)` in place and returns the permutation it
    /// applied.
    ///
    /// The returned vector spans the whole slice: entry `i` holds the
    /// original position of the element now at `i`, with entries outside
    /// `[from, to)` left at their own index. Index bookkeeping mirrors the
    /// algorithm's swaps as they happen, so the permutation is exact even
    /// for algorithms that move equal elements.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Sorter::sort_range_by`].
    fn sort_range_with_indices_by<T, F>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        cmp: F,
    ) -> Result<Vec<usize>, SortError>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts the whole slice under `cmp`.
    fn sort_by<T, F>(&self, data: &mut [T], cmp: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let to = data.len();
        self.sort_range_by(data, 0, to, cmp)
    }

    /// Sorts the whole slice in natural ascending order.
    fn sort<T: PartialOrd>(&self, data: &mut [T]) -> Result<(), SortError> {
        let to = data.len();
        self.sort_range_by(data, 0, to, natural_cmp)
    }

    /// Sorts `data[from..to)` in natural ascending order.
    fn sort_range<T: PartialOrd>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
    ) -> Result<(), SortError> {
        self.sort_range_by(data, from, to, natural_cmp)
    }

    /// Sorts the whole slice under `cmp`, returning the applied permutation.
    fn sort_with_indices_by<T, F>(&self, data: &mut [T], cmp: F) -> Result<Vec<usize>, SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let to = data.len();
        self.sort_range_with_indices_by(data, 0, to, cmp)
    }

    /// Sorts the whole slice in natural order, returning the applied
    /// permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortkit::prelude::*;
    ///
    /// let mut data = vec![3, 1, 2];
    /// let perm = AnySorter::default().sort_with_indices(&mut data)?;
    /// assert_eq!(data, vec![1, 2, 3]);
    /// assert_eq!(perm, vec![1, 2, 0]);
    /// # Ok::<(), sortkit::SortError>(())
    /// ```
    fn sort_with_indices<T: PartialOrd>(&self, data: &mut [T]) -> Result<Vec<usize>, SortError> {
        let to = data.len();
        self.sort_range_with_indices_by(data, 0, to, natural_cmp)
    }

    /// Sorts `data[from..to)` in natural order, returning the applied
    /// permutation.
    fn sort_range_with_indices<T: PartialOrd>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
    ) -> Result<Vec<usize>, SortError> {
        self.sort_range_with_indices_by(data, from, to, natural_cmp)
    }

    /// Returns the element of rank `rank` within `data[from..to)` under
    /// `cmp`, where rank 0 is the smallest of the range.
    ///
    /// Quickselect: the range is partially reordered so that on return the
    /// selected element sits at `from + rank`, everything left of it
    /// compares less than or equal to it, and everything right of it
    /// greater than or equal. Average cost is linear in the range length.
    ///
    /// # Errors
    ///
    /// Range errors as for [`Sorter::sort_range_by`], plus
    /// [`SortError::RankOutOfRange`] if `rank >= to - from` (which covers
    /// selection over an empty range).
    fn select_range_by<T, F>(
        &self,
        rank: usize,
        data: &mut [T],
        from: usize,
        to: usize,
        mut cmp: F,
    ) -> Result<T, SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        check_range(data.len(), from, to)?;
        let len = to - from;
        if rank >= len {
            return Err(SortError::RankOutOfRange { rank, len });
        }

        let v = &mut data[from..to];
        let mut l = 0usize;
        let mut ir = len - 1;
        loop {
            if ir <= l + 1 {
                // Down to one or two elements.
                if ir == l + 1 && cmp(&v[ir], &v[l]) == Ordering::Less {
                    v.swap(l, ir);
                }
                return Ok(v[rank].clone());
            }

            // Median of first, middle and last, parked at l + 1 so that
            // v[l] <= v[l + 1] <= v[ir] sentinels the scans below.
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

            // Converging scans around the pivot at l + 1; it is never
            // displaced until the final swap below.
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

            // Keep only the side holding the wanted rank.
            if j >= rank {
                ir = j - 1;
            }
            if j <= rank {
                l = i;
            }
        }
    }

    /// Returns the element of rank `rank` of the whole slice under `cmp`.
    fn select_by<T, F>(&self, rank: usize, data: &mut [T], cmp: F) -> Result<T, SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let to = data.len();
        self.select_range_by(rank, data, 0, to, cmp)
    }

    /// Returns the element of rank `rank` of the whole slice in natural
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortkit::prelude::*;
    ///
    /// let mut data = vec![5, 3, 1, 4, 2];
    /// assert_eq!(AnySorter::default().select(2, &mut data)?, 3);
    /// # Ok::<(), sortkit::SortError>(())
    /// ```
    fn select<T>(&self, rank: usize, data: &mut [T]) -> Result<T, SortError>
    where
        T: PartialOrd + Clone,
    {
        let to = data.len();
        self.select_range_by(rank, data, 0, to, natural_cmp)
    }

    /// Returns the element of rank `rank` within `data[from..to)` in
    /// natural order.
    fn select_range<T>(
        &self,
        rank: usize,
        data: &mut [T],
        from: usize,
        to: usize,
    ) -> Result<T, SortError>
    where
        T: PartialOrd + Clone,
    {
        self.select_range_by(rank, data, from, to, natural_cmp)
    }

    /// Returns the median of `data[from..to)` under `cmp`, averaging with
    /// `mid` when the range length is even.
    ///
    /// Odd lengths return the middle order statistic directly. Even lengths
    /// call `mid(lower, upper)` on the two middle order statistics, in
    /// ascending order, and return its result. The range is partially
    /// reordered as a side effect, like
    /// [`select_range_by`](Sorter::select_range_by).
    ///
    /// # Errors
    ///
    /// Range errors as for [`Sorter::sort_range_by`], plus
    /// [`SortError::EmptyRange`] if `from == to`.
    fn median_range_by<T, F, A>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        mut cmp: F,
        mut mid: A,
    ) -> Result<T, SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
        A: FnMut(&T, &T) -> T,
    {
        check_range(data.len(), from, to)?;
        let len = to - from;
        if len == 0 {
            return Err(SortError::EmptyRange);
        }

        let upper = self.select_range_by(len / 2, data, from, to, &mut cmp)?;
        if len % 2 == 1 {
            return Ok(upper);
        }

        // Even length: the lower middle is the largest element of the left
        // partition quickselect just produced.
        let left = &data[from..from + len / 2];
        let mut lower = &left[0];
        for x in &left[1..] {
            if cmp(x, lower) == Ordering::Greater {
                lower = x;
            }
        }
        Ok(mid(lower, &upper))
    }

    /// Returns the median of the whole slice under `cmp`, averaging with
    /// `mid`.
    fn median_by<T, F, A>(&self, data: &mut [T], cmp: F, mid: A) -> Result<T, SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
        A: FnMut(&T, &T) -> T,
    {
        let to = data.len();
        self.median_range_by(data, 0, to, cmp, mid)
    }

    /// Returns the median of the whole slice in natural order.
    ///
    /// Even-length medians average the two middle elements with
    /// [`Average::average_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sortkit::prelude::*;
    ///
    /// let mut odd = vec![5, 3, 1, 4, 2];
    /// assert_eq!(AnySorter::default().median(&mut odd)?, 3);
    ///
    /// let mut even = vec![1.0, 2.0, 3.0, 4.0];
    /// assert_eq!(AnySorter::default().median(&mut even)?, 2.5);
    /// # Ok::<(), sortkit::SortError>(())
    /// ```
    fn median<T>(&self, data: &mut [T]) -> Result<T, SortError>
    where
        T: PartialOrd + Average + Clone,
    {
        let to = data.len();
        self.median_range_by(data, 0, to, natural_cmp, |a, b| a.average_with(b))
    }

    /// Returns the median of `data[from..to)` in natural order.
    fn median_range<T>(&self, data: &mut [T], from: usize, to: usize) -> Result<T, SortError>
    where
        T: PartialOrd + Average + Clone,
    {
        self.median_range_by(data, from, to, natural_cmp, |a, b| a.average_with(b))
    }
}

/// Natural ascending order; incomparable pairs rank as equal.
fn natural_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
