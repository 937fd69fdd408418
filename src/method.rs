//! Method tags and the sorter factory.
//!
//! [`SortingMethod`] is the closed set of algorithm tags; [`AnySorter`]
//! wraps the five concrete sorters behind a single value so the method can
//! be chosen at runtime. Parsing a tag that is not part of the set fails,
//! it never falls back to a default.

use std::fmt;
use std::str::FromStr;

use crate::error::SortError;
use crate::heap::HeapsortSorter;
use crate::insertion::StraightInsertionSorter;
use crate::quick::QuicksortSorter;
use crate::shell::ShellSorter;
use crate::sorter::Sorter;
use crate::system::SystemSorter;

/// Tags identifying the available sorting algorithms.
///
/// The default method is [`SortingMethod::Quicksort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortingMethod {
    /// Straight insertion sort; stable, quadratic, good for tiny inputs.
    StraightInsertion,
    /// Shell's diminishing-increment sort with the 3h+1 gap sequence.
    Shell,
    /// Heapsort; guaranteed O(n log n), no extra space.
    Heapsort,
    /// Iterative quicksort with median-of-three pivoting.
    #[default]
    Quicksort,
    /// The platform's built-in slice sort.
    System,
}

impl SortingMethod {
    /// Every tag, in declaration order.
    pub const ALL: [SortingMethod; 5] = [
        SortingMethod::StraightInsertion,
        SortingMethod::Shell,
        SortingMethod::Heapsort,
        SortingMethod::Quicksort,
        SortingMethod::System,
    ];

    /// The kebab-case name this tag displays and parses as.
    pub fn name(self) -> &'static str {
        match self {
            SortingMethod::StraightInsertion => "straight-insertion",
            SortingMethod::Shell => "shellsort",
            SortingMethod::Heapsort => "heapsort",
            SortingMethod::Quicksort => "quicksort",
            SortingMethod::System => "system",
        }
    }
}

impl fmt::Display for SortingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortingMethod {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight-insertion" => Ok(SortingMethod::StraightInsertion),
            "shellsort" => Ok(SortingMethod::Shell),
            "heapsort" => Ok(SortingMethod::Heapsort),
            "quicksort" => Ok(SortingMethod::Quicksort),
            "system" => Ok(SortingMethod::System),
            other => Err(SortError::UnknownMethod(other.to_string())),
        }
    }
}

/// A runtime-chosen sorter.
///
/// The [`Sorter`] trait has generic methods, so it cannot go behind a trait
/// object; this enum provides the same "pick at runtime" ergonomics with
/// static dispatch inside each arm.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let sorter = AnySorter::new(SortingMethod::Heapsort);
/// let mut data = vec![5, 3, 1, 4, 2];
/// sorter.sort(&mut data)?;
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// # Ok::<(), sortkit::SortError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub enum AnySorter {
    StraightInsertion(StraightInsertionSorter),
    Shell(ShellSorter),
    Heapsort(HeapsortSorter),
    Quicksort(QuicksortSorter),
    System(SystemSorter),
}

impl AnySorter {
    /// Returns the sorter implementing `method`.
    pub fn new(method: SortingMethod) -> Self {
        match method {
            SortingMethod::StraightInsertion => {
                AnySorter::StraightInsertion(StraightInsertionSorter)
            }
            SortingMethod::Shell => AnySorter::Shell(ShellSorter),
            SortingMethod::Heapsort => AnySorter::Heapsort(HeapsortSorter),
            SortingMethod::Quicksort => AnySorter::Quicksort(QuicksortSorter),
            SortingMethod::System => AnySorter::System(SystemSorter),
        }
    }
}

impl Default for AnySorter {
    /// The quicksort sorter.
    fn default() -> Self {
        AnySorter::new(SortingMethod::default())
    }
}

impl Sorter for AnySorter {
    fn method(&self) -> SortingMethod {
        match self {
            AnySorter::StraightInsertion(s) => s.method(),
            AnySorter::Shell(s) => s.method(),
            AnySorter::Heapsort(s) => s.method(),
            AnySorter::Quicksort(s) => s.method(),
            AnySorter::System(s) => s.method(),
        }
    }

    fn sort_range_by<T, F>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        cmp: F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        match self {
            AnySorter::StraightInsertion(s) => s.sort_range_by(data, from, to, cmp),
            AnySorter::Shell(s) => s.sort_range_by(data, from, to, cmp),
            AnySorter::Heapsort(s) => s.sort_range_by(data, from, to, cmp),
            AnySorter::Quicksort(s) => s.sort_range_by(data, from, to, cmp),
            AnySorter::System(s) => s.sort_range_by(data, from, to, cmp),
        }
    }

    fn sort_range_with_indices_by<T, F>(
        &self,
        data: &mut [T],
        from: usize,
        to: usize,
        cmp: F,
    ) -> Result<Vec<usize>, SortError>
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        match self {
            AnySorter::StraightInsertion(s) => s.sort_range_with_indices_by(data, from, to, cmp),
            AnySorter::Shell(s) => s.sort_range_with_indices_by(data, from, to, cmp),
            AnySorter::Heapsort(s) => s.sort_range_with_indices_by(data, from, to, cmp),
            AnySorter::Quicksort(s) => s.sort_range_with_indices_by(data, from, to, cmp),
            AnySorter::System(s) => s.sort_range_with_indices_by(data, from, to, cmp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        for method in SortingMethod::ALL {
            let parsed: SortingMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn unknown_tags_fail() {
        let err = "bogosort".parse::<SortingMethod>().unwrap_err();
        assert_eq!(err, SortError::UnknownMethod("bogosort".to_string()));
        // Close misses are still misses.
        assert!("Quicksort".parse::<SortingMethod>().is_err());
        assert!("quick-sort".parse::<SortingMethod>().is_err());
        assert!("".parse::<SortingMethod>().is_err());
    }

    #[test]
    fn factory_maps_every_tag() {
        for method in SortingMethod::ALL {
            assert_eq!(AnySorter::new(method).method(), method);
        }
    }

    #[test]
    fn default_is_quicksort() {
        assert_eq!(SortingMethod::default(), SortingMethod::Quicksort);
        assert_eq!(AnySorter::default().method(), SortingMethod::Quicksort);
    }
}
