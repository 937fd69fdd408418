//! # Sortkit
//!
//! `sortkit` is a library of interchangeable, in-place sorting, selection
//! and median algorithms for slices, with optional tracking of the index
//! permutation a sort applies.
//!
//! Five classic methods sit behind one [`Sorter`] contract: straight
//! insertion, Shell sort, heapsort, an iterative median-of-three quicksort
//! (the default) and the platform's built-in sort. Because every method
//! honors the same contract, callers can switch algorithms at runtime
//! without touching the surrounding code.
//!
//! ## Key Features
//!
//! - **Interchangeable methods**: pick an algorithm at runtime through
//!   [`SortingMethod`] and the [`AnySorter`] factory, or use a concrete
//!   sorter directly. Unknown method names fail to parse, they never fall
//!   back to a default silently.
//! - **Index tracking**: every sort can return the permutation it applied,
//!   so parallel arrays can be reordered to match with
//!   [`apply_permutation`].
//! - **Selection and medians**: k-th order statistics and medians run on
//!   any sorter via quickselect, in linear average time, without fully
//!   sorting the range.
//! - **Sub-range forms**: every operation takes half-open `from..to`
//!   bounds; elements outside the range are never read or moved.
//! - **Validation before mutation**: bad arguments return a [`SortError`]
//!   and leave the slice exactly as it was.
//!
//! ## Usage
//!
//! ### Sorting
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let sorter = AnySorter::default(); // quicksort
//! let mut data = vec![5, 3, 1, 4, 2];
//! sorter.sort(&mut data)?;
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//!
//! // Or pick a method by tag.
//! let sorter = AnySorter::new("heapsort".parse()?);
//! assert_eq!(sorter.method(), SortingMethod::Heapsort);
//! # Ok::<(), sortkit::SortError>(())
//! ```
//!
//! ### Tracking indices
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![3, 1, 2];
//! let perm = QuicksortSorter.sort_with_indices(&mut data)?;
//! assert_eq!(data, vec![1, 2, 3]);
//! // perm[i] is the original position of the element now at i.
//! assert_eq!(perm, vec![1, 2, 0]);
//! # Ok::<(), sortkit::SortError>(())
//! ```
//!
//! ### Selection and medians
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let sorter = AnySorter::default();
//!
//! let mut data = vec![5, 3, 1, 4, 2];
//! assert_eq!(sorter.select(2, &mut data)?, 3);
//!
//! let mut even = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(sorter.median(&mut even)?, 2.5);
//! # Ok::<(), sortkit::SortError>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Quicksort** (default): O(n log n) expected, insertion-sort finishing
//!   for partitions of at most 7 elements, bounded explicit partition stack.
//! - **Heapsort**: O(n log n) guaranteed, no extra space.
//! - **Shell sort**: ~O(n^1.25) observed with the 3h+1 gap sequence.
//! - **Straight insertion**: O(n²), stable, fastest below a few dozen
//!   elements.
//! - **System**: whatever the platform's `sort_unstable_by` provides.
//!
//! Selection and median run in O(n) average time on any sorter and
//! partially reorder the range they inspect.

pub mod average;
pub mod error;
pub mod heap;
pub mod insertion;
pub mod method;
pub mod perm;
pub mod quick;
pub mod shell;
pub mod sorter;
pub mod system;

pub use average::Average;
pub use error::SortError;
pub use heap::HeapsortSorter;
pub use insertion::StraightInsertionSorter;
pub use method::{AnySorter, SortingMethod};
pub use perm::{apply_permutation, identity_permutation};
pub use quick::QuicksortSorter;
pub use shell::ShellSorter;
pub use sorter::Sorter;
pub use system::SystemSorter;

pub mod prelude {
    pub use crate::average::Average;
    pub use crate::error::SortError;
    pub use crate::heap::HeapsortSorter;
    pub use crate::insertion::StraightInsertionSorter;
    pub use crate::method::{AnySorter, SortingMethod};
    pub use crate::perm::{apply_permutation, identity_permutation};
    pub use crate::quick::QuicksortSorter;
    pub use crate::shell::ShellSorter;
    pub use crate::sorter::Sorter;
    pub use crate::system::SystemSorter;
}
