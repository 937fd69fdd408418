//! Error type shared by every fallible operation in the crate.
//!
//! All argument validation happens before any element is moved, so an
//! `Err` always leaves the input exactly as it was passed in. The only
//! error raised mid-flight is [`SortError::StackExhausted`], which reports
//! a partitioning defect rather than a bad argument.

use thiserror::Error;

/// Everything that can go wrong while sorting, selecting or taking medians.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The range start lies beyond its end.
    #[error("invalid range: from index {from} is greater than to index {to}")]
    InvertedRange { from: usize, to: usize },

    /// The range does not fit inside the sequence.
    #[error("range {from}..{to} does not fit a sequence of length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },

    /// A selection rank at or past the end of the range. Selecting from an
    /// empty range always fails with this variant.
    #[error("rank {rank} is out of range for a selection over {len} element(s)")]
    RankOutOfRange { rank: usize, len: usize },

    /// Median requested over a range with no elements.
    #[error("cannot take the median of an empty range")]
    EmptyRange,

    /// Quicksort ran out of room for pending partitions. With larger-side
    /// pushing the stack depth is logarithmic in the input length, so this
    /// signals a pivoting defect rather than an oversized input.
    #[error("quicksort partition stack exhausted")]
    StackExhausted,

    /// A method tag that is not part of the closed enumeration.
    #[error("unrecognized sorting method '{0}'")]
    UnknownMethod(String),

    /// A permutation whose length differs from the data it should reorder.
    #[error("permutation length {indices} does not match data length {data}")]
    LengthMismatch { data: usize, indices: usize },
}

/// Validates a half-open `from..to` range against a sequence length.
///
/// Called by every range operation before touching the data.
pub(crate) fn check_range(len: usize, from: usize, to: usize) -> Result<(), SortError> {
    if from > to {
        return Err(SortError::InvertedRange { from, to });
    }
    if to > len {
        return Err(SortError::RangeOutOfBounds { from, to, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_and_empty_ranges() {
        assert!(check_range(5, 0, 5).is_ok());
        assert!(check_range(5, 2, 4).is_ok());
        assert!(check_range(5, 3, 3).is_ok());
        assert!(check_range(0, 0, 0).is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            check_range(5, 4, 2),
            Err(SortError::InvertedRange { from: 4, to: 2 })
        );
    }

    #[test]
    fn rejects_out_of_bounds_range() {
        assert_eq!(
            check_range(5, 2, 6),
            Err(SortError::RangeOutOfBounds {
                from: 2,
                to: 6,
                len: 5
            })
        );
    }

    #[test]
    fn inversion_is_reported_before_bounds() {
        // Both violations at once: the inversion wins, as the range has no
        // meaningful extent to bounds-check.
        assert_eq!(
            check_range(3, 9, 7),
            Err(SortError::InvertedRange { from: 9, to: 7 })
        );
    }
}
