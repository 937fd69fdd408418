//! The averaging capability used by the natural-order median operations.

/// Produces the midpoint of two values.
///
/// Even-length medians need a value "between" the two middle elements; this
/// trait supplies it for the natural-order median forms. Floating-point
/// implementations take the arithmetic mean. Integer implementations
/// compute the exact midpoint in a widened type and truncate toward zero,
/// so no intermediate overflow can occur.
///
/// Custom element types can implement this to unlock
/// [`Sorter::median`](crate::Sorter::median) and friends; alternatively the
/// `_by` median forms accept any averaging closure without a trait bound.
pub trait Average {
    /// Returns the midpoint between `self` and `other`.
    fn average_with(&self, other: &Self) -> Self;
}

impl Average for f64 {
    fn average_with(&self, other: &Self) -> Self {
        0.5 * (self + other)
    }
}

impl Average for f32 {
    fn average_with(&self, other: &Self) -> Self {
        0.5 * (self + other)
    }
}

impl Average for i32 {
    fn average_with(&self, other: &Self) -> Self {
        ((i64::from(*self) + i64::from(*other)) / 2) as i32
    }
}

impl Average for i64 {
    fn average_with(&self, other: &Self) -> Self {
        ((i128::from(*self) + i128::from(*other)) / 2) as i64
    }
}
