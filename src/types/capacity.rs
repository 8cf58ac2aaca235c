/// Scalar quantity tracked per dimension of an [`Amount`](crate::amount::Amount).
///
/// Fixed-width and signed so that margins (`capacity - load`) can go below zero.
pub type Capacity = i64;

/// Dimensions stored inline before a dimensioned amount spills to the heap.
/// Most problems track one to three dimensions (weight, volume, count).
pub const INLINE_DIMENSIONS: usize = 4;

/// Zero value of the scalar.
pub const ZERO: Capacity = 0;
