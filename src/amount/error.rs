use std::fmt;
use thiserror::Error;

/// Shape of an amount: either no tracked dimensions or a fixed count of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Empty,
    Dims(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Empty => write!(f, "empty"),
            Shape::Dims(n) => write!(f, "{n} dimension(s)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount shape mismatch: {lhs} vs {rhs}")]
    ShapeMismatch { lhs: Shape, rhs: Shape },
}

/// Returns an error unless both shapes can be combined.
pub(crate) fn check_shapes(lhs: Shape, rhs: Shape) -> Result<(), AmountError> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(AmountError::ShapeMismatch { lhs, rhs })
    }
}

/// Panics on a shape mismatch. Mixing shapes is a caller bug, not a runtime condition.
#[track_caller]
#[inline]
pub(crate) fn assert_same_shape(lhs: Shape, rhs: Shape) {
    if let Err(err) = check_shapes(lhs, rhs) {
        panic!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_shapes() {
        assert!(check_shapes(Shape::Empty, Shape::Empty).is_ok());
        assert!(check_shapes(Shape::Dims(3), Shape::Dims(3)).is_ok());
    }

    #[test]
    fn test_mismatch_message() {
        let err = check_shapes(Shape::Dims(2), Shape::Dims(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "amount shape mismatch: 2 dimension(s) vs 3 dimension(s)"
        );

        let err = check_shapes(Shape::Empty, Shape::Dims(1)).unwrap_err();
        assert_eq!(
            err,
            AmountError::ShapeMismatch {
                lhs: Shape::Empty,
                rhs: Shape::Dims(1)
            }
        );
    }

    #[test]
    #[should_panic(expected = "amount shape mismatch")]
    fn test_assert_same_shape_panics() {
        assert_same_shape(Shape::Dims(0), Shape::Empty);
    }
}
