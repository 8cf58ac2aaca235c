use super::error::{AmountError, Shape, assert_same_shape, check_shapes};
use super::repr::{DimsAmount, EmptyAmount, Repr, Values};
use crate::types::capacity::Capacity;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

/// A quantity tracked along a problem-defined number of dimensions.
///
/// An amount either tracks no dimensions at all (the default) or holds one
/// [`Capacity`] per dimension. The representation is picked at construction
/// and never changes. Cloning deep-copies the values; two amounts never
/// share storage.
///
/// Binary operations require both operands to have the same [`Shape`].
/// Operators panic on a mismatch; use the `checked_*` methods to get an
/// [`AmountError`] instead.
#[derive(Clone, Debug)]
pub struct Amount {
    repr: Repr,
}

impl Amount {
    /// An amount with no tracked dimensions.
    pub const fn new() -> Self {
        Self {
            repr: Repr::Empty(EmptyAmount),
        }
    }

    /// An amount with `size` dimensions, all zero.
    pub fn with_dimensions(size: usize) -> Self {
        Self {
            repr: Repr::Dims(DimsAmount::zeroed(size)),
        }
    }

    /// An amount holding exactly `values`, one per dimension.
    pub fn from_values(values: impl IntoIterator<Item = Capacity>) -> Self {
        Self::from_storage(values.into_iter().collect())
    }

    fn from_storage(values: Values) -> Self {
        Self {
            repr: Repr::Dims(DimsAmount::from_values(values)),
        }
    }

    /// Sums `items` onto a copy of `zero`.
    #[track_caller]
    pub fn total<'a, I>(zero: &Amount, items: I) -> Amount
    where
        I: IntoIterator<Item = &'a Amount>,
    {
        let mut sum = zero.clone();
        for item in items {
            sum += item;
        }
        sum
    }

    pub fn shape(&self) -> Shape {
        self.repr.shape()
    }

    /// Number of tracked dimensions, 0 for a dimensionless amount.
    pub fn dimensions(&self) -> usize {
        self.values().len()
    }

    pub fn is_dimensionless(&self) -> bool {
        matches!(self.repr, Repr::Empty(_))
    }

    pub fn values(&self) -> &[Capacity] {
        self.repr.values()
    }

    pub fn get(&self, dimension: usize) -> Option<Capacity> {
        self.values().get(dimension).copied()
    }

    pub fn same_shape(&self, other: &Amount) -> bool {
        self.shape() == other.shape()
    }

    //

    /// Strict lexicographic order: the first differing dimension decides.
    /// Never true between two dimensionless amounts.
    #[track_caller]
    pub fn is_less(&self, other: &Amount) -> bool {
        self.repr.is_less(&other.repr)
    }

    #[track_caller]
    pub fn is_equal(&self, other: &Amount) -> bool {
        self.repr.is_equal(&other.repr)
    }

    /// Alias of [`is_less`](Self::is_less), read as "self strictly precedes other".
    #[track_caller]
    pub fn precedes(&self, other: &Amount) -> bool {
        self.is_less(other)
    }

    /// True when every dimension of `self` is at most the matching dimension
    /// of `other`. Unlike `<=`, this is not a lexicographic comparison.
    #[track_caller]
    pub fn dominated_by(&self, other: &Amount) -> bool {
        assert_same_shape(self.shape(), other.shape());
        self.values()
            .iter()
            .zip(other.values())
            .all(|(lhs, rhs)| lhs <= rhs)
    }

    #[track_caller]
    pub fn add_in_place(&mut self, other: &Amount) -> &mut Self {
        self.repr.add(&other.repr);
        self
    }

    #[track_caller]
    pub fn sub_in_place(&mut self, other: &Amount) -> &mut Self {
        self.repr.sub(&other.repr);
        self
    }

    /// Raises every dimension to the maximum of itself and `other`.
    #[track_caller]
    pub fn update_to_maxed(&mut self, other: &Amount) {
        self.repr.update_to_maxed(&other.repr);
    }

    pub fn set_zero(&mut self) {
        self.repr.set_zero();
    }

    /// A zero amount with the same shape as `self`.
    pub fn zeroed(&self) -> Amount {
        let mut zero = self.clone();
        zero.set_zero();
        zero
    }

    //

    pub fn checked_add(&self, other: &Amount) -> Result<Amount, AmountError> {
        check_shapes(self.shape(), other.shape())?;
        Ok(self + other)
    }

    pub fn checked_sub(&self, other: &Amount) -> Result<Amount, AmountError> {
        check_shapes(self.shape(), other.shape())?;
        Ok(self - other)
    }

    pub fn checked_update_to_maxed(&mut self, other: &Amount) -> Result<(), AmountError> {
        check_shapes(self.shape(), other.shape())?;
        self.update_to_maxed(other);
        Ok(())
    }

    pub fn checked_cmp(&self, other: &Amount) -> Result<Ordering, AmountError> {
        check_shapes(self.shape(), other.shape())?;
        Ok(self.lex_cmp(other))
    }

    #[track_caller]
    fn lex_cmp(&self, other: &Amount) -> Ordering {
        if self.is_less(other) {
            Ordering::Less
        } else if self.is_equal(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Amount {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Amount {}

/// `<` is [`Amount::is_less`] and `<=` is `is_less || is_equal`.
impl PartialOrd for Amount {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.lex_cmp(other))
    }
}

impl Index<usize> for Amount {
    type Output = Capacity;

    fn index(&self, dimension: usize) -> &Self::Output {
        &self.values()[dimension]
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Capacity>> for Amount {
    fn from(values: Vec<Capacity>) -> Self {
        Self::from_storage(Values::from_vec(values))
    }
}

impl From<&[Capacity]> for Amount {
    fn from(values: &[Capacity]) -> Self {
        Self::from_storage(Values::from_slice(values))
    }
}

impl<const N: usize> From<[Capacity; N]> for Amount {
    fn from(values: [Capacity; N]) -> Self {
        Self::from_storage(Values::from_slice(&values))
    }
}

impl FromIterator<Capacity> for Amount {
    fn from_iter<T: IntoIterator<Item = Capacity>>(iter: T) -> Self {
        Self::from_values(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dimensionless() {
        let a = Amount::default();
        assert!(a.is_dimensionless());
        assert_eq!(a.shape(), Shape::Empty);
        assert_eq!(a.dimensions(), 0);
        assert_eq!(a.to_string(), "[]");
    }

    #[test]
    fn test_with_dimensions_is_zero() {
        let a = Amount::with_dimensions(3);
        assert!(!a.is_dimensionless());
        assert_eq!(a.shape(), Shape::Dims(3));
        assert_eq!(a.values(), &[0, 0, 0]);
    }

    #[test]
    fn test_zero_dimensions_is_not_dimensionless() {
        let a = Amount::with_dimensions(0);
        assert!(!a.is_dimensionless());
        assert_eq!(a.shape(), Shape::Dims(0));
        assert!(!a.same_shape(&Amount::new()));
    }

    #[test]
    fn test_constructors_agree() {
        let from_vec = Amount::from(vec![2, 5, 1]);
        let from_slice = Amount::from(&[2, 5, 1][..]);
        let from_array = Amount::from([2, 5, 1]);
        let collected: Amount = [2, 5, 1].into_iter().collect();
        let from_iter = Amount::from_values((1..=3).map(|i| [2, 5, 1][i - 1]));

        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec, from_array);
        assert_eq!(from_vec, collected);
        assert_eq!(from_vec, from_iter);
        assert_eq!(Amount::from_values(std::iter::empty()).shape(), Shape::Dims(0));
        assert_eq!(from_vec[1], 5);
        assert_eq!(from_vec.get(2), Some(1));
        assert_eq!(from_vec.get(3), None);
        assert_eq!(from_vec.to_string(), "[2, 5, 1]");
    }

    #[test]
    fn test_clone_does_not_alias() {
        let a = Amount::from([1, 2]);
        let mut b = a.clone();
        b += &Amount::from([10, 10]);

        assert_eq!(a.values(), &[1, 2]);
        assert_eq!(b.values(), &[11, 12]);
    }

    #[test]
    fn test_assignment_replaces_representation() {
        let mut a = Amount::new();
        let b = Amount::from([4, 4]);
        a.clone_from(&b);
        assert_eq!(a.shape(), Shape::Dims(2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_example_three_dimensions() {
        let a = Amount::from([2, 5, 1]);
        let b = Amount::from([2, 3, 9]);

        assert!(!a.is_less(&b));
        assert!(!a.is_equal(&b));
        assert_eq!((&a + &b).values(), &[4, 8, 10]);

        let mut maxed = a.clone();
        maxed.update_to_maxed(&b);
        assert_eq!(maxed.values(), &[2, 5, 9]);
    }

    #[test]
    fn test_example_equal_amounts() {
        let a = Amount::from([1, 2]);
        let b = Amount::from([1, 2]);

        assert!(a.is_equal(&b));
        assert!(!a.is_less(&b));
        assert!(a <= b);
        assert!(!(a < b));
        assert!(!a.precedes(&b));
    }

    #[test]
    fn test_ordering_operators() {
        let a = Amount::from([1, 9]);
        let b = Amount::from([2, 0]);

        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(!(b <= a));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.checked_cmp(&a), Ok(Ordering::Greater));
    }

    #[test]
    fn test_lexicographic_is_not_dominance() {
        let a = Amount::from([1, 9]);
        let b = Amount::from([2, 0]);

        assert!(a <= b);
        assert!(!a.dominated_by(&b));
        assert!(Amount::from([1, 0]).dominated_by(&b));
    }

    #[test]
    fn test_chained_in_place() {
        let mut a = Amount::from([5, 5]);
        a.add_in_place(&Amount::from([1, 2]))
            .sub_in_place(&Amount::from([3, 3]))
            .add_in_place(&Amount::from([0, 1]));
        assert_eq!(a.values(), &[3, 5]);
    }

    #[test]
    fn test_zeroed_keeps_shape() {
        let a = Amount::from([7, -3, 2]);
        let zero = a.zeroed();

        assert_eq!(zero.values(), &[0, 0, 0]);
        assert_eq!(a.values(), &[7, -3, 2]);
        assert_eq!(&zero + &a, a);
        assert!(Amount::new().zeroed().is_dimensionless());
    }

    #[test]
    fn test_total() {
        let zero = Amount::with_dimensions(2);
        let items = [Amount::from([1, 2]), Amount::from([3, 4]), Amount::from([5, 6])];

        assert_eq!(Amount::total(&zero, &items).values(), &[9, 12]);
        assert_eq!(Amount::total(&zero, std::iter::empty()), zero);
    }

    #[test]
    fn test_empty_closure() {
        let mut a = Amount::new();
        let b = Amount::new();

        assert_eq!(a, b);
        assert!(!a.is_less(&b));
        assert!(!b.is_less(&a));
        assert!(a <= b);

        a += &b;
        a -= &b;
        a.update_to_maxed(&b);
        a.set_zero();
        assert_eq!(a, Amount::new());
    }

    #[test]
    fn test_checked_ops_report_mismatch() {
        let two = Amount::from([1, 2]);
        let three = Amount::from([1, 2, 3]);

        let expected = AmountError::ShapeMismatch {
            lhs: Shape::Dims(2),
            rhs: Shape::Dims(3),
        };
        assert_eq!(two.checked_add(&three), Err(expected.clone()));
        assert_eq!(two.checked_sub(&three), Err(expected.clone()));
        assert_eq!(two.checked_cmp(&three), Err(expected.clone()));

        let mut maxed = two.clone();
        assert_eq!(maxed.checked_update_to_maxed(&three), Err(expected));
        assert_eq!(maxed, two);

        assert_eq!(
            Amount::new().checked_add(&two),
            Err(AmountError::ShapeMismatch {
                lhs: Shape::Empty,
                rhs: Shape::Dims(2),
            })
        );
    }

    #[test]
    #[should_panic(expected = "amount shape mismatch")]
    fn test_mismatched_add_panics() {
        let mut a = Amount::from([1, 2]);
        a += &Amount::from([1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "amount shape mismatch")]
    fn test_mixed_variant_compare_panics() {
        let _ = Amount::new() <= Amount::with_dimensions(1);
    }

    #[test]
    #[should_panic(expected = "amount shape mismatch")]
    fn test_mismatched_dominance_panics() {
        Amount::from([1]).dominated_by(&Amount::from([1, 2]));
    }
}
