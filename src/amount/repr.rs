use crate::types::capacity::{Capacity, INLINE_DIMENSIONS, ZERO};
use smallvec::SmallVec;

use super::error::{Shape, assert_same_shape};

pub(crate) type Values = SmallVec<[Capacity; INLINE_DIMENSIONS]>;

/// Operations every amount representation provides.
/// `other` is always the same representation; dimensioned amounts
/// panic when `other` has a different length.
pub trait AmountRepr: Clone {
    fn is_less(&self, other: &Self) -> bool;

    fn is_equal(&self, other: &Self) -> bool;

    fn add(&mut self, other: &Self);

    fn sub(&mut self, other: &Self);

    fn update_to_maxed(&mut self, other: &Self);

    fn set_zero(&mut self);
}

// MARK: Empty

/// No tracked dimensions. Every comparison is trivially equal and
/// every mutation is a no-op.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptyAmount;

impl AmountRepr for EmptyAmount {
    fn is_less(&self, _other: &Self) -> bool {
        false
    }

    fn is_equal(&self, _other: &Self) -> bool {
        true
    }

    fn add(&mut self, _other: &Self) {}

    fn sub(&mut self, _other: &Self) {}

    fn update_to_maxed(&mut self, _other: &Self) {}

    fn set_zero(&mut self) {}
}

// MARK: Dims

/// One value per dimension. The length is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimsAmount {
    elems: Values,
}

impl DimsAmount {
    pub fn zeroed(size: usize) -> Self {
        Self {
            elems: SmallVec::from_elem(ZERO, size),
        }
    }

    pub(crate) fn from_values(elems: Values) -> Self {
        Self { elems }
    }

    pub fn values(&self) -> &[Capacity] {
        &self.elems
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[track_caller]
    #[inline]
    fn assert_same_len(&self, other: &Self) {
        assert_same_shape(Shape::Dims(self.len()), Shape::Dims(other.len()));
    }
}

impl AmountRepr for DimsAmount {
    /// Lexicographic: the first differing dimension decides, the last
    /// dimension breaks ties.
    #[track_caller]
    fn is_less(&self, other: &Self) -> bool {
        self.assert_same_len(other);

        let Some(last_rank) = self.len().checked_sub(1) else {
            return false;
        };

        for i in 0..last_rank {
            if self.elems[i] < other.elems[i] {
                return true;
            }
            if self.elems[i] > other.elems[i] {
                return false;
            }
        }
        self.elems[last_rank] < other.elems[last_rank]
    }

    #[track_caller]
    fn is_equal(&self, other: &Self) -> bool {
        self.assert_same_len(other);
        self.elems == other.elems
    }

    #[track_caller]
    fn add(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (lhs, rhs) in self.elems.iter_mut().zip(other.elems.iter()) {
            *lhs += *rhs;
        }
    }

    #[track_caller]
    fn sub(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (lhs, rhs) in self.elems.iter_mut().zip(other.elems.iter()) {
            *lhs -= *rhs;
        }
    }

    #[track_caller]
    fn update_to_maxed(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (lhs, rhs) in self.elems.iter_mut().zip(other.elems.iter()) {
            *lhs = (*lhs).max(*rhs);
        }
    }

    fn set_zero(&mut self) {
        self.elems.fill(ZERO);
    }
}

// MARK: Repr

/// The representation an amount owns. Chosen at construction and never re-tagged.
#[derive(Clone, Debug)]
pub enum Repr {
    Empty(EmptyAmount),
    Dims(DimsAmount),
}

impl Repr {
    pub fn shape(&self) -> Shape {
        match self {
            Repr::Empty(_) => Shape::Empty,
            Repr::Dims(dims) => Shape::Dims(dims.len()),
        }
    }

    pub fn values(&self) -> &[Capacity] {
        match self {
            Repr::Empty(_) => &[],
            Repr::Dims(dims) => dims.values(),
        }
    }

    /// Pairs two representations of the same shape, panicking otherwise.
    #[track_caller]
    fn pair<'a>(&'a self, other: &'a Self) -> Pair<'a> {
        assert_same_shape(self.shape(), other.shape());
        match (self, other) {
            (Repr::Empty(lhs), Repr::Empty(rhs)) => Pair::Empty(lhs, rhs),
            (Repr::Dims(lhs), Repr::Dims(rhs)) => Pair::Dims(lhs, rhs),
            _ => unreachable!("shapes already checked"),
        }
    }

    #[track_caller]
    fn pair_mut<'a>(&'a mut self, other: &'a Self) -> PairMut<'a> {
        assert_same_shape(self.shape(), other.shape());
        match (self, other) {
            (Repr::Empty(lhs), Repr::Empty(rhs)) => PairMut::Empty(lhs, rhs),
            (Repr::Dims(lhs), Repr::Dims(rhs)) => PairMut::Dims(lhs, rhs),
            _ => unreachable!("shapes already checked"),
        }
    }

    #[track_caller]
    pub fn is_less(&self, other: &Self) -> bool {
        match self.pair(other) {
            Pair::Empty(lhs, rhs) => lhs.is_less(rhs),
            Pair::Dims(lhs, rhs) => lhs.is_less(rhs),
        }
    }

    #[track_caller]
    pub fn is_equal(&self, other: &Self) -> bool {
        match self.pair(other) {
            Pair::Empty(lhs, rhs) => lhs.is_equal(rhs),
            Pair::Dims(lhs, rhs) => lhs.is_equal(rhs),
        }
    }

    #[track_caller]
    pub fn add(&mut self, other: &Self) {
        match self.pair_mut(other) {
            PairMut::Empty(lhs, rhs) => lhs.add(rhs),
            PairMut::Dims(lhs, rhs) => lhs.add(rhs),
        }
    }

    #[track_caller]
    pub fn sub(&mut self, other: &Self) {
        match self.pair_mut(other) {
            PairMut::Empty(lhs, rhs) => lhs.sub(rhs),
            PairMut::Dims(lhs, rhs) => lhs.sub(rhs),
        }
    }

    #[track_caller]
    pub fn update_to_maxed(&mut self, other: &Self) {
        match self.pair_mut(other) {
            PairMut::Empty(lhs, rhs) => lhs.update_to_maxed(rhs),
            PairMut::Dims(lhs, rhs) => lhs.update_to_maxed(rhs),
        }
    }

    pub fn set_zero(&mut self) {
        match self {
            Repr::Empty(empty) => empty.set_zero(),
            Repr::Dims(dims) => dims.set_zero(),
        }
    }
}

enum Pair<'a> {
    Empty(&'a EmptyAmount, &'a EmptyAmount),
    Dims(&'a DimsAmount, &'a DimsAmount),
}

enum PairMut<'a> {
    Empty(&'a mut EmptyAmount, &'a EmptyAmount),
    Dims(&'a mut DimsAmount, &'a DimsAmount),
}
