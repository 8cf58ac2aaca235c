use super::amount::Amount;

use std::ops::{Add, AddAssign, Sub, SubAssign};

impl AddAssign<&Amount> for Amount {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Amount) {
        self.add_in_place(rhs);
    }
}

impl AddAssign for Amount {
    #[track_caller]
    fn add_assign(&mut self, rhs: Amount) {
        self.add_in_place(&rhs);
    }
}

impl SubAssign<&Amount> for Amount {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Amount) {
        self.sub_in_place(rhs);
    }
}

impl SubAssign for Amount {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Amount) {
        self.sub_in_place(&rhs);
    }
}

// Free forms copy the left operand and leave both operands untouched.

impl Add<&Amount> for &Amount {
    type Output = Amount;

    #[track_caller]
    fn add(self, rhs: &Amount) -> Amount {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl Sub<&Amount> for &Amount {
    type Output = Amount;

    #[track_caller]
    fn sub(self, rhs: &Amount) -> Amount {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

// Owned left operands are reused instead of copied.

impl Add<&Amount> for Amount {
    type Output = Amount;

    #[track_caller]
    fn add(mut self, rhs: &Amount) -> Amount {
        self += rhs;
        self
    }
}

impl Add for Amount {
    type Output = Amount;

    #[track_caller]
    fn add(mut self, rhs: Amount) -> Amount {
        self += &rhs;
        self
    }
}

impl Sub<&Amount> for Amount {
    type Output = Amount;

    #[track_caller]
    fn sub(mut self, rhs: &Amount) -> Amount {
        self -= rhs;
        self
    }
}

impl Sub for Amount {
    type Output = Amount;

    #[track_caller]
    fn sub(mut self, rhs: Amount) -> Amount {
        self -= &rhs;
        self
    }
}
