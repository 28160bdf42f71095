//! Arithmetic sign of a big number.

use std::ops::{Mul, Neg};

/// Two-valued sign, acting as `+1` or `-1` under multiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a native integer; zero maps to `Positive`.
    pub fn of(value: i64) -> Sign {
        if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// The opposite sign.
    pub fn negate(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product: positive iff both signs agree.
    pub fn multiply(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// `1` or `-1`.
    pub fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self.negate()
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        self.multiply(rhs)
    }
}
