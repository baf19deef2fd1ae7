//! Exact numeric constants.

use std::fmt;

use num_rational::{Ratio, Rational64};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use serde::{Deserialize, Serialize};

use super::expression::BinaryOperator;
use crate::error::ArithmeticError;

/// A literal constant.
///
/// Every number is an exact rational kept in lowest terms, so integers are simply
/// rationals with a unit denominator and structural equality is value equality.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(Rational64);

impl Number {
    pub fn integer(value: i64) -> Self {
        Self(Rational64::from_integer(value))
    }

    /// Builds `numerator / denominator` in lowest terms.
    ///
    /// Fails on a zero denominator, or when the reduced value has a part outside
    /// `i64` (e.g. `1 / i64::MIN`, whose positive denominator is `2^63`).
    pub fn ratio(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero {
                dividend: Self::integer(numerator),
            });
        }

        // i64 inputs cannot overflow the i128 reduction.
        let reduced = Ratio::<i128>::new(i128::from(numerator), i128::from(denominator));
        match (
            i64::try_from(*reduced.numer()),
            i64::try_from(*reduced.denom()),
        ) {
            (Ok(numer), Ok(denom)) => Ok(Self(Rational64::new_raw(numer, denom))),
            _ => Err(ArithmeticError::Overflow {
                op: BinaryOperator::Div.symbol(),
                lhs: Self::integer(numerator),
                rhs: Self::integer(denominator),
            }),
        }
    }

    pub fn value(&self) -> Rational64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns the value as an `i64` if it has no fractional part.
    pub fn to_integer(&self) -> Option<i64> {
        self.is_integer().then(|| *self.0.numer())
    }

    /// Folds `self op rhs`.
    pub fn apply_binary(self, op: BinaryOperator, rhs: Self) -> Result<Self, ArithmeticError> {
        let result = match op {
            BinaryOperator::Add => self.0.checked_add(&rhs.0),
            BinaryOperator::Sub => self.0.checked_sub(&rhs.0),
            BinaryOperator::Mul => self.0.checked_mul(&rhs.0),
            BinaryOperator::Div => {
                if rhs.is_zero() {
                    return Err(ArithmeticError::DivisionByZero { dividend: self });
                }
                self.0.checked_div(&rhs.0)
            }
        };

        result.map(Self).ok_or(ArithmeticError::Overflow {
            op: op.symbol(),
            lhs: self,
            rhs,
        })
    }

    pub fn negate(self) -> Result<Self, ArithmeticError> {
        self.0
            .numer()
            .checked_neg()
            .map(|numer| Self(Rational64::new_raw(numer, *self.0.denom())))
            .ok_or(ArithmeticError::NegationOverflow { operand: self })
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
