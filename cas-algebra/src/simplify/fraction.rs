//! Reading an expression as a fraction.

use crate::expr::Expr;

impl Expr {
    /// Returns the numerator of this expression when viewed as a fraction.
    ///
    /// - A fraction returns its numerator.
    /// - A power with a negative exact exponent returns `1`.
    /// - A product returns the product of the numerators of its factors.
    /// - Anything else is its own numerator.
    pub fn numerator(&self) -> Expr {
        match self {
            Self::Fraction(r) => Self::Integer(r.numer().clone()),
            Self::Power(_, exp) if exp.is_rational() && exp.is_negative() => Self::from(1),
            Self::Product(factors) => Self::product(factors.iter().map(Self::numerator)),
            _ => self.clone(),
        }
    }

    /// Returns the denominator of this expression when viewed as a fraction.
    ///
    /// - A fraction returns its denominator.
    /// - A power with a negative exact exponent returns its reciprocal.
    /// - A product returns the product of the denominators of its factors.
    /// - Anything else has denominator `1`.
    pub fn denominator(&self) -> Expr {
        match self {
            Self::Fraction(r) => Self::Integer(r.denom().clone()),
            Self::Power(_, exp) if exp.is_rational() && exp.is_negative() => {
                self.clone().recip()
            },
            Self::Product(factors) => Self::product(factors.iter().map(Self::denominator)),
            _ => Self::from(1),
        }
    }
}
