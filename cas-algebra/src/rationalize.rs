//! Rewriting expressions as a single fraction.

use crate::expr::Expr;
use tracing::trace;

/// Adds `u + v` over a common denominator: `u = m / r` and `v = n / s` combine to
/// `(m s + n r) / (r s)`. The numerators are rationalized recursively.
pub fn rationalize_sum(u: &Expr, v: &Expr) -> Expr {
    let (m, r) = (u.numerator(), u.denominator());
    let (n, s) = (v.numerator(), v.denominator());

    if r.is_one() && s.is_one() {
        return u.clone() + v.clone();
    }

    let numerator = rationalize_sum(&(m * s.clone()), &(n * r.clone()));
    numerator / (r * s)
}

impl Expr {
    /// Rewrites this expression as a single fraction, without expanding numerators or
    /// denominators.
    ///
    /// Sums are combined over a common denominator; products, powers, and both sides of
    /// equations are rationalized recursively. Anything else is returned unchanged.
    pub fn rationalize(&self) -> Expr {
        match self {
            Self::Sum(terms) => {
                let mut terms = terms.iter().rev().map(Self::rationalize);
                let Some(last) = terms.next() else {
                    return Self::from(0);
                };
                terms.fold(last, |acc, term| rationalize_sum(&term, &acc))
            },
            Self::Product(factors) => Self::product(factors.iter().map(Self::rationalize)),
            Self::Power(base, exp) => base.rationalize().pow((**exp).clone()),
            Self::Equation(eq) => eq.map(Self::rationalize),
            _ => self.clone(),
        }
    }

    /// Rewrites this expression as a single fraction with expanded numerator and denominator,
    /// repeating until a fixed point is reached.
    ///
    /// Returns `false` if the expanded denominator becomes `0`.
    pub fn rational_expand(&self) -> Expr {
        let mut current = self.clone();
        loop {
            let numerator = current.numerator().algebraic_expand();
            let denominator = current.denominator().algebraic_expand();
            if denominator.is_zero() {
                return Self::Bool(false);
            }

            let next = (numerator / denominator).rationalize();
            trace!(%next, "rational expansion step");
            if next == current {
                return current;
            }
            current = next;
        }
    }
}
