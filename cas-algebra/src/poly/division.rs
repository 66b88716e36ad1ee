//! Division and greatest common divisors of univariate polynomials.

use crate::{error::Error, expr::Expr};
use std::slice;
use super::{degree, leading_coefficient};
use tracing::trace;

/// Divides the polynomial `u` by the polynomial `v` in the variable `x`, returning the quotient
/// and remainder.
///
/// Both operands are algebraically expanded first, and the coefficients may be any expressions
/// free of `x`. Returns [`Error::ZeroDivisor`] if `v` is `0`, and [`Error::NotPolynomial`] if
/// either operand cannot be read as a polynomial in `x`.
pub fn polynomial_division(u: &Expr, v: &Expr, x: &Expr) -> Result<(Expr, Expr), Error> {
    let u = &u.algebraic_expand();
    let v = &v.algebraic_expand();
    if v.is_zero() {
        return Err(Error::ZeroDivisor);
    }

    let vars = slice::from_ref(x);
    let n = degree(v, vars);
    let lcv = leading_coefficient(v, x).ok_or_else(|| Error::not_polynomial(v, x))?;

    let mut quotient = Expr::from(0);
    let mut remainder = u.clone();
    let mut m = degree(&remainder, vars);

    while m >= n && !remainder.is_zero() {
        let lcr = leading_coefficient(&remainder, x)
            .ok_or_else(|| Error::not_polynomial(u, x))?;
        let s = lcr.clone() / lcv.clone();
        let shift = x.clone().pow(m.clone() - n.clone());

        quotient = quotient + s.clone() * shift.clone();
        remainder = ((remainder - lcr * x.clone().pow(m.clone()))
            - (v.clone() - lcv.clone() * x.clone().pow(n.clone())) * s * shift)
            .algebraic_expand();

        let next = degree(&remainder, vars);
        trace!(%quotient, %remainder, degree = %next, "polynomial division step");

        // the leading term must cancel, or the loop would never end
        if next >= m && !remainder.is_zero() {
            return Err(Error::not_polynomial(u, x));
        }
        m = next;
    }

    Ok((quotient, remainder))
}

/// Computes the monic greatest common divisor of two polynomials in `x` with the Euclidean
/// algorithm. The gcd of `0` and `0` is `0`.
pub fn polynomial_gcd(u: &Expr, v: &Expr, x: &Expr) -> Result<Expr, Error> {
    let mut a = u.algebraic_expand();
    let mut b = v.algebraic_expand();
    if a.is_zero() && b.is_zero() {
        return Ok(Expr::from(0));
    }

    while !b.is_zero() {
        let (_, remainder) = polynomial_division(&a, &b, x)?;
        a = std::mem::replace(&mut b, remainder);
    }

    let lc = leading_coefficient(&a, x).ok_or_else(|| Error::not_polynomial(&a, x))?;
    Ok((a / lc).algebraic_expand())
}
