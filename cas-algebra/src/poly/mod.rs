//! Reading expressions as generalized polynomial expressions (GPEs).
//!
//! A GPE in the variables `x₁, …, xₙ` is a sum of monomials `c * x₁ ^ k₁ * … * xₙ ^ kₙ`, where
//! the coefficient `c` is free of every variable. The variables may be any expression, not just
//! symbols, so `sin(x)` can act as a variable.

pub mod division;

pub use division::{polynomial_division, polynomial_gcd};

use crate::expr::Expr;
use rug::Integer;
use std::slice;

/// Returns the total degree of a monomial in the given variables.
///
/// Anything free of all variables has degree 0, a variable has degree 1, a variable raised to
/// an integer `n > 1` has degree `n`, and a product sums the degrees of its factors. Anything
/// else has degree 0.
pub fn degree_monomial(u: &Expr, vars: &[Expr]) -> Integer {
    if vars.iter().all(|var| u.free_of(var)) {
        return Integer::new();
    }

    if vars.contains(u) {
        return Integer::from(1);
    }

    match u {
        Expr::Power(_, exp) => match exp.as_integer() {
            Some(n) if *n > 1 => n.clone(),
            _ => Integer::new(),
        },
        Expr::Product(factors) => factors.iter().map(|factor| degree_monomial(factor, vars)).sum(),
        _ => Integer::new(),
    }
}

/// Returns the total degree of a polynomial in the given variables: the largest degree of its
/// terms.
pub fn degree(u: &Expr, vars: &[Expr]) -> Integer {
    match u {
        Expr::Sum(terms) => terms
            .iter()
            .map(|term| degree_monomial(term, vars))
            .max()
            .unwrap_or_default(),
        _ => degree_monomial(u, vars),
    }
}

/// Splits a monomial into its coefficient and its degree in `x`.
///
/// Returns [`None`] if `u` is not a monomial in `x`, for example if `x` appears inside a
/// function call or with a non-integer exponent.
pub fn coefficient_monomial(u: &Expr, x: &Expr) -> Option<(Expr, Integer)> {
    if u == x {
        return Some((Expr::from(1), Integer::from(1)));
    }

    match u {
        Expr::Power(base, exp) if **base == *x => {
            if let Some(n) = exp.as_integer().filter(|n| **n > 1) {
                return Some((Expr::from(1), n.clone()));
            }
        },
        Expr::Product(factors) => {
            let mut degree = Integer::new();
            let mut coefficient = u.clone();
            for factor in factors {
                let (_, m) = coefficient_monomial(factor, x)?;
                if m != 0 {
                    coefficient = u.clone() / x.clone().pow(m.clone());
                    degree = m;
                }
            }
            return Some((coefficient, degree));
        },
        _ => {},
    }

    u.free_of(x).then(|| (u.clone(), Integer::new()))
}

/// Returns the coefficient of `x ^ j` in the polynomial `u`, or [`None`] if `u` is not a
/// polynomial in `x`.
pub fn coefficient(u: &Expr, x: &Expr, j: impl Into<Integer>) -> Option<Expr> {
    let j = j.into();
    match u {
        Expr::Sum(terms) => {
            let mut matching = Vec::new();
            for term in terms {
                let (c, m) = coefficient_monomial(term, x)?;
                if m == j {
                    matching.push(c);
                }
            }
            Some(Expr::sum(matching))
        },
        _ => {
            let (c, m) = coefficient_monomial(u, x)?;
            Some(if m == j { c } else { Expr::from(0) })
        },
    }
}

/// Returns the coefficient of the highest power of `x` in the polynomial `u`.
pub fn leading_coefficient(u: &Expr, x: &Expr) -> Option<Expr> {
    coefficient(u, x, degree(u, slice::from_ref(x)))
}
