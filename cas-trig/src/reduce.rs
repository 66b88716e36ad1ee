//! Reduction procedures for the trigonometric functions.

use cas_algebra::{primitive::rational, Expr};
use crate::{
    cos,
    sin,
    table::{modulo, turn, COS_TABLE, SIN_TABLE},
    PI,
};
use rug::Rational;

/// Returns `n` if the expression is exactly `n * Pi` for an exact number `n`.
fn pi_coefficient(u: &Expr) -> Option<Rational> {
    match u {
        Expr::Product(factors) => match factors.as_slice() {
            [n, pi] if *pi == *PI => n.as_rational(),
            _ => None,
        },
        _ => None,
    }
}

fn times_pi(n: Rational) -> Expr {
    Expr::from(n) * PI.clone()
}

/// Finds the first term `n * Pi` of a sum whose coefficient satisfies the predicate, and returns
/// the coefficient along with the sum of the other terms.
fn split_pi_term(terms: &[Expr], predicate: impl Fn(&Rational) -> bool) -> Option<(Rational, Expr)> {
    terms.iter().enumerate().find_map(|(i, term)| {
        let n = pi_coefficient(term).filter(|n| predicate(n))?;
        let rest = terms
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| other.clone());
        Some((n, Expr::sum(rest)))
    })
}

/// Returns true if the expression is a negative number, or a product with a negative numeric
/// coefficient.
fn has_negative_sign(u: &Expr) -> bool {
    match u {
        Expr::Product(factors) => factors.first().is_some_and(Expr::is_negative),
        _ => u.is_negative(),
    }
}

/// `sin(u)`
pub(crate) fn reduce_sin(args: &[Expr]) -> Option<Expr> {
    let [u] = args else {
        return None;
    };

    if u.is_zero() || *u == *PI {
        return Some(Expr::from(0));
    }

    if let Expr::Float(x) = u {
        return Some(Expr::Float(x.sin()));
    }

    // odd
    if has_negative_sign(u) {
        return Some(-sin(-u));
    }

    if let Some(n) = pi_coefficient(u) {
        if let Some(value) = SIN_TABLE.get(&turn(&n)) {
            return Some(value.clone());
        }

        // fold the angle into [0, Pi/2]
        return if n > 2 {
            Some(sin(times_pi(modulo(&n, 2))))
        } else if n > 1 {
            Some(-sin(times_pi(n - 1)))
        } else if n > rational(1, 2) {
            Some(sin(times_pi(Rational::from(1) - n)))
        } else {
            None
        };
    }

    let Expr::Sum(terms) = u else {
        return None;
    };

    if terms.contains(&*PI) {
        return Some(-sin(u.clone() - PI.clone()));
    }

    if let Some((n, rest)) = split_pi_term(terms, |n| n.clone().abs() >= 2) {
        return Some(sin(rest + times_pi(modulo(&n, 2))));
    }

    let (n, rest) = split_pi_term(terms, |n| *n.denom() == 2)?;
    match modulo(&Rational::from(n.numer()), 4) {
        k if k == 1 => Some(cos(rest)),
        k if k == 3 => Some(-cos(rest)),
        _ => None,
    }
}

/// `cos(u)`
pub(crate) fn reduce_cos(args: &[Expr]) -> Option<Expr> {
    let [u] = args else {
        return None;
    };

    if u.is_zero() {
        return Some(Expr::from(1));
    }

    if *u == *PI {
        return Some(Expr::from(-1));
    }

    if let Expr::Float(x) = u {
        return Some(Expr::Float(x.cos()));
    }

    // even
    if has_negative_sign(u) {
        return Some(cos(-u));
    }

    if let Some(n) = pi_coefficient(u) {
        if let Some(value) = COS_TABLE.get(&turn(&n)) {
            return Some(value.clone());
        }

        return if n > 2 {
            Some(cos(times_pi(modulo(&n, 2))))
        } else if n > 1 {
            Some(-cos(times_pi(n - 1)))
        } else if n > rational(1, 2) {
            Some(-cos(times_pi(Rational::from(1) - n)))
        } else {
            None
        };
    }

    let Expr::Sum(terms) = u else {
        return None;
    };

    if terms.contains(&*PI) {
        return Some(-cos(u.clone() - PI.clone()));
    }

    if let Some((n, rest)) = split_pi_term(terms, |n| n.clone().abs() >= 2) {
        return Some(cos(rest + times_pi(modulo(&n, 2))));
    }

    let (n, rest) = split_pi_term(terms, |n| *n.denom() == 2)?;
    match modulo(&Rational::from(n.numer()), 4) {
        k if k == 1 => Some(-sin(rest)),
        k if k == 3 => Some(sin(rest)),
        _ => None,
    }
}

pub(crate) fn reduce_tan(args: &[Expr]) -> Option<Expr> {
    match args {
        [Expr::Float(x)] => Some(Expr::Float(x.tan())),
        _ => None,
    }
}

pub(crate) fn reduce_asin(args: &[Expr]) -> Option<Expr> {
    match args {
        [Expr::Float(x)] => Some(Expr::Float(x.asin())),
        _ => None,
    }
}

pub(crate) fn reduce_atan(args: &[Expr]) -> Option<Expr> {
    match args {
        [Expr::Float(x)] => Some(Expr::Float(x.atan())),
        _ => None,
    }
}

/// `atan2(y, x)`, evaluated as a float when both arguments are numbers.
pub(crate) fn reduce_atan2(args: &[Expr]) -> Option<Expr> {
    let [y, x] = args else {
        return None;
    };
    Some(Expr::Float(y.to_f64()?.atan2(x.to_f64()?)))
}
