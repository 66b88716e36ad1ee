use crate::{
    expr::Expr,
    rational::{simplify_rne, Rne},
};
use std::cmp::Ordering;

/// Builds the canonical power `base ^ exponent`.
///
/// - [`Expr::Undefined`] on either side makes the power undefined.
/// - `0 ^ e` is `0` when `e` is a positive number or not a number, and undefined when `e` is
///   zero or a negative number.
/// - `1 ^ e` is `1`, `b ^ 0` is `1`, and `b ^ 1` is `b`.
/// - An exact base with an integer exponent is evaluated exactly. The exponent must fit in an
///   [`i32`]; larger exponents are left unevaluated.
/// - A float on either side of a numeric power is evaluated as a float.
/// - `(b ^ e) ^ n` with an integer `n` is `b ^ (e * n)`.
/// - `(a * b) ^ n` with an integer `n` is `a ^ n * b ^ n`.
pub fn simplify_power(base: Expr, exponent: Expr) -> Expr {
    if matches!(base, Expr::Undefined) || matches!(exponent, Expr::Undefined) {
        return Expr::Undefined;
    }

    if base.is_zero() {
        return match exponent.sign() {
            Some(Ordering::Equal | Ordering::Less) => Expr::Undefined,
            _ => Expr::from(0),
        };
    }

    if base.is_one() || exponent.is_zero() {
        return Expr::from(1);
    }

    if exponent.is_one() {
        return base;
    }

    match (base, exponent) {
        (base, Expr::Integer(n)) if base.is_rational() => {
            match (Rne::number(&base), n.to_i32()) {
                (Some(rne), Some(n)) => simplify_rne(&Rne::power(rne, n)),
                (_, _) => Expr::Power(Box::new(base), Box::new(Expr::Integer(n))),
            }
        },
        (Expr::Float(b), exponent) if exponent.is_number() => {
            Expr::Float(b.powf(exponent.to_f64().unwrap_or(f64::NAN)))
        },
        (base, Expr::Float(e)) if base.is_number() => {
            Expr::Float(base.to_f64().unwrap_or(f64::NAN).powf(e))
        },
        (Expr::Power(inner, exp), Expr::Integer(n)) => {
            simplify_power(*inner, Expr::product([*exp, Expr::Integer(n)]))
        },
        (Expr::Product(factors), Expr::Integer(n)) => Expr::product(
            factors
                .into_iter()
                .map(|factor| simplify_power(factor, Expr::Integer(n.clone()))),
        ),
        (base, exponent) => Expr::Power(Box::new(base), Box::new(exponent)),
    }
}
