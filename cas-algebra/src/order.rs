//! The total order used to sort the operands of sums and products.
//!
//! The relation groups like terms next to each other so the simplifier can combine them while
//! merging sorted operand lists:
//!
//! - Numbers come first, ordered by value.
//! - Symbols are ordered by name.
//! - Sums and products are compared by their operands from the **last** one backwards, so `x`,
//!   `2 * x`, and `y * x` sort next to each other.
//! - Powers are compared by base, then by exponent. A non-power `u` is compared as `u ^ 1`.
//! - Calls (including `and` and `or`) are compared by name, then by arguments.
//! - Booleans, equations, and [`Expr::Undefined`] sort after everything else.

use crate::expr::Expr;
use std::{cmp::Ordering, iter};

/// Returns true if `u` strictly precedes `v`.
pub fn precedes(u: &Expr, v: &Expr) -> bool {
    use Expr::*;

    if let (Some(a), Some(b)) = (rank_of_rest(u), rank_of_rest(v)) {
        return match a.cmp(&b) {
            Ordering::Equal => rest_precedes(u, v),
            ordering => ordering == Ordering::Less,
        };
    }
    if rank_of_rest(v).is_some() {
        return true;
    }
    if rank_of_rest(u).is_some() {
        return false;
    }

    if let (Some((name_u, args_u)), Some((name_v, args_v))) = (call_of(u), call_of(v)) {
        return if name_u != name_v {
            name_u < name_v
        } else {
            o3(args_u.iter(), args_v.iter())
        };
    }

    match (u, v) {
        (Float(a), Float(b)) => a < b,
        (Float(a), _) if v.is_rational() => v.to_f64().is_some_and(|b| *a < b),
        (_, Float(b)) if u.is_rational() => u.to_f64().is_some_and(|a| a < *b),
        _ if u.is_rational() && v.is_rational() => u.as_rational() < v.as_rational(),
        (Symbol(a), Symbol(b)) => a < b,
        (Product(a), Product(b)) | (Sum(a), Sum(b)) => o3(a.iter().rev(), b.iter().rev()),
        (Power(base_u, exp_u), Power(base_v, exp_v)) => {
            if base_u == base_v {
                precedes(exp_u, exp_v)
            } else {
                precedes(base_u, base_v)
            }
        },
        _ if u.is_number() => true,
        (Product(a), Power(..) | Sum(_) | Symbol(_)) => o3(a.iter().rev(), iter::once(v)),
        (Product(a), _) if call_of(v).is_some() => o3(a.iter().rev(), iter::once(v)),
        (Power(base, exp), Sum(_) | Symbol(_)) => power_precedes(base, exp, v),
        (Power(base, exp), _) if call_of(v).is_some() => power_precedes(base, exp, v),
        (Sum(a), Symbol(_)) => o3(a.iter().rev(), iter::once(v)),
        (Sum(a), _) if call_of(v).is_some() => o3(a.iter().rev(), iter::once(v)),
        (_, Symbol(name_v)) if call_of(u).is_some() => {
            call_of(u).is_some_and(|(name_u, _)| name_u < name_v.as_str())
        },
        _ => !precedes(v, u),
    }
}

/// Compares two expressions with [`precedes`]. Structurally equal expressions are
/// [`Ordering::Equal`].
pub fn compare(u: &Expr, v: &Expr) -> Ordering {
    if u == v {
        Ordering::Equal
    } else if precedes(u, v) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Compares `base ^ exp` against `v ^ 1`.
fn power_precedes(base: &Expr, exp: &Expr, v: &Expr) -> bool {
    if base == v {
        precedes(exp, &Expr::from(1))
    } else {
        precedes(base, v)
    }
}

/// Lexicographic comparison of two operand sequences: the first differing pair decides, and a
/// sequence that runs out first precedes the other.
fn o3<'a>(
    mut u: impl Iterator<Item = &'a Expr>,
    mut v: impl Iterator<Item = &'a Expr>,
) -> bool {
    loop {
        match (u.next(), v.next()) {
            (None, _) => return true,
            (Some(_), None) => return false,
            (Some(a), Some(b)) if a != b => return precedes(a, b),
            _ => {},
        }
    }
}

/// Returns the name and arguments of a call, treating `and` and `or` as calls.
fn call_of(expr: &Expr) -> Option<(&str, &[Expr])> {
    match expr {
        Expr::Function(f) => Some((f.name(), f.args())),
        Expr::And(args) => Some(("and", args)),
        Expr::Or(args) => Some(("or", args)),
        _ => None,
    }
}

/// Ranks the kinds of expression that never appear in arithmetic, so that they sort after
/// everything else in a fixed order.
fn rank_of_rest(expr: &Expr) -> Option<u8> {
    match expr {
        Expr::Bool(_) => Some(0),
        Expr::Equation(_) => Some(1),
        Expr::Undefined => Some(2),
        _ => None,
    }
}

/// Orders two expressions of the same rank from [`rank_of_rest`].
fn rest_precedes(u: &Expr, v: &Expr) -> bool {
    match (u, v) {
        (Expr::Bool(a), Expr::Bool(b)) => a < b,
        (Expr::Equation(a), Expr::Equation(b)) => {
            if a.lhs != b.lhs {
                precedes(&a.lhs, &b.lhs)
            } else if a.rhs != b.rhs {
                precedes(&a.rhs, &b.rhs)
            } else {
                (a.relation as u8) < (b.relation as u8)
            }
        },
        _ => false,
    }
}
