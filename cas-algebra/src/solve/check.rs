use crate::{
    equation::{simplify_equation, Equation, Relation},
    expr::Expr,
};
use super::eliminate::eliminate_variable_eqs;
use tracing::debug;

/// Returns true for `e == 0` where `e` contains `sym` and reduces to a negative integer power,
/// such as `1 / x == 0` or `3 / x^2 == 0`.
fn is_reciprocal_zero(expr: &Expr, eq: &Equation, sym: &Expr) -> bool {
    if eq.relation != Relation::Equal || !eq.rhs.is_zero() || eq.lhs.free_of(sym) {
        return false;
    }

    matches!(
        simplify_equation(expr),
        Expr::Equation(simplified)
            if matches!(
                &simplified.lhs,
                Expr::Power(_, exp) if exp.as_integer().is_some_and(|n| *n < 0)
            )
    )
}

/// Detects equations and systems over `sym` that are known to be inconsistent, and drops
/// conditions on `sym` made redundant by others.
///
/// - `e == 0` where `e` reduces to a negative integer power of an expression containing `sym` is
///   `false`.
/// - A conjunction is checked conjunct by conjunct, then as a whole with
///   [`check_variable_eqs`].
/// - A disjunction of conjunctions is checked case by case.
///
/// Anything else is returned unchanged.
pub fn check_variable(expr: &Expr, sym: &Expr) -> Expr {
    match expr {
        Expr::Equation(eq) if is_reciprocal_zero(expr, eq, sym) => {
            debug!(%sym, equation = %eq, "equation has no solution");
            Expr::from(false)
        },
        Expr::And(args) => match Expr::and(args.iter().map(|arg| check_variable(arg, sym))) {
            Expr::And(checked) => check_variable_eqs(&checked, sym),
            other => other,
        },
        Expr::Or(args) if args.iter().all(|arg| matches!(arg, Expr::And(_))) => {
            Expr::or(args.iter().map(|arg| check_variable(arg, sym)))
        },
        _ => expr.clone(),
    }
}

/// Checks a list of conjoined equations over `sym`.
///
/// - If eliminating `sym` yields `false`, the system is `false`.
/// - If both `sym != 0` and `1 / sym != 0` are present, the latter is dropped.
/// - If some `n / d == 0` has `n == sym` and `d` free of `sym` while `sym != 0` is present, the
///   system is `false`.
///
/// Otherwise the conjunction of the equations is returned.
pub fn check_variable_eqs(eqs: &[Expr], sym: &Expr) -> Expr {
    if eliminate_variable_eqs(eqs, sym) == Expr::Bool(false) {
        debug!(%sym, "eliminating variable yields a contradiction");
        return Expr::from(false);
    }

    let nonzero = sym.clone().not_equals(0);
    let reciprocal_nonzero = sym.clone().recip().not_equals(0);
    if eqs.contains(&nonzero) && eqs.contains(&reciprocal_nonzero) {
        let rest = eqs
            .iter()
            .filter(|eq| **eq != reciprocal_nonzero)
            .cloned()
            .collect::<Vec<_>>();
        return check_variable_eqs(&rest, sym);
    }

    let zero_ratio = eqs.iter().any(|expr| {
        expr.as_equation().is_some_and(|eq| {
            eq.relation == Relation::Equal
                && eq.rhs.is_zero()
                && eq.lhs.numerator() == *sym
                && eq.lhs.denominator().free_of(sym)
        })
    });
    if zero_ratio && eqs.contains(&nonzero) {
        debug!(%sym, "variable is both zero and nonzero");
        return Expr::from(false);
    }

    Expr::and(eqs.iter().cloned())
}
