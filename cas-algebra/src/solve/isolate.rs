use crate::{
    equation::{Equation, Relation},
    expr::Expr,
    poly::{coefficient, degree},
};
use std::slice;
use super::step::{Step, StepCollector};
use tracing::debug;

/// Upper bound on the number of rewrites applied to a single equation.
const MAX_REWRITES: usize = 64;

/// Isolates `sym` in every equation of an expression, recursing through conjunctions and
/// disjunctions. Anything that is not an equation or connective is returned unchanged.
pub fn isolate_variable(expr: &Expr, sym: &Expr) -> Expr {
    isolate_variable_with(expr, sym, &mut ())
}

/// Isolates `sym` like [`isolate_variable`], also returning the rewrites that were applied, in
/// order.
pub fn isolate_variable_with_steps(expr: &Expr, sym: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let result = isolate_variable_with(expr, sym, &mut steps);
    (result, steps)
}

/// Isolates `sym` in a single equation, producing `sym == v` with `v` free of `sym` if possible.
///
/// Some rewrites split into cases, in which case the result is a disjunction, possibly of
/// conjunctions that pair a solution with the conditions under which it holds. If `sym` cannot be
/// isolated, the equation is returned unchanged.
pub fn isolate_variable_eq(eq: &Equation, sym: &Expr) -> Expr {
    isolate_eq_with(eq, sym, &mut ())
}

fn isolate_variable_with(
    expr: &Expr,
    sym: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    match expr {
        Expr::Equation(eq) => isolate_eq_with(eq, sym, step_collector),
        Expr::And(_) | Expr::Or(_) => {
            expr.map_args(|arg| isolate_variable_with(arg, sym, step_collector))
        },
        _ => expr.clone(),
    }
}

fn isolate_eq_with(
    eq: &Equation,
    sym: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let mut current = eq.clone();
    for _ in 0..MAX_REWRITES {
        let Some((step, next)) = rewrite(&current, sym) else {
            return Expr::from(current);
        };
        debug!(?step, from = %current, to = %next, "isolation rule applied");
        step_collector.push(step);

        match next {
            Expr::Equation(eq) => current = *eq,
            other => return isolate_variable_with(&other, sym, step_collector),
        }
    }

    debug!(equation = %current, "isolation rewrite limit reached");
    Expr::from(current)
}

/// Applies the first isolation rule that matches the equation, or returns [`None`] if the
/// variable is isolated already or cannot be isolated.
fn rewrite(eq: &Equation, sym: &Expr) -> Option<(Step, Expr)> {
    let Equation { lhs, rhs, relation } = eq;
    if *relation != Relation::Equal || (lhs.free_of(sym) && rhs.free_of(sym)) {
        return None;
    }

    if lhs == sym && rhs.free_of(sym) {
        return None;
    }

    if rhs.has(sym) {
        return Some(if lhs.free_of(sym) {
            (Step::SwapSides, rhs.clone().equals(lhs))
        } else {
            (Step::CollectOnLeft, (lhs.clone() - rhs.clone()).equals(0))
        });
    }

    if let Expr::Power(base, exp) = lhs {
        if let Some(rewritten) = invert_power(base, exp, rhs) {
            return Some(rewritten);
        }
    }

    let denominator = lhs.denominator();
    if denominator.has(sym) {
        let cleared = lhs.numerator().equals(rhs.clone() * denominator);
        return Some((Step::ClearDenominator, cleared));
    }

    let expanded = lhs.algebraic_expand();
    let deg = degree(&expanded, slice::from_ref(sym));
    if deg == 2 {
        if let Some([a, b, c]) = coefficients(&expanded, sym, [2, 1, 0]) {
            return Some((Step::QuadraticFormula, quadratic(sym, a, b, c - rhs.clone())));
        }
    } else if deg == 1 {
        if let Some([c1, c0]) = coefficients(&expanded, sym, [1, 0]) {
            return Some((Step::LinearSolve, sym.clone().equals((rhs.clone() - c0) / c1)));
        }
    }

    match lhs {
        Expr::Sum(terms) => {
            let (free, bound): (Vec<_>, Vec<_>) =
                terms.iter().cloned().partition(|term| term.free_of(sym));
            (!free.is_empty()).then(|| {
                let moved = Expr::sum(bound).equals(rhs.clone() - Expr::sum(free));
                (Step::SubtractTerms, moved)
            })
        },
        Expr::Product(factors) => {
            let (free, bound): (Vec<_>, Vec<_>) =
                factors.iter().cloned().partition(|factor| factor.free_of(sym));
            (!free.is_empty()).then(|| {
                let moved = Expr::product(bound).equals(rhs.clone() / Expr::product(free));
                (Step::DivideFactors, moved)
            })
        },
        _ => None,
    }
}

/// Inverts `base ^ exp == rhs` for the exponents `1/2`, `-1/2`, and `2`.
fn invert_power(base: &Expr, exp: &Expr, rhs: &Expr) -> Option<(Step, Expr)> {
    if *exp == Expr::fraction(1, 2) {
        Some((Step::SquareBothSides, base.clone().equals(rhs.clone().pow(2))))
    } else if *exp == Expr::fraction(-1, 2) {
        Some((Step::InvertReciprocalRoot, base.clone().equals(rhs.clone().pow(-2))))
    } else if exp.as_integer().is_some_and(|n| *n == 2) {
        let root = rhs.clone().sqrt();
        let cases = Expr::or([
            base.clone().equals(root.clone()),
            base.clone().equals(-root),
        ]);
        Some((Step::SquareRoot, cases))
    } else {
        None
    }
}

/// Returns the coefficients of the given powers of `sym`, if they all exist and are free of
/// `sym`.
fn coefficients<const N: usize>(u: &Expr, sym: &Expr, powers: [i32; N]) -> Option<[Expr; N]> {
    let mut found = Vec::with_capacity(N);
    for j in powers {
        let c = coefficient(u, sym, j)?;
        if c.has(sym) {
            return None;
        }
        found.push(c);
    }
    found.try_into().ok()
}

/// Solves `a x^2 + b x + c == 0` for `x`, splitting on whether `a` and `b` vanish.
fn quadratic(x: &Expr, a: Expr, b: Expr, c: Expr) -> Expr {
    let root = (b.clone().pow(2) - 4 * a.clone() * c.clone()).sqrt();
    let denominator = 2 * a.clone();
    let a_nonzero = a.clone().not_equals(0);

    Expr::or([
        Expr::and([
            x.clone().equals((-b.clone() + root.clone()) / denominator.clone()),
            a_nonzero.clone(),
        ]),
        Expr::and([
            x.clone().equals((-b.clone() - root) / denominator),
            a_nonzero,
        ]),
        Expr::and([
            x.clone().equals(-c.clone() / b.clone()),
            a.clone().equals(0),
            b.clone().not_equals(0),
        ]),
        Expr::and([a.equals(0), b.equals(0), c.equals(0)]),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn syms<const N: usize>(names: [&str; N]) -> [Expr; N] {
        names.map(Expr::symbol)
    }

    #[test]
    fn free_equation_unchanged() {
        let [a, x, y, z] = syms(["a", "x", "y", "z"]);
        let eq = (&x + &y + &z).equals(0);
        assert_eq!(isolate_variable(&eq, &a), eq);
    }

    #[test]
    fn cancelling_terms() {
        let [a, b, c, x] = syms(["a", "b", "c", "x"]);
        let eq = (&x * (&a + &b) - &x * &a - &x * &b + &x).equals(&c);
        assert_eq!(isolate_variable(&eq, &x), x.equals(c));
    }

    #[test]
    fn through_connectives() {
        let [a, b, x, y] = syms(["a", "b", "x", "y"]);
        let expr = Expr::and([x.clone().equals(&y), a.clone().equals(&b)]);
        assert_eq!(
            isolate_variable(&expr, &b),
            Expr::and([x.clone().equals(&y), b.clone().equals(&a)]),
        );

        let [c, z] = syms(["c", "z"]);
        let expr = Expr::or([
            Expr::and([y.clone().equals(&x), z.clone().equals(&x)]),
            Expr::and([b.clone().equals(&x), c.clone().equals(&x)]),
        ]);
        assert_eq!(
            isolate_variable(&expr, &x),
            Expr::or([
                Expr::and([x.clone().equals(&y), x.clone().equals(&z)]),
                Expr::and([x.clone().equals(&b), x.clone().equals(&c)]),
            ]),
        );
    }

    #[test]
    fn swap_and_solve() {
        let [x, y] = syms(["x", "y"]);
        let eq = Expr::from(0).equals(&x - &y);
        let Expr::Equation(eq) = eq else {
            panic!("expected an equation");
        };
        assert_eq!(isolate_variable_eq(&eq, &x), x.equals(y));
    }

    fn general_quadratic(a: &Expr, b: &Expr, c: &Expr, x: &Expr) -> Expr {
        let root = (b.clone().pow(2) - 4 * a * c).sqrt();
        Expr::or([
            Expr::and([
                x.clone().equals((-b + root.clone()) / (2 * a)),
                a.clone().not_equals(0),
            ]),
            Expr::and([
                x.clone().equals((-b - root) / (2 * a)),
                a.clone().not_equals(0),
            ]),
            Expr::and([
                x.clone().equals(-c / b),
                a.clone().equals(0),
                b.clone().not_equals(0),
            ]),
            Expr::and([a.clone().equals(0), b.clone().equals(0), c.clone().equals(0)]),
        ])
    }

    #[test]
    fn quadratic_cases() {
        let [a, b, c, x] = syms(["a", "b", "c", "x"]);
        let eq = (&a * x.clone().pow(2) + &b * &x + &c).equals(0);
        assert_eq!(isolate_variable(&eq, &x), general_quadratic(&a, &b, &c, &x));
    }

    #[test]
    fn quadratic_without_linear_term() {
        let [a, c, x] = syms(["a", "c", "x"]);
        let eq = (&a * x.clone().pow(2) + &c).equals(0);
        let root = (-4 * &a * &c).sqrt();
        assert_eq!(
            isolate_variable(&eq, &x),
            Expr::or([
                Expr::and([x.clone().equals(root.clone() / (2 * &a)), a.clone().not_equals(0)]),
                Expr::and([x.clone().equals(-root / (2 * &a)), a.clone().not_equals(0)]),
                Expr::and([a.clone().equals(0), c.clone().equals(0)]),
            ]),
        );
    }

    #[test]
    fn quadratic_after_clearing_denominator() {
        let [a, b, c, x] = syms(["a", "b", "c", "x"]);
        let eq = ((&a * x.clone().pow(2) + &c) / &x).equals(-&b);
        assert_eq!(isolate_variable(&eq, &x), general_quadratic(&a, &b, &c, &x));
    }

    #[test]
    fn numeric_quadratic() {
        let [x] = syms(["x"]);
        let eq = (x.clone().pow(2) - 4).equals(0);
        let half = Expr::fraction(1, 2);
        let root = Expr::from(16).sqrt();
        assert_eq!(
            isolate_variable(&eq, &x),
            Expr::or([
                x.clone().equals(&half * &root),
                x.clone().equals(-half * root),
            ]),
        );
    }

    #[test]
    fn square_root_of_both_sides() {
        let [k, x] = syms(["k", "x"]);
        let eq = x.clone().pow(2).equals(&k);
        assert_eq!(
            isolate_variable(&eq, &x),
            Expr::or([
                x.clone().equals(k.clone().sqrt()),
                x.clone().equals(-k.sqrt()),
            ]),
        );
    }

    #[test]
    fn square_both_sides() {
        let [x, y, z] = syms(["x", "y", "z"]);
        let eq = (&x + &y).sqrt().equals(&z);
        assert_eq!(isolate_variable(&eq, &x), x.equals(z.pow(2) - y));
    }

    #[test]
    fn linear_with_symbolic_coefficients() {
        let [a, b, c, d] = syms(["a", "b", "c", "d"]);
        let eq = (&a * &b + &a).equals(&c);
        assert_eq!(isolate_variable(&eq, &a), a.clone().equals(&c / (&b + 1)));

        let eq = (&a * &b + &a * &c).equals(&d);
        assert_eq!(isolate_variable(&eq, &a), a.equals(d / (b + c)));
    }

    #[test]
    fn reciprocal_root() {
        let [x, y] = syms(["x", "y"]);
        let eq = (1 / x.clone().sqrt()).equals(&y);
        assert_eq!(isolate_variable(&eq, &x), x.clone().equals(y.clone().pow(-2)));

        let eq = y.clone().equals(x.clone().sqrt() / &x);
        assert_eq!(isolate_variable(&eq, &x), x.equals(y.pow(-2)));
    }

    #[test]
    fn cannot_isolate() {
        let [a, x, y, z] = syms(["a", "x", "y", "z"]);
        let eqs = [
            (-x.clone().sqrt() + &z * &x).equals(&y),
            ((&a + &x).sqrt() - &z * &x).equals(-&y),
            ((2 + &x).sqrt() * (3 + &x).sqrt()).equals(&y),
        ];
        for eq in eqs {
            assert_eq!(isolate_variable(&eq, &x), eq);
        }
    }

    #[test]
    fn rational_equations() {
        let [x] = syms(["x"]);
        let eq = ((&x + 1) / (&x + 2)).equals(3);
        assert_eq!(isolate_variable(&eq, &x), x.clone().equals(Expr::fraction(-5, 2)));

        let eq = ((1 + 2 * &x) / (3 * &x - 4)).equals(5);
        assert_eq!(isolate_variable(&eq, &x), x.equals(Expr::fraction(21, 13)));
    }

    #[test]
    fn inequality_unchanged() {
        let [x, y] = syms(["x", "y"]);
        let eq = (2 * &x).less_than(&y);
        assert_eq!(isolate_variable(&eq, &x), eq);
    }

    #[test]
    fn steps() {
        let [x] = syms(["x"]);
        let eq = ((&x + 1) / (&x + 2)).equals(3);
        let (result, steps) = isolate_variable_with_steps(&eq, &x);
        assert_eq!(result, x.equals(Expr::fraction(-5, 2)));
        assert_eq!(
            steps,
            vec![Step::ClearDenominator, Step::CollectOnLeft, Step::LinearSolve],
        );
    }

    #[test]
    fn steps_through_cases() {
        let [k, x] = syms(["k", "x"]);
        let eq = (&x + 1).pow(2).equals(&k);
        let (result, steps) = isolate_variable_with_steps(&eq, &x);
        assert_eq!(
            result,
            Expr::or([
                x.clone().equals(k.clone().sqrt() - 1),
                x.clone().equals(-k.sqrt() - 1),
            ]),
        );
        assert_eq!(steps, vec![Step::SquareRoot, Step::LinearSolve, Step::LinearSolve]);
    }
}
