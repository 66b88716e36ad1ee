use crate::{equation::Relation, expr::Expr};
use std::slice;
use super::isolate::isolate_variable_eq;
use tracing::debug;

/// Returns true if `expr` is an equation `sym == v` with `v` free of `sym`.
fn is_solution(expr: &Expr, sym: &Expr) -> bool {
    matches!(
        expr,
        Expr::Equation(eq)
            if eq.relation == Relation::Equal && eq.lhs == *sym && eq.rhs.free_of(sym)
    )
}

/// Eliminates `sym` from a system of equations.
///
/// A conjunction is treated as a list of equations (see [`eliminate_variable_eqs`]), as is a
/// single equation. A disjunction is eliminated case by case. Anything else is returned
/// unchanged.
pub fn eliminate_variable(expr: &Expr, sym: &Expr) -> Expr {
    match expr {
        Expr::And(args) => eliminate_variable_eqs(args, sym),
        Expr::Equation(_) => eliminate_variable_eqs(slice::from_ref(expr), sym),
        Expr::Or(args) => Expr::or(args.iter().map(|arg| eliminate_variable(arg, sym))),
        _ => expr.clone(),
    }
}

/// Eliminates `sym` from a list of conjoined equations.
///
/// The first equality that contains `sym` and can be solved for it is removed from the list, and
/// its solution is substituted into the remaining equations. If solving splits into cases, each
/// case is conjoined with the remaining equations and eliminated separately, and the results are
/// joined in a disjunction. If no equation can be solved for `sym`, the conjunction of the
/// equations is returned unchanged.
pub fn eliminate_variable_eqs(eqs: &[Expr], sym: &Expr) -> Expr {
    let picked = eqs.iter().enumerate().find_map(|(i, expr)| {
        let eq = expr.as_equation()?;
        if eq.relation != Relation::Equal
            || expr.free_of(sym)
            || expr.algebraic_expand().free_of(sym)
        {
            return None;
        }

        let isolated = isolate_variable_eq(eq, sym);
        isolated
            .has_match(|e| is_solution(e, sym))
            .then_some((i, isolated))
    });

    let Some((index, isolated)) = picked else {
        return Expr::and(eqs.iter().cloned());
    };

    let picked = &eqs[index];
    debug!(%sym, equation = %picked, solution = %isolated, "eliminating variable");

    let rest = eqs
        .iter()
        .filter(|eq| *eq != picked)
        .cloned()
        .collect::<Vec<_>>();

    let branches = match isolated {
        Expr::Equation(solution) => {
            // the solution must be the equation itself
            if solution.lhs != *sym || solution.rhs.has(sym) {
                return Expr::and(eqs.iter().cloned());
            }
            return Expr::and(rest.iter().map(|eq| eq.substitute(sym, &solution.rhs)));
        },
        Expr::Or(branches) => branches,
        other => vec![other],
    };

    Expr::or(branches.into_iter().map(|branch| {
        eliminate_variable(&branch.and_with(rest.iter().cloned()), sym)
    }))
}

/// Eliminates each symbol in turn.
pub fn eliminate_variables<'a>(expr: &Expr, syms: impl IntoIterator<Item = &'a Expr>) -> Expr {
    syms.into_iter()
        .fold(expr.clone(), |expr, sym| eliminate_variable(&expr, sym))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::{ctxt::Ctxt, equation::Equation, solve::isolate_variable};
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinematic(s: &Expr, u: &Expr, v: &Expr, a: &Expr, t: &Expr) -> Expr {
        Expr::and([
            v.clone().equals(u + a * t),
            s.clone().equals((u + v) * t / 2),
        ])
    }

    /// Motion between the instants `ta` and `tb`.
    fn kinematic_between(
        sa: &Expr,
        sb: &Expr,
        va: &Expr,
        vb: &Expr,
        a: &Expr,
        ta: &Expr,
        tb: &Expr,
    ) -> Expr {
        Expr::and([
            vb.clone().equals(va + a * (tb - ta)),
            (sb - sa).equals((va + vb) * (tb - ta) / 2),
        ])
    }

    /// Reads the float value of `sym` in every case of a solution.
    fn float_solutions(expr: &Expr, sym: &Expr) -> Vec<f64> {
        let cases = match expr {
            Expr::Or(cases) => cases.as_slice(),
            _ => slice::from_ref(expr),
        };
        cases
            .iter()
            .map(|case| match case.as_equation() {
                Some(eq) if eq.lhs == *sym => eq
                    .rhs
                    .to_f64()
                    .unwrap_or_else(|| panic!("expected a number, got {case}")),
                _ => panic!("expected a solution for {sym}, got {case}"),
            })
            .collect()
    }

    fn values(eqs: impl IntoIterator<Item = Expr>) -> Vec<Equation> {
        eqs.into_iter()
            .filter_map(|eq| eq.as_equation().cloned())
            .collect()
    }

    #[test]
    fn substitute_solution() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let z = Expr::symbol("z");
        let eqs = Expr::and([x.clone().pow(3).equals(y.clone().pow(5)), z.clone().equals(&x)]);
        assert_eq!(eliminate_variable(&eqs, &x), z.pow(3).equals(y.pow(5)));
    }

    #[test]
    fn nothing_to_solve() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let z = Expr::symbol("z");
        let eqs = Expr::and([
            x.clone().pow(3).equals(y.pow(5)),
            z.equals(x.clone().pow(7)),
        ]);
        assert_eq!(eliminate_variable(&eqs, &x), eqs);
    }

    #[test]
    fn split_into_cases() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let z = Expr::symbol("z");
        let eqs = Expr::and([
            (x.clone().pow(2) - 4).equals(0),
            (&y + &x).equals(0),
            (&x + &z).equals(10),
        ]);

        let half = Expr::fraction(1, 2);
        let root = Expr::from(16).sqrt();
        assert_eq!(
            eliminate_variable(&eqs, &x),
            Expr::or([
                Expr::and([
                    (&half * &root + &y).equals(0),
                    (&half * &root + &z).equals(10),
                ]),
                Expr::and([
                    (-&half * &root + &y).equals(0),
                    (-&half * &root + &z).equals(10),
                ]),
            ]),
        );
    }

    #[test]
    fn disjunction_case_by_case() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let expr = Expr::or([
            Expr::and([x.clone().equals(1), (&x + &y).equals(3)]),
            Expr::and([x.clone().equals(2), (&x + &y).equals(3)]),
        ]);
        assert_eq!(
            eliminate_variable(&expr, &x),
            Expr::or([(&y + 1).equals(3), (&y + 2).equals(3)]),
        );
    }

    #[test]
    fn contradiction() {
        let a = Expr::symbol("a");
        let eqs = Expr::and([a.clone().equals(10), a.clone().equals(0)]);
        assert_eq!(eliminate_variable(&eqs, &a), Expr::from(false));
    }

    #[test]
    fn kinematics() {
        let [s, u, v, a, t] = ["s", "u", "v", "a", "t"].map(Expr::symbol);
        let eqs = kinematic(&s, &u, &v, &a, &t);
        let vals = values([u.clone().equals(63), v.clone().equals(0), t.clone().equals(2.0)]);

        let without_s = eliminate_variable(&eqs, &s);
        assert_eq!(without_s, v.clone().equals(&a * &t + &u));

        let isolated = isolate_variable(&without_s, &a);
        assert_eq!(isolated, a.clone().equals((&v - &u) / &t));
        assert_eq!(isolated.substitute_all(&vals), a.clone().equals(-31.5));

        let without_a = eliminate_variable(&eqs, &a);
        assert_eq!(without_a.substitute_all(&vals), s.equals(63.0));
    }

    #[test]
    fn several_variables() {
        let [s, u, v, a, t] = ["s", "u", "v", "a", "t"].map(Expr::symbol);
        let eqs = Expr::and([
            u.clone().equals(0),
            kinematic(&s, &u, &v, &a, &t),
        ]);
        let result = eliminate_variables(&eqs, [&u, &a]);
        assert_eq!(result, s.equals(&v * &t / 2));
    }

    #[test]
    fn acceleration_from_two_legs() {
        let [s_ac, s_ab, v_a, v_b, v_c, a, t_ac, t_ab] =
            ["sAC", "sAB", "vA", "vB", "vC", "a", "tAC", "tAB"].map(Expr::symbol);
        let eqs = Expr::and([
            t_ab.clone().equals(&t_ac / 2),
            kinematic(&s_ac, &v_a, &v_c, &a, &t_ac),
            kinematic(&s_ab, &v_a, &v_b, &a, &t_ab),
        ]);
        let vals = values([v_a.clone().equals(10), v_c.clone().equals(30), t_ac.clone().equals(10)]);

        let isolated = isolate_variable(&eliminate_variables(&eqs, [&t_ab, &s_ac, &v_b, &s_ab]), &a);
        assert_eq!(isolated, a.clone().equals((&v_c - &v_a) / &t_ac));
        assert_eq!(isolated.substitute_all(&vals), a.clone().equals(2));

        let distance = eliminate_variables(&eqs, [&v_b, &a, &t_ab, &s_ac]);
        assert_eq!(distance.substitute_all(&vals), s_ab.equals(75));
    }

    #[test]
    fn pursuit_after_delay() {
        let [s1, u1, v1, a1, t1] = ["s1", "u1", "v1", "a1", "t1"].map(Expr::symbol);
        let [s2, u2, v2, a2, t2] = ["s2", "u2", "v2", "a2", "t2"].map(Expr::symbol);
        let eqs = Expr::and([
            u1.clone().equals(&v1),
            s1.clone().equals(&s2),
            t2.clone().equals(&t1 - 1),
            kinematic(&s1, &u1, &v1, &a1, &t1),
            kinematic(&s2, &u2, &v2, &a2, &t2),
        ]);
        let vals = values([v1.clone().equals(45.0), u2.clone().equals(0), a2.clone().equals(3)]);

        let without = eliminate_variables(&eqs, [&s2, &t1, &a1, &s1, &v2, &u1]);
        let times = isolate_variable(&without, &t2).substitute_all(&vals);
        let mut times = float_solutions(&times, &t2);
        times.sort_by(f64::total_cmp);

        assert_eq!(times.len(), 2);
        assert_float_relative_eq!(times[0], -0.9687194226713132);
        assert_float_relative_eq!(times[1], 30.968719422671313);
    }

    #[test]
    fn thrown_upward() {
        let [y_a, y_b, y_c, y_d] = ["yA", "yB", "yC", "yD"].map(Expr::symbol);
        let [t_a, t_b, t_c, t_d] = ["tA", "tB", "tC", "tD"].map(Expr::symbol);
        let [v_a, v_b, v_c, v_d] = ["vA", "vB", "vC", "vD"].map(Expr::symbol);
        let a = Expr::symbol("a");
        let eqs = Expr::and([
            kinematic_between(&y_a, &y_b, &v_a, &v_b, &a, &t_a, &t_b),
            kinematic_between(&y_b, &y_c, &v_b, &v_c, &a, &t_b, &t_c),
            kinematic_between(&y_c, &y_d, &v_c, &v_d, &a, &t_c, &t_d),
        ]);
        let vals = values([
            y_a.clone().equals(50),
            y_c.clone().equals(50),
            v_a.clone().equals(20),
            v_b.clone().equals(0),
            a.clone().equals(-9.8),
            t_a.clone().equals(0),
            t_d.clone().equals(5),
        ]);

        Ctxt::with_tolerance(1e-9).scope(|| {
            let velocity = eliminate_variables(&eqs, [&t_b, &t_c, &v_c, &y_b, &y_d])
                .substitute_all(&vals);
            let velocities = float_solutions(&velocity, &v_d);
            assert!(!velocities.is_empty());
            for v in velocities {
                assert_float_relative_eq!(v, -29.0);
            }

            let without = eliminate_variables(&eqs, [&t_b, &t_c, &v_c, &y_b, &v_d]);
            let position = isolate_variable(&without, &y_d).substitute_all(&vals);
            let positions = float_solutions(&position, &y_d);
            assert!(!positions.is_empty());
            for y in positions {
                assert_float_relative_eq!(y, 27.5);
            }
        });
    }
}
