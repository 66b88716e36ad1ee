//! Conjunctions and disjunctions of equations.
//!
//! [`Expr::and`] and [`Expr::or`] build canonical connectives: nested connectives of the same
//! kind are flattened, identities are dropped, and absorbing constants short-circuit. Unlike sums
//! and products, the arguments are **not** sorted, since the solver reports its branches in a
//! meaningful order.

use crate::expr::Expr;

impl Expr {
    /// Creates the canonical conjunction of the given arguments.
    ///
    /// - No arguments is `true`, and a single argument is itself.
    /// - Any `false` makes the conjunction `false`.
    /// - `true` arguments are dropped, and nested conjunctions are flattened.
    pub fn and(args: impl IntoIterator<Item = Expr>) -> Self {
        simplify_and(args.into_iter().collect())
    }

    /// Creates the canonical disjunction of the given arguments.
    ///
    /// - No arguments is `false`, and a single argument is itself.
    /// - Any `true` makes the disjunction `true`.
    /// - `false` arguments are dropped, and nested disjunctions are flattened.
    pub fn or(args: impl IntoIterator<Item = Expr>) -> Self {
        simplify_or(args.into_iter().collect())
    }

    /// Appends arguments to a conjunction. Anything other than a conjunction is treated as a
    /// conjunction of one argument.
    pub fn and_with(&self, extra: impl IntoIterator<Item = Expr>) -> Self {
        let args = match self {
            Self::And(args) => args.clone(),
            _ => vec![self.clone()],
        };
        Self::and(args.into_iter().chain(extra))
    }

    /// Rebuilds a conjunction or disjunction with each argument transformed by `f`. Anything else
    /// is returned unchanged.
    pub fn map_args(&self, f: impl FnMut(&Expr) -> Expr) -> Self {
        match self {
            Self::And(args) => Self::and(args.iter().map(f)),
            Self::Or(args) => Self::or(args.iter().map(f)),
            Self::Function(func) => func.map_args(f),
            _ => self.clone(),
        }
    }
}

fn simplify_and(mut args: Vec<Expr>) -> Expr {
    loop {
        match args.len() {
            0 => return Expr::Bool(true),
            1 => return args.remove(0),
            _ => {},
        }

        if args.contains(&Expr::Bool(false)) {
            return Expr::Bool(false);
        }

        if args.contains(&Expr::Bool(true)) {
            args.retain(|arg| *arg != Expr::Bool(true));
            continue;
        }

        if args.iter().any(|arg| matches!(arg, Expr::And(_))) {
            args = args
                .into_iter()
                .flat_map(|arg| match arg {
                    Expr::And(inner) => inner,
                    arg => vec![arg],
                })
                .collect();
            continue;
        }

        return Expr::And(args);
    }
}

fn simplify_or(mut args: Vec<Expr>) -> Expr {
    loop {
        match args.len() {
            0 => return Expr::Bool(false),
            1 => return args.remove(0),
            _ => {},
        }

        if args.contains(&Expr::Bool(false)) {
            args.retain(|arg| *arg != Expr::Bool(false));
            continue;
        }

        if args.contains(&Expr::Bool(true)) {
            return Expr::Bool(true);
        }

        if args.iter().any(|arg| matches!(arg, Expr::Or(_))) {
            args = args
                .into_iter()
                .flat_map(|arg| match arg {
                    Expr::Or(inner) => inner,
                    arg => vec![arg],
                })
                .collect();
            continue;
        }

        return Expr::Or(args);
    }
}

/// Removes duplicate arguments from connectives.
///
/// A conjunction with duplicates keeps the first occurrence of each argument. A disjunction with
/// duplicates is deduplicated and simplified again; one without duplicates has each of its
/// arguments simplified. Anything else is returned unchanged.
pub fn simplify_logical(expr: &Expr) -> Expr {
    match expr {
        Expr::And(args) if has_duplicates(args) => Expr::and(dedup(args)),
        Expr::Or(args) if has_duplicates(args) => simplify_logical(&Expr::or(dedup(args))),
        Expr::Or(args) => Expr::or(args.iter().map(simplify_logical)),
        _ => expr.clone(),
    }
}

fn has_duplicates(args: &[Expr]) -> bool {
    args.iter()
        .enumerate()
        .any(|(i, arg)| args[..i].contains(arg))
}

fn dedup(args: &[Expr]) -> Vec<Expr> {
    let mut unique = Vec::with_capacity(args.len());
    for arg in args {
        if !unique.contains(arg) {
            unique.push(arg.clone());
        }
    }
    unique
}

/// Distributes conjunctions over disjunctions.
///
/// `and(a, or(b, c), d)` becomes `or(and(a, b, d), and(a, c, d))`, repeatedly, until no
/// conjunction contains a disjunction. Disjunctions are expanded argument-wise.
pub fn logical_expand(expr: &Expr) -> Expr {
    match expr {
        Expr::Or(args) => Expr::or(args.iter().map(logical_expand)),
        Expr::And(args) => {
            let Some((i, disjuncts)) = args.iter().enumerate().find_map(|(i, arg)| match arg {
                Expr::Or(disjuncts) => Some((i, disjuncts)),
                _ => None,
            }) else {
                return expr.clone();
            };

            let before = logical_expand(&Expr::and(args[..i].iter().cloned()));
            let after = logical_expand(&Expr::and(args[i + 1..].iter().cloned()));
            let distributed = Expr::or(disjuncts.iter().map(|disjunct| {
                Expr::and([before.clone(), disjunct.clone(), after.clone()])
            }));
            logical_expand(&distributed)
        },
        _ => expr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn syms() -> (Expr, Expr, Expr, Expr) {
        (Expr::symbol("a"), Expr::symbol("b"), Expr::symbol("c"), Expr::symbol("d"))
    }

    #[test]
    fn and_identities() {
        let (a, b, ..) = syms();
        assert_eq!(Expr::and([]), Expr::from(true));
        assert_eq!(Expr::and([a.clone()]), a);
        assert_eq!(Expr::and([a.clone(), Expr::from(true), b.clone()]), Expr::And(vec![a.clone(), b.clone()]));
        assert_eq!(Expr::and([a.clone(), Expr::from(false), b.clone()]), Expr::from(false));
        assert_eq!(Expr::and([Expr::from(true), Expr::from(true)]), Expr::from(true));
    }

    #[test]
    fn or_identities() {
        let (a, b, ..) = syms();
        assert_eq!(Expr::or([]), Expr::from(false));
        assert_eq!(Expr::or([a.clone()]), a);
        assert_eq!(Expr::or([a.clone(), Expr::from(false), b.clone()]), Expr::Or(vec![a.clone(), b.clone()]));
        assert_eq!(Expr::or([a.clone(), Expr::from(true)]), Expr::from(true));
        assert_eq!(Expr::or([Expr::from(false), Expr::from(false)]), Expr::from(false));
    }

    #[test]
    fn flatten() {
        let (a, b, c, d) = syms();
        let nested = Expr::and([a.clone(), Expr::and([b.clone(), c.clone()]), d.clone()]);
        assert_eq!(nested, Expr::And(vec![a.clone(), b.clone(), c.clone(), d.clone()]));

        let nested = Expr::or([Expr::or([a.clone(), b.clone()]), c.clone()]);
        assert_eq!(nested, Expr::Or(vec![a, b, c]));
    }

    #[test]
    fn and_with() {
        let (a, b, c, _) = syms();
        let and = Expr::and([a.clone(), b.clone()]);
        assert_eq!(and.and_with([c.clone()]), Expr::And(vec![a.clone(), b.clone(), c.clone()]));
        assert_eq!(a.and_with([b.clone()]), Expr::And(vec![a, b]));
    }

    #[test]
    fn map_args() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let or = Expr::or([x.clone().equals(1), y.clone().equals(2)]);
        let mapped = or.map_args(|arg| match arg {
            Expr::Equation(eq) => eq.map(|side| side.substitute(&x, &Expr::from(1))),
            arg => arg.clone(),
        });
        assert_eq!(mapped, Expr::from(true));
    }

    #[test]
    fn logical_expand_distributes() {
        let (a, b, c, d) = syms();
        let expr = Expr::and([a.clone(), Expr::or([b.clone(), c.clone()]), d.clone()]);
        assert_eq!(
            logical_expand(&expr),
            Expr::or([
                Expr::and([a.clone(), b.clone(), d.clone()]),
                Expr::and([a.clone(), c.clone(), d.clone()]),
            ]),
        );
    }

    #[test]
    fn logical_expand_nested() {
        let (a, b, c, d) = syms();
        let expr = Expr::and([Expr::or([a.clone(), b.clone()]), Expr::or([c.clone(), d.clone()])]);
        assert_eq!(
            logical_expand(&expr),
            Expr::or([
                Expr::and([a.clone(), c.clone()]),
                Expr::and([a.clone(), d.clone()]),
                Expr::and([b.clone(), c.clone()]),
                Expr::and([b.clone(), d.clone()]),
            ]),
        );
    }

    #[test]
    fn simplify_logical_dedups() {
        let (a, b, c, _) = syms();
        assert_eq!(
            simplify_logical(&Expr::And(vec![a.clone(), b.clone(), a.clone()])),
            Expr::and([a.clone(), b.clone()]),
        );
        assert_eq!(
            simplify_logical(&Expr::or([
                Expr::And(vec![b.clone(), b.clone()]),
                c.clone(),
                c.clone(),
            ])),
            Expr::or([b, c]),
        );
    }
}
