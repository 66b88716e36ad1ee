//! Searching expression trees and replacing subexpressions.

use crate::{equation::Equation, expr::Expr};

impl Expr {
    /// Returns true if `target` occurs anywhere in this expression, including in function
    /// arguments and on both sides of equations.
    pub fn has(&self, target: &Expr) -> bool {
        self.post_order_iter().any(|expr| expr == target)
    }

    /// Returns true if any subexpression satisfies the predicate.
    pub fn has_match(&self, predicate: impl FnMut(&Expr) -> bool) -> bool {
        self.post_order_iter().any(predicate)
    }

    /// Returns true if `target` does not occur anywhere in this expression.
    pub fn free_of(&self, target: &Expr) -> bool {
        !self.has(target)
    }

    /// Replaces every occurrence of `from` with `to`, rebuilding the canonical form of each
    /// changed node. Function calls are rebuilt through their reduction procedure, so a call may
    /// evaluate after substitution.
    pub fn substitute(&self, from: &Expr, to: &Expr) -> Expr {
        if self == from {
            return to.clone();
        }

        match self {
            Self::Sum(terms) => Self::sum(terms.iter().map(|term| term.substitute(from, to))),
            Self::Product(factors) => {
                Self::product(factors.iter().map(|factor| factor.substitute(from, to)))
            },
            Self::Power(base, exp) => base.substitute(from, to).pow(exp.substitute(from, to)),
            Self::Function(_) | Self::And(_) | Self::Or(_) => {
                self.map_args(|arg| arg.substitute(from, to))
            },
            Self::Equation(eq) => eq.map(|side| side.substitute(from, to)),
            _ => self.clone(),
        }
    }

    /// Substitutes the right-hand side of `eq` for its left-hand side.
    pub fn substitute_eq(&self, eq: &Equation) -> Expr {
        self.substitute(&eq.lhs, &eq.rhs)
    }

    /// Applies [`Expr::substitute_eq`] for each equation, in order.
    pub fn substitute_all<'a>(&self, eqs: impl IntoIterator<Item = &'a Equation>) -> Expr {
        eqs.into_iter()
            .fold(self.clone(), |expr, eq| expr.substitute_eq(eq))
    }

    /// Applies `f` to this expression, then rebuilds the result with `f` applied recursively to
    /// the children of sums, products, powers, connectives, and equations.
    pub fn deep_select(&self, f: &mut impl FnMut(&Expr) -> Expr) -> Expr {
        match f(self) {
            Self::Sum(terms) => Self::sum(terms.iter().map(|term| term.deep_select(f))),
            Self::Product(factors) => {
                Self::product(factors.iter().map(|factor| factor.deep_select(f)))
            },
            Self::Power(base, exp) => {
                let base = base.deep_select(f);
                base.pow(exp.deep_select(f))
            },
            Self::And(args) => Self::and(args.iter().map(|arg| arg.deep_select(f))),
            Self::Or(args) => Self::or(args.iter().map(|arg| arg.deep_select(f))),
            Self::Equation(eq) => {
                let lhs = eq.lhs.deep_select(f);
                let rhs = eq.rhs.deep_select(f);
                Equation::new(lhs, rhs, eq.relation)
            },
            expr => expr,
        }
    }
}
