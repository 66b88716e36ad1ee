//! Relations between two expressions.

use crate::{error::Error, expr::Expr};
use std::{cmp::Ordering, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The relation an [`Equation`] asserts between its two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Relation {
    /// `lhs == rhs`
    Equal,

    /// `lhs != rhs`
    NotEqual,

    /// `lhs < rhs`
    LessThan,

    /// `lhs > rhs`
    GreaterThan,
}

impl Relation {
    /// Returns the operator symbol of the relation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
        }
    }

    /// Decides the relation between two numbers. Equality is structural, so the integer `1` and
    /// the float `1.0` are not equal; ordering compares exact numbers exactly and anything
    /// involving a float as [`f64`]s.
    fn decide(self, lhs: &Expr, rhs: &Expr) -> Option<bool> {
        match self {
            Self::Equal | Self::NotEqual => self.decide_equality(lhs, rhs),
            Self::LessThan | Self::GreaterThan => {
                let ordering = match (lhs.as_rational(), rhs.as_rational()) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    _ => lhs.to_f64()?.partial_cmp(&rhs.to_f64()?)?,
                };
                Some(match self {
                    Self::LessThan => ordering == Ordering::Less,
                    _ => ordering == Ordering::Greater,
                })
            },
        }
    }

    /// Decides `==` and `!=` by structural equality. Orderings are left undecided.
    fn decide_equality(self, lhs: &Expr, rhs: &Expr) -> Option<bool> {
        match self {
            Self::Equal => Some(lhs == rhs),
            Self::NotEqual => Some(lhs != rhs),
            Self::LessThan | Self::GreaterThan => None,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An equation or inequality between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    /// The left-hand side.
    pub lhs: Expr,

    /// The right-hand side.
    pub rhs: Expr,

    /// The relation asserted between the two sides.
    pub relation: Relation,
}

impl Equation {
    /// Creates the canonical form of `lhs <relation> rhs`. If both sides are numbers, the
    /// relation is decided and the result is an [`Expr::Bool`].
    pub fn new(lhs: Expr, rhs: Expr, relation: Relation) -> Expr {
        if lhs.is_number() && rhs.is_number() {
            if let Some(value) = relation.decide(&lhs, &rhs) {
                return Expr::Bool(value);
            }
        }
        Expr::Equation(Box::new(Self { lhs, rhs, relation }))
    }

    /// Returns the truth value of the equation.
    ///
    /// Numbers are compared with the relation. Booleans, and sides that are structurally
    /// identical, can only be compared with `==` and `!=`. Anything else is undecidable.
    pub fn to_bool(&self) -> Result<bool, Error> {
        let decided = match (&self.lhs, &self.rhs) {
            (lhs, rhs) if lhs.is_number() && rhs.is_number() => self.relation.decide(lhs, rhs),
            (lhs, rhs) if matches!((lhs, rhs), (Expr::Bool(_), Expr::Bool(_))) || lhs == rhs => {
                self.relation.decide_equality(lhs, rhs)
            },
            _ => None,
        };
        decided.ok_or_else(|| Error::Undecidable(self.clone()))
    }

    /// Applies `f` to both sides, keeping the relation, and returns the canonical result.
    pub fn map(&self, mut f: impl FnMut(&Expr) -> Expr) -> Expr {
        let lhs = f(&self.lhs);
        let rhs = f(&self.rhs);
        Self::new(lhs, rhs, self.relation)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.relation, self.rhs)
    }
}

/// Strips factors that cannot affect whether a side equals zero.
///
/// - `c * u == 0` with a nonzero number `c` becomes `u == 0`.
/// - `u ^ n == 0` with a positive integer `n` becomes `u == 0`.
///
/// Both rules also apply to `!=`, and keep the relation. Conjunctions and disjunctions are
/// simplified argument-wise. Anything else is returned unchanged.
pub fn simplify_equation(expr: &Expr) -> Expr {
    match expr {
        Expr::Equation(eq) => simplify_zero_comparison(eq),
        Expr::And(args) => Expr::and(args.iter().map(simplify_equation)),
        Expr::Or(args) => Expr::or(args.iter().map(simplify_equation)),
        _ => expr.clone(),
    }
}

fn simplify_zero_comparison(eq: &Equation) -> Expr {
    if matches!(eq.relation, Relation::Equal | Relation::NotEqual) && eq.rhs.is_zero() {
        match &eq.lhs {
            Expr::Product(factors) => {
                if let Some((first, rest)) = factors.split_first() {
                    if first.is_number() && first.sign() != Some(Ordering::Equal) {
                        let rest = Expr::product(rest.iter().cloned());
                        return Equation::new(rest, Expr::from(0), eq.relation);
                    }
                }
            },
            Expr::Power(base, exp) if exp.as_integer().is_some_and(|n| *n > 0) => {
                return Equation::new((**base).clone(), Expr::from(0), eq.relation);
            },
            _ => {},
        }
    }
    Expr::Equation(Box::new(eq.clone()))
}
