//! Exact arithmetic over integers and fractions.
//!
//! The simplifier folds exact numbers through a small expression language, [`Rne`] ("rational
//! number expression"), whose evaluation is total: any undefined step (division by zero, zero to
//! a non-positive power) makes the whole tree evaluate to [`Expr::Undefined`].

use crate::expr::Expr;
use rug::{ops::Pow, Integer, Rational};

/// Builds the canonical number `numerator / denominator`: an [`Expr::Integer`] if the quotient is
/// whole, an [`Expr::Fraction`] in lowest terms with a positive denominator otherwise, or
/// [`Expr::Undefined`] if the denominator is zero.
pub fn simplify_rational_number(numerator: Integer, denominator: Integer) -> Expr {
    if denominator == 0 {
        return Expr::Undefined;
    }
    Expr::from(Rational::from((numerator, denominator)))
}

/// A tree of exact arithmetic on rational numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Rne {
    /// A rational number.
    Number(Rational),

    /// `a + b`
    Sum(Box<Rne>, Box<Rne>),

    /// `a - b`
    Difference(Box<Rne>, Box<Rne>),

    /// `-a`
    Negate(Box<Rne>),

    /// `a * b`
    Product(Box<Rne>, Box<Rne>),

    /// `a / b`
    Quotient(Box<Rne>, Box<Rne>),

    /// `a ^ n`
    Power(Box<Rne>, i32),
}

impl Rne {
    /// Creates a leaf from an exact number expression.
    pub fn number(expr: &Expr) -> Option<Self> {
        expr.as_rational().map(Self::Number)
    }

    /// Creates `a + b`.
    pub fn sum(a: Self, b: Self) -> Self {
        Self::Sum(Box::new(a), Box::new(b))
    }

    /// Creates `a * b`.
    pub fn product(a: Self, b: Self) -> Self {
        Self::Product(Box::new(a), Box::new(b))
    }

    /// Creates `a ^ n`.
    pub fn power(a: Self, n: i32) -> Self {
        Self::Power(Box::new(a), n)
    }

    /// Evaluates the tree. Returns [`None`] if any step is undefined.
    pub fn evaluate(&self) -> Option<Rational> {
        match self {
            Self::Number(r) => Some(r.clone()),
            Self::Sum(a, b) => Some(a.evaluate()? + b.evaluate()?),
            Self::Difference(a, b) => Some(a.evaluate()? - b.evaluate()?),
            Self::Negate(a) => Some(-a.evaluate()?),
            Self::Product(a, b) => Some(a.evaluate()? * b.evaluate()?),
            Self::Quotient(a, b) => evaluate_quotient(a.evaluate()?, b.evaluate()?),
            Self::Power(a, n) => evaluate_power(a.evaluate()?, *n),
        }
    }
}

/// Divides two rationals. Returns [`None`] when dividing by zero.
pub fn evaluate_quotient(v: Rational, w: Rational) -> Option<Rational> {
    if w.cmp0().is_eq() {
        None
    } else {
        Some(v / w)
    }
}

/// Raises a rational to an integer power.
///
/// - A nonzero base follows the usual rules, with `v ^ 0 = 1` and negative powers inverting.
/// - A zero base gives `0` for positive powers and [`None`] otherwise.
pub fn evaluate_power(v: Rational, n: i32) -> Option<Rational> {
    if v.cmp0().is_eq() {
        return (n >= 1).then(Rational::new);
    }
    if n >= 0 {
        Some(v.pow(n.unsigned_abs()))
    } else {
        Some(v.recip().pow(n.unsigned_abs()))
    }
}

/// Evaluates a rational number expression into a canonical number, or [`Expr::Undefined`].
pub fn simplify_rne(rne: &Rne) -> Expr {
    match rne.evaluate() {
        Some(value) => Expr::from(value),
        None => Expr::Undefined,
    }
}
