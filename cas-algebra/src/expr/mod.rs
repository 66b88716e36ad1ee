//! The canonical expression tree.
//!
//! Every [`Expr`] in this crate is kept in **canonical form**: the constructors ([`Expr::sum`],
//! [`Expr::product`], [`Expr::power`], [`Expr::and`], [`Expr::or`], [`Equation::new`], and the
//! arithmetic operators) never return an unsimplified node. Sums and products are flattened and
//! sorted with the [order relation](crate::order), numbers are folded together, like terms and
//! like factors are combined, and identities are removed. Building `x + x` therefore produces
//! `2 * x` directly, and building `x / x` produces `1`.
//!
//! Because canonical form is unique for the expressions the simplifier understands, the
//! [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions are equal if they
//! are the same kind of node with equal children, in the same order. Floats are compared with the
//! tolerance of the active [`Ctxt`], which makes [`Expr`] deliberately not [`Eq`].
//!
//! Trees are immutable values. Operations take `&Expr` and return new expressions, cloning the
//! subtrees they keep.

pub mod display;
pub mod function;
mod iter;
mod ops;

pub use function::{Function, Reducer, Registry};
pub use iter::ExprIter;

use crate::{
    ctxt::Ctxt,
    equation::{Equation, Relation},
    rational::simplify_rational_number,
    simplify::{simplify_power, simplify_product, simplify_sum},
};
use rug::{Integer, Rational};
use std::{cmp::Ordering, slice};

/// A symbolic expression in canonical form.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
pub enum Expr {
    /// The result of an undefined operation, such as `0 ^ -1`.
    Undefined,

    /// A truth value, produced by deciding an equation or simplifying a logical connective.
    Bool(bool),

    /// An exact integer.
    Integer(Integer),

    /// An exact fraction whose denominator is greater than one.
    Fraction(Rational),

    /// A double-precision float.
    Float(f64),

    /// A named variable, such as `x` or `Pi`.
    Symbol(String),

    /// At least two addends, sorted, with like terms combined.
    Sum(Vec<Expr>),

    /// At least two factors, sorted, with like bases combined.
    Product(Vec<Expr>),

    /// A base raised to an exponent.
    Power(Box<Expr>, Box<Expr>),

    /// A named function call.
    Function(Function),

    /// A conjunction of at least two arguments.
    And(Vec<Expr>),

    /// A disjunction of at least two arguments.
    Or(Vec<Expr>),

    /// A relation between two expressions.
    Equation(Box<Equation>),
}

impl Default for Expr {
    fn default() -> Self {
        Self::Integer(Integer::new())
    }
}

/// Structural equality. Floats are compared with the tolerance of [`Ctxt::current`].
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Fraction(a), Self::Fraction(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => Ctxt::current().floats_equal(*a, *b),
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Sum(a), Self::Sum(b))
            | (Self::Product(a), Self::Product(b))
            | (Self::And(a), Self::And(b))
            | (Self::Or(a), Self::Or(b)) => a == b,
            (Self::Power(base_a, exp_a), Self::Power(base_b, exp_b)) => {
                base_a == base_b && exp_a == exp_b
            },
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Equation(a), Self::Equation(b)) => a == b,
            _ => false,
        }
    }
}

impl Expr {
    /// Creates a symbol with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates the exact fraction `numerator / denominator`, reduced to lowest terms. A zero
    /// denominator produces [`Expr::Undefined`], and a whole result produces an
    /// [`Expr::Integer`].
    pub fn fraction(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> Self {
        simplify_rational_number(numerator.into(), denominator.into())
    }

    /// Creates the canonical sum of the given addends.
    pub fn sum(addends: impl IntoIterator<Item = Expr>) -> Self {
        simplify_sum(addends.into_iter().collect())
    }

    /// Creates the canonical product of the given factors.
    pub fn product(factors: impl IntoIterator<Item = Expr>) -> Self {
        simplify_product(factors.into_iter().collect())
    }

    /// Creates the canonical power `base ^ exponent`.
    pub fn power(base: impl Into<Expr>, exponent: impl Into<Expr>) -> Self {
        simplify_power(base.into(), exponent.into())
    }

    /// Raises this expression to the given exponent.
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        simplify_power(self, exponent.into())
    }

    /// Returns the square root of this expression, `self ^ (1/2)`.
    pub fn sqrt(self) -> Self {
        self.pow(Self::fraction(1, 2))
    }

    /// Returns the reciprocal of this expression, `self ^ -1`.
    pub fn recip(self) -> Self {
        self.pow(-1)
    }

    /// Creates the equation `self == rhs`.
    pub fn equals(self, rhs: impl Into<Expr>) -> Self {
        Equation::new(self, rhs.into(), Relation::Equal)
    }

    /// Creates the equation `self != rhs`.
    pub fn not_equals(self, rhs: impl Into<Expr>) -> Self {
        Equation::new(self, rhs.into(), Relation::NotEqual)
    }

    /// Creates the equation `self < rhs`.
    pub fn less_than(self, rhs: impl Into<Expr>) -> Self {
        Equation::new(self, rhs.into(), Relation::LessThan)
    }

    /// Creates the equation `self > rhs`.
    pub fn greater_than(self, rhs: impl Into<Expr>) -> Self {
        Equation::new(self, rhs.into(), Relation::GreaterThan)
    }

    /// Returns true if the expression is a number: an integer, fraction, or float.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Fraction(_) | Self::Float(_))
    }

    /// Returns true if the expression is an exact number: an integer or fraction.
    pub fn is_rational(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Fraction(_))
    }

    /// Returns the value of an exact number.
    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Integer(n) => Some(Rational::from(n)),
            Self::Fraction(r) => Some(r.clone()),
            _ => None,
        }
    }

    /// Returns the value of an integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if the expression is the integer `0`.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Integer(n) if *n == 0)
    }

    /// Returns true if the expression is the integer `1`.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Integer(n) if *n == 1)
    }

    /// Returns the sign of a number, or [`None`] if the expression is not a number (or is a NaN
    /// float).
    pub fn sign(&self) -> Option<Ordering> {
        match self {
            Self::Integer(n) => Some(n.cmp0()),
            Self::Fraction(r) => Some(r.cmp0()),
            Self::Float(x) => x.partial_cmp(&0.0),
            _ => None,
        }
    }

    /// Returns true if the expression is a number less than zero.
    pub fn is_negative(&self) -> bool {
        self.sign() == Some(Ordering::Less)
    }

    /// Returns the value of a number as an [`f64`].
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(n.to_f64()),
            Self::Fraction(r) => Some(r.to_f64()),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the equation wrapped by this expression.
    pub fn as_equation(&self) -> Option<&Equation> {
        match self {
            Self::Equation(eq) => Some(eq),
            _ => None,
        }
    }

    /// Returns the arguments of a function call or logical connective.
    pub fn args(&self) -> Option<&[Expr]> {
        match self {
            Self::Function(f) => Some(f.args()),
            Self::And(args) | Self::Or(args) => Some(args),
            _ => None,
        }
    }

    /// Returns the base of this expression when viewed as a power. Anything that is not a power
    /// is its own base.
    pub fn base(&self) -> &Expr {
        match self {
            Self::Power(base, _) => base,
            _ => self,
        }
    }

    /// Returns the exponent of this expression when viewed as a power. Anything that is not a
    /// power has exponent `1`.
    pub fn exponent(&self) -> Expr {
        match self {
            Self::Power(_, exp) => (**exp).clone(),
            _ => Self::from(1),
        }
    }

    /// Returns the non-constant part of this expression when viewed as a term of a sum.
    ///
    /// - A product with a leading number returns the remaining factors.
    /// - Any other product returns all of its factors.
    /// - Anything else returns itself as the only factor.
    pub fn term(&self) -> &[Expr] {
        match self {
            Self::Product(factors) => match factors.split_first() {
                Some((first, rest)) if first.is_number() => rest,
                _ => factors,
            },
            _ => slice::from_ref(self),
        }
    }

    /// Returns the numeric coefficient of this expression when viewed as a term of a sum: the
    /// leading number of a product, or `1`.
    pub fn constant(&self) -> Expr {
        match self {
            Self::Product(factors) => match factors.first() {
                Some(first) if first.is_number() => first.clone(),
                _ => Self::from(1),
            },
            _ => Self::from(1),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first). The expression itself is visited last.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Integer(Integer::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Integer(Integer::from(value))
    }
}

impl From<u32> for Expr {
    fn from(value: u32) -> Self {
        Self::Integer(Integer::from(value))
    }
}

impl From<Integer> for Expr {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

/// Whole rationals become [`Expr::Integer`]s.
impl From<Rational> for Expr {
    fn from(value: Rational) -> Self {
        if *value.denom() == 1 {
            Self::Integer(value.into_numer_denom().0)
        } else {
            Self::Fraction(value)
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::symbol(name)
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl From<Equation> for Expr {
    fn from(eq: Equation) -> Self {
        Self::Equation(Box::new(eq))
    }
}
