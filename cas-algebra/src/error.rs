//! Errors reported by the fallible operations of the algebra kernel.
//!
//! Most operations in this crate are total: anything that cannot be simplified is left in
//! canonical form, and mathematically undefined results are represented by [`Expr::Undefined`].
//! The variants here cover the few operations that have no sensible expression to return.

use crate::{equation::Equation, expr::Expr};
use thiserror::Error;

/// An error produced by the algebra kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An equation was asked for its truth value, but at least one side is not a number.
    #[error("cannot decide the truth of `{0}`: both sides must be numbers")]
    Undecidable(Equation),

    /// A polynomial was divided by the zero polynomial.
    #[error("cannot divide by the zero polynomial")]
    ZeroDivisor,

    /// An expression could not be read as a polynomial in the given variable.
    #[error("`{expr}` is not a polynomial in `{var}`")]
    NotPolynomial {
        /// The offending expression.
        expr: Expr,

        /// The variable the expression was read in.
        var: Expr,
    },

    /// A function was looked up in a [`Registry`](crate::expr::Registry) that does not contain
    /// it.
    #[error("unknown function `{name}`")]
    UnknownFunction {
        /// The name that was looked up.
        name: String,

        /// Names of registered functions that are similar to the requested one.
        suggestions: Vec<String>,
    },
}

impl Error {
    /// Creates an [`Error::NotPolynomial`].
    pub(crate) fn not_polynomial(expr: &Expr, var: &Expr) -> Self {
        Self::NotPolynomial {
            expr: expr.clone(),
            var: var.clone(),
        }
    }
}
