//! A symbolic algebra kernel.
//!
//! Expressions are immutable trees of [`Expr`] nodes, always kept in a unique canonical form (see
//! the [`expr`] module). On top of the representation, this crate provides algebraic expansion
//! ([`expand`]), rationalization ([`rationalize`]), generalized polynomial analysis ([`poly`]),
//! substitution ([`substitute`]), propositional simplification of systems of equations
//! ([`logic`]), and a rewriting equation solver ([`solve`]).
//!
//! ```
//! use cas_algebra::{solve::isolate_variable, Expr};
//!
//! let x = Expr::symbol("x");
//! assert_eq!((&x + &x).to_string(), "2 * x");
//!
//! let eq = (2 * &x + 3).equals(7);
//! assert_eq!(isolate_variable(&eq, &x), x.equals(2));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `serde` traits for the comparison context and relations.

pub mod ctxt;
pub mod equation;
pub mod error;
pub mod expand;
pub mod expr;
pub mod logic;
pub mod order;
pub mod poly;
pub mod primitive;
pub mod rational;
pub mod rationalize;
pub mod simplify;
pub mod solve;
pub mod substitute;

pub use ctxt::Ctxt;
pub use equation::{Equation, Relation};
pub use error::Error;
pub use expr::{Expr, Function, Reducer, Registry};
