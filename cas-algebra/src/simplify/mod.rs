//! Canonical simplification of sums, products, and powers.
//!
//! The constructors on [`Expr`](crate::expr::Expr) route through the functions in this module,
//! so there is no separate "simplify" pass: an expression is simplified as it is built.
//!
//! Sums and products share one engine, [`merge`]. Each operator describes how to simplify a
//! single pair of adjacent operands (fold two numbers, combine like terms, drop an identity, or
//! report that the pair is out of order), and the engine sorts and combines a whole operand list
//! by repeatedly merging already-canonical lists. The engine runs in a loop, not by recursion, so
//! long operand lists cannot overflow the stack.

pub mod fraction;
mod merge;
mod power;
mod product;
mod sum;

pub use power::simplify_power;
pub use product::simplify_product;
pub use sum::simplify_sum;
