//! Solving equations and systems of equations for a variable.
//!
//! The solver works by rewriting rather than by search. [`isolate_variable`] repeatedly moves
//! everything that does not contain the variable to the other side of an equation, until the
//! equation has the form `x == v`. Some rewrites are only valid under conditions (dividing by a
//! coefficient that could be zero, for example), so isolation may split an equation into a
//! disjunction of cases, each paired with the conditions under which it holds.
//!
//! [`eliminate_variable`] builds on isolation to remove a variable from a system of equations,
//! and [`check_variable`] detects a few systems that can never hold.
//!
//! Failing to isolate or eliminate a variable is not an error: the input is returned unchanged.

mod check;
mod eliminate;
mod isolate;
pub mod step;

pub use check::{check_variable, check_variable_eqs};
pub use eliminate::{eliminate_variable, eliminate_variable_eqs, eliminate_variables};
pub use isolate::{isolate_variable, isolate_variable_eq, isolate_variable_with_steps};
pub use step::{Step, StepCollector};
