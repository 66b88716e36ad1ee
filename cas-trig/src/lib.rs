//! Trigonometric functions for the `cas-algebra` kernel.
//!
//! Each function here builds a [`Function`] call carrying its own reduction procedure, so calls
//! simplify as soon as they are built, and again whenever they are rebuilt by substitution:
//!
//! ```
//! use cas_algebra::Expr;
//! use cas_trig::{sin, PI};
//!
//! let x = Expr::symbol("x");
//! let call = sin(&x);
//! assert_eq!(call.substitute(&x, &(PI.clone() / 6)), Expr::fraction(1, 2));
//! ```
//!
//! Angles are in radians. `sin` and `cos` are evaluated exactly at multiples of `Pi / 6` and
//! `Pi / 4`, folded through their symmetries otherwise. The remaining functions are only
//! evaluated for float arguments.

mod reduce;
mod table;

use cas_algebra::{Expr, Function, Reducer, Registry};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// The symbol `Pi`.
pub static PI: Lazy<Expr> = Lazy::new(|| Expr::symbol("Pi"));

static SIN: Lazy<Arc<dyn Reducer>> = Lazy::new(|| Arc::new(reduce::reduce_sin));
static COS: Lazy<Arc<dyn Reducer>> = Lazy::new(|| Arc::new(reduce::reduce_cos));
static TAN: Lazy<Arc<dyn Reducer>> = Lazy::new(|| Arc::new(reduce::reduce_tan));
static ASIN: Lazy<Arc<dyn Reducer>> = Lazy::new(|| Arc::new(reduce::reduce_asin));
static ATAN: Lazy<Arc<dyn Reducer>> = Lazy::new(|| Arc::new(reduce::reduce_atan));
static ATAN2: Lazy<Arc<dyn Reducer>> = Lazy::new(|| Arc::new(reduce::reduce_atan2));

/// `sin(x)`
pub fn sin(x: impl Into<Expr>) -> Expr {
    Function::new("sin", Arc::clone(&SIN), [x.into()])
}

/// `cos(x)`
pub fn cos(x: impl Into<Expr>) -> Expr {
    Function::new("cos", Arc::clone(&COS), [x.into()])
}

/// `tan(x)`
pub fn tan(x: impl Into<Expr>) -> Expr {
    Function::new("tan", Arc::clone(&TAN), [x.into()])
}

/// `asin(x)`
pub fn asin(x: impl Into<Expr>) -> Expr {
    Function::new("asin", Arc::clone(&ASIN), [x.into()])
}

/// `atan(x)`
pub fn atan(x: impl Into<Expr>) -> Expr {
    Function::new("atan", Arc::clone(&ATAN), [x.into()])
}

/// `atan2(y, x)`, the angle of the point `(x, y)` from the positive x-axis.
pub fn atan2(y: impl Into<Expr>, x: impl Into<Expr>) -> Expr {
    Function::new("atan2", Arc::clone(&ATAN2), [y.into(), x.into()])
}

/// Converts an angle in degrees to radians.
pub fn to_radians(n: impl Into<Expr>) -> Expr {
    n.into() * PI.clone() / 180
}

/// Converts an angle in radians to degrees.
pub fn to_degrees(n: impl Into<Expr>) -> Expr {
    180 * n.into() / PI.clone()
}

/// Returns a [`Registry`] containing every function in this crate, for looking them up by name.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    for (name, reducer) in [
        ("sin", &SIN),
        ("cos", &COS),
        ("tan", &TAN),
        ("asin", &ASIN),
        ("atan", &ATAN),
        ("atan2", &ATAN2),
    ] {
        registry.register(name, Arc::clone(reducer));
    }
    registry
}
