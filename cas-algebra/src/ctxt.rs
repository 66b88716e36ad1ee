//! Settings that affect how expressions are compared.
//!
//! The only setting today is the float tolerance. Structural equality of two [`Expr::Float`]s is
//! exact by default; inside [`Ctxt::scope`] with a tolerance `t`, two floats `a` and `b` are equal
//! when `|a - b| < t`. Every structural comparison performed by the kernel (like-term detection,
//! the [`Expr::has`] search, equation truth values) reads the tolerance of the current thread.
//!
//! [`Expr::Float`]: crate::expr::Expr::Float
//! [`Expr::has`]: crate::expr::Expr::has

use std::cell::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

thread_local! {
    static CURRENT: Cell<Ctxt> = const { Cell::new(Ctxt::new()) };
}

/// Comparison settings for the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// When set, floats closer than this value are considered equal.
    pub tolerance: Option<f64>,
}

impl Ctxt {
    /// Creates a context with exact float comparison.
    pub const fn new() -> Self {
        Self { tolerance: None }
    }

    /// Creates a context that compares floats with the given tolerance.
    pub const fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance: Some(tolerance) }
    }

    /// Returns the context that is active on the current thread.
    pub fn current() -> Self {
        CURRENT.with(Cell::get)
    }

    /// Runs `f` with this context active on the current thread. The previous context is restored
    /// when `f` returns or unwinds.
    pub fn scope<R>(self, f: impl FnOnce() -> R) -> R {
        struct Restore(Ctxt);

        impl Drop for Restore {
            fn drop(&mut self) {
                CURRENT.with(|current| current.set(self.0));
            }
        }

        let _restore = Restore(CURRENT.with(|current| current.replace(self)));
        f()
    }

    /// Returns true if the two floats are equal under this context.
    pub fn floats_equal(&self, a: f64, b: f64) -> bool {
        match self.tolerance {
            Some(tolerance) => (a - b).abs() < tolerance,
            None => a == b,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exact_by_default() {
        assert_eq!(Ctxt::current(), Ctxt::new());
        assert!(!Ctxt::current().floats_equal(0.1 + 0.2, 0.3));
    }

    #[test]
    fn scope_restores() {
        let inside = Ctxt::with_tolerance(1e-9).scope(|| {
            let nested = Ctxt::new().scope(Ctxt::current);
            assert_eq!(nested, Ctxt::new());
            Ctxt::current()
        });
        assert_eq!(inside, Ctxt::with_tolerance(1e-9));
        assert_eq!(Ctxt::current(), Ctxt::new());
    }

    #[test]
    fn scope_restores_on_unwind() {
        let result = std::panic::catch_unwind(|| {
            Ctxt::with_tolerance(0.5).scope(|| panic!("inside scope"))
        });
        assert!(result.is_err());
        assert_eq!(Ctxt::current(), Ctxt::new());
    }

    #[test]
    fn tolerance_comparison() {
        let ctxt = Ctxt::with_tolerance(0.00001);
        assert!(ctxt.floats_equal(0.1 + 0.2, 0.3));
        assert!(!ctxt.floats_equal(0.1, 0.2));
    }
}
