//! Exact values of sine and cosine at multiples of `Pi / 6` and `Pi / 4`.
//!
//! Angles are keyed by the fraction of a full turn they represent, in `[0, 1)`: `Pi / 6` is keyed
//! by `1/12`, and `3/2 * Pi` by `3/4`. This makes every multiple of a known angle, no matter how
//! many turns it wraps around, a single lookup.

use cas_algebra::{primitive::rational, Expr};
use once_cell::sync::Lazy;
use rug::Rational;
use std::collections::HashMap;

/// Computes `x - m * floor(x / m)`, which lies in `[0, m)`.
pub(crate) fn modulo(x: &Rational, m: u32) -> Rational {
    let quotient = Rational::from(x / m).floor();
    x.clone() - quotient * m
}

/// Returns the fraction of a full turn represented by the angle `n * Pi`, in `[0, 1)`.
pub(crate) fn turn(n: &Rational) -> Rational {
    modulo(&Rational::from(n / 2), 1)
}

/// Sine values, keyed by turn.
pub(crate) static SIN_TABLE: Lazy<HashMap<Rational, Expr>> = Lazy::new(|| {
    let half = Expr::fraction(1, 2);
    let recip_root_two = Expr::from(2).sqrt().recip();
    let half_root_three = Expr::from(3).sqrt() / 2;

    let first_half = [
        (rational(0, 1), Expr::from(0)),
        (rational(1, 12), half.clone()),
        (rational(1, 8), recip_root_two.clone()),
        (rational(1, 6), half_root_three.clone()),
        (rational(1, 4), Expr::from(1)),
        (rational(1, 3), half_root_three),
        (rational(3, 8), recip_root_two),
        (rational(5, 12), half),
    ];

    // sin(t + 1/2 turn) = -sin(t)
    first_half
        .into_iter()
        .flat_map(|(t, value)| {
            let opposite = (t.clone() + rational(1, 2), -value.clone());
            [(t, value), opposite]
        })
        .collect()
});

/// Cosine values, keyed by turn.
pub(crate) static COS_TABLE: Lazy<HashMap<Rational, Expr>> = Lazy::new(|| {
    // cos(t) = sin(t + 1/4 turn)
    SIN_TABLE
        .iter()
        .map(|(t, value)| (modulo(&(t.clone() - rational(1, 4)), 1), value.clone()))
        .collect()
});
