//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given numerator and denominator. The result is normalized, so
/// `rational(2, -4)` is `-1/2`.
///
/// # Panics
///
/// Panics if the denominator is zero. Use [`crate::rational::simplify_rational_number`] to build
/// an expression from a possibly zero denominator instead.
pub fn rational<N, D>(numer: N, denom: D) -> Rational
where
    Integer: From<N> + From<D>,
{
    Rational::from((Integer::from(numer), Integer::from(denom)))
}

/// Computes `n!`.
pub fn factorial(n: u32) -> Integer {
    Integer::from(Integer::factorial(n))
}

/// Computes the binomial coefficient `n! / (k! (n - k)!)`. Returns zero if `k > n`.
pub fn binomial(n: u32, k: u32) -> Integer {
    if k > n {
        return Integer::new();
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}
