/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step, and
/// for [`Vec`], which records them in order.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Rewrites applied while isolating a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a == x` becomes `x == a`
    SwapSides,

    /// `f(x) == g(x)` becomes `f(x) - g(x) == 0`
    CollectOnLeft,

    /// `n / d == a` becomes `n == a * d`
    ClearDenominator,

    /// `a x^2 + b x + c == 0` is solved case by case on `a` and `b`
    QuadraticFormula,

    /// `a x + b == c` becomes `x == (c - b) / a`
    LinearSolve,

    /// `x + a == b` becomes `x == b - a`
    SubtractTerms,

    /// `a x == b` becomes `x == b / a`
    DivideFactors,

    /// `u ^ (1/2) == a` becomes `u == a ^ 2`
    SquareBothSides,

    /// `u ^ (-1/2) == a` becomes `u == a ^ -2`
    InvertReciprocalRoot,

    /// `u ^ 2 == a` becomes `u == sqrt(a)` or `u == -sqrt(a)`
    SquareRoot,
}
