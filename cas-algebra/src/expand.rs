//! Algebraic expansion: distributing products over sums and expanding integer powers of sums.

use crate::{expr::Expr, primitive::binomial};

/// Distributes the product `r * s` over any sums in `r` or `s`. The operands are assumed to be
/// expanded already.
pub fn expand_product(r: &Expr, s: &Expr) -> Expr {
    match (r, s) {
        (Expr::Sum(terms), _) => Expr::sum(terms.iter().map(|term| expand_product(term, s))),
        (_, Expr::Sum(terms)) => Expr::sum(terms.iter().map(|term| expand_product(r, term))),
        _ => Expr::product([r.clone(), s.clone()]),
    }
}

/// Expands `u ^ n` with the binomial theorem when `u` is a sum. The base is assumed to be
/// expanded already.
///
/// The terms of `u` are added one at a time. After each step, `powers[k]` holds the expanded
/// `k`-th power of the terms added so far, for every `k` up to `n`.
pub fn expand_power(u: &Expr, n: u32) -> Expr {
    let Expr::Sum(terms) = u else {
        return u.clone().pow(n);
    };

    let mut powers = (0..=n)
        .map(|k| Expr::from(i32::from(k == 0)))
        .collect::<Vec<_>>();
    for term in terms {
        powers = (0..=n)
            .map(|j| {
                Expr::sum(powers[..=j as usize].iter().zip(0..).map(|(power, k)| {
                    let coefficient = Expr::from(binomial(j, k)) * term.clone().pow(j - k);
                    expand_product(&coefficient, power)
                }))
            })
            .collect();
    }
    powers.pop().unwrap_or_default()
}

impl Expr {
    /// Fully expands this expression: products are distributed over sums, and sums raised to
    /// integer powers of at least two are expanded. Both sides of equations, arguments of
    /// connectives, and arguments of function calls are expanded too.
    ///
    /// Powers whose exponents do not fit in a [`u32`] are left as they are.
    pub fn algebraic_expand(&self) -> Expr {
        match self {
            Self::Sum(terms) => Self::sum(terms.iter().map(Self::algebraic_expand)),
            Self::Product(factors) => factors
                .iter()
                .map(Self::algebraic_expand)
                .reduce(|acc, factor| expand_product(&acc, &factor))
                .unwrap_or_else(|| Self::from(1)),
            Self::Power(base, exp) => match exp.as_integer().and_then(|n| n.to_u32()) {
                Some(n) if n >= 2 => expand_power(&base.algebraic_expand(), n),
                _ => self.clone(),
            },
            Self::Function(_) | Self::And(_) | Self::Or(_) => {
                self.map_args(Self::algebraic_expand)
            },
            Self::Equation(eq) => eq.map(Self::algebraic_expand),
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::Function;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn product_of_sums() {
        let x = Expr::symbol("x");
        let expr = (&x + 2) * (&x + 3) * (&x + 4);
        assert_eq!(
            expr.algebraic_expand(),
            24 + 26 * &x + 9 * x.clone().pow(2) + x.pow(3),
        );
    }

    #[test]
    fn square_of_sum() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let expr = (&x + &y).pow(2);
        assert_eq!(
            expr.algebraic_expand(),
            x.clone().pow(2) + 2 * &x * &y + y.pow(2),
        );
    }

    #[test]
    fn square_of_trinomial() {
        let [a, b, c] = ["a", "b", "c"].map(Expr::symbol);
        let expr = (&a + &b + &c).pow(2);
        assert_eq!(
            expr.algebraic_expand(),
            a.clone().pow(2) + b.clone().pow(2) + c.clone().pow(2)
                + 2 * &a * &b + 2 * &a * &c + 2 * &b * &c,
        );
    }

    #[test]
    fn power_of_long_sum() {
        let symbols = (0..40).map(|i| Expr::symbol(format!("x{i}"))).collect::<Vec<_>>();
        let expr = Expr::sum(symbols).pow(2);
        let Expr::Sum(terms) = expr.algebraic_expand() else {
            panic!("expected a sum");
        };
        assert_eq!(terms.len(), 40 + 40 * 39 / 2);
    }

    #[test]
    fn nested_powers() {
        let x = Expr::symbol("x");
        let expr = ((&x + 1).pow(2) + 1).pow(2);
        assert_eq!(
            expr.algebraic_expand(),
            4 + 8 * &x + 8 * x.clone().pow(2) + 4 * x.clone().pow(3) + x.pow(4),
        );
    }

    #[test]
    fn cancellation() {
        let x = Expr::symbol("x");
        let expr = (&x + 1) * (&x - 1) - x.clone().pow(2);
        assert_eq!(expr.algebraic_expand(), Expr::from(-1));
    }

    #[test]
    fn negative_and_fractional_powers_stay() {
        let x = Expr::symbol("x");
        let inverse = (&x + 1).pow(-1);
        assert_eq!(inverse.algebraic_expand(), inverse);
        let root = (&x + 1).sqrt();
        assert_eq!(root.algebraic_expand(), root);
    }

    #[test]
    fn inside_calls_and_equations() {
        let x = Expr::symbol("x");
        let call = Function::opaque("f", [(&x + 1) * 2]);
        assert_eq!(call.algebraic_expand(), Function::opaque("f", [2 * &x + 2]));

        let eq = (&x * (&x + 1)).less_than(0);
        assert_eq!(eq.algebraic_expand(), (&x + x.clone().pow(2)).less_than(0));
    }
}
