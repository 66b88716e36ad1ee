use crate::{
    expr::Expr,
    order::precedes,
    rational::{simplify_rne, Rne},
};
use super::merge::{simplify_operands, Operator, Pair};

/// Multiplication.
pub(crate) struct Mul;

impl Operator for Mul {
    fn operands(expr: &Expr) -> Option<&[Expr]> {
        match expr {
            Expr::Product(factors) => Some(factors),
            _ => None,
        }
    }

    fn into_operands(expr: Expr) -> Result<Vec<Expr>, Expr> {
        match expr {
            Expr::Product(factors) => Ok(factors),
            expr => Err(expr),
        }
    }

    fn simplify_pair(p: &Expr, q: &Expr) -> Pair {
        if let (Some(a), Some(b)) = (Rne::number(p), Rne::number(q)) {
            return non_one(simplify_rne(&Rne::product(a, b)));
        }

        match (p, q) {
            (Expr::Float(a), _) if q.is_number() => float_product(*a, q),
            (_, Expr::Float(b)) if p.is_number() => float_product(*b, p),
            _ if p.is_one() => Pair::Combined(q.clone()),
            _ if q.is_one() => Pair::Combined(p.clone()),
            // a number has no base: `2 * 2 ^ (1/2)` stays as it is
            _ if p.is_number() || q.is_number() => ordered(p, q),
            _ if p.base() == q.base() => {
                let exponent = p.exponent() + q.exponent();
                non_one(p.base().clone().pow(exponent))
            },
            _ => ordered(p, q),
        }
    }
}

fn ordered(p: &Expr, q: &Expr) -> Pair {
    if precedes(q, p) {
        Pair::Swapped
    } else {
        Pair::Ordered
    }
}

/// Multiplies a float with another number.
fn float_product(a: f64, other: &Expr) -> Pair {
    let value = a * other.to_f64().unwrap_or(f64::NAN);
    if value == 1.0 {
        Pair::Vanished
    } else {
        Pair::Combined(Expr::Float(value))
    }
}

fn non_one(expr: Expr) -> Pair {
    if expr.is_one() {
        Pair::Vanished
    } else {
        Pair::Combined(expr)
    }
}

/// Builds the canonical product of the given factors.
///
/// - [`Expr::Undefined`] anywhere makes the product undefined.
/// - No factors is `1`, and a single factor is itself.
/// - A factor of integer `0` makes the product `0`.
/// - Otherwise, the factors are flattened, sorted, and combined. Numbers are folded together,
///   factors with equal bases `b ^ m` and `b ^ n` become `b ^ (m + n)`, and ones are dropped.
pub fn simplify_product(mut factors: Vec<Expr>) -> Expr {
    if factors.iter().any(|factor| matches!(factor, Expr::Undefined)) {
        return Expr::Undefined;
    }

    if factors.len() <= 1 {
        return factors.pop().unwrap_or_else(|| Expr::from(1));
    }

    if factors.iter().any(Expr::is_zero) {
        return Expr::from(0);
    }

    let mut factors = simplify_operands::<Mul>(factors);
    match factors.len() {
        0 => Expr::from(1),
        1 => factors.remove(0),
        // combining powers can produce a nested product, or a number away from the front
        _ if factors.iter().any(|factor| matches!(factor, Expr::Product(_)))
            || factors[1..].iter().any(Expr::is_number) => simplify_product(factors),
        _ => Expr::Product(factors),
    }
}
