use crate::{
    ctxt::Ctxt,
    expr::Expr,
    order::precedes,
    rational::{simplify_rne, Rne},
};
use super::merge::{simplify_operands, Operator, Pair};

/// Addition.
pub(crate) struct Add;

impl Operator for Add {
    fn operands(expr: &Expr) -> Option<&[Expr]> {
        match expr {
            Expr::Sum(terms) => Some(terms),
            _ => None,
        }
    }

    fn into_operands(expr: Expr) -> Result<Vec<Expr>, Expr> {
        match expr {
            Expr::Sum(terms) => Ok(terms),
            expr => Err(expr),
        }
    }

    fn simplify_pair(p: &Expr, q: &Expr) -> Pair {
        if let (Some(a), Some(b)) = (Rne::number(p), Rne::number(q)) {
            return nonzero(simplify_rne(&Rne::sum(a, b)));
        }

        match (p, q) {
            (Expr::Float(a), _) if q.is_number() => float_sum(*a, q),
            (_, Expr::Float(b)) if p.is_number() => float_sum(*b, p),
            _ if p.is_zero() => Pair::Combined(q.clone()),
            _ if q.is_zero() => Pair::Combined(p.clone()),
            _ if p.term() == q.term() => {
                let coefficient = p.constant() + q.constant();
                if let Expr::Float(c) = coefficient {
                    if Ctxt::current().floats_equal(c, 0.0) {
                        return Pair::Vanished;
                    }
                }
                let term = p.term().iter().cloned().chain(std::iter::once(coefficient));
                nonzero(Expr::product(term))
            },
            _ if precedes(q, p) => Pair::Swapped,
            _ => Pair::Ordered,
        }
    }
}

/// Adds a float to another number.
fn float_sum(a: f64, other: &Expr) -> Pair {
    let value = a + other.to_f64().unwrap_or(f64::NAN);
    if Ctxt::current().floats_equal(value, 0.0) {
        Pair::Vanished
    } else {
        Pair::Combined(Expr::Float(value))
    }
}

fn nonzero(expr: Expr) -> Pair {
    if expr.is_zero() {
        Pair::Vanished
    } else {
        Pair::Combined(expr)
    }
}

/// Builds the canonical sum of the given addends.
///
/// - [`Expr::Undefined`] anywhere makes the sum undefined.
/// - No addends is `0`, and a single addend is itself.
/// - Otherwise, the addends are flattened, sorted, and combined. Numbers are folded together
///   (exactly, unless a float is involved), like terms `a * t` and `b * t` become `(a + b) * t`,
///   and zeros are dropped.
pub fn simplify_sum(mut addends: Vec<Expr>) -> Expr {
    if addends.iter().any(|addend| matches!(addend, Expr::Undefined)) {
        return Expr::Undefined;
    }

    if addends.len() <= 1 {
        return addends.pop().unwrap_or_default();
    }

    let mut terms = simplify_operands::<Add>(addends);
    match terms.len() {
        0 => Expr::from(0),
        1 => terms.remove(0),
        _ if terms.iter().any(|term| matches!(term, Expr::Sum(_))) => simplify_sum(terms),
        _ => Expr::Sum(terms),
    }
}
