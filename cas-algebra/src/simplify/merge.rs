//! The merge engine shared by sums and products.

use crate::expr::Expr;
use std::iter::Peekable;

/// The outcome of simplifying two adjacent operands `p` and `q`, in that order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Pair {
    /// The pair cancelled out to the identity of the operator.
    Vanished,

    /// The pair combined into a single operand.
    Combined(Expr),

    /// The pair is already in order: `[p, q]`.
    Ordered,

    /// The pair is out of order: `[q, p]`.
    Swapped,

    /// At least one of the pair was a nested node of the operator, and the pair expanded into
    /// this sorted run of operands.
    Run(Vec<Expr>),
}

/// An associative, commutative operator whose operand lists can be merged.
pub(crate) trait Operator {
    /// Returns the operands of `expr` if it is a node of this operator.
    fn operands(expr: &Expr) -> Option<&[Expr]>;

    /// Takes the operands out of `expr` if it is a node of this operator.
    fn into_operands(expr: Expr) -> Result<Vec<Expr>, Expr>;

    /// Simplifies two adjacent operands, neither of which is a node of this operator.
    fn simplify_pair(p: &Expr, q: &Expr) -> Pair;
}

/// Returns the operands of `expr`, or `expr` as the only operand.
fn flatten<O: Operator>(expr: Expr) -> Vec<Expr> {
    O::into_operands(expr).unwrap_or_else(|expr| vec![expr])
}

/// Simplifies two adjacent operands, flattening nested nodes of the operator.
fn pair<O: Operator>(p: &Expr, q: &Expr) -> Pair {
    if O::operands(p).is_none() && O::operands(q).is_none() {
        return O::simplify_pair(p, q);
    }
    Pair::Run(merge::<O>(flatten::<O>(p.clone()), flatten::<O>(q.clone())))
}

/// Merges two canonical operand lists into one canonical operand list.
pub(crate) fn merge<O: Operator>(p: Vec<Expr>, q: Vec<Expr>) -> Vec<Expr> {
    let mut out = Vec::with_capacity(p.len() + q.len());
    let mut p = p.into_iter().peekable();
    let mut q = q.into_iter().peekable();

    loop {
        let outcome = match (p.peek(), q.peek()) {
            (Some(a), Some(b)) => pair::<O>(a, b),
            _ => break,
        };
        match outcome {
            Pair::Vanished => advance_both(&mut p, &mut q),
            Pair::Combined(expr) => {
                out.push(expr);
                advance_both(&mut p, &mut q);
            },
            Pair::Run(run) => {
                out.extend(run);
                advance_both(&mut p, &mut q);
            },
            Pair::Ordered => out.extend(p.next()),
            Pair::Swapped => out.extend(q.next()),
        }
    }

    out.extend(p);
    out.extend(q);
    out
}

fn advance_both<I: Iterator>(p: &mut Peekable<I>, q: &mut Peekable<I>) {
    p.next();
    q.next();
}

/// Sorts and combines an arbitrary list of at least two operands.
///
/// The list is folded from the right: the last operand (flattened) seeds an accumulator, and
/// each earlier operand is merged into it. The result may be empty if everything cancelled.
pub(crate) fn simplify_operands<O: Operator>(mut operands: Vec<Expr>) -> Vec<Expr> {
    let Some(last) = operands.pop() else {
        return Vec::new();
    };

    let mut acc = flatten::<O>(last);
    while let Some(operand) = operands.pop() {
        acc = merge::<O>(flatten::<O>(operand), acc);
    }
    acc
}
