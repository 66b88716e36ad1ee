//! Human-readable formatting of expressions.
//!
//! Operators are printed infix with spaces, and operands are parenthesized only when they bind
//! more loosely than their parent. Logical connectives are printed as calls, so a conjunction of
//! two equations prints as `and(x == 1, y == 2)`.

use super::Expr;
use std::fmt::{self, Display, Formatter};

/// Binding strength of sums.
const SUM: u16 = 110;

/// Binding strength of products and fractions.
const PRODUCT: u16 = 120;

/// Binding strength of powers.
const POWER: u16 = 130;

/// Binding strength of atoms and calls.
const ATOM: u16 = 1000;

impl Expr {
    /// Returns the binding strength of this expression when printed. Operands with a lower
    /// binding strength than their parent are parenthesized.
    pub fn precedence(&self) -> u16 {
        match self {
            Self::Equation(_) => 0,
            Self::Sum(_) => SUM,
            Self::Product(_) | Self::Fraction(_) => PRODUCT,
            Self::Power(..) => POWER,
            _ => ATOM,
        }
    }
}

/// Writes `expr`, wrapped in parentheses if `parens` is true.
fn write_operand(f: &mut Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Writes the operands of a sum or product separated by `sep`.
fn write_infix(f: &mut Formatter<'_>, operands: &[Expr], sep: &str, precedence: u16) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write_operand(f, operand, operand.precedence() < precedence)?;
    }
    Ok(())
}

/// Writes a call in the form `name(a, b, c)`.
fn write_call(f: &mut Formatter<'_>, name: &str, args: &[Expr]) -> fmt::Result {
    write!(f, "{}(", name)?;
    let mut iter = args.iter();
    if let Some(arg) = iter.next() {
        write!(f, "{}", arg)?;
        for arg in iter {
            write!(f, ", {}", arg)?;
        }
    }
    write!(f, ")")
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Fraction(r) => write!(f, "{}", r),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::Sum(terms) => write_infix(f, terms, " + ", SUM),
            Self::Product(factors) => write_infix(f, factors, " * ", PRODUCT),
            Self::Power(base, exp) => {
                // powers are right-associative, and `-2 ^ x` would read as `-(2 ^ x)`
                write_operand(f, base, base.precedence() <= POWER || base.is_negative())?;
                f.write_str(" ^ ")?;
                write_operand(f, exp, exp.precedence() < POWER)
            },
            Self::Function(func) => write_call(f, func.name(), func.args()),
            Self::And(args) => write_call(f, "and", args),
            Self::Or(args) => write_call(f, "or", args),
            Self::Equation(eq) => write!(f, "{}", eq),
        }
    }
}
