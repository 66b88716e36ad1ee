//! Arithmetic operators on expressions. Every operator builds its result through the canonical
//! constructors, so `x + x` is `2 * x` and `x / x` is `1`.

use super::Expr;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: Into<Expr>> Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Self::Output {
        Expr::sum([self, rhs.into()])
    }
}

/// `a - b` is `a + (-1 * b)`.
impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Self::Output {
        Expr::sum([self, -rhs.into()])
    }
}

impl<T: Into<Expr>> Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Self::Output {
        Expr::product([self, rhs.into()])
    }
}

/// `a / b` is `a * b ^ -1`.
impl<T: Into<Expr>> Div<T> for Expr {
    type Output = Expr;

    fn div(self, rhs: T) -> Self::Output {
        Expr::product([self, rhs.into().recip()])
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::product([Expr::from(-1), self])
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// Implements a binary operator for `&Expr` on the left, and for primitive numbers on the left
/// of an `Expr` or `&Expr`, by delegating to the owned `Expr` implementation.
macro_rules! forward_binop {
    ($($trait:ident $method:ident $assign_trait:ident $assign_method:ident),* $(,)?) => {
        $(
            impl<T: Into<Expr>> $trait<T> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: T) -> Self::Output {
                    self.clone().$method(rhs)
                }
            }

            impl<T: Into<Expr>> $assign_trait<T> for Expr {
                fn $assign_method(&mut self, rhs: T) {
                    let lhs = std::mem::take(self);
                    *self = lhs.$method(rhs);
                }
            }

            forward_binop!(@primitive $trait $method i32 f64);
        )*
    };
    (@primitive $trait:ident $method:ident $($ty:ty)*) => {
        $(
            impl $trait<Expr> for $ty {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Self::Output {
                    Expr::from(self).$method(rhs)
                }
            }

            impl $trait<&Expr> for $ty {
                type Output = Expr;

                fn $method(self, rhs: &Expr) -> Self::Output {
                    Expr::from(self).$method(rhs.clone())
                }
            }
        )*
    };
}

forward_binop!(
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
);
