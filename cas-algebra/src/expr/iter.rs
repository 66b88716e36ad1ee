use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first). Function arguments, connective arguments, and both sides of an equation
/// are all visited.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator over the given expression tree.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression is the last visited expression. Compares addresses,
    /// not values.
    fn is_last_visited(&self, expr: &Expr) -> bool {
        self.last_visited.is_some_and(|last| std::ptr::eq(last, expr))
    }

    /// Pushes the children of the given expression so that the leftmost child is on top.
    fn push_children(&mut self, expr: &'a Expr) {
        match expr {
            Expr::Sum(children)
            | Expr::Product(children)
            | Expr::And(children)
            | Expr::Or(children) => self.stack.extend(children.iter().rev()),
            Expr::Function(f) => self.stack.extend(f.args().iter().rev()),
            Expr::Power(base, exp) => {
                self.stack.push(exp);
                self.stack.push(base);
            },
            Expr::Equation(eq) => {
                self.stack.push(&eq.rhs);
                self.stack.push(&eq.lhs);
            },
            _ => {},
        }
    }
}

/// Returns the rightmost child of the given expression.
fn last_child(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::Sum(children)
        | Expr::Product(children)
        | Expr::And(children)
        | Expr::Or(children) => children.last(),
        Expr::Function(f) => f.args().last(),
        Expr::Power(_, exp) => Some(exp),
        Expr::Equation(eq) => Some(&eq.rhs),
        _ => None,
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match last_child(expr) {
                Some(last) if !self.is_last_visited(last) => self.push_children(expr),
                _ => return self.visit(),
            }
        }
    }
}
