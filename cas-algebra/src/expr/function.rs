//! Named function calls and the extension point for domain-specific reduction rules.
//!
//! A [`Function`] node carries a name, its arguments, and an optional [`Reducer`]. Whenever a
//! call is built (or rebuilt, for example after substitution), the reducer is given the
//! arguments and may replace the whole call with a simpler expression. Plugin crates use this to
//! teach the kernel about `sin`, `cos`, and friends without the kernel knowing anything about
//! them.

use crate::error::Error;
use levenshtein::levenshtein;
use std::{collections::HashMap, fmt, sync::Arc};
use super::Expr;

/// A reduction procedure for a named function.
///
/// Any `Fn(&[Expr]) -> Option<Expr>` closure or function is a [`Reducer`].
pub trait Reducer: Send + Sync {
    /// Attempts to reduce a call with the given arguments. Returning [`None`] leaves the call
    /// unevaluated.
    fn reduce(&self, args: &[Expr]) -> Option<Expr>;
}

impl<F> Reducer for F
where
    F: Fn(&[Expr]) -> Option<Expr> + Send + Sync,
{
    fn reduce(&self, args: &[Expr]) -> Option<Expr> {
        self(args)
    }
}

/// A call to a named function, such as `sin(x)` or `f(x, y)`.
///
/// Two calls are equal if they have the same name and equal arguments; the reducer does not take
/// part in the comparison.
#[derive(Clone)]
pub struct Function {
    name: String,
    args: Vec<Expr>,
    reducer: Option<Arc<dyn Reducer>>,
}

impl Function {
    /// Creates a call with no reduction procedure. The result is always a function node, unless
    /// an argument is [`Expr::Undefined`].
    pub fn opaque(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        Self::build(name.into(), None, args.into_iter().collect())
    }

    /// Creates a call reduced by the given procedure.
    pub fn new(
        name: impl Into<String>,
        reducer: Arc<dyn Reducer>,
        args: impl IntoIterator<Item = Expr>,
    ) -> Expr {
        Self::build(name.into(), Some(reducer), args.into_iter().collect())
    }

    fn build(name: String, reducer: Option<Arc<dyn Reducer>>, args: Vec<Expr>) -> Expr {
        if args.iter().any(|arg| matches!(arg, Expr::Undefined)) {
            return Expr::Undefined;
        }

        if let Some(reduced) = reducer.as_ref().and_then(|reducer| reducer.reduce(&args)) {
            return reduced;
        }

        Expr::Function(Self { name, args, reducer })
    }

    /// Returns the name of the function.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments of the call.
    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    /// Returns the reduction procedure of the function, if any.
    pub fn reducer(&self) -> Option<&Arc<dyn Reducer>> {
        self.reducer.as_ref()
    }

    /// Rebuilds this call with new arguments, running the reduction procedure again.
    pub fn with_args(&self, args: Vec<Expr>) -> Expr {
        Self::build(self.name.clone(), self.reducer.clone(), args)
    }

    /// Rebuilds this call with each argument transformed by `f`.
    pub fn map_args(&self, f: impl FnMut(&Expr) -> Expr) -> Expr {
        self.with_args(self.args.iter().map(f).collect())
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// A lookup table of reduction procedures by function name.
#[derive(Clone, Default)]
pub struct Registry {
    reducers: HashMap<String, Arc<dyn Reducer>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reduction procedure under the given name, returning the procedure it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        reducer: Arc<dyn Reducer>,
    ) -> Option<Arc<dyn Reducer>> {
        self.reducers.insert(name.into(), reducer)
    }

    /// Returns the reduction procedure registered under the given name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Reducer>> {
        self.reducers.get(name)
    }

    /// Returns the names of all registered functions, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.reducers.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Builds a call to the named function, reduced by its registered procedure.
    pub fn call(&self, name: &str, args: impl IntoIterator<Item = Expr>) -> Result<Expr, Error> {
        match self.get(name) {
            Some(reducer) => Ok(Function::new(name, Arc::clone(reducer), args)),
            None => Err(Error::UnknownFunction {
                name: name.to_string(),
                suggestions: self.similar_names(name),
            }),
        }
    }

    /// Returns the registered names that are within one edit of the given name, sorted.
    pub fn similar_names(&self, name: &str) -> Vec<String> {
        let mut names = self.reducers
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .cloned()
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// `double(n)` evaluates exact numbers and stays unevaluated otherwise.
    fn double_reducer() -> Arc<dyn Reducer> {
        Arc::new(|args: &[Expr]| match args {
            [n] if n.is_rational() => Some(n.clone() * 2),
            _ => None,
        })
    }

    #[test]
    fn opaque_call() {
        let x = Expr::symbol("x");
        let call = Function::opaque("f", [x.clone()]);
        match &call {
            Expr::Function(f) => {
                assert_eq!(f.name(), "f");
                assert_eq!(f.args(), &[x]);
                assert!(f.reducer().is_none());
            },
            other => panic!("expected a function, got {other}"),
        }
    }

    #[test]
    fn undefined_argument() {
        assert_eq!(Function::opaque("f", [Expr::Undefined]), Expr::Undefined);
    }

    #[test]
    fn reducer_runs_on_build() {
        assert_eq!(Function::new("double", double_reducer(), [Expr::from(21)]), Expr::from(42));

        let x = Expr::symbol("x");
        let call = Function::new("double", double_reducer(), [x.clone()]);
        assert!(matches!(call, Expr::Function(_)));
    }

    #[test]
    fn reducer_runs_on_rebuild() {
        let x = Expr::symbol("x");
        let call = Function::new("double", double_reducer(), [x.clone()]);
        let Expr::Function(f) = &call else {
            panic!("expected a function, got {call}");
        };
        assert_eq!(f.with_args(vec![Expr::from(5)]), Expr::from(10));
        assert_eq!(f.map_args(|_| Expr::fraction(1, 4)), Expr::fraction(1, 2));
    }

    #[test]
    fn equality_ignores_reducer() {
        let x = Expr::symbol("x");
        let reduced = Function::new("f", double_reducer(), [x.clone()]);
        let opaque = Function::opaque("f", [x]);
        assert_eq!(reduced, opaque);
    }

    #[test]
    fn registry_call() {
        let mut registry = Registry::new();
        registry.register("double", double_reducer());
        assert_eq!(registry.call("double", [Expr::from(4)]), Ok(Expr::from(8)));
        assert_eq!(registry.names(), ["double"]);
    }

    #[test]
    fn registry_unknown_function() {
        let mut registry = Registry::new();
        registry.register("double", double_reducer());
        registry.register("triple", double_reducer());
        assert_eq!(
            registry.call("doubel", [Expr::from(4)]),
            Err(Error::UnknownFunction {
                name: "doubel".to_string(),
                suggestions: vec![],
            }),
        );
        assert_eq!(registry.similar_names("doble"), ["double"]);
    }
}
