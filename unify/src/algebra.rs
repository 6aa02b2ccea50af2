use std::{fmt, hash::Hash};

use crate::{ContractViolation, Substitution};

type Result<T, E = ContractViolation> = std::result::Result<T, E>;

/// A term algebra: function symbols, variables and formal applications.
///
/// Implementations are expected (but not checked) to satisfy, for every
/// symbol `f` and argument list `args`:
///
/// - `fun_sym(apply(f, args)) == f` and `args(apply(f, args)) == args`;
/// - two applications are equal iff their symbols are equal and their
///   arguments are pairwise equal;
/// - applications of equal symbols have equal arity.
pub trait TermAlgebra {
    type Sym: Clone + PartialEq + fmt::Display + fmt::Debug;
    type Var: Clone + Eq + Hash + fmt::Display + fmt::Debug;
    type Term: Clone + PartialEq + fmt::Display + fmt::Debug;

    /// The formal application of `f` to `args`.
    fn apply(f: &Self::Sym, args: Vec<Self::Term>) -> Result<Self::Term>;

    /// The variable `term` is, if it is one.
    fn as_var(term: &Self::Term) -> Option<&Self::Var>;

    /// The function symbol `app` is an application of.
    fn fun_sym(app: &Self::Term) -> Result<Self::Sym>;

    /// The arguments `app` is an application to.
    fn args(app: &Self::Term) -> Result<Vec<Self::Term>>;

    fn is_var(term: &Self::Term) -> bool {
        Self::as_var(term).is_some()
    }

    fn occurs_in(var: &Self::Var, term: &Self::Term) -> Result<bool> {
        if let Some(v) = Self::as_var(term) {
            return Ok(v == var);
        }
        for arg in Self::args(term)? {
            if Self::occurs_in(var, &arg)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The image of `term` under `s`.
    ///
    /// Bound values are not substituted again, so `s` should already be
    /// fully applied to its own range.
    fn subst(s: &Substitution<Self::Var, Self::Term>, term: &Self::Term) -> Result<Self::Term> {
        if let Some(v) = Self::as_var(term) {
            return Ok(s.get(v).unwrap_or(term).clone());
        }
        let args = Self::args(term)?
            .iter()
            .map(|arg| Self::subst(s, arg))
            .collect::<Result<Vec<_>>>()?;
        Self::apply(&Self::fun_sym(term)?, args)
    }
}
