//! A term algebra for symbols applied to argument sequences.
//!
//! The application of `f` to `a1, ..., an` is the sequence `(f, a1, ..., an)`;
//! everything else is a variable compared by its own equality.

use std::{fmt, hash::Hash, marker::PhantomData};

use crate::{ContractViolation, Substitution, TermAlgebra, UnifyError};

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Term<F, V> {
    Var(V),
    App(F, Vec<Term<F, V>>),
}

impl<F, V> Term<F, V> {
    pub fn var(v: V) -> Self {
        Term::Var(v)
    }
    pub fn app(f: F, args: impl IntoIterator<Item = Self>) -> Self {
        Term::App(f, args.into_iter().collect())
    }
}

impl<F: fmt::Display, V: fmt::Display> fmt::Display for Term<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => f.write_fmt(format_args!("{v}")),
            Term::App(sym, args) => {
                f.write_fmt(format_args!("({sym}"))?;
                for arg in args {
                    f.write_fmt(format_args!(", {arg}"))?;
                }
                f.write_str(")")
            }
        }
    }
}

pub struct GenericAlgebra<F, V>(PhantomData<fn() -> (F, V)>);

impl<F, V> TermAlgebra for GenericAlgebra<F, V>
where
    F: Clone + PartialEq + fmt::Display + fmt::Debug,
    V: Clone + Eq + Hash + fmt::Display + fmt::Debug,
{
    type Sym = F;
    type Var = V;
    type Term = Term<F, V>;

    fn apply(f: &F, args: Vec<Self::Term>) -> Result<Self::Term, ContractViolation> {
        Ok(Term::App(f.clone(), args))
    }

    fn as_var(term: &Self::Term) -> Option<&V> {
        match term {
            Term::Var(v) => Some(v),
            Term::App(_, _) => None,
        }
    }

    fn fun_sym(app: &Self::Term) -> Result<F, ContractViolation> {
        match app {
            Term::App(f, _) => Ok(f.clone()),
            Term::Var(v) => Err(ContractViolation::NotAnApplication(v.to_string())),
        }
    }

    fn args(app: &Self::Term) -> Result<Vec<Self::Term>, ContractViolation> {
        match app {
            Term::App(_, args) => Ok(args.clone()),
            Term::Var(v) => Err(ContractViolation::NotAnApplication(v.to_string())),
        }
    }
}

pub type Bindings<F, V> = Substitution<V, Term<F, V>>;
pub type Error<F, V> = UnifyError<F, V, Term<F, V>>;

pub fn unify<F, V>(
    equations: Vec<(Term<F, V>, Term<F, V>)>,
    subst: Bindings<F, V>,
) -> Result<Bindings<F, V>, Error<F, V>>
where
    F: Clone + PartialEq + fmt::Display + fmt::Debug,
    V: Clone + Eq + Hash + fmt::Display + fmt::Debug,
{
    crate::unify::<GenericAlgebra<F, V>>(equations, subst)
}

pub fn unify2<F, V>(
    left: Term<F, V>,
    right: Term<F, V>,
    subst: Bindings<F, V>,
) -> Result<Bindings<F, V>, Error<F, V>>
where
    F: Clone + PartialEq + fmt::Display + fmt::Debug,
    V: Clone + Eq + Hash + fmt::Display + fmt::Debug,
{
    crate::unify2::<GenericAlgebra<F, V>>(left, right, subst)
}
