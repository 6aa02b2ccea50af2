//! Combinator terms as a term algebra.
//!
//! `S` and `K` are nullary applications of themselves and `t u` is the binary
//! application of [`Symbol::App`] to `t` and `u`.

use ::unify::{ContractViolation, TermAlgebra};

use crate::term::{Comb, Identifier, Term};

#[derive(PartialEq, Eq, Hash, Clone, Copy, derive_more::Display, Debug)]
pub enum Symbol {
    #[display(fmt = "S")]
    S,
    #[display(fmt = "K")]
    K,
    #[display(fmt = "@")]
    App,
}

impl From<Comb> for Symbol {
    fn from(comb: Comb) -> Self {
        match comb {
            Comb::S => Symbol::S,
            Comb::K => Symbol::K,
        }
    }
}

pub struct CombinatorAlgebra;

impl TermAlgebra for CombinatorAlgebra {
    type Sym = Symbol;
    type Var = Identifier;
    type Term = Term;

    /// Arguments to `S` and `K` are ignored.
    fn apply(f: &Symbol, args: Vec<Term>) -> Result<Term, ContractViolation> {
        match f {
            Symbol::S => Ok(Term::S),
            Symbol::K => Ok(Term::K),
            Symbol::App => match <[Term; 2]>::try_from(args) {
                Ok([lhs, rhs]) => Ok(Term::app(lhs, rhs)),
                Err(args) => Err(ContractViolation::BadApplication {
                    sym: f.to_string(),
                    arity: args.len(),
                }),
            },
        }
    }

    fn as_var(term: &Term) -> Option<&Identifier> {
        match term {
            Term::Var(name) => Some(name),
            _ => None,
        }
    }

    fn fun_sym(app: &Term) -> Result<Symbol, ContractViolation> {
        match app {
            Term::Prim(comb) => Ok((*comb).into()),
            Term::App(_, _) => Ok(Symbol::App),
            Term::Var(_) => Err(ContractViolation::NotAnApplication(app.to_string())),
        }
    }

    fn args(app: &Term) -> Result<Vec<Term>, ContractViolation> {
        match app {
            Term::Prim(_) => Ok(vec![]),
            Term::App(lhs, rhs) => Ok(vec![lhs.as_ref().clone(), rhs.as_ref().clone()]),
            Term::Var(_) => Err(ContractViolation::NotAnApplication(app.to_string())),
        }
    }
}

pub type Bindings = ::unify::Bindings<CombinatorAlgebra>;
pub type Error = ::unify::Error<CombinatorAlgebra>;

pub fn unify(equations: Vec<(Term, Term)>, subst: Bindings) -> Result<Bindings, Error> {
    ::unify::unify::<CombinatorAlgebra>(equations, subst)
}

pub fn unify2(left: Term, right: Term, subst: Bindings) -> Result<Bindings, Error> {
    ::unify::unify2::<CombinatorAlgebra>(left, right, subst)
}
