//! First-order syntactic unification over an abstract term algebra.
//!
//! A term representation becomes unifiable by implementing [`TermAlgebra`];
//! [`unify`] and [`unify2`] then compute most general unifiers for it.
//! [`generic`] provides a ready-made algebra of symbols applied to argument
//! sequences.

mod algebra;
mod error;
pub mod generic;
mod solver;
mod substitution;

pub use algebra::TermAlgebra;
pub use error::{ContractViolation, UnifyError};
pub use solver::{unify, unify2, Bindings, Equation, Error};
pub use substitution::Substitution;
