//! The SK combinator calculus: parsing, printing, reduction, and unification
//! of combinator terms.

pub mod algebra;
pub mod parser;
pub mod pattern;
pub mod reduce;
pub mod term;

pub use algebra::{unify, unify2, CombinatorAlgebra, Symbol};
pub use parser::{parse, SyntaxError};
pub use reduce::{reduce, reduce1, reduce_bounded, steps, ReduceError};
pub use term::{Comb, Identifier, Term, TermRef};
