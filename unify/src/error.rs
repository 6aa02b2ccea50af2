use thiserror::Error;

/// Misuse of a [`TermAlgebra`](crate::TermAlgebra) instantiation.
///
/// These indicate a programming error in the algebra, not a property of the
/// terms being unified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("{0} is not an application")]
    NotAnApplication(String),
    #[error("cannot apply {sym} to {arity} arguments")]
    BadApplication { sym: String, arity: usize },
    #[error("applications of {sym} have {left} and {right} arguments")]
    ArityMismatch {
        sym: String,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnifyError<S, V, T> {
    #[error("{var} occurs in {term}")]
    OccursCheck { var: V, term: T },
    #[error("cannot unify applications of {left} and {right}")]
    SymbolMismatch { left: S, right: S },
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

impl<S, V, T> UnifyError<S, V, T> {
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, UnifyError::Contract(_))
    }
}
