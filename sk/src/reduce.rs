use thiserror::Error;

use crate::term::{Comb, Term};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReduceError {
    #[error("no normal form reached within {limit} steps")]
    StepLimit { limit: usize, last: Term },
}

/// One leftmost-outermost rewrite step, or `None` if `term` is in normal form.
///
/// ```text
/// S a b c  ->  a c (b c)
/// K a b    ->  a
/// ```
pub fn reduce1(term: &Term) -> Option<Term> {
    if let Term::App(lhs, rhs) = term {
        if let Term::App(ll, lr) = lhs.as_ref() {
            // S-rule
            if let Term::App(s, a) = ll.as_ref() {
                if **s == Term::Prim(Comb::S) {
                    return Some(Term::app(
                        Term::app(a.clone(), rhs.clone()),
                        Term::app(lr.clone(), rhs.clone()),
                    ));
                }
            }
            // K-rule
            if **ll == Term::Prim(Comb::K) {
                return Some(lr.as_ref().clone());
            }
        }
        if let Some(lhs) = reduce1(lhs) {
            return Some(Term::App(lhs.into(), rhs.clone()));
        }
        if let Some(rhs) = reduce1(rhs) {
            return Some(Term::App(lhs.clone(), rhs.into()));
        }
    }
    None
}

/// Rewrites `term` to normal form. Does not return if there is none.
pub fn reduce(mut term: Term) -> Term {
    while let Some(next) = reduce1(&term) {
        term = next
    }
    term
}

/// The successive reducts of `term`, not including `term` itself.
pub fn steps(term: Term) -> impl Iterator<Item = Term> {
    std::iter::successors(reduce1(&term), reduce1)
}

/// Like [`reduce`], but gives up after `limit` steps. Returns the normal form
/// together with the number of steps taken.
pub fn reduce_bounded(mut term: Term, limit: usize) -> Result<(Term, usize), ReduceError> {
    let mut taken = 0;
    while let Some(next) = reduce1(&term) {
        if taken == limit {
            return Err(ReduceError::StepLimit { limit, last: term });
        }
        term = next;
        taken += 1;
    }
    Ok((term, taken))
}
