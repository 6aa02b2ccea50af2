use crate::{ContractViolation, Substitution, TermAlgebra, UnifyError};

pub type Equation<A> = (<A as TermAlgebra>::Term, <A as TermAlgebra>::Term);
pub type Bindings<A> = Substitution<<A as TermAlgebra>::Var, <A as TermAlgebra>::Term>;
pub type Error<A> =
    UnifyError<<A as TermAlgebra>::Sym, <A as TermAlgebra>::Var, <A as TermAlgebra>::Term>;

/// The most general unifier of `equations` that specializes `subst`.
///
/// `subst` is applied to the equations up front. Every binding made along the
/// way is pushed into the pending equations and into the range of the
/// accumulated substitution, so no bound variable ever occurs in the range.
pub fn unify<A: TermAlgebra>(
    mut equations: Vec<Equation<A>>,
    mut subst: Bindings<A>,
) -> Result<Bindings<A>, Error<A>> {
    if !subst.is_empty() {
        for (left, right) in equations.iter_mut() {
            *left = A::subst(&subst, left)?;
            *right = A::subst(&subst, right)?;
        }
    }

    while let Some((left, right)) = equations.pop() {
        if left == right {
            continue;
        }

        if let Some(var) = A::as_var(&left) {
            if A::occurs_in(var, &right)? {
                return Err(UnifyError::OccursCheck {
                    var: var.clone(),
                    term: right,
                });
            }
            let binding = Substitution::singleton(var.clone(), right);
            for (l, r) in equations.iter_mut() {
                *l = A::subst(&binding, l)?;
                *r = A::subst(&binding, r)?;
            }
            for term in subst.terms_mut() {
                *term = A::subst(&binding, term)?;
            }
            subst.extend(binding);
            continue;
        }

        if A::is_var(&right) {
            equations.push((right, left));
            continue;
        }

        let f = A::fun_sym(&left)?;
        let g = A::fun_sym(&right)?;
        if f != g {
            return Err(UnifyError::SymbolMismatch { left: f, right: g });
        }

        let largs = A::args(&left)?;
        let rargs = A::args(&right)?;
        if largs.len() != rargs.len() {
            return Err(ContractViolation::ArityMismatch {
                sym: f.to_string(),
                left: largs.len(),
                right: rargs.len(),
            }
            .into());
        }
        equations.extend(largs.into_iter().zip(rargs));
    }

    Ok(subst)
}

/// The most general unifier of `left = right` that specializes `subst`.
pub fn unify2<A: TermAlgebra>(
    left: A::Term,
    right: A::Term,
    subst: Bindings<A>,
) -> Result<Bindings<A>, Error<A>> {
    unify::<A>(vec![(left, right)], subst)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generic::{GenericAlgebra, Term};

    type A = GenericAlgebra<&'static str, &'static str>;

    // An algebra whose symbol `f` has no fixed arity.
    struct Loose;
    impl TermAlgebra for Loose {
        type Sym = &'static str;
        type Var = &'static str;
        type Term = Term<&'static str, &'static str>;
        fn apply(f: &Self::Sym, args: Vec<Self::Term>) -> Result<Self::Term, ContractViolation> {
            Ok(Term::App(*f, args))
        }
        fn as_var(term: &Self::Term) -> Option<&Self::Var> {
            A::as_var(term)
        }
        fn fun_sym(app: &Self::Term) -> Result<Self::Sym, ContractViolation> {
            A::fun_sym(app)
        }
        fn args(app: &Self::Term) -> Result<Vec<Self::Term>, ContractViolation> {
            A::args(app)
        }
    }

    fn var(v: &'static str) -> Term<&'static str, &'static str> {
        Term::Var(v)
    }

    #[test]
    fn test_empty() {
        assert_eq!(unify::<A>(vec![], Substitution::new()), Ok(Substitution::new()));
        assert_eq!(
            unify2::<A>(var("x"), var("x"), Substitution::new()),
            Ok(Substitution::new())
        );
    }

    #[test]
    fn test_back_substitution() {
        // x = f(y), y = a: the binding for y must reach the range of x.
        let s = unify::<A>(
            vec![
                (var("y"), Term::app("a", [])),
                (var("x"), Term::app("f", [var("y")])),
            ],
            Substitution::new(),
        )
        .unwrap();
        assert_eq!(s.get("x"), Some(&Term::app("f", [Term::app("a", [])])));
        assert_eq!(s.get("y"), Some(&Term::app("a", [])));
    }

    #[test]
    fn test_initial_substitution() {
        let initial = Substitution::singleton("x", Term::app("a", []));
        let s = unify2::<A>(var("x"), var("y"), initial).unwrap();
        assert_eq!(s.get("x"), Some(&Term::app("a", [])));
        assert_eq!(s.get("y"), Some(&Term::app("a", [])));

        let initial = Substitution::singleton("x", Term::app("a", []));
        assert_eq!(
            unify2::<A>(var("x"), Term::app("b", []), initial),
            Err(UnifyError::SymbolMismatch {
                left: "a",
                right: "b"
            })
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let e = unify2::<Loose>(
            Term::app("f", [var("x")]),
            Term::app("f", [var("x"), var("y")]),
            Substitution::new(),
        )
        .unwrap_err();
        assert!(e.is_contract_violation());
        assert_eq!(
            e,
            UnifyError::Contract(ContractViolation::ArityMismatch {
                sym: "f".into(),
                left: 1,
                right: 2
            })
        );
    }
}
