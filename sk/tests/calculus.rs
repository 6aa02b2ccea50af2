use sk::{
    parse, pattern::parse_pattern, reduce, reduce1, reduce_bounded, unify2, ReduceError,
    SyntaxError, Term,
};
use unify::{Substitution, UnifyError};

fn sk(s: &str) -> Term {
    parse(s).unwrap()
}

#[test]
fn test_skk_is_identity() {
    let i = sk("SKK");
    for x in ["S", "K", "SK", "S(KS)K", "K(SK)"] {
        assert_eq!(reduce(Term::app(i.clone(), sk(x))), sk(x));
    }
    assert_eq!(reduce(Term::app(i, Term::var("x"))), Term::var("x"));
}

#[test]
fn test_printer() {
    assert_eq!(
        Term::app(Term::S, Term::app(Term::K, Term::S)).to_string(),
        "S(KS)"
    );
    assert_eq!(sk("(SK)(K)").to_string(), "SKK");
    assert_eq!(sk("S(K(SK))(KK)").to_string(), "S(K(SK))(KK)");
}

#[test]
fn test_parser_errors() {
    assert!(matches!(parse(""), Err(SyntaxError::Empty { .. })));
    assert!(matches!(parse("S(K"), Err(SyntaxError::Unclosed { .. })));
    assert!(matches!(parse("SK)"), Err(SyntaxError::Extraneous { .. })));
    assert_eq!(
        parse("SX"),
        Err(SyntaxError::InvalidCharacter { at: 1, found: 'X' })
    );
}

#[test]
fn test_k_rule_discards() {
    assert_eq!(reduce1(&Term::app(Term::app(Term::K, Term::S), Term::K)), Some(Term::S));
}

#[test]
fn test_b_combinator() {
    // B = S(KS)K, B f g x = f (g x)
    let b = sk("S(KS)K");
    let term = parse_pattern("S(KS)Kfgx").unwrap();
    assert_eq!(
        term,
        Term::app(
            Term::app(Term::app(b, Term::var("f")), Term::var("g")),
            Term::var("x")
        )
    );
    assert_eq!(reduce(term), parse_pattern("f(gx)").unwrap());
}

#[test]
fn test_divergence_is_bounded() {
    let omega = sk("S(SKK)(SKK)(S(SKK)(SKK))");
    assert!(matches!(
        reduce_bounded(omega, 500),
        Err(ReduceError::StepLimit { limit: 500, .. })
    ));
}

#[test]
fn test_unify_with_metavariables() {
    // Which f makes f K equal to S K K K?
    let s = unify2(
        parse_pattern("fK").unwrap(),
        parse_pattern("SKKK").unwrap(),
        Substitution::new(),
    )
    .unwrap();
    assert_eq!(s.to_string(), "{f -> SKK}");

    let s = unify2(
        parse_pattern("S<a>(K<b>)").unwrap(),
        parse_pattern("S(Kc)(K(Sc))").unwrap(),
        Substitution::new(),
    )
    .unwrap();
    assert_eq!(s.to_string(), "{a -> Kc, b -> Sc}");

    assert!(matches!(
        unify2(
            parse_pattern("x").unwrap(),
            parse_pattern("Kx").unwrap(),
            Substitution::new()
        ),
        Err(UnifyError::OccursCheck { .. })
    ));
}

#[test]
fn test_unify_respects_initial_substitution() {
    let initial = [(sk::Identifier::new("x".into()), Term::K)]
        .into_iter()
        .collect::<Substitution<_, _>>();
    let s = unify2(
        parse_pattern("Sx").unwrap(),
        parse_pattern("Sy").unwrap(),
        initial,
    )
    .unwrap();
    assert_eq!(s.to_string(), "{x -> K, y -> K}");
}
