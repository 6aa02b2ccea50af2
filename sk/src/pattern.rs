//! Terms with variables, in the syntax the printer produces.
//!
//! A lowercase letter is a single-character variable and `<name>` is a
//! variable with a longer name. Whitespace between atoms is ignored.
//! Equations are written `lhs = rhs` and separated by commas.

use chumsky::prelude::*;

use crate::term::Term;

pub trait SimpleParser<I: Clone + std::hash::Hash, O>: Parser<I, O, Error = Simple<I>> {}
impl<I: Clone + std::hash::Hash, O, T> SimpleParser<I, O> for T where
    T: Parser<I, O, Error = Simple<I>>
{
}

fn pattern_parser() -> impl SimpleParser<char, Term> {
    recursive(|pattern: Recursive<char, Term, Simple<char>>| {
        let long_var = filter(|c: &char| c.is_alphanumeric() || *c == '_' || *c == '\'')
            .repeated()
            .at_least(1)
            .collect::<String>()
            .delimited_by(just('<'), just('>'))
            .labelled("variable name");
        let short_var = filter(|c: &char| c.is_ascii_lowercase()).map(|c| c.to_string());

        let atom = choice((
            just('S').to(Term::S),
            just('K').to(Term::K),
            long_var.or(short_var).map(|name| Term::var(name)),
            pattern.delimited_by(just('('), just(')')),
        ))
        .padded();

        atom.clone()
            .then(atom.repeated())
            .foldl(|lhs, rhs| Term::app(lhs, rhs))
    })
    .labelled("pattern")
}

fn equation_parser() -> impl SimpleParser<char, (Term, Term)> {
    pattern_parser()
        .then_ignore(just('='))
        .then(pattern_parser())
        .labelled("equation")
}

pub fn parse_pattern(s: &str) -> Result<Term, Vec<Simple<char>>> {
    pattern_parser().then_ignore(end()).parse(s)
}

pub fn parse_equations(s: &str) -> Result<Vec<(Term, Term)>, Vec<Simple<char>>> {
    equation_parser()
        .separated_by(just(','))
        .at_least(1)
        .then_ignore(end())
        .parse(s)
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_parse_pattern() {
        assert_eq!(parse_pattern("SKK").unwrap(), parse("SKK").unwrap());
        assert_eq!(
            parse_pattern(" S K ( K S ) ").unwrap(),
            parse("SK(KS)").unwrap()
        );
        assert_eq!(
            parse_pattern("x<x'>").unwrap(),
            Term::app(Term::var("x"), Term::var("x'"))
        );
        assert_eq!(
            parse_pattern("S(Kx)<long_name>").unwrap(),
            Term::app(
                Term::app(Term::S, Term::app(Term::K, Term::var("x"))),
                Term::var("long_name")
            )
        );
        assert!(parse_pattern("").is_err());
        assert!(parse_pattern("S(K").is_err());
        assert!(parse_pattern("SX").is_err());
        assert!(parse_pattern("<>").is_err());
    }

    #[test]
    fn test_unreadable_variable_names() {
        assert_eq!(Term::var("").to_string(), "<>");
        assert!(parse_pattern(&Term::var("").to_string()).is_err());
        assert!(parse_pattern(&Term::var("Q").to_string()).is_err());
        assert_eq!(parse_pattern(&Term::var("S").to_string()).unwrap(), Term::S);
    }

    #[test]
    fn test_parse_equations() {
        assert_eq!(
            parse_equations("xK = SK, y = x").unwrap(),
            vec![
                (Term::app(Term::var("x"), Term::K), parse("SK").unwrap()),
                (Term::var("y"), Term::var("x")),
            ]
        );
        assert!(parse_equations("x").is_err());
        assert!(parse_equations("x = S,").is_err());
    }

    #[test]
    fn test_error_span() {
        let es = parse_pattern("SKX").unwrap_err();
        assert!(es.iter().any(|e| e.span() == (2..3)));
    }

    fn arb_pattern() -> impl Strategy<Value = Term> {
        let leaf = prop_oneof![
            Just(Term::S),
            Just(Term::K),
            "[a-z]".prop_map(|name| Term::var(name)),
            "[a-z][a-z0-9_']{1,6}".prop_map(|name| Term::var(name)),
        ];
        leaf.prop_recursive(5, 32, 2, |inner| {
            (inner.clone(), inner).prop_map(|(lhs, rhs)| Term::app(lhs, rhs))
        })
    }

    proptest! {
        #[test]
        fn prop_print_then_parse_pattern(term in arb_pattern()) {
            prop_assert_eq!(parse_pattern(&term.to_string()).unwrap(), term);
        }
    }
}
