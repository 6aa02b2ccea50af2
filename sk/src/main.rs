use std::io::Write;

use anyhow::Result;
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use chumsky::error::Simple;
use sk::{pattern, reduce, Term};
use unify::Substitution;
use util::repl;

type Span = std::ops::Range<usize>;
type Error = Simple<String>;
type CommandResult<'a> = Result<(), (&'a str, Vec<Error>)>;

const DEFAULT_LIMIT: usize = 10_000;

fn build_report(e: Error) -> Report {
    use chumsky::error::SimpleReason;
    let report = Report::build(ReportKind::Error, (), e.span().start);
    match e.reason() {
        SimpleReason::Unexpected => {
            let found = e.found().map(String::as_str).unwrap_or("end of the input");
            let expected = e
                .expected()
                .map(|t| t.as_ref().map(String::as_str).unwrap_or("end of the input"))
                .collect::<Vec<_>>()
                .join(", ");
            let expected = if expected.is_empty() {
                "something else"
            } else {
                &expected
            };
            report
                .with_message(format!("Unexpected {found}, expected {expected}"))
                .with_label(
                    Label::new(e.span())
                        .with_message(format!("Unexpected {}", found.fg(Color::Red)))
                        .with_color(Color::Red),
                )
        }
        SimpleReason::Unclosed { span, delimiter } => report
            .with_message(format!("Unclosed delimiter {}", delimiter.fg(Color::Yellow)))
            .with_label(
                Label::new(span.clone())
                    .with_message(format!(
                        "Unclosed delimiter {}",
                        delimiter.fg(Color::Yellow)
                    ))
                    .with_color(Color::Yellow),
            ),
        SimpleReason::Custom(msg) => report.with_message(msg).with_label(
            Label::new(e.span())
                .with_message(format!("{}", msg.fg(Color::Red)))
                .with_color(Color::Red),
        ),
    }
    .finish()
}

/// Writes `e` as a report over `input`. An empty source has no line to label,
/// so only the message is written.
fn render(input: &str, e: Error, mut out: impl Write) -> std::io::Result<()> {
    if input.is_empty() {
        use chumsky::error::SimpleReason;
        let msg = match e.reason() {
            SimpleReason::Custom(msg) => msg.clone(),
            SimpleReason::Unclosed { delimiter, .. } => {
                format!("Unclosed delimiter {delimiter}")
            }
            SimpleReason::Unexpected => "Unexpected end of the input".to_string(),
        };
        return writeln!(out, "Error: {msg}");
    }
    build_report(e).write(Source::from(input), out)
}

fn whole(input: &str) -> Span {
    0..input.chars().count()
}

fn read_term(input: &str) -> Result<Term, (&str, Vec<Error>)> {
    sk::parse(input).map_err(|e| (input, vec![Simple::custom(e.span(), e)]))
}

#[derive(Debug)]
struct Repl {
    limit: usize,
}
impl Default for Repl {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}
impl Repl {
    fn parse(input: &str) -> CommandResult {
        let term = read_term(input)?;
        println!("{term:?}");
        Ok(())
    }

    fn print(input: &str) -> CommandResult {
        let term = read_term(input)?;
        println!("{term}");
        Ok(())
    }

    fn step(input: &str) -> CommandResult {
        let term = read_term(input)?;
        match reduce::reduce1(&term) {
            Some(next) => println!("{next}"),
            None => println!("{term} is in normal form"),
        }
        Ok(())
    }

    fn trace<'i>(&self, input: &'i str) -> CommandResult<'i> {
        let term = read_term(input)?;
        println!("   {term}");
        let mut taken = 0;
        for next in reduce::steps(term) {
            if taken == self.limit {
                println!("   ... (stopped after {taken} steps)");
                return Ok(());
            }
            println!("-> {next}");
            taken += 1;
        }
        Ok(())
    }

    fn eval<'i>(&self, input: &'i str) -> CommandResult<'i> {
        let term = read_term(input)?;
        let (normal, taken) = reduce::reduce_bounded(term, self.limit)
            .map_err(|e| (input, vec![Simple::custom(whole(input), e)]))?;
        println!("{normal}  ({taken} steps)");
        Ok(())
    }

    fn unify(input: &str) -> CommandResult {
        let equations = pattern::parse_equations(input).map_err(|es| {
            (
                input,
                es.into_iter().map(|e| e.map(|c| c.to_string())).collect(),
            )
        })?;
        let subst = sk::unify(equations, Substitution::new())
            .map_err(|e| (input, vec![Simple::custom(whole(input), e)]))?;
        println!("{subst}");
        Ok(())
    }

    fn set_limit<'i>(&mut self, input: &'i str) -> CommandResult<'i> {
        if input.is_empty() {
            println!("{}", self.limit);
            return Ok(());
        }
        self.limit = input.parse::<usize>().map_err(|e| {
            (
                input,
                vec![Simple::custom(
                    whole(input),
                    format!("Invalid step limit: {e}"),
                )],
            )
        })?;
        Ok(())
    }

    fn show_help() {
        println!(
            "{}",
            r#"
term                -- same as :eval term
:parse      term    -- show the structure of the parsed term
:print      term    -- show the canonical form of the term
:step       term    -- rewrite the leftmost-outermost redex once
:trace      term    -- show every rewrite step up to the step limit
:eval       term    -- reduce to normal form within the step limit
:unify      l = r, ...  -- most general unifier, variables are x or <name>
:limit      [n]     -- show or set the step limit
:help               -- show this message
        "#
            .trim()
        );
    }

    fn handle_repl_input<'i>(&mut self, input: &'i str) -> CommandResult<'i> {
        let (cmd, input) = if let Some(stripped) = input.trim().strip_prefix(':') {
            stripped
                .trim_start()
                .split_once(' ')
                .unwrap_or((stripped.trim_start(), ""))
        } else {
            ("", input)
        };
        let input = input.trim();
        match cmd {
            "p" | "parse" => Self::parse(input)?,
            "pr" | "print" => Self::print(input)?,
            "s" | "step" => Self::step(input)?,
            "tr" | "trace" => self.trace(input)?,
            "" | "e" | "eval" => self.eval(input)?,
            "u" | "unify" => Self::unify(input)?,
            "l" | "limit" => self.set_limit(input)?,
            "h" | "he" | "hel" | "help" => Self::show_help(),
            _ => {
                eprintln!("Unknown command {cmd}");
                Self::show_help();
            }
        }
        Ok(())
    }
}
impl repl::Repl for Repl {
    type Error = anyhow::Error;
    const HISTORY: Option<&'static str> = Some("/tmp/sk.history");
    fn greeting(&self) -> Option<String> {
        Some("Hi, this is an SK combinator REPL. :h to show help\n".to_string())
    }
    fn evaluate(&mut self, input: &str) -> Result<(), Self::Error> {
        if let Err((input, es)) = self.handle_repl_input(input) {
            for e in es {
                render(input, e, std::io::stderr())?;
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    repl::start_repl(Repl::default())?;
    Ok(())
}
