//! Parser for closed combinator terms.
//!
//! ```text
//! term = atom+
//! atom = 'S' | 'K' | '(' term ')'
//! ```
//!
//! Juxtaposition is application and associates to the left. There is no
//! whitespace and no variable syntax.

use thiserror::Error;

use crate::term::Term;

pub type Span = std::ops::Range<usize>;

/// Positions are character indices into the source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("the empty string cannot be parsed as a term (at index {at})")]
    Empty { at: usize },
    #[error("opening bracket at index {at} not closed")]
    Unclosed { at: usize },
    #[error("extraneous closing bracket at index {at}")]
    Extraneous { at: usize },
    #[error("invalid character {found:?} at index {at}")]
    InvalidCharacter { at: usize, found: char },
}

impl SyntaxError {
    pub fn at(&self) -> usize {
        match self {
            SyntaxError::Empty { at }
            | SyntaxError::Unclosed { at }
            | SyntaxError::Extraneous { at }
            | SyntaxError::InvalidCharacter { at, .. } => *at,
        }
    }
    pub fn span(&self) -> Span {
        self.at()..self.at() + 1
    }
}

pub type Result<T, E = SyntaxError> = std::result::Result<T, E>;

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    /// Parses atoms until the end of input, or until the bracket opened at
    /// `open` is closed.
    fn group(&mut self, open: Option<usize>) -> Result<Term> {
        let start = self.pos;
        let mut acc: Option<Term> = None;
        while let Some(&c) = self.chars.get(self.pos) {
            let at = self.pos;
            self.pos += 1;
            let atom = match c {
                'S' => Term::S,
                'K' => Term::K,
                '(' => self.group(Some(at))?,
                ')' if open.is_some() => return acc.ok_or(SyntaxError::Empty { at: start }),
                ')' => return Err(SyntaxError::Extraneous { at }),
                found => return Err(SyntaxError::InvalidCharacter { at, found }),
            };
            acc = Some(match acc {
                Some(lhs) => Term::app(lhs, atom),
                None => atom,
            });
        }
        match open {
            Some(at) => Err(SyntaxError::Unclosed { at }),
            None => acc.ok_or(SyntaxError::Empty { at: start }),
        }
    }
}

pub fn parse(src: &str) -> Result<Term> {
    Parser {
        chars: src.chars().collect(),
        pos: 0,
    }
    .group(None)
}
