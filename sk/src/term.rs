use std::{fmt, rc::Rc};

pub type Identifier = Rc<String>;
pub type TermRef = Rc<Term>;

#[derive(PartialEq, Eq, Hash, Clone, Copy, derive_more::Display, Debug)]
pub enum Comb {
    #[display(fmt = "S")]
    S,
    #[display(fmt = "K")]
    K,
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Term {
    /// `x`, `<name>`
    Var(Identifier),
    /// `S`, `K`
    Prim(Comb),
    /// `t u`
    App(TermRef, TermRef),
}

impl Term {
    pub const S: Term = Term::Prim(Comb::S);
    pub const K: Term = Term::Prim(Comb::K);

    /// Only names printing as a lowercase letter or as `<name>` with a
    /// non-empty name read back through the pattern syntax.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(Identifier::new(name.into()))
    }

    pub fn app(lhs: impl Into<TermRef>, rhs: impl Into<TermRef>) -> Self {
        Term::App(lhs.into(), rhs.into())
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) | Term::Prim(_) => 1,
            Term::App(lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }

    /// Whether the term contains no variables.
    pub fn is_closed(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Prim(_) => true,
            Term::App(lhs, rhs) => lhs.is_closed() && rhs.is_closed(),
        }
    }
}

impl From<Comb> for Term {
    fn from(comb: Comb) -> Self {
        Term::Prim(comb)
    }
}

// Application associates to the left, so only an applied right operand needs
// brackets.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) if name.chars().count() == 1 => f.write_str(name),
            Term::Var(name) => f.write_fmt(format_args!("<{name}>")),
            Term::Prim(comb) => f.write_fmt(format_args!("{comb}")),
            Term::App(lhs, rhs) => match rhs.as_ref() {
                Term::App(_, _) => f.write_fmt(format_args!("{lhs}({rhs})")),
                _ => f.write_fmt(format_args!("{lhs}{rhs}")),
            },
        }
    }
}
