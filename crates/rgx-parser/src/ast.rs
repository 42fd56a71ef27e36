//! Abstract Syntax Tree for the regex grammar.
//!
//! Nodes are dumb data: construction plus two textual renderings. The
//! `Display` impl reconstructs regex-like syntax; the derived `Debug` is the
//! structural form used for diagnostics and tests.

use std::fmt;

/// A node in the parsed regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// A single literal character.
    Literal(char),

    /// The `.` wildcard.
    Wildcard,

    /// Zero-or-more repetition (`*`) of a sub-expression.
    Repeat(Box<Ast>),

    /// The two branches of a `|`.
    Alternative(Box<Ast>, Box<Ast>),

    /// Concatenation of sub-expressions, in order.
    Sequence(Vec<Ast>),
}

impl Ast {
    /// Build a concatenation node from parsed factors.
    ///
    /// Normalization, not a grammar rule: a one-element sequence collapses
    /// to that element, so `(a)` and `a` produce the same tree. Everything
    /// else (including the empty vector) stays a `Sequence`.
    pub fn sequence(mut nodes: Vec<Ast>) -> Ast {
        if nodes.len() == 1 {
            nodes.pop().unwrap()
        } else {
            Ast::Sequence(nodes)
        }
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Literal(c) => write!(f, "{c}"),
            Ast::Wildcard => write!(f, "."),
            Ast::Repeat(inner) => write!(f, "{inner}*"),
            Ast::Alternative(left, right) => write!(f, "{left}|{right}"),
            Ast::Sequence(nodes) => {
                write!(f, "(")?;
                for node in nodes {
                    write!(f, "{node}")?;
                }
                write!(f, ")")
            }
        }
    }
}
