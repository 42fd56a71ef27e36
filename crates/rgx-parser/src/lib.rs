//! rgx Parser
//!
//! Parses a small regular-expression grammar into an Abstract Syntax Tree.
//! Supports literals, the `.` wildcard, grouping with `(` `)`, alternation
//! with `|`, and zero-or-more repetition with `*`.
//!
//! Grammar, loosest to tightest binding:
//!
//! ```text
//! <regex>  ::= <term> '|' <term>
//!          |   <term>
//! <term>   ::= { <factor> }
//! <factor> ::= <base> [ '*' ]
//! <base>   ::= <char>
//!          |   '.'
//!          |   '(' <regex> ')'
//! ```
//!
//! There is no matching engine; the tree is the product.

use std::fmt;

pub mod ast;
pub mod parser;

pub use ast::Ast;
pub use parser::Parser;

/// Parser error carrying the offending input and the syntax-error kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parsing error on input '{input}' : {kind}")]
pub struct ParseError {
    pub input: String,
    pub kind: ErrorKind,
}

/// The syntax errors the grammar can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A symbol appeared where the grammar does not allow it.
    UnexpectedSymbol(char),
    /// Input ran out where a symbol was required.
    UnexpectedEndOfInput,
    /// A term produced zero factors (empty input or empty group).
    EmptyFactor,
    /// Characters remained after a complete top-level parse.
    TrailingSymbol(char),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Trailing input keeps the same message text as an in-grammar
            // unexpected symbol; the variant stays distinct for callers.
            ErrorKind::UnexpectedSymbol(c) | ErrorKind::TrailingSymbol(c) => {
                write!(f, "Unexpected symbol: {c}")
            }
            ErrorKind::UnexpectedEndOfInput => write!(f, "Unexpected end of file"),
            ErrorKind::EmptyFactor => write!(f, "Empty factor"),
        }
    }
}
