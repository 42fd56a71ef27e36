//! Recursive-descent parser for the regex grammar.
//!
//! One method per grammar rule (`regex`, `term`, `factor`, `base`) over a
//! character cursor. Syntax errors are recorded as diagnostics instead of
//! unwinding: every rule still returns a node, parsing continues
//! best-effort, and the caller only gets a tree when no diagnostic was
//! recorded. Recursion depth is bounded by the input length.

use crate::ast::Ast;
use crate::{ErrorKind, ParseError};

/// Regex pattern parser.
///
/// Holds the original input (for error messages), a character cursor, and
/// the diagnostics recorded so far. Failure is sticky: once a diagnostic is
/// recorded, the parse as a whole fails, however far it recovers.
pub struct Parser {
    input: String,
    chars: Vec<char>,
    pos: usize,
    diagnostics: Vec<ParseError>,
}

impl Parser {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &str) -> Self {
        Self {
            input: pattern.to_string(),
            chars: pattern.chars().collect(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parse a pattern into an AST.
    ///
    /// On failure the returned error is the last diagnostic recorded, the
    /// one closest to where the parse gave up. No partial tree escapes.
    pub fn parse(pattern: &str) -> Result<Ast, ParseError> {
        let mut parser = Parser::new(pattern);
        let ast = parser.run();
        match parser.diagnostics.pop() {
            None => Ok(ast),
            Some(err) => Err(err),
        }
    }

    /// Parse a pattern, surfacing every diagnostic recorded along the way.
    ///
    /// A single malformed input can produce more than one diagnostic while
    /// the parser recovers (`)(` records an empty factor and then the
    /// trailing `)`). On success the vector is empty.
    pub fn parse_with_diagnostics(pattern: &str) -> (Option<Ast>, Vec<ParseError>) {
        let mut parser = Parser::new(pattern);
        let ast = parser.run();
        if parser.diagnostics.is_empty() {
            (Some(ast), Vec::new())
        } else {
            (None, parser.diagnostics)
        }
    }

    /// Top rule plus the end-of-input check: characters left over after a
    /// complete `regex` are a trailing-symbol error.
    fn run(&mut self) -> Ast {
        let ast = self.regex();
        if let Some(c) = self.peek() {
            self.error(ErrorKind::TrailingSymbol(c));
        }
        ast
    }

    // =========================================================================
    // Cursor primitives
    // =========================================================================

    /// Peek at the next unconsumed character, `None` at end of input.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume the next character and return it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume the next character if it equals `symbol`.
    fn accept(&mut self, symbol: char) -> bool {
        if self.peek() == Some(symbol) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Require `symbol` next. On mismatch records a diagnostic and keeps
    /// going; nothing is consumed.
    fn expect(&mut self, symbol: char) {
        if self.accept(symbol) {
            return;
        }
        match self.peek() {
            Some(c) => self.error(ErrorKind::UnexpectedSymbol(c)),
            None => self.error(ErrorKind::UnexpectedEndOfInput),
        }
    }

    fn error(&mut self, kind: ErrorKind) {
        self.diagnostics.push(ParseError {
            input: self.input.clone(),
            kind,
        });
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// `<regex> ::= <term> '|' <term> | <term>`
    ///
    /// A single `|` per invocation: the right-hand side is a `term`, not
    /// another `regex`, so `a|b|c` leaves `|c` unconsumed and fails at the
    /// trailing-input check.
    fn regex(&mut self) -> Ast {
        let term = self.term();

        if self.accept('|') {
            let right = self.term();
            Ast::Alternative(Box::new(term), Box::new(right))
        } else {
            term
        }
    }

    /// `<term> ::= { <factor> }`
    ///
    /// Collects factors until end of input, `)`, or `|`. Zero factors is an
    /// error (empty input, empty group). The singleton collapse lives in
    /// `Ast::sequence`, not here.
    fn term(&mut self) -> Ast {
        let mut factors = Vec::new();

        while let Some(c) = self.peek() {
            if c == ')' || c == '|' {
                break;
            }
            factors.push(self.factor());
        }

        if factors.is_empty() {
            self.error(ErrorKind::EmptyFactor);
        }

        Ast::sequence(factors)
    }

    /// `<factor> ::= <base> [ '*' ]`
    ///
    /// At most one quantifier per factor; a second `*` is picked up by the
    /// enclosing `term` as a new factor and rejected in `base`.
    fn factor(&mut self) -> Ast {
        let base = self.base();

        if self.accept('*') {
            Ast::Repeat(Box::new(base))
        } else {
            base
        }
    }

    /// `<base> ::= <char> | '.' | '(' <regex> ')'`
    ///
    /// A `*` cannot start a base. On that error (and on the
    /// end-of-input case no rule should reach) a placeholder empty
    /// sequence is returned; it never escapes because the diagnostic
    /// fails the parse.
    fn base(&mut self) -> Ast {
        if self.accept('(') {
            let regex = self.regex();
            self.expect(')');
            return regex;
        }

        if self.accept('.') {
            return Ast::Wildcard;
        }

        if self.accept('*') {
            self.error(ErrorKind::UnexpectedSymbol('*'));
            return Ast::Sequence(Vec::new());
        }

        match self.advance() {
            Some(c) => Ast::Literal(c),
            None => {
                self.error(ErrorKind::UnexpectedEndOfInput);
                Ast::Sequence(Vec::new())
            }
        }
    }
}
