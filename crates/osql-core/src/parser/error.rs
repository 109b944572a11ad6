//! Parser error types.

use core::fmt;

use crate::lexer::{Span, TokenKind};

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A token that no alternative at this point accepts.
    UnexpectedToken,
    /// A construct was opened but its closing token (`)`, `]`, `}`, `END`)
    /// never came.
    UnterminatedConstruct,
    /// A function-like keyword followed by `(` whose arguments match none of
    /// its call shapes, or a name that is not a function at all.
    UnknownFunctionShape,
    /// A literal that does not fit its type, such as an out-of-range integer.
    InvalidLiteral,
    /// Nesting exceeded [`ParserConfig::max_depth`](super::ParserConfig).
    RecursionLimitExceeded,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::UnterminatedConstruct => "unterminated construct",
            Self::UnknownFunctionShape => "unknown function shape",
            Self::InvalidLiteral => "invalid literal",
            Self::RecursionLimitExceeded => "recursion limit exceeded",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at position {}..{}", .span.start, .span.end)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the offending token.
    pub span: Span,
    /// The offending token.
    pub found: TokenKind,
    /// Token categories that would have been accepted here.
    pub expected: Vec<&'static str>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        found: TokenKind,
        span: Span,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            found,
            expected: Vec::new(),
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: &[&'static str], found: TokenKind, span: Span) -> Self {
        let message = format!(
            "Unexpected token: expected {}, found {found}",
            describe_expected(expected)
        );
        Self {
            kind: ParseErrorKind::UnexpectedToken,
            message,
            span,
            found,
            expected: expected.to_vec(),
        }
    }

    /// Creates an error for a construct whose closing token is missing.
    #[must_use]
    pub fn unterminated(
        construct: &str,
        closing: &'static str,
        found: TokenKind,
        span: Span,
    ) -> Self {
        Self {
            kind: ParseErrorKind::UnterminatedConstruct,
            message: format!("Unterminated {construct}: expected {closing}, found {found}"),
            span,
            found,
            expected: vec![closing],
        }
    }

    /// Creates an error for a name before `(` that is not a callable
    /// function. The only admissible token there is a function name.
    #[must_use]
    pub fn unknown_function(message: impl Into<String>, found: TokenKind, span: Span) -> Self {
        Self {
            expected: vec!["function name"],
            ..Self::new(ParseErrorKind::UnknownFunctionShape, message, found, span)
        }
    }

    /// Returns the byte offset of the offending token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.span.start
    }
}

fn describe_expected(expected: &[&'static str]) -> String {
    match expected {
        [] => String::from("something else"),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}
