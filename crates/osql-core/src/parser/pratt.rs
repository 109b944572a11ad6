//! Binding powers for the three precedence domains.
//!
//! The boolean connectives, the predicate chain and arithmetic each number
//! their levels independently; a higher number binds tighter.

use crate::ast::{ComparisonOp, MathOp};
use crate::lexer::{Keyword, TokenKind};

/// Returns the prefix binding power for a boolean operator.
///
/// Returns `None` if the token is not a prefix operator.
#[must_use]
pub const fn prefix_binding_power(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Keyword(Keyword::Not) => Some(4),
        _ => None,
    }
}

/// Returns the infix binding power for a boolean connective.
///
/// Returns `(left_bp, right_bp)`; both connectives are left associative.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((2, 3)),
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),
        _ => None,
    }
}

/// An operator of the predicate chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateOp {
    Comparison(ComparisonOp),
    IsNull,
    Between,
    Like,
    Regexp,
    In,
}

impl PredicateOp {
    /// Returns the precedence level (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Comparison(_) => 6,
            Self::IsNull => 5,
            Self::Between => 4,
            Self::Like => 3,
            Self::Regexp => 2,
            Self::In => 1,
        }
    }

    /// Returns true if the operator accepts a `NOT` before its keyword.
    #[must_use]
    pub const fn is_negatable(&self) -> bool {
        matches!(self, Self::Between | Self::Like | Self::In)
    }
}

/// Maps the keyword that introduces a postfix predicate.
#[must_use]
pub const fn keyword_predicate_op(kind: &TokenKind) -> Option<PredicateOp> {
    match kind {
        TokenKind::Keyword(Keyword::Is) => Some(PredicateOp::IsNull),
        TokenKind::Keyword(Keyword::Between) => Some(PredicateOp::Between),
        TokenKind::Keyword(Keyword::Like) => Some(PredicateOp::Like),
        TokenKind::Keyword(Keyword::Regexp) => Some(PredicateOp::Regexp),
        TokenKind::Keyword(Keyword::In) => Some(PredicateOp::In),
        _ => None,
    }
}

/// Maps one or two symbol tokens to a comparison operator.
///
/// Returns the operator and the number of tokens it spans.
#[must_use]
pub const fn comparison_op(first: &TokenKind, second: &TokenKind) -> Option<(ComparisonOp, usize)> {
    match (first, second) {
        (TokenKind::Lt, TokenKind::Eq) => Some((ComparisonOp::LtEq, 2)),
        (TokenKind::Gt, TokenKind::Eq) => Some((ComparisonOp::GtEq, 2)),
        (TokenKind::Lt, TokenKind::Gt) | (TokenKind::Bang, TokenKind::Eq) => {
            Some((ComparisonOp::NotEq, 2))
        }
        (TokenKind::Eq, _) => Some((ComparisonOp::Eq, 1)),
        (TokenKind::Lt, _) => Some((ComparisonOp::Lt, 1)),
        (TokenKind::Gt, _) => Some((ComparisonOp::Gt, 1)),
        _ => None,
    }
}

/// Maps a token to an arithmetic operator.
#[must_use]
pub const fn token_to_math_op(kind: &TokenKind) -> Option<MathOp> {
    match kind {
        TokenKind::Star => Some(MathOp::Mul),
        TokenKind::Slash => Some(MathOp::Div),
        TokenKind::Percent => Some(MathOp::Mod),
        TokenKind::Keyword(Keyword::Div) => Some(MathOp::IntDiv),
        TokenKind::Keyword(Keyword::Mod) => Some(MathOp::ModKeyword),
        TokenKind::Plus => Some(MathOp::Add),
        TokenKind::Minus => Some(MathOp::Sub),
        _ => None,
    }
}
