//! Expression, predicate and arithmetic parsing.

use super::error::ParseError;
use super::pratt::{
    PredicateOp, comparison_op, infix_binding_power, keyword_predicate_op, prefix_binding_power,
    token_to_math_op,
};
use super::Parser;
use crate::ast::{Atom, Expr, FunctionCall, Ident, Predicate, QualifiedName, RelevanceShape};
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// Parses a boolean expression whose connectives bind at least as tightly
    /// as `min_bp`.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        self.guarded(|p| p.parse_expression_inner(min_bp))
    }

    fn parse_expression_inner(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = if let Some(bp) = prefix_binding_power(&self.current().kind) {
            self.advance();
            let operand = self.parse_expression(bp)?;
            Expr::Not(Box::new(operand))
        } else {
            Expr::Predicate(self.parse_predicate(0)?)
        };

        loop {
            let Some((l_bp, r_bp)) = infix_binding_power(&self.current().kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let is_and = self.check_keyword(Keyword::And);
            self.advance();
            let rhs = self.parse_expression(r_bp)?;
            lhs = if is_and {
                Expr::And {
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                }
            } else {
                Expr::Or {
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                }
            };
        }

        Ok(lhs)
    }

    /// Parses a comma-separated, non-empty list of expressions.
    pub(super) fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expression(0)?];
        while self.consume(&TokenKind::Comma) {
            exprs.push(self.parse_expression(0)?);
        }
        Ok(exprs)
    }

    /// Parses a predicate chain, consuming operators whose level is at least
    /// `min_prec`.
    fn parse_predicate(&mut self, min_prec: u8) -> Result<Predicate, ParseError> {
        let mut lhs = Predicate::Atom(self.parse_math_atom(0)?);

        loop {
            let Some((op, negated, width)) = self.peek_predicate_op() else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            for _ in 0..width {
                self.advance();
            }

            let left = Box::new(lhs);
            lhs = match op {
                PredicateOp::Comparison(op) => Predicate::Comparison {
                    left,
                    op,
                    right: Box::new(self.parse_predicate_operand(prec + 1)?),
                },
                PredicateOp::IsNull => {
                    let negated = self.consume_keyword(Keyword::Not);
                    self.expect_keyword(Keyword::Null)?;
                    Predicate::IsNull {
                        expr: left,
                        negated,
                    }
                }
                PredicateOp::Between => {
                    let low = self.parse_predicate_operand(0)?;
                    self.expect_keyword(Keyword::And)?;
                    let high = self.parse_predicate_operand(prec + 1)?;
                    Predicate::Between {
                        expr: left,
                        low: Box::new(low),
                        high: Box::new(high),
                        negated,
                    }
                }
                PredicateOp::Like => Predicate::Like {
                    left,
                    right: Box::new(self.parse_predicate_operand(prec + 1)?),
                    negated,
                },
                PredicateOp::Regexp => Predicate::Regexp {
                    left,
                    right: Box::new(self.parse_predicate_operand(prec + 1)?),
                },
                PredicateOp::In => {
                    self.expect(&TokenKind::LeftParen, "'('")?;
                    let list = self.parse_expression_list()?;
                    self.expect_closing(&TokenKind::RightParen, "IN list")?;
                    Predicate::In {
                        expr: left,
                        list,
                        negated,
                    }
                }
            };
        }

        Ok(lhs)
    }

    /// Parses the operand of a predicate operator one nesting level deeper.
    fn parse_predicate_operand(&mut self, min_prec: u8) -> Result<Predicate, ParseError> {
        self.guarded(|p| p.parse_predicate(min_prec))
    }

    /// Looks at the upcoming tokens for a predicate operator.
    ///
    /// Returns the operator, whether a `NOT` precedes it, and how many
    /// tokens to consume before its operand.
    fn peek_predicate_op(&self) -> Option<(PredicateOp, bool, usize)> {
        let current = &self.current().kind;
        if let Some((op, width)) = comparison_op(current, &self.peek_at(1).kind) {
            return Some((PredicateOp::Comparison(op), false, width));
        }
        let (op, negated, width) = if let Some(op) = keyword_predicate_op(current) {
            (op, false, 1)
        } else if matches!(current, TokenKind::Keyword(Keyword::Not)) {
            let op = keyword_predicate_op(&self.peek_at(1).kind)?;
            if !op.is_negatable() {
                return None;
            }
            (op, true, 2)
        } else {
            return None;
        };
        if op == PredicateOp::In && self.no_in_at == Some(self.depth()) {
            return None;
        }
        Some((op, negated, width))
    }

    /// Parses arithmetic over atoms, consuming operators whose tier is at
    /// least `min_prec`.
    fn parse_math_atom(&mut self, min_prec: u8) -> Result<Atom, ParseError> {
        let mut lhs = self.parse_atom()?;

        loop {
            let Some(op) = token_to_math_op(&self.current().kind) else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.advance();
            let rhs = self.parse_math_atom(prec + 1)?;
            lhs = Atom::Math {
                left: Box::new(lhs),
                op,
                right: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    /// Parses a primary: constant, column, call or parenthesized expression.
    fn parse_atom(&mut self) -> Result<Atom, ParseError> {
        if let Some(shape) = self.alt_relevance_ahead() {
            let function = self.parse_alt_relevance(shape)?;
            return Ok(Atom::Function(FunctionCall::Relevance(function)));
        }
        if let Some(literal) = self.parse_literal()? {
            return Ok(Atom::Constant(literal));
        }

        match &self.current().kind {
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression(0)?;
                self.expect_closing(&TokenKind::RightParen, "parenthesized expression")?;
                Ok(Atom::Nested(Box::new(expr)))
            }
            TokenKind::Keyword(Keyword::Case) => Ok(Atom::Function(self.parse_case_expression()?)),
            TokenKind::Keyword(kw) if self.check_at(1, &TokenKind::LeftParen) => {
                let kw = *kw;
                Ok(Atom::Function(self.parse_function_call(kw)?))
            }
            TokenKind::Identifier(name) | TokenKind::BacktickQuoted(name)
                if self.check_at(1, &TokenKind::LeftParen) =>
            {
                Err(self.unknown_function(format!("Unknown function {name}")))
            }
            _ if self.is_ident_start(0) => Ok(Atom::Column(self.parse_qualified_name()?)),
            _ => Err(self.unexpected(&["expression"])),
        }
    }

    // --- Identifiers ---

    /// Returns true if an identifier starts `n` tokens ahead.
    pub(super) fn is_ident_start(&self, n: usize) -> bool {
        let token = self.peek_at(n);
        match &token.kind {
            TokenKind::Dot => {
                let next = self.peek_at(n + 1);
                matches!(next.kind, TokenKind::Identifier(_)) && token.span.touches(&next.span)
            }
            kind => kind.is_identifier(),
        }
    }

    /// Parses one identifier segment.
    pub(super) fn parse_ident(&mut self) -> Result<Ident, ParseError> {
        let token = self.current();
        let ident = match &token.kind {
            TokenKind::Identifier(name) => Ident::new(name.clone()),
            TokenKind::BacktickQuoted(name) => Ident::quoted(name.clone()),
            TokenKind::Keyword(kw) if kw.can_be_identifier() => Ident::new(token.text.clone()),
            TokenKind::Dot if self.is_ident_start(0) => {
                self.advance();
                let ident = match &self.current().kind {
                    TokenKind::Identifier(name) => Ident::new(format!(".{name}")),
                    _ => return Err(self.unexpected(&["identifier"])),
                };
                self.advance();
                return Ok(ident);
            }
            _ => return Err(self.unexpected(&["identifier"])),
        };
        self.advance();
        Ok(ident)
    }

    /// Parses an identifier where a double-quoted name is also allowed.
    pub(super) fn parse_name_ident(&mut self) -> Result<Ident, ParseError> {
        if let TokenKind::DoubleQuoted(name) = &self.current().kind {
            let ident = Ident::quoted(name.clone());
            self.advance();
            return Ok(ident);
        }
        self.parse_ident()
    }

    /// Parses `ident (. ident)*`.
    ///
    /// A dot is consumed only when an identifier follows it, so `path.*`
    /// stops before the dot.
    pub(super) fn parse_qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let mut parts = vec![self.parse_ident()?];
        while self.check(&TokenKind::Dot) && self.peek_at(1).kind.is_identifier() {
            self.advance();
            parts.push(self.parse_ident()?);
        }
        Ok(QualifiedName::new(parts))
    }

    /// Parses a table name, which may also be a double-quoted name.
    pub(super) fn parse_table_name(&mut self) -> Result<QualifiedName, ParseError> {
        if self.check(&TokenKind::DoubleQuoted(String::new())) {
            return Ok(QualifiedName::new(vec![self.parse_name_ident()?]));
        }
        if !self.is_ident_start(0) {
            return Err(self.unexpected(&["table name", "'('"]));
        }
        self.parse_qualified_name()
    }

    /// Detects `field = match_query(` or `field = multi_match(` ahead.
    pub(super) fn alt_relevance_ahead(&self) -> Option<RelevanceShape> {
        let mut i = match &self.current().kind {
            TokenKind::String(_) | TokenKind::DoubleQuoted(_) => 1,
            TokenKind::Dot if self.is_ident_start(0) => 2,
            kind if kind.is_identifier() => 1,
            _ => return None,
        };
        while self.check_at(i, &TokenKind::Dot) && self.peek_at(i + 1).kind.is_identifier() {
            i += 2;
        }
        if !self.check_at(i, &TokenKind::Eq) || !self.check_at(i + 2, &TokenKind::LeftParen) {
            return None;
        }
        let name = self.peek_at(i + 1).as_keyword()?;
        if name.is_alt_single_field_relevance_function() {
            Some(RelevanceShape::AltSingleField)
        } else if name.is_alt_multi_field_relevance_function() {
            Some(RelevanceShape::AltMultiField)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ComparisonOp, Literal, MathOp};
    use crate::parser::{ParseErrorKind, ParserConfig};

    fn expr(sql: &str) -> Expr {
        let mut parser = Parser::new(sql);
        let expr = parser.parse_expression(0).unwrap();
        assert!(parser.is_at_end(), "trailing input in {sql}");
        expr
    }

    fn int(n: i64) -> Atom {
        Atom::Constant(Literal::Decimal(n))
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let Expr::Or { right, .. } = expr("a OR b AND c") else {
            panic!("expected OR at the root");
        };
        assert!(matches!(*right, Expr::And { .. }));
    }

    #[test]
    fn test_not_binds_tighter_than_and() {
        let Expr::And { left, .. } = expr("NOT a AND b") else {
            panic!("expected AND at the root");
        };
        assert!(matches!(*left, Expr::Not(_)));
    }

    #[test]
    fn test_math_tiers() {
        let e = expr("1 + 2 * 3");
        let Some(Atom::Math { left, op, right }) = e.as_atom() else {
            panic!("expected math atom");
        };
        assert_eq!(*op, MathOp::Add);
        assert_eq!(**left, int(1));
        assert!(matches!(**right, Atom::Math { op: MathOp::Mul, .. }));
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let e = expr("10 - 4 - 3");
        let Some(Atom::Math { left, right, .. }) = e.as_atom() else {
            panic!("expected math atom");
        };
        assert!(matches!(**left, Atom::Math { op: MathOp::Sub, .. }));
        assert_eq!(**right, int(3));
    }

    #[test]
    fn test_two_token_comparison() {
        for sql in ["a <> 1", "a != 1", "a < > 1"] {
            let Expr::Predicate(Predicate::Comparison { op, .. }) = expr(sql) else {
                panic!("expected comparison for {sql}");
            };
            assert_eq!(op, ComparisonOp::NotEq);
        }
    }

    #[test]
    fn test_not_in_and_not_like() {
        assert!(matches!(
            expr("a NOT IN (1, 2)"),
            Expr::Predicate(Predicate::In { negated: true, .. })
        ));
        assert!(matches!(
            expr("a NOT LIKE 'x%'"),
            Expr::Predicate(Predicate::Like { negated: true, .. })
        ));
    }

    #[test]
    fn test_comparison_binds_tighter_than_like() {
        let Expr::Predicate(Predicate::Like { right, .. }) = expr("a LIKE b = c") else {
            panic!("expected LIKE at the root");
        };
        assert!(matches!(*right, Predicate::Comparison { .. }));
    }

    #[test]
    fn test_keyword_identifiers() {
        assert_eq!(expr("count"), Expr::column("count"));
        assert_eq!(expr("t.date"), Expr::column("t.date"));
    }

    #[test]
    fn test_leading_dot_identifier() {
        let e = expr(".kibana");
        assert_eq!(e.to_string(), ".kibana");
    }

    #[test]
    fn test_unknown_function() {
        let err = Parser::new("foo(1)").parse_expression(0).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownFunctionShape);
        assert_eq!(err.expected, vec!["function name"]);
    }

    #[test]
    fn test_depth_limit() {
        let config = ParserConfig::new().with_max_depth(4);
        let mut parser = Parser::with_config("((((((1))))))", config);
        let err = parser.parse_expression(0).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::RecursionLimitExceeded);

        let mut parser = Parser::with_config("((1))", config);
        assert!(parser.parse_expression(0).is_ok());
    }
}
