//! Constant parsing.

use super::error::{ParseError, ParseErrorKind};
use super::Parser;
use crate::ast::{Literal, TimeUnit};
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// Parses a constant if one starts at the current token.
    ///
    /// Returns `Ok(None)` without consuming anything when the current token
    /// cannot start a constant.
    pub(super) fn parse_literal(&mut self) -> Result<Option<Literal>, ParseError> {
        let literal = match &self.current().kind {
            TokenKind::String(s) | TokenKind::DoubleQuoted(s) => Literal::String(s.clone()),
            TokenKind::Decimal(_) | TokenKind::Real(_) => return self.parse_signed_number(false),
            TokenKind::Plus | TokenKind::Minus
                if matches!(
                    self.peek_at(1).kind,
                    TokenKind::Decimal(_) | TokenKind::Real(_)
                ) =>
            {
                let negative = self.check(&TokenKind::Minus);
                self.advance();
                return self.parse_signed_number(negative);
            }
            TokenKind::Keyword(Keyword::True) => Literal::Boolean(true),
            TokenKind::Keyword(Keyword::False) => Literal::Boolean(false),
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            TokenKind::Keyword(kw @ (Keyword::Date | Keyword::Time | Keyword::Timestamp))
                if self.is_string_at(1) =>
            {
                let kw = *kw;
                self.advance();
                return self.parse_datetime_value(kw).map(Some);
            }
            TokenKind::LeftBrace => return self.parse_odbc_literal().map(Some),
            TokenKind::Keyword(Keyword::Interval) => return self.parse_interval().map(Some),
            _ => return Ok(None),
        };
        self.advance();
        Ok(Some(literal))
    }

    /// Returns true if a single- or double-quoted string is `n` tokens ahead.
    pub(super) fn is_string_at(&self, n: usize) -> bool {
        matches!(
            self.peek_at(n).kind,
            TokenKind::String(_) | TokenKind::DoubleQuoted(_)
        )
    }

    /// Parses the string of a date, time or timestamp literal.
    fn parse_datetime_value(&mut self, kind: Keyword) -> Result<Literal, ParseError> {
        let value = match &self.current().kind {
            TokenKind::String(s) | TokenKind::DoubleQuoted(s) => s.clone(),
            _ => return Err(self.unexpected(&["string"])),
        };
        self.advance();
        Ok(match kind {
            Keyword::Time => Literal::Time(value),
            Keyword::Timestamp => Literal::Timestamp(value),
            _ => Literal::Date(value),
        })
    }

    /// Parses `{d '…'}`, `{t '…'}` or `{ts '…'}` and their long spellings.
    fn parse_odbc_literal(&mut self) -> Result<Literal, ParseError> {
        self.expect(&TokenKind::LeftBrace, "'{'")?;
        let kind = match self.current().as_keyword() {
            Some(Keyword::D | Keyword::Date) => Keyword::Date,
            Some(Keyword::T | Keyword::Time) => Keyword::Time,
            Some(Keyword::Ts | Keyword::Timestamp) => Keyword::Timestamp,
            _ => return Err(self.unexpected(&["D", "T", "TS"])),
        };
        self.advance();
        let literal = self.parse_datetime_value(kind)?;
        self.expect_closing(&TokenKind::RightBrace, "datetime literal")?;
        Ok(literal)
    }

    /// Parses `INTERVAL expr unit`.
    fn parse_interval(&mut self) -> Result<Literal, ParseError> {
        self.expect_keyword(Keyword::Interval)?;
        let value = self.parse_expression(0)?;
        let Some(unit) = self.current().as_keyword().and_then(TimeUnit::from_keyword) else {
            return Err(self.unexpected(&["interval unit"]));
        };
        self.advance();
        Ok(Literal::Interval {
            value: Box::new(value),
            unit,
        })
    }

    /// Parses a number at the current token, folding in a sign already
    /// consumed.
    fn parse_signed_number(&mut self, negative: bool) -> Result<Option<Literal>, ParseError> {
        let literal = match self.current().kind {
            TokenKind::Decimal(n) => {
                let value = if negative {
                    0i64.checked_sub_unsigned(n)
                } else {
                    i64::try_from(n).ok()
                };
                match value {
                    Some(value) => Literal::Decimal(value),
                    None => {
                        return Err(self.error(
                            ParseErrorKind::InvalidLiteral,
                            format!(
                                "Integer literal {}{n} is out of range",
                                if negative { "-" } else { "" }
                            ),
                        ));
                    }
                }
            }
            TokenKind::Real(r) => Literal::Real(if negative { -r } else { r }),
            _ => return Err(self.unexpected(&["number"])),
        };
        self.advance();
        Ok(Some(literal))
    }
}
