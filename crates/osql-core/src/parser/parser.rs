//! SQL Parser implementation.
//!
//! Statement-level grammar and the token cursor. Expressions, literals and
//! function calls are parsed by `impl Parser` blocks in sibling modules.

use tracing::{debug, trace};

use super::config::ParserConfig;
use super::error::{ParseError, ParseErrorKind};
use crate::ast::{
    ColumnFilter, FromClause, Ident, LimitClause, NullOrdering, OrderBy, OrderDirection, QuerySpec,
    Relation, SelectClause, SelectElement, SetQuantifier, ShowPattern, Statement, TableFilter,
};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// OpenSearch SQL parser.
///
/// The parser owns its token vector, so bounded lookahead and backtracking
/// are a matter of moving the cursor.
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    config: ParserConfig,
    /// Nesting depth at which `IN` is not a predicate operator.
    pub(super) no_in_at: Option<usize>,
}

impl Parser {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a new parser with explicit options.
    #[must_use]
    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        let tokens = Lexer::new(input).tokenize();
        Self::from_tokens(tokens, config)
    }

    /// Creates a parser over an existing token stream.
    ///
    /// An end-of-input token is appended if the stream does not end with one.
    #[must_use]
    pub fn from_tokens(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        match tokens.last() {
            Some(last) if last.is_eof() => {}
            last => {
                let offset = last.map_or(0, |t| t.span.end);
                tokens.push(Token::eof(offset));
            }
        }
        Self {
            tokens,
            pos: 0,
            depth: 0,
            config,
            no_in_at: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a whole input: an optional statement, an optional `;`, then
    /// end of input.
    ///
    /// Returns `Ok(None)` for input that holds no statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid statement or has
    /// anything after it.
    pub fn parse_root(&mut self) -> Result<Option<Statement>, ParseError> {
        debug!(tokens = self.tokens.len(), "parsing root");
        let result = self.parse_root_inner();
        match &result {
            Ok(stmt) => debug!(empty = stmt.is_none(), "parsed root"),
            Err(err) => debug!(kind = %err.kind, offset = err.offset(), "parse failed"),
        }
        result
    }

    fn parse_root_inner(&mut self) -> Result<Option<Statement>, ParseError> {
        let statement = if self.check(&TokenKind::Semicolon) || self.is_at_end() {
            None
        } else {
            Some(self.parse_statement()?)
        };
        self.consume(&TokenKind::Semicolon);
        if !self.is_at_end() {
            let expected: &[&'static str] = if statement.is_some() {
                &["';'", "end of input"]
            } else {
                &["end of input"]
            };
            return Err(self.unexpected(expected));
        }
        Ok(statement)
    }

    /// Parses a single statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.current().as_keyword() {
            Some(Keyword::Select) => Ok(Statement::Select(self.parse_query_spec()?)),
            Some(Keyword::Show) => self.parse_show(),
            Some(Keyword::Describe) => self.parse_describe(),
            _ => Err(self.unexpected(&["SELECT", "SHOW", "DESCRIBE"])),
        }
    }

    // --- Admin statements ---

    fn parse_show(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Show)?;
        Ok(Statement::Show(self.parse_table_filter()?))
    }

    fn parse_describe(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Describe)?;
        let tables = self.parse_table_filter()?;
        let columns = if self.consume_keyword(Keyword::Columns) {
            self.expect_keyword(Keyword::Like)?;
            Some(ColumnFilter {
                pattern: self.parse_show_pattern()?,
            })
        } else {
            None
        };
        Ok(Statement::Describe { tables, columns })
    }

    fn parse_table_filter(&mut self) -> Result<TableFilter, ParseError> {
        self.expect_keyword(Keyword::Tables)?;
        self.expect_keyword(Keyword::Like)?;
        Ok(TableFilter {
            pattern: self.parse_show_pattern()?,
        })
    }

    /// Parses a quoted pattern or a run of adjacent unquoted tokens such as
    /// `logs-2020*`.
    fn parse_show_pattern(&mut self) -> Result<ShowPattern, ParseError> {
        if let TokenKind::String(s) | TokenKind::DoubleQuoted(s) = &self.current().kind {
            let pattern = ShowPattern::String(s.clone());
            self.advance();
            return Ok(pattern);
        }
        if !is_pattern_token(&self.current().kind) {
            return Err(self.unexpected(&["pattern", "string"]));
        }
        let mut text = String::new();
        loop {
            let token = self.current();
            text.push_str(&token.text);
            let span = token.span;
            self.advance();
            let next = self.current();
            if !is_pattern_token(&next.kind) || !span.touches(&next.span) {
                break;
            }
        }
        Ok(ShowPattern::Compatible(text))
    }

    // --- Query specification ---

    /// Parses `SELECT ... [FROM ...] [LIMIT ...]`.
    pub(super) fn parse_query_spec(&mut self) -> Result<QuerySpec, ParseError> {
        self.guarded(|p| {
            let select = p.parse_select_clause()?;
            let from = if p.check_keyword(Keyword::From) {
                Some(p.parse_from_clause()?)
            } else {
                None
            };
            let limit = if p.check_keyword(Keyword::Limit) {
                Some(p.parse_limit_clause()?)
            } else {
                None
            };
            Ok(QuerySpec {
                select,
                from,
                limit,
            })
        })
    }

    fn parse_select_clause(&mut self) -> Result<SelectClause, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let quantifier = if self.consume_keyword(Keyword::All) {
            Some(SetQuantifier::All)
        } else if self.consume_keyword(Keyword::Distinct) {
            Some(SetQuantifier::Distinct)
        } else {
            None
        };

        let mut wildcard = false;
        let mut elements = vec![];
        if self.consume(&TokenKind::Star) {
            wildcard = true;
        } else {
            elements.push(self.parse_select_element()?);
        }
        while self.consume(&TokenKind::Comma) {
            elements.push(self.parse_select_element()?);
        }

        Ok(SelectClause {
            quantifier,
            wildcard,
            elements,
        })
    }

    fn parse_select_element(&mut self) -> Result<SelectElement, ParseError> {
        let expr = self.parse_expression(0)?;
        let alias = self.parse_optional_alias()?;
        Ok(SelectElement { expr, alias })
    }

    /// Parses `[AS] alias`. The alias is required after `AS`.
    fn parse_optional_alias(&mut self) -> Result<Option<Ident>, ParseError> {
        if self.consume_keyword(Keyword::As) {
            return Ok(Some(self.parse_name_ident()?));
        }
        if self.is_ident_start(0) || self.check(&TokenKind::DoubleQuoted(String::new())) {
            return Ok(Some(self.parse_name_ident()?));
        }
        Ok(None)
    }

    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        self.expect_keyword(Keyword::From)?;
        let mut from = FromClause::new(self.parse_relation()?);

        if self.consume_keyword(Keyword::Where) {
            from.where_clause = Some(self.parse_expression(0)?);
        }
        if self.consume_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            from.group_by = self.parse_expression_list()?;
        }
        if self.consume_keyword(Keyword::Having) {
            from.having = Some(self.parse_expression(0)?);
        }
        if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            from.order_by = self.parse_order_by_list()?;
        }
        Ok(from)
    }

    fn parse_relation(&mut self) -> Result<Relation, ParseError> {
        if self.consume(&TokenKind::LeftParen) {
            let query = self.parse_query_spec()?;
            self.expect_closing(&TokenKind::RightParen, "subquery")?;
            self.consume_keyword(Keyword::As);
            let alias = self.parse_name_ident()?;
            return Ok(Relation::Subquery {
                query: Box::new(query),
                alias,
            });
        }

        let name = self.parse_table_name()?;
        let alias = self.parse_optional_alias()?;
        Ok(Relation::Table { name, alias })
    }

    /// Parses `LIMIT [offset,] limit` or `LIMIT limit OFFSET offset`.
    fn parse_limit_clause(&mut self) -> Result<LimitClause, ParseError> {
        self.expect_keyword(Keyword::Limit)?;
        let first = self.parse_unsigned()?;
        if self.consume(&TokenKind::Comma) {
            let limit = self.parse_unsigned()?;
            return Ok(LimitClause {
                offset: Some(first),
                limit,
            });
        }
        let offset = if self.consume_keyword(Keyword::Offset) {
            Some(self.parse_unsigned()?)
        } else {
            None
        };
        Ok(LimitClause {
            offset,
            limit: first,
        })
    }

    fn parse_unsigned(&mut self) -> Result<u64, ParseError> {
        match self.current().kind {
            TokenKind::Decimal(n) => {
                self.advance();
                Ok(n)
            }
            _ => Err(self.unexpected(&["integer"])),
        }
    }

    /// Parses `expr [ASC|DESC] [NULLS FIRST|LAST], ...`.
    pub(super) fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let direction = if self.consume_keyword(Keyword::Desc) {
                OrderDirection::Desc
            } else {
                self.consume_keyword(Keyword::Asc);
                OrderDirection::Asc
            };
            let nulls = if self.consume_keyword(Keyword::Nulls) {
                if self.consume_keyword(Keyword::First) {
                    Some(NullOrdering::First)
                } else if self.consume_keyword(Keyword::Last) {
                    Some(NullOrdering::Last)
                } else {
                    return Err(self.unexpected(&["FIRST", "LAST"]));
                }
            } else {
                None
            };

            items.push(OrderBy {
                expr,
                direction,
                nulls,
            });

            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    // --- Helper methods ---

    /// Returns the current token.
    pub(super) fn current(&self) -> &Token {
        self.peek_at(0)
    }

    /// Returns the token `n` positions ahead, or the end-of-input token.
    pub(super) fn peek_at(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Returns true if the token `n` positions ahead is the given keyword.
    pub(super) fn peek_keyword(&self, n: usize, keyword: Keyword) -> bool {
        self.peek_at(n).is_keyword(keyword)
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Advances to the next token.
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Returns the cursor for a later [`Self::restore`].
    pub(super) const fn save(&self) -> usize {
        self.pos
    }

    pub(super) fn restore(&mut self, pos: usize) {
        trace!(from = self.pos, to = pos, "backtracking");
        self.pos = pos;
    }

    /// Checks if the current token matches the given kind.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the token `n` positions ahead matches the given kind.
    pub(super) fn check_at(&self, n: usize, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.peek_at(n).kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().is_keyword(keyword)
    }

    /// Consumes the current token if it matches the given kind.
    pub(super) fn consume(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    pub(super) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        if self.consume(kind) {
            Ok(())
        } else {
            Err(self.unexpected(&[expected]))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(&[keyword.as_str()]))
        }
    }

    /// Expects the token that closes `construct`.
    pub(super) fn expect_closing(
        &mut self,
        kind: &TokenKind,
        construct: &str,
    ) -> Result<(), ParseError> {
        if self.consume(kind) {
            return Ok(());
        }
        let closing = match kind {
            TokenKind::RightBracket => "']'",
            TokenKind::RightBrace => "'}'",
            _ => "')'",
        };
        let token = self.current();
        Err(ParseError::unterminated(
            construct,
            closing,
            token.kind.clone(),
            token.span,
        ))
    }

    /// Builds an "unexpected token" error at the current token.
    pub(super) fn unexpected(&self, expected: &[&'static str]) -> ParseError {
        let token = self.current();
        ParseError::unexpected(expected, token.kind.clone(), token.span)
    }

    /// Builds an error of the given kind at the current token.
    pub(super) fn error(&self, kind: ParseErrorKind, message: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError::new(kind, message, token.kind.clone(), token.span)
    }

    /// Builds an "unknown function" error at the current token.
    pub(super) fn unknown_function(&self, message: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError::unknown_function(message, token.kind.clone(), token.span)
    }

    /// Returns the current nesting depth.
    pub(super) const fn depth(&self) -> usize {
        self.depth
    }

    /// Runs `f` one nesting level deeper, failing once the configured
    /// maximum is exceeded.
    pub(super) fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(self.error(
                ParseErrorKind::RecursionLimitExceeded,
                format!(
                    "Recursion limit exceeded: nesting deeper than {}",
                    self.config.max_depth
                ),
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Tokens that may appear in an unquoted SHOW/DESCRIBE pattern.
const fn is_pattern_token(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier(_)
            | TokenKind::Keyword(_)
            | TokenKind::Percent
            | TokenKind::Star
            | TokenKind::Minus
            | TokenKind::Dot
            | TokenKind::Decimal(_)
            | TokenKind::Real(_)
    )
}
