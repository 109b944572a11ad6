//! Function call resolution.
//!
//! The keyword in front of `(` selects the call shape; each shape has its own
//! argument grammar.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::Parser;
use crate::ast::{
    AggregateCall, AggregateFunction, DataType, Expr, FunctionCall, GetFormatType, HighlightArg,
    HighlightArgName, Literal, MultiMatchArgName, OrderBy, OverClause, RelevanceArg,
    RelevanceArgName, RelevanceField, RelevanceFunction, RelevanceShape, RelevanceValue,
    ScoreFunction, TimeUnit, TimestampFunction, Weight, WeightedField, WindowCall, WindowFunction,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// Parses a call whose name is `name`, with `(` as the next token.
    pub(super) fn parse_function_call(&mut self, name: Keyword) -> Result<FunctionCall, ParseError> {
        trace!(function = name.as_str(), "dispatching function call");
        match name {
            Keyword::Case => self.parse_case_expression(),
            Keyword::Cast => self.parse_cast_expression(),
            Keyword::Nested if self.nested_all_ahead() => self.parse_nested_all(),
            kw if kw.is_scalar_function() => {
                self.advance();
                let args = self.parse_call_args()?;
                Ok(FunctionCall::Scalar { name: kw, args })
            }
            kw if kw.is_aggregate_function() => self.parse_aggregate_call(kw),
            kw if kw.is_ranking_function() => self.parse_ranking_window(kw),
            kw if kw.is_score_function() => self.parse_score_function(kw),
            kw if kw.is_relevance_function() => {
                Ok(FunctionCall::Relevance(self.parse_relevance_function()?))
            }
            Keyword::Highlight => self.parse_highlight_function(),
            Keyword::Position => self.parse_position_function(),
            Keyword::Extract => self.parse_extract_function(),
            Keyword::GetFormat => self.parse_get_format_function(),
            Keyword::Timestampadd => self.parse_timestamp_function(TimestampFunction::Add),
            Keyword::Timestampdiff => self.parse_timestamp_function(TimestampFunction::Diff),
            kw => Err(self.unknown_function(format!("{kw} is not a function"))),
        }
    }

    /// Parses `( [expr, ...] )`.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(&TokenKind::LeftParen, "'('")?;
        let args = if self.check(&TokenKind::RightParen) {
            vec![]
        } else {
            self.parse_expression_list()?
        };
        self.expect_closing(&TokenKind::RightParen, "argument list")?;
        Ok(args)
    }

    // --- CASE / CAST ---

    /// Parses `CASE [operand] WHEN .. THEN .. [ELSE ..] END`.
    pub(super) fn parse_case_expression(&mut self) -> Result<FunctionCall, ParseError> {
        self.expect_keyword(Keyword::Case)?;
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };
        if !self.check_keyword(Keyword::When) {
            return Err(self.unexpected(&["WHEN"]));
        }

        let mut when_clauses = vec![];
        while self.consume_keyword(Keyword::When) {
            let condition = self.parse_expression(0)?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expression(0)?;
            when_clauses.push((condition, result));
        }

        let else_clause = if self.consume_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };

        if !self.consume_keyword(Keyword::End) {
            let token = self.current();
            return Err(ParseError::unterminated(
                "CASE expression",
                "END",
                token.kind.clone(),
                token.span,
            ));
        }

        Ok(FunctionCall::Case {
            operand,
            when_clauses,
            else_clause,
        })
    }

    /// Parses `CAST(expr AS type)`.
    fn parse_cast_expression(&mut self) -> Result<FunctionCall, ParseError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let expr = self.parse_expression(0)?;
        self.expect_keyword(Keyword::As)?;
        let Some(data_type) = self.current().as_keyword().and_then(DataType::from_keyword) else {
            return Err(self.unexpected(&["data type"]));
        };
        self.advance();
        self.expect_closing(&TokenKind::RightParen, "CAST")?;
        Ok(FunctionCall::Cast {
            expr: Box::new(expr),
            data_type,
        })
    }

    // --- NESTED ---

    /// Returns true if `NESTED ( path . * )` is ahead.
    fn nested_all_ahead(&self) -> bool {
        let mut i = 2;
        if !self.peek_at(i).kind.is_identifier() {
            return false;
        }
        loop {
            i += 1;
            if !self.check_at(i, &TokenKind::Dot) {
                return false;
            }
            if self.check_at(i + 1, &TokenKind::Star) {
                return self.check_at(i + 2, &TokenKind::RightParen);
            }
            if !self.peek_at(i + 1).kind.is_identifier() {
                return false;
            }
            i += 1;
        }
    }

    fn parse_nested_all(&mut self) -> Result<FunctionCall, ParseError> {
        self.expect_keyword(Keyword::Nested)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let path = self.parse_qualified_name()?;
        self.expect(&TokenKind::Dot, "'.'")?;
        self.expect(&TokenKind::Star, "'*'")?;
        self.expect_closing(&TokenKind::RightParen, "NESTED")?;
        Ok(FunctionCall::NestedAll { path })
    }

    // --- Aggregates and windows ---

    fn parse_aggregate_function(&mut self, name: Keyword) -> Result<AggregateFunction, ParseError> {
        self.advance();
        self.expect(&TokenKind::LeftParen, "'('")?;
        let function = if name == Keyword::Count && self.consume(&TokenKind::Star) {
            AggregateFunction::CountStar
        } else if name == Keyword::Count && self.consume_keyword(Keyword::Distinct) {
            AggregateFunction::DistinctCount(Box::new(self.parse_expression(0)?))
        } else {
            AggregateFunction::Regular {
                name,
                arg: Box::new(self.parse_expression(0)?),
            }
        };
        self.expect_closing(&TokenKind::RightParen, "aggregate call")?;
        Ok(function)
    }

    /// Parses an aggregate with its optional window, ordering and filter.
    fn parse_aggregate_call(&mut self, name: Keyword) -> Result<FunctionCall, ParseError> {
        let function = self.parse_aggregate_function(name)?;

        if self.check_keyword(Keyword::Over) {
            let over = self.parse_over_clause()?;
            return Ok(FunctionCall::Window(WindowCall {
                function: WindowFunction::Aggregate(function),
                over,
            }));
        }

        let mut call = AggregateCall::plain(function);
        if self.check_keyword(Keyword::Order) && self.peek_keyword(1, Keyword::By) {
            // The ordering belongs to the aggregate only when FILTER follows;
            // otherwise it is the enclosing query's ORDER BY.
            let start = self.save();
            match self.parse_aggregate_ordering() {
                Ok(order_by) if self.check_keyword(Keyword::Filter) => call.order_by = order_by,
                Err(err) if err.kind == ParseErrorKind::RecursionLimitExceeded => return Err(err),
                _ => {
                    trace!("aggregate ORDER BY without FILTER");
                    self.restore(start);
                }
            }
        }
        if self.check_keyword(Keyword::Filter) {
            call.filter = Some(Box::new(self.parse_filter_clause()?));
        }
        Ok(FunctionCall::Aggregate(call))
    }

    fn parse_aggregate_ordering(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        self.expect_keyword(Keyword::Order)?;
        self.expect_keyword(Keyword::By)?;
        self.parse_order_by_list()
    }

    /// Parses `FILTER (WHERE expr)`.
    fn parse_filter_clause(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Filter)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        self.expect_keyword(Keyword::Where)?;
        let condition = self.parse_expression(0)?;
        self.expect_closing(&TokenKind::RightParen, "FILTER clause")?;
        Ok(condition)
    }

    fn parse_ranking_window(&mut self, name: Keyword) -> Result<FunctionCall, ParseError> {
        self.advance();
        let args = self.parse_call_args()?;
        let over = self.parse_over_clause()?;
        Ok(FunctionCall::Window(WindowCall {
            function: WindowFunction::Ranking { name, args },
            over,
        }))
    }

    /// Parses `OVER ([PARTITION BY exprs] [ORDER BY items])`.
    fn parse_over_clause(&mut self) -> Result<OverClause, ParseError> {
        self.expect_keyword(Keyword::Over)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut over = OverClause::default();
        if self.consume_keyword(Keyword::Partition) {
            self.expect_keyword(Keyword::By)?;
            over.partition_by = self.parse_expression_list()?;
        }
        if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            over.order_by = self.parse_order_by_list()?;
        }
        self.expect_closing(&TokenKind::RightParen, "OVER clause")?;
        Ok(over)
    }

    // --- Relevance ---

    /// Parses any relevance function, including the `field = fn(..)` forms.
    fn parse_relevance_function(&mut self) -> Result<RelevanceFunction, ParseError> {
        if let Some(shape) = self.alt_relevance_ahead() {
            return self.parse_alt_relevance(shape);
        }
        let Some(name) = self
            .current()
            .as_keyword()
            .filter(|kw| kw.is_relevance_function())
        else {
            return Err(self.unexpected(&["relevance function"]));
        };
        self.advance();
        self.expect(&TokenKind::LeftParen, "'('")?;

        let (shape, fields, query) = if name.is_no_field_relevance_function() {
            (RelevanceShape::NoField, vec![], self.parse_relevance_value()?)
        } else if name.is_single_field_relevance_function() {
            let field = self.parse_relevance_field()?;
            self.expect(&TokenKind::Comma, "','")?;
            let query = self.parse_relevance_value()?;
            (
                RelevanceShape::SingleField,
                vec![WeightedField::new(field)],
                query,
            )
        } else if self.consume(&TokenKind::LeftBracket) {
            let mut fields = vec![self.parse_weighted_field()?];
            while self.consume(&TokenKind::Comma) {
                fields.push(self.parse_weighted_field()?);
            }
            self.expect_closing(&TokenKind::RightBracket, "field list")?;
            self.expect(&TokenKind::Comma, "','")?;
            let query = self.parse_relevance_value()?;
            (RelevanceShape::MultiField, fields, query)
        } else {
            self.parse_multi_match_by_name()?
        };

        let args = self.parse_relevance_args()?;
        self.expect_closing(&TokenKind::RightParen, "relevance function")?;
        Ok(RelevanceFunction {
            name,
            shape,
            fields,
            query,
            args,
        })
    }

    /// Parses `query_name = value, fields_name = [field]` inside a
    /// multi-field call.
    fn parse_multi_match_by_name(
        &mut self,
    ) -> Result<(RelevanceShape, Vec<WeightedField>, RelevanceValue), ParseError> {
        let query_name = self.parse_multi_match_arg_name()?;
        self.expect(&TokenKind::Eq, "'='")?;
        let query = self.parse_relevance_value()?;
        self.expect(&TokenKind::Comma, "','")?;

        let fields_name = self.parse_multi_match_arg_name()?;
        self.expect(&TokenKind::Eq, "'='")?;
        let bracketed = self.consume(&TokenKind::LeftBracket);
        let field = match self.parse_relevance_value()? {
            RelevanceValue::Name(name) => RelevanceField::Name(name),
            RelevanceValue::Constant(Literal::String(s)) => RelevanceField::String(s),
            RelevanceValue::Constant(other) => RelevanceField::Constant(other),
        };
        if bracketed {
            self.expect_closing(&TokenKind::RightBracket, "field list")?;
        }

        Ok((
            RelevanceShape::MultiFieldByName {
                query_name,
                fields_name,
                bracketed,
            },
            vec![WeightedField::new(field)],
            query,
        ))
    }

    fn parse_multi_match_arg_name(&mut self) -> Result<MultiMatchArgName, ParseError> {
        let name = match &self.current().kind {
            TokenKind::Keyword(Keyword::Fields) => MultiMatchArgName::Fields,
            TokenKind::Keyword(Keyword::Query) => MultiMatchArgName::Query,
            TokenKind::String(s) | TokenKind::DoubleQuoted(s) => MultiMatchArgName::Quoted(s.clone()),
            _ => return Err(self.unexpected(&["'['", "FIELDS", "QUERY", "string"])),
        };
        self.advance();
        Ok(name)
    }

    /// Parses `field = match_query(..)` or `field = multi_match(..)`.
    pub(super) fn parse_alt_relevance(
        &mut self,
        shape: RelevanceShape,
    ) -> Result<RelevanceFunction, ParseError> {
        trace!(?shape, "alternate relevance syntax");
        let field = self.parse_relevance_field()?;
        self.expect(&TokenKind::Eq, "'='")?;
        let Some(name) = self.current().as_keyword() else {
            return Err(self.unexpected(&["relevance function"]));
        };
        self.advance();
        self.expect(&TokenKind::LeftParen, "'('")?;
        let query = self.parse_relevance_value()?;
        let args = self.parse_relevance_args()?;
        self.expect_closing(&TokenKind::RightParen, "relevance function")?;
        Ok(RelevanceFunction {
            name,
            shape,
            fields: vec![WeightedField::new(field)],
            query,
            args,
        })
    }

    /// Parses a field path or a quoted field pattern.
    fn parse_relevance_field(&mut self) -> Result<RelevanceField, ParseError> {
        if let TokenKind::String(s) | TokenKind::DoubleQuoted(s) = &self.current().kind {
            let field = RelevanceField::String(s.clone());
            self.advance();
            return Ok(field);
        }
        if !self.is_ident_start(0) {
            return Err(self.unexpected(&["field", "string"]));
        }
        Ok(RelevanceField::Name(self.parse_qualified_name()?))
    }

    /// Parses `field`, `field ^ weight` or `field weight`.
    fn parse_weighted_field(&mut self) -> Result<WeightedField, ParseError> {
        let field = self.parse_relevance_field()?;
        let weight = if self.consume(&TokenKind::Caret)
            || matches!(self.current().kind, TokenKind::Decimal(_) | TokenKind::Real(_))
        {
            Some(self.parse_weight()?)
        } else {
            None
        };
        Ok(WeightedField { field, weight })
    }

    fn parse_weight(&mut self) -> Result<Weight, ParseError> {
        let weight = match self.current().kind {
            TokenKind::Decimal(n) => Weight::Decimal(n),
            TokenKind::Real(r) => Weight::Real(r),
            _ => return Err(self.unexpected(&["number"])),
        };
        self.advance();
        Ok(weight)
    }

    /// Parses a query text or option value: a name or a constant.
    fn parse_relevance_value(&mut self) -> Result<RelevanceValue, ParseError> {
        let typed_literal = matches!(
            self.current().as_keyword(),
            Some(Keyword::Date | Keyword::Time | Keyword::Timestamp)
        ) && self.is_string_at(1);
        if self.is_ident_start(0) && !typed_literal {
            return Ok(RelevanceValue::Name(self.parse_qualified_name()?));
        }
        match self.parse_literal()? {
            Some(literal) => Ok(RelevanceValue::Constant(literal)),
            None => Err(self.unexpected(&["name", "constant"])),
        }
    }

    /// Parses `(, name = value)*`.
    fn parse_relevance_args(&mut self) -> Result<Vec<RelevanceArg>, ParseError> {
        let mut args = vec![];
        while self.consume(&TokenKind::Comma) {
            let name = match &self.current().kind {
                TokenKind::Keyword(kw) if kw.is_relevance_arg_name() => {
                    RelevanceArgName::Keyword(*kw)
                }
                TokenKind::String(s) | TokenKind::DoubleQuoted(s) => {
                    RelevanceArgName::Quoted(s.clone())
                }
                _ => return Err(self.unexpected(&["relevance argument"])),
            };
            self.advance();
            self.expect(&TokenKind::Eq, "'='")?;
            let value = self.parse_relevance_value()?;
            args.push(RelevanceArg { name, value });
        }
        Ok(args)
    }

    /// Parses `SCORE(relevance_fn [, weight])`.
    fn parse_score_function(&mut self, name: Keyword) -> Result<FunctionCall, ParseError> {
        self.advance();
        self.expect(&TokenKind::LeftParen, "'('")?;
        let function = self.parse_relevance_function()?;
        let weight = if self.consume(&TokenKind::Comma) {
            Some(self.parse_weight()?)
        } else {
            None
        };
        self.expect_closing(&TokenKind::RightParen, "score function")?;
        Ok(FunctionCall::Score(ScoreFunction {
            name,
            function: Box::new(function),
            weight,
        }))
    }

    /// Parses `HIGHLIGHT(field [, pre_tags = '..'] [, post_tags = '..'])`.
    fn parse_highlight_function(&mut self) -> Result<FunctionCall, ParseError> {
        self.expect_keyword(Keyword::Highlight)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let field = self.parse_relevance_field()?;
        let mut args = vec![];
        while self.consume(&TokenKind::Comma) {
            let name = match self.current().as_keyword() {
                Some(Keyword::PreTags) => HighlightArgName::PreTags,
                Some(Keyword::PostTags) => HighlightArgName::PostTags,
                _ => return Err(self.unexpected(&["PRE_TAGS", "POST_TAGS"])),
            };
            self.advance();
            self.expect(&TokenKind::Eq, "'='")?;
            let value = match &self.current().kind {
                TokenKind::String(s) | TokenKind::DoubleQuoted(s) => s.clone(),
                _ => return Err(self.unexpected(&["string"])),
            };
            self.advance();
            args.push(HighlightArg { name, value });
        }
        self.expect_closing(&TokenKind::RightParen, "HIGHLIGHT")?;
        Ok(FunctionCall::Highlight { field, args })
    }

    // --- Special forms ---

    /// Parses `POSITION(needle IN haystack)`.
    fn parse_position_function(&mut self) -> Result<FunctionCall, ParseError> {
        self.expect_keyword(Keyword::Position)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let needle_depth = self.depth() + 1;
        let outer = self.no_in_at.replace(needle_depth);
        let needle = self.parse_expression(0);
        self.no_in_at = outer;
        let needle = needle?;
        self.expect_keyword(Keyword::In)?;
        let haystack = self.parse_expression(0)?;
        self.expect_closing(&TokenKind::RightParen, "POSITION")?;
        Ok(FunctionCall::Position {
            needle: Box::new(needle),
            haystack: Box::new(haystack),
        })
    }

    /// Parses `EXTRACT(part FROM expr)`.
    fn parse_extract_function(&mut self) -> Result<FunctionCall, ParseError> {
        self.expect_keyword(Keyword::Extract)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let Some(part) = self.current().as_keyword().and_then(TimeUnit::from_keyword) else {
            return Err(self.unexpected(&["datetime part"]));
        };
        self.advance();
        self.expect_keyword(Keyword::From)?;
        let expr = self.parse_expression(0)?;
        self.expect_closing(&TokenKind::RightParen, "EXTRACT")?;
        Ok(FunctionCall::Extract {
            part,
            expr: Box::new(expr),
        })
    }

    /// Parses `GET_FORMAT(type, expr)`.
    fn parse_get_format_function(&mut self) -> Result<FunctionCall, ParseError> {
        self.expect_keyword(Keyword::GetFormat)?;
        self.expect(&TokenKind::LeftParen, "'('")?;
        let Some(format_type) = self
            .current()
            .as_keyword()
            .and_then(GetFormatType::from_keyword)
        else {
            return Err(self.unexpected(&["DATE", "DATETIME", "TIME", "TIMESTAMP"]));
        };
        self.advance();
        self.expect(&TokenKind::Comma, "','")?;
        let arg = self.parse_expression(0)?;
        self.expect_closing(&TokenKind::RightParen, "GET_FORMAT")?;
        Ok(FunctionCall::GetFormat {
            format_type,
            arg: Box::new(arg),
        })
    }

    /// Parses `TIMESTAMPADD(unit, a, b)` or `TIMESTAMPDIFF(unit, a, b)`.
    fn parse_timestamp_function(
        &mut self,
        function: TimestampFunction,
    ) -> Result<FunctionCall, ParseError> {
        self.advance();
        self.expect(&TokenKind::LeftParen, "'('")?;
        let Some(unit) = self
            .current()
            .as_keyword()
            .and_then(TimeUnit::from_keyword)
            .filter(TimeUnit::is_simple)
        else {
            return Err(self.unexpected(&["simple interval unit"]));
        };
        self.advance();
        self.expect(&TokenKind::Comma, "','")?;
        let first = self.parse_expression(0)?;
        self.expect(&TokenKind::Comma, "','")?;
        let second = self.parse_expression(0)?;
        self.expect_closing(&TokenKind::RightParen, function.as_str())?;
        Ok(FunctionCall::Timestamp {
            function,
            unit,
            first: Box::new(first),
            second: Box::new(second),
        })
    }
}
