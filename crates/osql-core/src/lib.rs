//! # osql-core
//!
//! A parser for the OpenSearch SQL dialect.
//!
//! This crate provides:
//! - A lexer producing typed tokens for every reserved word of the dialect
//! - A hand-written recursive descent parser for `SELECT`, `SHOW` and
//!   `DESCRIBE` statements
//! - Full-text relevance functions (`match`, `multi_match`, `query_string`,
//!   ...), their `field = match_query(..)` form and `score` wrappers
//! - An AST whose `Display` renders SQL that parses back to an equal tree
//!
//! ## Parsing
//!
//! ```rust
//! use osql_core::ast::{Expr, Statement};
//! use osql_core::parse_sql;
//!
//! let stmt = parse_sql("SELECT name FROM accounts WHERE match(address, 'Lane')").unwrap();
//! let Statement::Select(query) = &stmt else { unreachable!() };
//! assert_eq!(query.select.elements[0].expr, Expr::column("name"));
//!
//! assert_eq!(
//!     stmt.to_string(),
//!     "SELECT name FROM accounts WHERE MATCH(address, 'Lane')"
//! );
//! ```
//!
//! ## Bounded nesting
//!
//! Deeply nested input fails with an error instead of overflowing the stack:
//!
//! ```rust
//! use osql_core::parser::{ParseErrorKind, Parser, ParserConfig};
//!
//! let sql = format!("SELECT {}1{}", "(".repeat(20), ")".repeat(20));
//! let mut parser = Parser::with_config(&sql, ParserConfig::new().with_max_depth(10));
//! let err = parser.parse_root().unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::RecursionLimitExceeded);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Statement};
pub use lexer::{Keyword, Lexer, Span, Token, TokenKind};
pub use parser::{ParseError, ParseErrorKind, Parser, ParserConfig};

/// Parses one statement with the default configuration.
///
/// Unlike [`Parser::parse_root`], input without a statement is an error.
///
/// # Errors
///
/// Returns a `ParseError` if `sql` does not hold exactly one valid statement.
pub fn parse_sql(sql: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(sql);
    match parser.parse_root()? {
        Some(statement) => Ok(statement),
        None => Err(ParseError::unexpected(
            &["SELECT", "SHOW", "DESCRIBE"],
            TokenKind::Eof,
            Span::new(sql.len(), sql.len()),
        )),
    }
}
