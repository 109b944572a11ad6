//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer for OpenSearch SQL. It produces the typed token
//! stream the [`Parser`](crate::parser::Parser) consumes; callers with their
//! own tokenizer can build [`Token`]s directly instead.

mod keyword;
mod span;
mod token;
mod tokenizer;

pub use keyword::Keyword;
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
