//! OpenSearch SQL Parser
//!
//! A hand-written recursive descent parser. Boolean connectives, the
//! predicate chain and arithmetic are three separate precedence-climbing
//! loops; function calls are resolved by the keyword in front of `(`.

mod classify;
mod config;
mod error;
mod expression;
mod function;
mod literal;
mod parser;
mod pratt;

pub use config::{DEFAULT_MAX_DEPTH, ParserConfig};
pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
