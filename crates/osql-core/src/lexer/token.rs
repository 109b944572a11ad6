//! Token types for the SQL lexer.

use core::fmt;

use super::{Keyword, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Unsigned integer literal (e.g., `42`). Signs are separate tokens.
    Decimal(u64),
    /// Real literal (e.g., `3.14`, `.5`, `1e10`).
    Real(f64),
    /// Hexadecimal literal (`X'1F'` or `0x1F`), digits only.
    Hex(String),
    /// Bit-string literal (`B'0101'` or `0b0101`), digits only.
    BitString(String),
    /// Single-quoted string with escapes resolved.
    String(String),
    /// Double-quoted text with escapes resolved.
    ///
    /// A string literal in expression position, a name where only a name
    /// can appear.
    DoubleQuoted(String),
    /// Backtick-quoted identifier.
    BacktickQuoted(String),
    /// Bare identifier (e.g., `age`, `@timestamp`).
    Identifier(String),
    /// Reserved word.
    Keyword(Keyword),

    // Operators
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `!`
    Bang,
    /// `~`
    Tilde,
    /// `|`
    Pipe,
    /// `&`
    Ampersand,
    /// `^`
    Caret,

    // Delimiters
    /// `.`
    Dot,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `@`
    At,
    /// `:`
    Colon,

    // Special
    /// End of input.
    Eof,
    /// Lexical error.
    Error(String),
}

impl TokenKind {
    /// Returns true for tokens that can name a column without quoting.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Identifier(_) | Self::Keyword(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(n) => write!(f, "number {n}"),
            Self::Real(n) => write!(f, "number {n:?}"),
            Self::Hex(h) => write!(f, "hex literal X'{h}'"),
            Self::BitString(b) => write!(f, "bit string B'{b}'"),
            Self::String(s) => write!(f, "string '{s}'"),
            Self::DoubleQuoted(s) => write!(f, "quoted text \"{s}\""),
            Self::BacktickQuoted(s) => write!(f, "quoted identifier `{s}`"),
            Self::Identifier(s) => write!(f, "identifier {s}"),
            Self::Keyword(kw) => write!(f, "keyword {kw}"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::Percent => f.write_str("'%'"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Eq => f.write_str("'='"),
            Self::Gt => f.write_str("'>'"),
            Self::Lt => f.write_str("'<'"),
            Self::Bang => f.write_str("'!'"),
            Self::Tilde => f.write_str("'~'"),
            Self::Pipe => f.write_str("'|'"),
            Self::Ampersand => f.write_str("'&'"),
            Self::Caret => f.write_str("'^'"),
            Self::Dot => f.write_str("'.'"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::LeftBracket => f.write_str("'['"),
            Self::RightBracket => f.write_str("']'"),
            Self::LeftBrace => f.write_str("'{'"),
            Self::RightBrace => f.write_str("'}'"),
            Self::Comma => f.write_str("','"),
            Self::Semicolon => f.write_str("';'"),
            Self::At => f.write_str("'@'"),
            Self::Colon => f.write_str("':'"),
            Self::Eof => f.write_str("end of input"),
            Self::Error(msg) => write!(f, "invalid token ({msg})"),
        }
    }
}

/// A token with its kind, location and source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The location in the source.
    pub span: Span,
    /// The lexeme exactly as written.
    pub text: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// Creates an end-of-input marker at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(offset, offset),
            text: String::new(),
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.kind, TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Returns the keyword if this token is one.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_keyword_helpers() {
        let token = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6), "select");
        assert!(token.is_keyword(Keyword::Select));
        assert!(!token.is_keyword(Keyword::From));
        assert_eq!(token.as_keyword(), Some(Keyword::Select));
        assert!(!token.is_eof());
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof(12);
        assert!(token.is_eof());
        assert_eq!(token.span, Span::new(12, 12));
        assert_eq!(token.as_keyword(), None);
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::RightParen.to_string(), "')'");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
        assert_eq!(
            TokenKind::Keyword(Keyword::From).to_string(),
            "keyword FROM"
        );
        assert_eq!(
            TokenKind::Identifier("age".into()).to_string(),
            "identifier age"
        );
    }
}
