//! SQL Tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes OpenSearch SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_line(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips whitespace and comments.
    ///
    /// Returns an error token spanning a block comment that never closes.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), Token> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- and # run to the end of the line
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                self.skip_line();
                continue;
            }
            if self.peek() == Some('#') {
                self.skip_line();
                continue;
            }

            // /* ... */ including the /*! ... */ form
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.start = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => return Err(self.error("Unterminated comment")),
                        _ => {}
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span(), &self.input[self.start..self.pos])
    }

    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    const fn is_identifier_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| Self::is_identifier_char(c) || (!c.is_ascii() && c.is_alphanumeric()))
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        if text.starts_with('@') {
            return self.make_token(TokenKind::Identifier(String::from(text)));
        }

        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans quoted text, resolving doubled quotes and backslash escapes.
    ///
    /// A backslash only escapes the quote character or another backslash;
    /// any other backslash is kept verbatim.
    fn scan_quoted(&mut self, quote: char) -> Result<String, Token> {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        return Ok(value);
                    }
                }
                Some('\\') if quote != '`' => match self.peek() {
                    Some(c) if c == quote || c == '\\' => {
                        value.push(c);
                        self.advance();
                    }
                    _ => value.push('\\'),
                },
                Some(c) => value.push(c),
                None => {
                    let what = match quote {
                        '`' => "Unterminated quoted identifier",
                        '"' => "Unterminated double-quoted text",
                        _ => "Unterminated string literal",
                    };
                    return Err(self.error(what));
                }
            }
        }
    }

    /// Scans `X'..'`/`B'..'` after the prefix letter has been consumed.
    fn scan_prefixed_digits(&mut self, radix: u32) -> Token {
        self.advance(); // consume opening quote
        let content_start = self.pos;
        loop {
            match self.advance() {
                Some('\'') => break,
                Some(c) if c.is_digit(radix) => {}
                Some(c) => return self.error(format!("Invalid digit '{c}' in literal")),
                None => return self.error("Unterminated literal"),
            }
        }
        let digits = String::from(&self.input[content_start..self.pos - 1]);
        if radix == 16 {
            self.make_token(TokenKind::Hex(digits))
        } else {
            self.make_token(TokenKind::BitString(digits))
        }
    }

    /// Scans `0x..`/`0b..` after the `0` and the prefix letter have been consumed.
    fn scan_radix_number(&mut self, radix: u32) -> Token {
        let content_start = self.pos;
        while self.peek().is_some_and(|c| c.is_digit(radix)) {
            self.advance();
        }
        if self.pos == content_start {
            return self.error("Missing digits after radix prefix");
        }
        let digits = String::from(&self.input[content_start..self.pos]);
        if radix == 16 {
            self.make_token(TokenKind::Hex(digits))
        } else {
            self.make_token(TokenKind::BitString(digits))
        }
    }

    /// Scans a number (decimal or real).
    fn scan_number(&mut self) -> Token {
        let mut is_real = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_real = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let mark = self.pos;
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                is_real = true;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            } else {
                // `1e` followed by no digits is a number then an identifier
                self.pos = mark;
            }
        }

        let text = &self.input[self.start..self.pos];

        if is_real {
            match text.parse::<f64>() {
                Ok(f) => self.make_token(TokenKind::Real(f)),
                Err(e) => self.error(format!("Invalid real literal: {e}")),
            }
        } else {
            match text.parse::<u64>() {
                Ok(n) => self.make_token(TokenKind::Decimal(n)),
                Err(e) => self.error(format!("Invalid decimal literal: {e}")),
            }
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        if let Err(token) = self.skip_whitespace_and_comments() {
            return token;
        }
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '=' => self.make_token(TokenKind::Eq),
            '<' => self.make_token(TokenKind::Lt),
            '>' => self.make_token(TokenKind::Gt),
            '!' => self.make_token(TokenKind::Bang),
            '~' => self.make_token(TokenKind::Tilde),
            '|' => self.make_token(TokenKind::Pipe),
            '&' => self.make_token(TokenKind::Ampersand),
            '^' => self.make_token(TokenKind::Caret),
            ':' => self.make_token(TokenKind::Colon),

            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.pos = self.start;
                self.scan_number()
            }
            '.' => self.make_token(TokenKind::Dot),

            '@' if self.peek().is_some_and(Self::is_identifier_char) => self.scan_identifier(),
            '@' => self.make_token(TokenKind::At),

            '\'' | '"' | '`' => {
                self.pos = self.start;
                match self.scan_quoted(c) {
                    Ok(value) => self.make_token(match c {
                        '\'' => TokenKind::String(value),
                        '"' => TokenKind::DoubleQuoted(value),
                        _ => TokenKind::BacktickQuoted(value),
                    }),
                    Err(token) => token,
                }
            }

            'X' | 'x' if self.peek() == Some('\'') => self.scan_prefixed_digits(16),
            'B' | 'b' if self.peek() == Some('\'') => self.scan_prefixed_digits(2),
            '0' if matches!(self.peek(), Some('x' | 'X')) => {
                self.advance();
                self.scan_radix_number(16)
            }
            '0' if matches!(self.peek(), Some('b' | 'B'))
                && self.peek_next().is_some_and(|c| c == '0' || c == '1') =>
            {
                self.advance();
                self.scan_radix_number(2)
            }

            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }

            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),

            _ => self.error(format!("Unexpected character: {c}")),
        }
    }

    /// Tokenizes the entire input. The last token is always [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("   \n\t  ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT -- comment\n# another\n/* block */ FROM /*! hint */"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("select Match_Query wHeRe"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::MatchQuery),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            token_kinds("foo bar_baz _qux @timestamp"),
            vec![
                TokenKind::Identifier(String::from("foo")),
                TokenKind::Identifier(String::from("bar_baz")),
                TokenKind::Identifier(String::from("_qux")),
                TokenKind::Identifier(String::from("@timestamp")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_quoted_text() {
        assert_eq!(
            token_kinds(r#"`my col` "dq" 'it''s' 'a\'b' 'c:\d'"#),
            vec![
                TokenKind::BacktickQuoted(String::from("my col")),
                TokenKind::DoubleQuoted(String::from("dq")),
                TokenKind::String(String::from("it's")),
                TokenKind::String(String::from("a'b")),
                TokenKind::String(String::from("c:\\d")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let kinds = token_kinds("'abc");
        assert!(matches!(&kinds[0], TokenKind::Error(msg) if msg.contains("Unterminated")));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 3.5 .5 1e3 2E-2"),
            vec![
                TokenKind::Decimal(42),
                TokenKind::Real(3.5),
                TokenKind::Real(0.5),
                TokenKind::Real(1000.0),
                TokenKind::Real(0.02),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_hex_and_bit_literals() {
        assert_eq!(
            token_kinds("X'1F' 0xff B'0101' 0b11"),
            vec![
                TokenKind::Hex(String::from("1F")),
                TokenKind::Hex(String::from("ff")),
                TokenKind::BitString(String::from("0101")),
                TokenKind::BitString(String::from("11")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comparison_symbols_are_single_tokens() {
        assert_eq!(
            token_kinds("<= <> !="),
            vec![
                TokenKind::Lt,
                TokenKind::Eq,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Bang,
                TokenKind::Eq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_qualified_name_and_wildcard() {
        assert_eq!(
            token_kinds("a.b.*"),
            vec![
                TokenKind::Identifier(String::from("a")),
                TokenKind::Dot,
                TokenKind::Identifier(String::from("b")),
                TokenKind::Dot,
                TokenKind::Star,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans_and_text() {
        let tokens = tokenize("SELECT  age");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(8, 11));
        assert_eq!(tokens[1].text, "age");
        assert_eq!(tokens[2].span, Span::new(11, 11));
    }

    #[test]
    fn test_minus_minus_is_comment() {
        assert_eq!(
            token_kinds("1 - -2"),
            vec![
                TokenKind::Decimal(1),
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Decimal(2),
                TokenKind::Eof,
            ]
        );
        assert_eq!(token_kinds("1 --2"), vec![TokenKind::Decimal(1), TokenKind::Eof]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = tokenize("SELECT a /* WHERE x = 1");
        assert_eq!(tokens.len(), 4);
        assert!(matches!(&tokens[2].kind, TokenKind::Error(msg) if msg == "Unterminated comment"));
        assert_eq!(tokens[2].span, Span::new(9, 23));
        assert!(tokens[3].is_eof());
    }

    #[test]
    fn test_unexpected_character() {
        let kinds = token_kinds("a ? b");
        assert!(matches!(&kinds[1], TokenKind::Error(msg) if msg.contains('?')));
    }
}
