use crate::ast::Span;
use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f32),
    Bool(bool),
    /// `[r, g, b, a]` from `#rrggbb` or `#rrggbbaa`.
    Color([u8; 4]),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

/// A token and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub span: Span,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let span = self.span();
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, span });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn span(&self) -> Span {
        Span { line: self.line, col: self.col }
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn error_at(&self, span: Span, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, span.line, span.col)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                let start = self.span();
                self.advance();
                self.advance();
                loop {
                    if self.rest().starts_with("*/") {
                        self.advance();
                        self.advance();
                        break;
                    }
                    if self.advance().is_none() {
                        return Err(self.error_at(start, "unterminated block comment"));
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let start = self.span();
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '"' => self.lex_string(start),
            '#' => self.lex_color(start),
            c if c.is_ascii_digit() => self.lex_number(start),
            '-' if matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) => self.lex_number(start),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_word()),
            other => Err(self.error_at(start, format!("unexpected character {other:?}"))),
        }
    }

    fn lex_string(&mut self, start: Span) -> Result<Token, ParseError> {
        self.advance();
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(self.error_at(start, "unterminated string literal")),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('"') => s.push('"'),
                    Some('\\') => s.push('\\'),
                    Some(c) => s.push(c),
                    None => return Err(self.error_at(start, "unterminated escape sequence")),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    fn lex_color(&mut self, start: Span) -> Result<Token, ParseError> {
        self.advance();
        let from = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
            self.advance();
        }
        let hex = &self.src[from..self.pos];
        let bytes = parse_hex_bytes(hex).filter(|b| b.len() == 3 || b.len() == 4);
        match bytes.as_deref() {
            Some([r, g, b]) => Ok(Token::Color([*r, *g, *b, 255])),
            Some([r, g, b, a]) => Ok(Token::Color([*r, *g, *b, *a])),
            _ => Err(self.error_at(
                start,
                format!("color literal must be #rrggbb or #rrggbbaa, got #{hex}"),
            )),
        }
    }

    fn lex_number(&mut self, start: Span) -> Result<Token, ParseError> {
        let from = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[from..self.pos];
        if !s.contains('.') && s != "-" {
            let exact = s.parse::<i64>().is_ok_and(|n| n.unsigned_abs() <= MAX_EXACT_INT);
            if !exact {
                return Err(self.error_at(
                    start,
                    format!("integer {s} is out of range; whole numbers are limited to ±{MAX_EXACT_INT}"),
                ));
            }
        }
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| self.error_at(start, format!("invalid number {s:?}")))
    }

    fn lex_word(&mut self) -> Token {
        let from = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        match &self.src[from..self.pos] {
            "true" => Token::Bool(true),
            "false" => Token::Bool(false),
            word => Token::Ident(word.to_string()),
        }
    }
}

/// Largest whole number an `f32` holds exactly.
const MAX_EXACT_INT: u64 = 1 << 24;

/// Pairs of hex digits to bytes; `None` on odd length or non-hex input.
fn parse_hex_bytes(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 || !hex.is_ascii() {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}
