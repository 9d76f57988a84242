//! Single-pass tokenizer for filter expressions.
//!
//! Keywords are matched case-insensitively on whole words only, multi-character
//! operators take priority over their single-character prefixes, and quoted
//! identifiers keep their delimiters so the grammar can tell them apart from
//! bare identifiers. Any unmatched character is fatal.

use crate::lexer::{
    error::LexError,
    token::{Token, TokenKind},
};

pub mod error;
pub mod token;

/// Tokenize a filter expression into a token stream ending with `Eof`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let start = self.pos;
            let line = self.line;
            let column = self.column;

            let Some(ch) = self.peek() else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    lexeme: String::new(),
                    line,
                    column,
                    span: (start, start),
                });
                return Ok(tokens);
            };

            let kind = match ch {
                c if c.is_ascii_alphabetic() || c == '_' => self.scan_ident_or_keyword(),
                c if c.is_ascii_digit() => self.scan_number()?,
                '+' | '-' => {
                    self.bump();
                    match self.peek() {
                        Some(c) if c.is_ascii_digit() => self.scan_number_body(start)?,
                        _ => {
                            return Err(LexError::UnexpectedChar {
                                ch,
                                position: start,
                                line,
                                column,
                            });
                        }
                    }
                }
                '\'' => self.scan_string('\'')?,
                '"' => self.scan_double_quoted()?,
                '`' => self.scan_backtick_ident()?,
                '!' => {
                    self.bump();
                    if self.peek() == Some('=') {
                        self.bump();
                        TokenKind::NotEqual
                    } else {
                        return Err(LexError::UnexpectedChar {
                            ch,
                            position: start,
                            line,
                            column,
                        });
                    }
                }
                '<' => {
                    self.bump();
                    match self.peek() {
                        Some('=') => {
                            self.bump();
                            TokenKind::LessOrEqual
                        }
                        Some('>') => {
                            self.bump();
                            TokenKind::NotEqual
                        }
                        _ => TokenKind::Less,
                    }
                }
                '>' => {
                    self.bump();
                    if self.peek() == Some('=') {
                        self.bump();
                        TokenKind::GreaterOrEqual
                    } else {
                        TokenKind::Greater
                    }
                }
                '=' => {
                    self.bump();
                    TokenKind::Equal
                }
                '.' => {
                    self.bump();
                    TokenKind::Dot
                }
                '(' => {
                    self.bump();
                    TokenKind::LParen
                }
                ')' => {
                    self.bump();
                    TokenKind::RParen
                }
                ',' => {
                    self.bump();
                    TokenKind::Comma
                }
                _ => {
                    return Err(LexError::UnexpectedChar {
                        ch,
                        position: start,
                        line,
                        column,
                    });
                }
            };

            tokens.push(Token {
                kind,
                lexeme: self.input[start..self.pos].to_string(),
                line,
                column,
                span: (start, self.pos),
            });
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn scan_ident_or_keyword(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        let text = &self.input[start..self.pos];

        // Whole-word keyword match: the identifier is scanned to its end first,
        // so "NOTABLE" never matches NOT.
        match text.to_ascii_uppercase().as_str() {
            "AND" => TokenKind::And,
            "OR" => TokenKind::Or,
            "NOT" => TokenKind::Not,
            "BETWEEN" => TokenKind::Between,
            "IN" => TokenKind::In,
            "LIKE" => TokenKind::Like,
            "ILIKE" => TokenKind::ILike,
            "IS" => TokenKind::Is,
            "NULL" => TokenKind::Null,
            "TRUE" => TokenKind::True,
            "FALSE" => TokenKind::False,
            _ => TokenKind::Ident(text.to_string()),
        }
    }

    fn scan_number(&mut self) -> Result<TokenKind, LexError> {
        let start = self.pos;
        self.scan_number_body(start)
    }

    /// Scans digits, an optional fraction, and an optional exponent. `start`
    /// points at the first character of the literal (possibly a sign that the
    /// caller already consumed).
    fn scan_number_body(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let line = self.line;
        let column = self.column;

        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }

        // Fraction only when a digit follows the dot, so "1." lexes as 1 then Dot.
        if self.peek() == Some('.') && matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) {
            self.bump();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            let mark = self.pos;
            self.bump();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.bump();
            }
            if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.bump();
                }
            } else {
                // "1e" or "1e+" with no digits is not an exponent; the 'e' belongs
                // to whatever comes next (e.g. "2e" is 2 followed by ident "e").
                self.pos = mark;
            }
        }

        let text = &self.input[start..self.pos];
        let value = text.parse::<f64>().map_err(|_| LexError::InvalidNumber {
            text: text.to_string(),
            position: start,
            line,
            column,
        })?;

        Ok(TokenKind::Number(value))
    }

    fn scan_string(&mut self, delim: char) -> Result<TokenKind, LexError> {
        let start = self.pos;
        let line = self.line;
        let column = self.column;

        self.bump(); // opening delimiter
        let mut content = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(LexError::UnterminatedString {
                        position: start,
                        line,
                        column,
                    });
                }
                Some('\\') => match self.bump() {
                    None => {
                        return Err(LexError::UnterminatedString {
                            position: start,
                            line,
                            column,
                        });
                    }
                    // Only the delimiter and the backslash itself are unescaped;
                    // other sequences pass through so LIKE patterns survive.
                    Some(c) if c == delim || c == '\\' => content.push(c),
                    Some(c) => {
                        content.push('\\');
                        content.push(c);
                    }
                },
                Some(c) if c == delim => return Ok(TokenKind::String(content)),
                Some(c) => content.push(c),
            }
        }
    }

    /// A double-quoted chunk is an identifier when its raw content is
    /// identifier-shaped, and a string literal otherwise.
    fn scan_double_quoted(&mut self) -> Result<TokenKind, LexError> {
        let start = self.pos;
        let kind = self.scan_string('"')?;
        let TokenKind::String(content) = kind else {
            unreachable!("scan_string only produces string tokens");
        };

        let raw = &self.input[start..self.pos];
        if !raw.contains('\\') && is_identifier_shaped(&content) {
            return Ok(TokenKind::QuotedIdent(raw.to_string()));
        }
        Ok(TokenKind::String(content))
    }

    fn scan_backtick_ident(&mut self) -> Result<TokenKind, LexError> {
        let start = self.pos;
        let line = self.line;
        let column = self.column;

        self.bump(); // opening backtick
        loop {
            match self.bump() {
                None => {
                    return Err(LexError::UnterminatedIdent {
                        position: start,
                        line,
                        column,
                    });
                }
                Some('`') => {
                    let raw = &self.input[start..self.pos];
                    if raw.len() == 2 {
                        return Err(LexError::EmptyIdent {
                            position: start,
                            line,
                            column,
                        });
                    }
                    return Ok(TokenKind::QuotedIdent(raw.to_string()));
                }
                Some(_) => {}
            }
        }
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next()?;
        chars.next()
    }
}

fn is_identifier_shaped(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests;
