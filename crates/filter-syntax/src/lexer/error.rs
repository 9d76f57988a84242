use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedChar {
        ch: char,
        position: usize,
        line: usize,
        column: usize,
    },

    #[error("unterminated string literal at line {line}, column {column}")]
    UnterminatedString {
        position: usize,
        line: usize,
        column: usize,
    },

    #[error("unterminated quoted identifier at line {line}, column {column}")]
    UnterminatedIdent {
        position: usize,
        line: usize,
        column: usize,
    },

    #[error("empty quoted identifier at line {line}, column {column}")]
    EmptyIdent {
        position: usize,
        line: usize,
        column: usize,
    },

    #[error("invalid number \"{text}\" at line {line}, column {column}")]
    InvalidNumber {
        text: String,
        position: usize,
        line: usize,
        column: usize,
    },
}
