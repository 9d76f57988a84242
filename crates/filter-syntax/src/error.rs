use crate::lexer::error::LexError;
use thiserror::Error;

/// Umbrella error for the parse pipeline. Every layer fails fast with the
/// first error found; nothing is retried or partially returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty filter expression")]
    EmptyFilter,

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("syntax error at line {line}, column {column}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("expression nesting exceeds parser limit of {limit}")]
    NestingTooDeep { limit: usize },
}

/// Parse-time validation failures. This layer is advisory convenience; the
/// runtime validator applied during compilation is the authoritative gate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("expression depth {observed} exceeds maximum of {max}")]
    DepthExceeded { max: usize, observed: usize },

    #[error("IN expression exceeds maximum of {max} items")]
    TooManyInItems { max: usize, count: usize },

    #[error("IN expression requires at least one value")]
    EmptyInList,

    #[error("function \"{0}\" is not allowed")]
    FunctionNotAllowed(String),
}
