//! Lexer, parser and AST for human-readable filter expressions.
//!
//! Turns strings like `age >= 18 AND status = 'active'` into an immutable
//! [`ast::Filter`] tree. Compiling a tree to SQL lives in the companion
//! `filter-sql` crate.

pub mod ast;
pub mod error;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod validate;

pub use ast::{
    CompareOperator, Expression, Factor, FactorKind, FieldRef, Filter, Literal, Operation,
    Predicate, Term, Value,
};
pub use error::{ParseError, SyntaxError, ValidationError};
pub use parser::{Parser, ParserOptions, parse};
