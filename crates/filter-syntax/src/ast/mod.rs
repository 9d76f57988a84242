//! Immutable AST for parsed filter expressions.
//!
//! The tree is built once per input string, owned exclusively by [`Filter`],
//! and never mutated afterwards: validators and the SQL compiler take it by
//! shared reference. Every list in the tree is non-empty by construction and
//! each tagged union is an enum, so "all variants absent" is unrepresentable.

pub mod expr;
pub mod literal;
pub mod value;

pub use expr::{CompareOperator, Expression, Factor, FactorKind, Filter, Operation, Predicate, Term};
pub use literal::Literal;
pub use value::{FieldRef, Value};
