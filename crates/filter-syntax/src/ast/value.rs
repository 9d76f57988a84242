use crate::ast::{expr::Expression, literal::Literal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar-producing node: function call, field reference, literal, or a
/// parenthesized sub-expression used in scalar position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    FunctionCall { name: String, args: Vec<Value> },
    Field(FieldRef),
    Literal(Literal),
    SubExpr(Box<Expression>),
}

/// Dot-qualified field reference (e.g. `users.email`, `properties.utm_source`).
///
/// Parts keep the quote delimiters they were written with (`` `order` ``,
/// `"order"`); the SQL compiler strips and re-quotes them per dialect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub parts: Vec<String>,
}

impl FieldRef {
    pub fn new(parts: Vec<String>) -> Self {
        Self { parts }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ref_display() {
        let field = FieldRef::new(vec!["users".to_string(), "email".to_string()]);
        assert_eq!(field.to_string(), "users.email");
    }
}
