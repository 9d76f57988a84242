use crate::ast::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root AST node for one parsed filter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub expression: Expression,
}

/// OR-combination of one or more terms. OR has the lowest precedence, so the
/// grammar hangs everything else below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub terms: Vec<Term>,
}

/// AND-combination of one or more factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub factors: Vec<Factor>,
}

/// A single, optionally negated operand of an AND chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub negated: bool,
    pub kind: FactorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FactorKind {
    /// Parenthesized boolean sub-expression.
    Group(Expression),
    Predicate(Predicate),
}

/// One comparison/membership/pattern/null-check applied to a left-hand value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub left: Value,
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    Compare {
        operator: CompareOperator,
        right: Value,
    },
    Like {
        negated: bool,
        case_insensitive: bool,
        pattern: Value,
    },
    Between {
        negated: bool,
        lower: Value,
        upper: Value,
    },
    In {
        negated: bool,
        values: Vec<Value>,
    },
    IsNull {
        negated: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOperator {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOperator::Eq => write!(f, "="),
            CompareOperator::NotEq => write!(f, "!="),
            CompareOperator::Lt => write!(f, "<"),
            CompareOperator::Gt => write!(f, ">"),
            CompareOperator::LtEq => write!(f, "<="),
            CompareOperator::GtEq => write!(f, ">="),
        }
    }
}
