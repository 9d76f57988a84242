//! Parse-time validation of a parsed filter against [`ParserOptions`] limits.
//!
//! Walks the AST top-down and fails on the first violation. Depth counts
//! parenthesized groups and scalar sub-expressions alike; the unparenthesized
//! top level sits at depth 0, so `maxDepth = 3` accepts `(((age > 18)))`.

use crate::{
    ast::{Expression, Factor, FactorKind, Filter, Operation, Value},
    error::ValidationError,
    parser::ParserOptions,
};

pub fn validate(filter: &Filter, options: &ParserOptions) -> Result<(), ValidationError> {
    validate_expression(&filter.expression, 0, options)
}

fn validate_expression(
    expression: &Expression,
    depth: usize,
    options: &ParserOptions,
) -> Result<(), ValidationError> {
    if depth > options.max_depth {
        return Err(ValidationError::DepthExceeded {
            max: options.max_depth,
            observed: depth,
        });
    }

    for term in &expression.terms {
        for factor in &term.factors {
            validate_factor(factor, depth, options)?;
        }
    }
    Ok(())
}

fn validate_factor(
    factor: &Factor,
    depth: usize,
    options: &ParserOptions,
) -> Result<(), ValidationError> {
    match &factor.kind {
        FactorKind::Group(expression) => validate_expression(expression, depth + 1, options),
        FactorKind::Predicate(predicate) => {
            validate_value(&predicate.left, depth, options)?;
            match &predicate.operation {
                Operation::Compare { right, .. } => validate_value(right, depth, options),
                Operation::Like { pattern, .. } => validate_value(pattern, depth, options),
                Operation::Between { lower, upper, .. } => {
                    validate_value(lower, depth, options)?;
                    validate_value(upper, depth, options)
                }
                Operation::In { values, .. } => {
                    if values.is_empty() {
                        return Err(ValidationError::EmptyInList);
                    }
                    if values.len() > options.max_in_items {
                        return Err(ValidationError::TooManyInItems {
                            max: options.max_in_items,
                            count: values.len(),
                        });
                    }
                    for value in values {
                        validate_value(value, depth, options)?;
                    }
                    Ok(())
                }
                Operation::IsNull { .. } => Ok(()),
            }
        }
    }
}

fn validate_value(
    value: &Value,
    depth: usize,
    options: &ParserOptions,
) -> Result<(), ValidationError> {
    match value {
        Value::FunctionCall { name, args } => {
            if let Some(allowed) = &options.allowed_functions {
                if !allowed.contains(&name.to_ascii_uppercase()) {
                    return Err(ValidationError::FunctionNotAllowed(name.clone()));
                }
            }
            for arg in args {
                validate_value(arg, depth, options)?;
            }
            Ok(())
        }
        Value::SubExpr(expression) => validate_expression(expression, depth + 1, options),
        Value::Field(_) | Value::Literal(_) => Ok(()),
    }
}
