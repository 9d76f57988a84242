//! Compiles a parsed [`Filter`] into a SQL fragment plus ordered parameters.
//!
//! A single recursive pass over the immutable AST threads the growing
//! parameter list; string and number literals never reach the SQL text, only
//! their placeholders do. Compilation is pure: the same filter against the
//! same driver and validator always yields byte-identical output, and one
//! filter may be compiled concurrently from many threads.

use crate::{
    driver::{Driver, strip_wrapping},
    error::SqlError,
    param::Param,
    registry::{Registry, default_registry},
    validator::Validator,
};
use filter_syntax::ast::{
    Expression, Factor, FactorKind, FieldRef, Filter, Literal, Operation, Predicate, Term, Value,
};
use tracing::debug;

/// Per-compilation options: an optional runtime validator and an optional
/// explicit registry (the process-wide default otherwise).
#[derive(Default, Clone, Copy)]
pub struct CompileOptions<'a> {
    validator: Option<&'a Validator>,
    registry: Option<&'a Registry>,
}

impl<'a> CompileOptions<'a> {
    pub fn new() -> Self {
        CompileOptions::default()
    }

    /// Installs the runtime field/function allow-list.
    pub fn with_validator(mut self, validator: &'a Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Resolves the driver from this registry instead of the default one.
    pub fn with_registry(mut self, registry: &'a Registry) -> Self {
        self.registry = Some(registry);
        self
    }
}

/// Compiles `filter` for the named driver into `(sql, params)`.
pub fn compile(
    filter: &Filter,
    driver_name: &str,
    options: CompileOptions<'_>,
) -> Result<(String, Vec<Param>), SqlError> {
    let registry = options.registry.unwrap_or_else(|| default_registry());
    let driver = registry.get(driver_name)?;

    let mut renderer = SqlRenderer {
        driver: driver.as_ref(),
        validator: options.validator,
        params: Vec::new(),
    };
    let sql = renderer.render_expression(&filter.expression)?;

    debug!(
        driver = driver.name(),
        params = renderer.params.len(),
        "compiled filter expression"
    );
    Ok((sql, renderer.params))
}

/// Convenience conversion to SQL, implemented for [`Filter`].
pub trait ToSql {
    /// Compiles against the default registry without a runtime validator.
    fn to_sql(&self, driver_name: &str) -> Result<(String, Vec<Param>), SqlError>;

    /// Compiles with explicit [`CompileOptions`].
    fn to_sql_with(
        &self,
        driver_name: &str,
        options: CompileOptions<'_>,
    ) -> Result<(String, Vec<Param>), SqlError>;
}

impl ToSql for Filter {
    fn to_sql(&self, driver_name: &str) -> Result<(String, Vec<Param>), SqlError> {
        compile(self, driver_name, CompileOptions::new())
    }

    fn to_sql_with(
        &self,
        driver_name: &str,
        options: CompileOptions<'_>,
    ) -> Result<(String, Vec<Param>), SqlError> {
        compile(self, driver_name, options)
    }
}

struct SqlRenderer<'a> {
    driver: &'a dyn Driver,
    validator: Option<&'a Validator>,
    params: Vec<Param>,
}

impl SqlRenderer<'_> {
    fn render_expression(&mut self, expression: &Expression) -> Result<String, SqlError> {
        if expression.terms.len() == 1 {
            return self.render_term(&expression.terms[0]);
        }

        // AND binds tighter than OR: a multi-factor term sitting beside other
        // OR-terms keeps its own parens, nothing else does.
        let mut parts = Vec::with_capacity(expression.terms.len());
        for term in &expression.terms {
            let rendered = self.render_term(term)?;
            if term.factors.len() > 1 {
                parts.push(format!("({rendered})"));
            } else {
                parts.push(rendered);
            }
        }
        Ok(parts.join(" OR "))
    }

    fn render_term(&mut self, term: &Term) -> Result<String, SqlError> {
        let mut parts = Vec::with_capacity(term.factors.len());
        for factor in &term.factors {
            parts.push(self.render_factor(factor)?);
        }
        Ok(parts.join(" AND "))
    }

    fn render_factor(&mut self, factor: &Factor) -> Result<String, SqlError> {
        match &factor.kind {
            FactorKind::Group(expression) => {
                let inner = self.render_expression(expression)?;
                if factor.negated {
                    Ok(format!("NOT ({inner})"))
                } else if expression.terms.len() > 1 {
                    Ok(format!("({inner})"))
                } else {
                    Ok(inner)
                }
            }
            FactorKind::Predicate(predicate) => {
                let inner = self.render_predicate(predicate)?;
                if factor.negated {
                    Ok(format!("NOT ({inner})"))
                } else {
                    Ok(inner)
                }
            }
        }
    }

    fn render_predicate(&mut self, predicate: &Predicate) -> Result<String, SqlError> {
        let left = self.render_value(&predicate.left)?;

        match &predicate.operation {
            Operation::Compare { operator, right } => {
                let right = self.render_value(right)?;
                Ok(format!("{left} {operator} {right}"))
            }
            Operation::Like {
                negated,
                case_insensitive,
                pattern,
            } => {
                let mut pattern = self.render_value(pattern)?;
                let operator = match (*negated, *case_insensitive) {
                    (false, false) => "LIKE",
                    (true, false) => "NOT LIKE",
                    (false, true) => "ILIKE",
                    (true, true) => "NOT ILIKE",
                };

                let translated = self.driver.translate_operator(operator).ok_or_else(|| {
                    SqlError::UnsupportedOperator {
                        operator: operator.to_string(),
                        driver: self.driver.name().to_string(),
                    }
                })?;

                // A dialect that maps ILIKE onto plain LIKE gets explicit
                // case folding on both operands.
                let mut left = left;
                if *case_insensitive && !translated.contains("ILIKE") {
                    left = format!("LOWER({left})");
                    pattern = format!("LOWER({pattern})");
                }

                Ok(format!("{left} {translated} {pattern}"))
            }
            Operation::Between {
                negated,
                lower,
                upper,
            } => {
                let lower = self.render_value(lower)?;
                let upper = self.render_value(upper)?;
                let operator = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                Ok(format!("{left} {operator} {lower} AND {upper}"))
            }
            Operation::In { negated, values } => {
                // The grammar guarantees this; re-checked since the AST is
                // public and constructible by hand.
                if values.is_empty() {
                    return Err(SqlError::EmptyInList);
                }

                let mut items = Vec::with_capacity(values.len());
                for value in values {
                    items.push(self.render_value(value)?);
                }
                let operator = if *negated { "NOT IN" } else { "IN" };
                Ok(format!("{left} {operator} ({})", items.join(", ")))
            }
            Operation::IsNull { negated } => {
                let operator = if *negated { "IS NOT NULL" } else { "IS NULL" };
                Ok(format!("{left} {operator}"))
            }
        }
    }

    fn render_value(&mut self, value: &Value) -> Result<String, SqlError> {
        match value {
            Value::FunctionCall { name, args } => self.render_function_call(name, args),
            Value::Field(field) => self.render_field(field),
            Value::Literal(literal) => Ok(self.render_literal(literal)),
            Value::SubExpr(expression) => {
                let inner = self.render_expression(expression)?;
                let compound = expression.terms.len() > 1
                    || expression.terms.iter().any(|t| t.factors.len() > 1);
                if compound {
                    Ok(format!("({inner})"))
                } else {
                    Ok(inner)
                }
            }
        }
    }

    fn render_function_call(&mut self, name: &str, args: &[Value]) -> Result<String, SqlError> {
        if let Some(validator) = self.validator {
            if !validator.is_function_allowed(name) {
                return Err(SqlError::FunctionNotAllowed(name.to_string()));
            }
        }

        let template = self
            .driver
            .translate_function(name, args.len())
            .ok_or_else(|| SqlError::UnsupportedFunction {
                name: name.to_string(),
                arg_count: args.len(),
                driver: self.driver.name().to_string(),
            })?;

        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            rendered.push(self.render_value(arg)?);
        }
        Ok(expand_template(&template, &rendered))
    }

    fn render_field(&mut self, field: &FieldRef) -> Result<String, SqlError> {
        let stripped: Vec<&str> = field
            .parts
            .iter()
            .map(|part| strip_wrapping(strip_wrapping(part.trim(), '`'), '"'))
            .collect();

        let dotted = stripped.join(".");
        if let Some(validator) = self.validator {
            if !validator.is_field_allowed(&dotted) {
                return Err(SqlError::FieldNotAllowed(dotted));
            }
        }

        Ok(stripped
            .iter()
            .map(|part| self.driver.quote_identifier(part))
            .collect::<Vec<_>>()
            .join("."))
    }

    fn render_literal(&mut self, literal: &Literal) -> String {
        match literal {
            Literal::Null => "NULL".to_string(),
            Literal::Boolean(true) => "TRUE".to_string(),
            Literal::Boolean(false) => "FALSE".to_string(),
            Literal::String(s) => self.bind(Param::String(s.clone())),
            Literal::Number(n) => self.bind(Param::Number(*n)),
        }
    }

    /// Appends one parameter and returns its placeholder. Positions are
    /// 1-based and strictly increasing across the whole compilation.
    fn bind(&mut self, param: Param) -> String {
        self.params.push(param);
        self.driver.placeholder(self.params.len())
    }
}

/// Substitutes rendered arguments into a `{0}`-style positional template.
fn expand_template(template: &str, args: &[String]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), arg);
    }
    out
}
