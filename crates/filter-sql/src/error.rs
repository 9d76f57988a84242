use thiserror::Error;

/// Compilation failures. The compiler fails fast on the first error; no
/// partial SQL is ever returned. Messages name the offending field, function
/// or driver but never echo literal parameter values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SqlError {
    #[error("driver \"{0}\" is not registered")]
    DriverNotRegistered(String),

    #[error("operator {operator} is not supported by driver {driver}")]
    UnsupportedOperator { operator: String, driver: String },

    #[error("function \"{name}\" with {arg_count} arguments is not supported by driver {driver}")]
    UnsupportedFunction {
        name: String,
        arg_count: usize,
        driver: String,
    },

    #[error("field \"{0}\" is not allowed")]
    FieldNotAllowed(String),

    #[error("function \"{0}\" is not allowed")]
    FunctionNotAllowed(String),

    #[error("IN expression requires at least one value")]
    EmptyInList,
}
