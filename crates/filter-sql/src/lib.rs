//! Compiles parsed filter expressions into parameterized SQL WHERE fragments
//! for a selectable dialect.
//!
//! ```
//! use filter_sql::ToSql;
//!
//! let filter = filter_syntax::parse("age >= 18 AND status = 'active'")?;
//! let (sql, params) = filter.to_sql("postgres")?;
//!
//! assert_eq!(sql, "age >= $1 AND status = $2");
//! assert_eq!(params.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compile;
pub mod dialects;
pub mod driver;
pub mod error;
pub mod param;
pub mod registry;
pub mod validator;

pub use compile::{CompileOptions, ToSql, compile};
pub use driver::Driver;
pub use error::SqlError;
pub use param::Param;
pub use registry::{Registry, default_registry, driver, drivers, register_driver};
pub use validator::Validator;

use thiserror::Error;

/// Error for the one-shot [`build`] helper, covering both phases.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] filter_syntax::ParseError),

    #[error(transparent)]
    Sql(#[from] SqlError),
}

/// Parses `input` with default options and compiles it for the named driver
/// in one step.
pub fn build(input: &str, driver_name: &str) -> Result<(String, Vec<Param>), BuildError> {
    let filter = filter_syntax::parse(input)?;
    let (sql, params) = compile(&filter, driver_name, CompileOptions::new())?;
    Ok((sql, params))
}
