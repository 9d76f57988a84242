//! Catalog of well-known SQL functions.
//!
//! Purely advisory: the parser accepts any function name, and dialects pass
//! unknown functions through untouched. The catalog exists so callers can
//! build allow-lists and check arities without hard-coding names.

use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    String,
    Math,
    Date,
    Conditional,
    Conversion,
}

/// Describes one well-known function: its canonical name, category and arity.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: &'static str,
    pub kind: FunctionKind,
    pub min_args: usize,
    /// `None` means variadic with no upper bound.
    pub max_args: Option<usize>,
    pub description: &'static str,
}

macro_rules! func {
    ($name:expr, $kind:expr, $min:expr, $max:expr, $desc:expr) => {
        (
            $name,
            FunctionDef {
                name: $name,
                kind: $kind,
                min_args: $min,
                max_args: $max,
                description: $desc,
            },
        )
    };
}

lazy_static! {
    static ref STANDARD_FUNCTIONS: HashMap<&'static str, FunctionDef> = {
        use FunctionKind::*;
        HashMap::from([
            func!("LOWER", String, 1, Some(1), "lowercase a string"),
            func!("UPPER", String, 1, Some(1), "uppercase a string"),
            func!("LENGTH", String, 1, Some(1), "string length"),
            func!("TRIM", String, 1, Some(1), "strip leading and trailing whitespace"),
            func!("LTRIM", String, 1, Some(1), "strip leading whitespace"),
            func!("RTRIM", String, 1, Some(1), "strip trailing whitespace"),
            func!("SUBSTRING", String, 2, Some(3), "extract a substring"),
            func!("CONCAT", String, 2, None, "concatenate strings"),
            func!("COALESCE", Conditional, 2, None, "first non-null argument"),
            func!("GREATEST", Conditional, 2, None, "largest argument"),
            func!("LEAST", Conditional, 2, None, "smallest argument"),
            func!("IF", Conditional, 3, Some(3), "conditional value"),
            func!("NOW", Date, 0, Some(0), "current timestamp"),
            func!("CURRENT_DATE", Date, 0, Some(0), "current date"),
            func!("CURRENT_TIME", Date, 0, Some(0), "current time"),
            func!("CURRENT_TIMESTAMP", Date, 0, Some(0), "current timestamp"),
            func!("DATE", Date, 1, Some(1), "date part of a timestamp"),
            func!("TIME", Date, 1, Some(1), "time part of a timestamp"),
            func!("YEAR", Date, 1, Some(1), "year component"),
            func!("MONTH", Date, 1, Some(1), "month component"),
            func!("DAY", Date, 1, Some(1), "day component"),
            func!("HOUR", Date, 1, Some(1), "hour component"),
            func!("MINUTE", Date, 1, Some(1), "minute component"),
            func!("SECOND", Date, 1, Some(1), "second component"),
            func!("EXTRACT", Date, 2, Some(2), "extract a named date part"),
            func!("CAST", Conversion, 2, Some(2), "convert to another type"),
            func!("ABS", Math, 1, Some(1), "absolute value"),
            func!("ROUND", Math, 1, Some(2), "round to precision"),
            func!("FLOOR", Math, 1, Some(1), "round down"),
            func!("CEIL", Math, 1, Some(1), "round up"),
            func!("SQRT", Math, 1, Some(1), "square root"),
            func!("POWER", Math, 2, Some(2), "raise to a power"),
        ])
    };
}

/// Looks up a function definition by name, case-insensitively.
pub fn function_def(name: &str) -> Option<&'static FunctionDef> {
    STANDARD_FUNCTIONS.get(name.to_ascii_uppercase().as_str())
}

/// Names of every cataloged function, suitable for seeding an allow-list.
pub fn standard_function_names() -> Vec<&'static str> {
    STANDARD_FUNCTIONS.keys().copied().collect()
}

/// Checks an argument count against the catalog. Unknown functions are
/// accepted with any arity.
pub fn validate_function_args(name: &str, arg_count: usize) -> bool {
    match function_def(name) {
        Some(def) => {
            arg_count >= def.min_args && def.max_args.is_none_or(|max| arg_count <= max)
        }
        None => true,
    }
}
