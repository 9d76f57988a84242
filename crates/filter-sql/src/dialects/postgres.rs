//! PostgreSQL dialect: `$N` placeholders, double-quoted identifiers, native
//! ILIKE.

use crate::driver::{Driver, default_function_template, quote_with};

/// PostgreSQL 16 reserved keywords that must be quoted when used as
/// identifiers. Only fully reserved words; unreserved keywords stay bare.
const KEYWORDS: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC",
    "AUTHORIZATION", "BETWEEN", "BINARY", "BOTH", "CASE", "CAST", "CHECK", "COLLATE",
    "COLLATION", "COLUMN", "CONCURRENTLY", "CONSTRAINT", "CREATE", "CROSS",
    "CURRENT_CATALOG", "CURRENT_DATE", "CURRENT_ROLE", "CURRENT_SCHEMA", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "CURRENT_USER", "DEFAULT", "DEFERRABLE", "DESC", "DISTINCT",
    "DO", "ELSE", "END", "EXCEPT", "FALSE", "FETCH", "FOR", "FOREIGN", "FROM",
    "GRANT", "GROUP", "HAVING", "IN", "INITIALLY", "INNER", "INTERSECT", "INTO",
    "IS", "JOIN", "LATERAL", "LEADING", "LEFT", "LIKE", "LIMIT", "LOCALTIME",
    "LOCALTIMESTAMP", "NATURAL", "NOT", "NULL", "OFFSET", "ON", "ONLY", "OR",
    "ORDER", "OUTER", "OVERLAPS", "PLACING", "PRIMARY", "REFERENCES", "RETURNING",
    "RIGHT", "SELECT", "SESSION_USER", "SIMILAR", "SOME", "SYMMETRIC", "TABLE",
    "TABLESAMPLE", "THEN", "TO", "TRAILING", "TRUE", "UNION", "UNIQUE", "USER",
    "USING", "VARIADIC", "VERBOSE", "WHEN", "WHERE", "WINDOW", "WITH",
];

const OPERATORS: &[&str] = &[
    "=", "!=", "<>", "<", ">", "<=", ">=",
    "LIKE", "NOT LIKE", "ILIKE", "NOT ILIKE",
    "IN", "NOT IN",
    "IS NULL", "IS NOT NULL",
    "BETWEEN", "NOT BETWEEN",
];

const FEATURES: &[&str] = &["ARRAY", "CTE", "ILIKE", "JSON", "JSONB", "RETURNING", "WINDOW"];

const DATE_PARTS: &[&str] = &["YEAR", "MONTH", "DAY", "HOUR", "MINUTE", "SECOND"];

#[derive(Debug, Default)]
pub struct Postgres;

impl Postgres {
    pub fn new() -> Self {
        Postgres
    }
}

impl Driver for Postgres {
    fn name(&self) -> &str {
        "postgres"
    }

    fn placeholder(&self, position: usize) -> String {
        format!("${position}")
    }

    fn keywords(&self) -> &[&str] {
        KEYWORDS
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '"', self)
    }

    fn translate_operator(&self, operator: &str) -> Option<String> {
        let upper = operator.to_ascii_uppercase();
        OPERATORS.contains(&upper.as_str()).then_some(upper)
    }

    fn translate_function(&self, name: &str, arg_count: usize) -> Option<String> {
        let upper = name.to_ascii_uppercase();

        // Date-part accessors become EXTRACT, substrings use the standard
        // infix form.
        if arg_count == 1 && DATE_PARTS.contains(&upper.as_str()) {
            return Some(format!("EXTRACT({upper} FROM {{0}})"));
        }
        match (upper.as_str(), arg_count) {
            ("SUBSTRING", 2) => Some("SUBSTRING({0} FROM {1})".to_string()),
            ("SUBSTRING", 3) => Some("SUBSTRING({0} FROM {1} FOR {2})".to_string()),
            _ => default_function_template(name, arg_count),
        }
    }

    fn supports_feature(&self, feature: &str) -> bool {
        FEATURES.contains(&feature.to_ascii_uppercase().as_str())
    }
}
