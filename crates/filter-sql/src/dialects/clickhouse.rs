//! ClickHouse dialect: `?` placeholders, backtick identifiers, native ILIKE,
//! case-sensitive native function names (toYYYYMM, arrayLength, has) pass
//! through untouched.

use crate::driver::{Driver, quote_with};

/// ClickHouse treats keywords as reserved only in context, so this list
/// covers the core SQL words plus ClickHouse-specific ones that are most
/// likely to collide with column names.
const KEYWORDS: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST",
    "CREATE", "CROSS", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END",
    "EXISTS", "FROM", "FULL", "GROUP", "HAVING", "IN", "INNER", "INSERT",
    "INTO", "IS", "JOIN", "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "ON",
    "OR", "ORDER", "OUTER", "RIGHT", "SELECT", "SET", "TABLE", "THEN",
    "UNION", "UPDATE", "USING", "VALUES", "WHEN", "WHERE", "WITH",
    "ARRAY", "CLUSTER", "DATABASE", "DICTIONARY", "ENGINE", "FINAL", "FORMAT",
    "GLOBAL", "ILIKE", "MATERIALIZED", "PARTITION", "PREWHERE", "PRIMARY",
    "SAMPLE", "SETTINGS", "SYSTEM", "TEMPORARY", "TTL", "WATCH",
    "DATE", "ID", "TIMESTAMP", "USER",
];

const OPERATORS: &[&str] = &[
    "=", "!=", "<>", "<", ">", "<=", ">=",
    "LIKE", "NOT LIKE", "ILIKE", "NOT ILIKE",
    "IN", "NOT IN",
    "IS NULL", "IS NOT NULL",
    "BETWEEN", "NOT BETWEEN",
];

const FEATURES: &[&str] = &[
    "ARRAY", "FINAL", "GLOBAL", "ILIKE", "JSON", "PREWHERE", "SAMPLE", "TUPLE", "WITH",
];

#[derive(Debug, Default)]
pub struct ClickHouse;

impl ClickHouse {
    pub fn new() -> Self {
        ClickHouse
    }
}

impl Driver for ClickHouse {
    fn name(&self) -> &str {
        "clickhouse"
    }

    fn placeholder(&self, _position: usize) -> String {
        "?".to_string()
    }

    fn keywords(&self) -> &[&str] {
        KEYWORDS
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '`', self)
    }

    fn translate_operator(&self, operator: &str) -> Option<String> {
        let upper = operator.to_ascii_uppercase();
        OPERATORS.contains(&upper.as_str()).then_some(upper)
    }

    fn supports_feature(&self, feature: &str) -> bool {
        FEATURES.contains(&feature.to_ascii_uppercase().as_str())
    }
}
