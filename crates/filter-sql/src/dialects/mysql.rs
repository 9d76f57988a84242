//! MySQL/MariaDB dialect: `?` placeholders, backtick identifiers, ILIKE
//! rewritten onto LIKE (the compiler adds the case folding).

use crate::driver::{Driver, quote_with};

/// MySQL 8.0 reserved words, plus a few non-reserved words (USER, DATE,
/// TIME) that routinely collide with column names and are safer quoted.
const KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC", "BEFORE", "BETWEEN",
    "BIGINT", "BINARY", "BLOB", "BOTH", "BY", "CALL", "CASCADE", "CASE", "CAST",
    "CHANGE", "CHAR", "CHARACTER", "CHECK", "COLLATE", "COLUMN", "CONDITION",
    "CONSTRAINT", "CONTINUE", "CONVERT", "CREATE", "CROSS", "CURRENT_DATE",
    "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR", "DATABASE",
    "DATE", "DECIMAL", "DECLARE", "DEFAULT", "DELAYED", "DELETE", "DESC",
    "DESCRIBE", "DISTINCT", "DIV", "DOUBLE", "DROP", "EACH", "ELSE", "ELSEIF",
    "ENCLOSED", "ESCAPED", "EXISTS", "EXIT", "EXPLAIN", "FALSE", "FETCH",
    "FLOAT", "FOR", "FORCE", "FOREIGN", "FROM", "FULLTEXT", "GENERATED",
    "GRANT", "GROUP", "HAVING", "IF", "IGNORE", "IN", "INDEX", "INFILE",
    "INNER", "INOUT", "INSERT", "INT", "INTEGER", "INTERVAL", "INTO", "IS",
    "ITERATE", "JOIN", "KEY", "KEYS", "KILL", "LEADING", "LEAVE", "LEFT",
    "LIKE", "LIMIT", "LINES", "LOAD", "LOCALTIME", "LOCALTIMESTAMP", "LOCK",
    "LONG", "LOOP", "MATCH", "MOD", "MODIFIES", "NATURAL", "NOT", "NULL",
    "NUMERIC", "ON", "OPTIMIZE", "OPTION", "OR", "ORDER", "OUT", "OUTER",
    "OUTFILE", "PARTITION", "PRECISION", "PRIMARY", "PROCEDURE", "RANGE",
    "READ", "READS", "REFERENCES", "REGEXP", "RELEASE", "RENAME", "REPEAT",
    "REPLACE", "REQUIRE", "RESTRICT", "RETURN", "REVOKE", "RIGHT", "RLIKE",
    "SCHEMA", "SELECT", "SET", "SHOW", "SMALLINT", "SPATIAL", "SQL", "SSL",
    "STARTING", "TABLE", "TERMINATED", "THEN", "TIME", "TINYINT", "TO",
    "TRAILING", "TRIGGER", "TRUE", "UNION", "UNIQUE", "UNLOCK", "UNSIGNED",
    "UPDATE", "USAGE", "USE", "USER", "USING", "VALUES", "VARBINARY",
    "VARCHAR", "WHEN", "WHERE", "WHILE", "WINDOW", "WITH", "WRITE", "XOR",
];

const OPERATORS: &[&str] = &[
    "=", "!=", "<>", "<", ">", "<=", ">=",
    "LIKE", "NOT LIKE",
    "IN", "NOT IN",
    "IS NULL", "IS NOT NULL",
    "BETWEEN", "NOT BETWEEN",
];

const FEATURES: &[&str] = &["CTE", "FULLTEXT", "JSON", "PARTITION", "SPATIAL"];

#[derive(Debug, Default)]
pub struct MySql;

impl MySql {
    pub fn new() -> Self {
        MySql
    }
}

impl Driver for MySql {
    fn name(&self) -> &str {
        "mysql"
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
        if OPERATORS.contains(&upper.as_str()) {
            return Some(upper);
        }
        // No native ILIKE; map onto LIKE and let the compiler fold case.
        match upper.as_str() {
            "ILIKE" => Some("LIKE".to_string()),
            "NOT ILIKE" => Some("NOT LIKE".to_string()),
            _ => None,
        }
    }

    fn supports_feature(&self, feature: &str) -> bool {
        FEATURES.contains(&feature.to_ascii_uppercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_placeholders() {
        let d = MySql::new();
        assert_eq!(d.placeholder(1), "?");
        assert_eq!(d.placeholder(7), "?");
    }

    #[test]
    fn test_ilike_maps_to_like() {
        let d = MySql::new();
        assert_eq!(d.translate_operator("ILIKE").as_deref(), Some("LIKE"));
        assert_eq!(d.translate_operator("NOT ILIKE").as_deref(), Some("NOT LIKE"));
        assert_eq!(d.translate_operator("LIKE").as_deref(), Some("LIKE"));
    }

    #[test]
    fn test_backtick_quoting() {
        let d = MySql::new();
        assert_eq!(d.quote_identifier("order"), "`order`");
        assert_eq!(d.quote_identifier("`order`"), "`order`");
        assert_eq!(d.quote_identifier("age"), "age");
    }
}
