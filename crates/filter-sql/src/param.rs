use serde::{Deserialize, Serialize};
use std::fmt;

/// One bound parameter value, emitted in placeholder order alongside the SQL
/// string. Only string and numeric literals are parameterized; booleans and
/// NULL render as bare SQL keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    String(String),
    Number(f64),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::String(s) => write!(f, "{}", s),
            Param::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::String(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::String(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Number(value)
    }
}
