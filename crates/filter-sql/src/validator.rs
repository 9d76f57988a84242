//! Field and function allow-listing applied during SQL compilation.
//!
//! This is the authoritative security gate: the parse-time limits in
//! `filter-syntax` are advisory convenience, while a [`Validator`] installed
//! on compilation decides what actually reaches the emitted SQL. A fresh
//! validator denies every field and function until explicitly allowed.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Validator {
    allow_all: bool,
    allowed_fields: HashSet<String>,
    allowed_functions: HashSet<String>,
}

impl Validator {
    /// A validator that denies all fields and functions.
    pub fn new() -> Self {
        Validator::default()
    }

    /// Allows every field and function. Disables the security gate; use with
    /// caution.
    pub fn allow_all(mut self) -> Self {
        self.allow_all = true;
        self
    }

    /// Adds fields to the allow-list, case-insensitively. Dotted names are
    /// matched as a whole (`properties.country`).
    pub fn allow_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for field in fields {
            self.allowed_fields.insert(field.as_ref().to_lowercase());
        }
        self
    }

    /// Adds functions to the allow-list, case-insensitively.
    pub fn allow_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for function in functions {
            self.allowed_functions
                .insert(function.as_ref().to_uppercase());
        }
        self
    }

    pub fn is_field_allowed(&self, field: &str) -> bool {
        self.allow_all || self.allowed_fields.contains(&field.to_lowercase())
    }

    pub fn is_function_allowed(&self, function: &str) -> bool {
        self.allow_all || self.allowed_functions.contains(&function.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denies_by_default() {
        let v = Validator::new();
        assert!(!v.is_field_allowed("age"));
        assert!(!v.is_function_allowed("LOWER"));
    }

    #[test]
    fn test_allow_all_overrides() {
        let v = Validator::new().allow_all();
        assert!(v.is_field_allowed("anything"));
        assert!(v.is_function_allowed("anything"));
    }

    #[test]
    fn test_field_allowlist_is_case_insensitive() {
        let v = Validator::new().allow_fields(["Email", "properties.country"]);
        assert!(v.is_field_allowed("email"));
        assert!(v.is_field_allowed("EMAIL"));
        assert!(v.is_field_allowed("Properties.Country"));
        assert!(!v.is_field_allowed("password"));
    }

    #[test]
    fn test_function_allowlist_is_case_insensitive() {
        let v = Validator::new().allow_functions(["lower"]);
        assert!(v.is_function_allowed("LOWER"));
        assert!(v.is_function_allowed("Lower"));
        assert!(!v.is_function_allowed("TRIM"));
    }
}
