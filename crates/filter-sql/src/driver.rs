//! Dialect driver contract and the shared quoting/translation helpers every
//! driver builds on.

use filter_syntax::functions;

/// Capability interface a SQL dialect implements: identifier quoting,
/// placeholder syntax, operator and function translation. Drivers are
/// stateless and shared across threads.
pub trait Driver: Send + Sync {
    /// Canonical driver name (e.g. "postgres", "mysql", "clickhouse").
    fn name(&self) -> &str;

    /// Bind marker for the given 1-based parameter position.
    fn placeholder(&self, position: usize) -> String;

    /// Reserved words that force identifier quoting.
    fn keywords(&self) -> &[&str];

    /// Quotes an identifier when required. Idempotent on already-quoted
    /// input; dotted names are quoted part by part.
    fn quote_identifier(&self, name: &str) -> String;

    /// Translates an operator to dialect syntax, or `None` when the dialect
    /// does not support it. A dialect without native case-insensitive match
    /// may map ILIKE onto LIKE here; the compiler then emulates the case
    /// folding around it.
    fn translate_operator(&self, operator: &str) -> Option<String>;

    /// Returns a render template for a function call, or `None` when the
    /// dialect rejects the function at that arity. Templates use positional
    /// slots `{0}`, `{1}`, ... so a dialect can reorder arguments or use
    /// infix forms like `SUBSTRING({0} FROM {1})`.
    ///
    /// The default translation emits cataloged functions under their
    /// canonical uppercase name (rejecting arity violations) and passes
    /// unknown functions through exactly as written, preserving case for
    /// dialects with case-sensitive native functions.
    fn translate_function(&self, name: &str, arg_count: usize) -> Option<String> {
        default_function_template(name, arg_count)
    }

    /// True when the dialect supports the named feature tag (e.g. "ILIKE",
    /// "JSON").
    fn supports_feature(&self, feature: &str) -> bool;
}

/// The stock function translation: cataloged functions render under their
/// canonical uppercase name with arity enforced, everything else passes
/// through as written with the generic call template.
pub fn default_function_template(name: &str, arg_count: usize) -> Option<String> {
    match functions::function_def(name) {
        Some(def) => {
            if !functions::validate_function_args(name, arg_count) {
                return None;
            }
            Some(call_template(def.name, arg_count))
        }
        None => Some(call_template(name, arg_count)),
    }
}

/// Builds the generic `NAME({0}, {1}, ...)` call template.
pub fn call_template(name: &str, arg_count: usize) -> String {
    let slots: Vec<String> = (0..arg_count).map(|i| format!("{{{i}}}")).collect();
    format!("{}({})", name, slots.join(", "))
}

/// True when `word` is reserved for the given driver, case-insensitively.
pub fn is_reserved_keyword(word: &str, driver: &dyn Driver) -> bool {
    let upper = word.to_ascii_uppercase();
    driver.keywords().iter().any(|kw| *kw == upper)
}

/// An identifier needs quoting when it is reserved, starts with a digit, or
/// contains any character outside `[A-Za-z0-9_]`.
pub fn needs_quoting(name: &str, driver: &dyn Driver) -> bool {
    if name.is_empty() {
        return false;
    }
    if is_reserved_keyword(name, driver) {
        return true;
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        return true;
    }
    name.chars()
        .any(|ch| !ch.is_ascii_alphanumeric() && ch != '_')
}

/// Shared quoting routine: idempotent on names already wrapped in `quote`,
/// strips the other quoting style, and quotes dotted names part by part,
/// doubling any embedded quote character.
pub fn quote_with(name: &str, quote: char, driver: &dyn Driver) -> String {
    let name = name.trim();
    if name.is_empty() {
        return name.to_string();
    }

    let other = if quote == '"' { '`' } else { '"' };
    if name.starts_with(quote) && name.ends_with(quote) && name.len() >= 2 {
        return name.to_string();
    }
    let name = strip_wrapping(name, other);

    name.split('.')
        .map(|part| quote_part(part, quote, driver))
        .collect::<Vec<_>>()
        .join(".")
}

fn quote_part(part: &str, quote: char, driver: &dyn Driver) -> String {
    if needs_quoting(part, driver) {
        let doubled = part.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{doubled}{quote}")
    } else {
        part.to_string()
    }
}

/// Removes one layer of `delim` wrapping, if present.
pub fn strip_wrapping(name: &str, delim: char) -> &str {
    if name.len() >= 2 && name.starts_with(delim) && name.ends_with(delim) {
        &name[delim.len_utf8()..name.len() - delim.len_utf8()]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDriver;

    impl Driver for FakeDriver {
        fn name(&self) -> &str {
            "fake"
        }

        fn placeholder(&self, _position: usize) -> String {
            "?".to_string()
        }

        fn keywords(&self) -> &[&str] {
            &["SELECT", "ORDER"]
        }

        fn quote_identifier(&self, name: &str) -> String {
            quote_with(name, '"', self)
        }

        fn translate_operator(&self, operator: &str) -> Option<String> {
            Some(operator.to_string())
        }

        fn supports_feature(&self, _feature: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_needs_quoting_rules() {
        let d = FakeDriver;
        assert!(needs_quoting("order", &d));
        assert!(needs_quoting("ORDER", &d));
        assert!(needs_quoting("9lives", &d));
        assert!(needs_quoting("has space", &d));
        assert!(needs_quoting("has-dash", &d));
        assert!(!needs_quoting("age", &d));
        assert!(!needs_quoting("user_id", &d));
    }

    #[test]
    fn test_quote_is_idempotent() {
        let d = FakeDriver;
        assert_eq!(d.quote_identifier("order"), "\"order\"");
        assert_eq!(d.quote_identifier("\"order\""), "\"order\"");
    }

    #[test]
    fn test_quote_dotted_parts() {
        let d = FakeDriver;
        assert_eq!(d.quote_identifier("schema.order"), "schema.\"order\"");
        assert_eq!(d.quote_identifier("users.email"), "users.email");
    }

    #[test]
    fn test_default_function_translation() {
        let d = FakeDriver;
        assert_eq!(d.translate_function("lower", 1).as_deref(), Some("LOWER({0})"));
        assert_eq!(
            d.translate_function("toYYYYMM", 1).as_deref(),
            Some("toYYYYMM({0})")
        );
        // Cataloged arity is enforced.
        assert_eq!(d.translate_function("LOWER", 2), None);
    }

    #[test]
    fn test_call_template_shapes() {
        assert_eq!(call_template("NOW", 0), "NOW()");
        assert_eq!(call_template("CONCAT", 3), "CONCAT({0}, {1}, {2})");
    }
}
