//! Core compilation behavior: precedence rendering, parameterization and
//! determinism, mostly against the `$N` dialect.

use filter_sql::{Param, ToSql};
use filter_syntax::parse;

fn postgres(input: &str) -> (String, Vec<Param>) {
    parse(input)
        .expect("should parse")
        .to_sql("postgres")
        .expect("should compile")
}

#[test]
fn renders_simple_and_chain() {
    let (sql, params) = postgres("age >= 18 AND status = 'active'");
    assert_eq!(sql, "age >= $1 AND status = $2");
    assert_eq!(params, vec![Param::Number(18.0), Param::from("active")]);
}

#[test]
fn and_binds_tighter_than_or() {
    let (sql, params) = postgres("a = 1 OR b = 2 AND c = 3");
    assert_eq!(sql, "a = $1 OR (b = $2 AND c = $3)");
    assert_eq!(params.len(), 3);
}

#[test]
fn explicit_group_keeps_its_parens() {
    let (sql, _) = postgres("(a = 1 OR b = 2) AND c = 3");
    assert_eq!(sql, "(a = $1 OR b = $2) AND c = $3");
}

#[test]
fn single_predicate_has_no_parens() {
    let (sql, params) = postgres("age > 18");
    assert_eq!(sql, "age > $1");
    assert_eq!(params, vec![Param::Number(18.0)]);
}

#[test]
fn redundant_parens_collapse() {
    let (sql, _) = postgres("(((age > 18)))");
    assert_eq!(sql, "age > $1");
}

#[test]
fn negation_wraps_once() {
    let (sql, _) = postgres("NOT (country = 'XX' OR ip_address IS NULL)");
    assert_eq!(sql, "NOT (country = $1 OR ip_address IS NULL)");
}

#[test]
fn complex_filter_end_to_end() {
    let (sql, params) = postgres(
        "(age BETWEEN 18 AND 65 OR is_verified = true) AND \
         email NOT LIKE '%spam%' AND \
         status IN ('active', 'premium', 'vip') AND \
         NOT (country = 'XX' OR ip_address IS NULL)",
    );

    assert_eq!(
        sql,
        "(age BETWEEN $1 AND $2 OR is_verified = TRUE) AND email NOT LIKE $3 \
         AND status IN ($4, $5, $6) AND NOT (country = $7 OR ip_address IS NULL)"
    );
    assert_eq!(params.len(), 7);
}

#[test]
fn booleans_and_null_are_never_parameterized() {
    let (sql, params) = postgres("active = true AND archived = false AND meta = NULL");
    assert_eq!(sql, "active = TRUE AND archived = FALSE AND meta = NULL");
    assert!(params.is_empty());
}

#[test]
fn param_count_matches_string_and_number_literals() {
    let (_, params) = postgres("a = 1 AND b = 'x' AND c = true AND d IS NULL AND e IN (2, 'y')");
    assert_eq!(
        params,
        vec![
            Param::Number(1.0),
            Param::from("x"),
            Param::Number(2.0),
            Param::from("y"),
        ]
    );
}

#[test]
fn placeholders_increase_through_nested_function_arguments() {
    let (sql, params) = postgres("SUBSTRING(description, 1, 10) = 'Important'");
    assert_eq!(sql, "SUBSTRING(description FROM $1 FOR $2) = $3");
    assert_eq!(
        params,
        vec![Param::Number(1.0), Param::Number(10.0), Param::from("Important")]
    );
}

#[test]
fn zero_argument_functions_render_bare() {
    let (sql, params) = postgres("DATE(created_at) = '2024-01-01' AND created_at > NOW()");
    assert_eq!(sql, "DATE(created_at) = $1 AND created_at > NOW()");
    assert_eq!(params, vec![Param::from("2024-01-01")]);
}

#[test]
fn variadic_function_arguments() {
    let (sql, params) = postgres("COALESCE(nickname, username, email) != ''");
    assert_eq!(sql, "COALESCE(nickname, username, email) != $1");
    assert_eq!(params, vec![Param::from("")]);
}

#[test]
fn metacharacters_stay_in_params() {
    let hostile = "'; DROP TABLE users; --";
    let filter = parse("comment = '\\'; DROP TABLE users; --'").expect("should parse");
    let (sql, params) = filter.to_sql("postgres").expect("should compile");

    assert_eq!(sql, "comment = $1");
    assert_eq!(params, vec![Param::from(hostile)]);
    assert!(!sql.contains("DROP"));
}

#[test]
fn compilation_is_deterministic() {
    let filter = parse("a = 1 AND b IN ('x', 'y') OR c ILIKE '%z%'").expect("should parse");
    let first = filter.to_sql("postgres").expect("should compile");
    let second = filter.to_sql("postgres").expect("should compile");
    assert_eq!(first, second);
}

#[test]
fn same_filter_compiles_for_multiple_dialects() {
    let filter = parse("age > 21 AND name LIKE 'J%'").expect("should parse");

    let (pg, pg_params) = filter.to_sql("postgres").expect("postgres should compile");
    let (my, my_params) = filter.to_sql("mysql").expect("mysql should compile");

    assert_eq!(pg, "age > $1 AND name LIKE $2");
    assert_eq!(my, "age > ? AND name LIKE ?");
    assert_eq!(pg_params, my_params);
}

#[test]
fn dotted_fields_pass_through() {
    let (sql, _) = postgres("properties.utm_source IS NOT NULL");
    assert_eq!(sql, "properties.utm_source IS NOT NULL");
}

#[test]
fn between_and_not_between() {
    let (sql, params) = postgres("age BETWEEN 18 AND 65");
    assert_eq!(sql, "age BETWEEN $1 AND $2");
    assert_eq!(params.len(), 2);

    let (sql, _) = postgres("age NOT BETWEEN 18 AND 65");
    assert_eq!(sql, "age NOT BETWEEN $1 AND $2");
}

#[test]
fn scalar_subexpression_renders_inline() {
    let (sql, _) = postgres("(a = 1) = TRUE");
    assert_eq!(sql, "a = $1 = TRUE");
}

#[test]
fn one_shot_build_helper() {
    let (sql, params) = filter_sql::build("age > 18", "postgres").expect("should build");
    assert_eq!(sql, "age > $1");
    assert_eq!(params, vec![Param::Number(18.0)]);

    assert!(filter_sql::build("", "postgres").is_err());
    assert!(filter_sql::build("age > 18", "oracle").is_err());
}
