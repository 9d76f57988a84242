use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_all_keywords() {
    let input = "AND OR NOT BETWEEN IN LIKE ILIKE IS NULL TRUE FALSE";
    let expected = vec![
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::Between,
        TokenKind::In,
        TokenKind::Like,
        TokenKind::ILike,
        TokenKind::Is,
        TokenKind::Null,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Eof,
    ];
    assert_eq!(kinds(input), expected);
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(kinds("and")[0], TokenKind::And);
    assert_eq!(kinds("Or")[0], TokenKind::Or);
    assert_eq!(kinds("between")[0], TokenKind::Between);
    assert_eq!(kinds("iLiKe")[0], TokenKind::ILike);
}

#[test]
fn test_keyword_word_boundaries() {
    // "NOTABLE" must not match NOT, "inner" must not match IN.
    assert_eq!(kinds("NOTABLE")[0], TokenKind::Ident("NOTABLE".to_string()));
    assert_eq!(kinds("inner")[0], TokenKind::Ident("inner".to_string()));
    assert_eq!(kinds("android")[0], TokenKind::Ident("android".to_string()));
    assert_eq!(kinds("istanbul")[0], TokenKind::Ident("istanbul".to_string()));
}

#[test]
fn test_comparison_operators() {
    let expected = vec![
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::NotEqual,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessOrEqual,
        TokenKind::GreaterOrEqual,
        TokenKind::Eof,
    ];
    assert_eq!(kinds("= != <> < > <= >="), expected);
}

#[test]
fn test_multi_char_operators_without_spaces() {
    assert_eq!(
        kinds("a<=1"),
        vec![
            TokenKind::Ident("a".to_string()),
            TokenKind::LessOrEqual,
            TokenKind::Number(1.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_literals() {
    assert_eq!(kinds("'hello'")[0], TokenKind::String("hello".to_string()));
    assert_eq!(
        kinds(r"'it\'s'")[0],
        TokenKind::String("it's".to_string())
    );
    assert_eq!(
        kinds(r"'a\\b'")[0],
        TokenKind::String(r"a\b".to_string())
    );
    // Non-delimiter escapes pass through untouched (LIKE patterns).
    assert_eq!(
        kinds(r"'100\%'")[0],
        TokenKind::String(r"100\%".to_string())
    );
}

#[test]
fn test_string_content_never_reinterpreted_as_keyword() {
    assert_eq!(kinds("'AND'")[0], TokenKind::String("AND".to_string()));
    assert_eq!(kinds("'NULL'")[0], TokenKind::String("NULL".to_string()));
}

#[test]
fn test_double_quoted_identifier_vs_string() {
    // Identifier-shaped content is a quoted identifier, delimiters retained.
    assert_eq!(
        kinds(r#""order""#)[0],
        TokenKind::QuotedIdent(r#""order""#.to_string())
    );
    // Anything else is a string literal.
    assert_eq!(
        kinds(r#""hello world""#)[0],
        TokenKind::String("hello world".to_string())
    );
    assert_eq!(
        kinds(r#""2024-01-01""#)[0],
        TokenKind::String("2024-01-01".to_string())
    );
}

#[test]
fn test_backtick_identifier_retains_delimiters() {
    assert_eq!(
        kinds("`user name`")[0],
        TokenKind::QuotedIdent("`user name`".to_string())
    );
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        tokenize("'oops"),
        Err(LexError::UnterminatedString { .. })
    ));
    assert!(matches!(
        tokenize("`oops"),
        Err(LexError::UnterminatedIdent { .. })
    ));
}

#[test]
fn test_numbers() {
    assert_eq!(kinds("42")[0], TokenKind::Number(42.0));
    assert_eq!(kinds("3.14")[0], TokenKind::Number(3.14));
    assert_eq!(kinds("-5")[0], TokenKind::Number(-5.0));
    assert_eq!(kinds("+7")[0], TokenKind::Number(7.0));
    assert_eq!(kinds("1.5e-3")[0], TokenKind::Number(1.5e-3));
    assert_eq!(kinds("2E10")[0], TokenKind::Number(2e10));
}

#[test]
fn test_number_then_dot_is_not_a_fraction() {
    assert_eq!(
        kinds("1."),
        vec![TokenKind::Number(1.0), TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn test_structural_tokens() {
    assert_eq!(
        kinds("a.b(c, d)"),
        vec![
            TokenKind::Ident("a".to_string()),
            TokenKind::Dot,
            TokenKind::Ident("b".to_string()),
            TokenKind::LParen,
            TokenKind::Ident("c".to_string()),
            TokenKind::Comma,
            TokenKind::Ident("d".to_string()),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unexpected_character_is_fatal() {
    let err = tokenize("age > 18 ; drop").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedChar {
            ch: ';',
            position: 9,
            line: 1,
            column: 10,
        }
    );
}

#[test]
fn test_bare_minus_is_an_error() {
    assert!(matches!(
        tokenize("a - b"),
        Err(LexError::UnexpectedChar { ch: '-', .. })
    ));
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("a =\n  42").unwrap();
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
    assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
}

#[test]
fn test_whitespace_is_elided() {
    assert_eq!(kinds("  \t\n ").len(), 1); // just Eof
}
