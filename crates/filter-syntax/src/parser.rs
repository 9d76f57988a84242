//! Recursive-descent parser for filter expressions.
//!
//! Precedence (low to high): OR, AND, NOT, predicate — encoded structurally:
//!
//! ```text
//! Expression := Term ( OR Term )*
//! Term       := Factor ( AND Factor )*
//! Factor     := NOT? ( '(' Expression ')' | Predicate )
//! Predicate  := Value Operation
//! Operation  := CompareOp Value
//!             | NOT? (LIKE|ILIKE) Value
//!             | NOT? BETWEEN Value AND Value
//!             | NOT? IN '(' Value (',' Value)* ')'
//!             | IS NOT? NULL
//! Value      := Ident '(' (Value (',' Value)*)? ')'
//!             | QualifiedIdent
//!             | StringLit | NumberLit | BooleanLit | NULL
//!             | '(' Expression ')'
//! ```
//!
//! A `(` at Factor position is ambiguous between a boolean group and a scalar
//! sub-expression. Both productions wrap the same inner Expression, so the
//! inside is parsed once and the token after the closing paren decides: an
//! operation token makes it the left-hand value of a predicate, anything else
//! a group.

use crate::{
    ast::{
        CompareOperator, Expression, Factor, FactorKind, FieldRef, Filter, Literal, Operation,
        Predicate, Term, Value,
    },
    error::{ParseError, SyntaxError},
    lexer::{
        self,
        token::{Token, TokenKind},
    },
    validate,
};
use std::collections::HashSet;
use tracing::debug;

/// Hard recursion guard inside the parser itself, independent of the
/// configurable post-parse depth validation. Fails before unwinding the stack
/// on pathological nesting.
const MAX_NESTING: usize = 64;

/// Configuration for parsing and parse-time validation.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub max_depth: usize,
    pub max_in_items: usize,
    /// Case-insensitive function allow-list; `None` allows every function.
    pub allowed_functions: Option<HashSet<String>>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: 10,
            max_in_items: 1000,
            allowed_functions: None,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum nesting depth of parenthesized sub-expressions and sub-values.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Maximum number of items in an IN list.
    pub fn max_in_items(mut self, max: usize) -> Self {
        self.max_in_items = max;
        self
    }

    /// Restricts which functions may appear, case-insensitively. This is
    /// parse-time validation; use the runtime validator during compilation for
    /// the authoritative security gate.
    pub fn allow_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.allowed_functions.get_or_insert_with(HashSet::new);
        for name in names {
            set.insert(name.as_ref().to_ascii_uppercase());
        }
        self
    }
}

/// A configured filter expression parser.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Parser { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a filter expression string into a [`Filter`] AST, applying the
    /// configured parse-time validation.
    pub fn parse(&self, input: &str) -> Result<Filter, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyFilter);
        }

        let tokens = lexer::tokenize(input)?;
        let filter = Grammar::new(&tokens).parse_filter()?;
        validate::validate(&filter, &self.options)?;

        debug!(terms = filter.expression.terms.len(), "parsed filter expression");
        Ok(filter)
    }
}

/// Parses with default options. For control over limits and allow-lists,
/// build a [`Parser`] with [`ParserOptions`].
pub fn parse(input: &str) -> Result<Filter, ParseError> {
    Parser::new().parse(input)
}

struct Grammar<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Grammar<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Grammar {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn parse_filter(mut self) -> Result<Filter, SyntaxError> {
        let expression = self.parse_expression()?;
        if !matches!(self.peek_kind(), TokenKind::Eof) {
            return Err(self.error_here("AND, OR or end of input"));
        }
        Ok(Filter { expression })
    }

    fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING });
        }

        let mut terms = vec![self.parse_term()?];
        while self.eat(&TokenKind::Or) {
            terms.push(self.parse_term()?);
        }

        self.depth -= 1;
        Ok(Expression { terms })
    }

    fn parse_term(&mut self) -> Result<Term, SyntaxError> {
        let mut factors = vec![self.parse_factor()?];
        while self.eat(&TokenKind::And) {
            factors.push(self.parse_factor()?);
        }
        Ok(Term { factors })
    }

    fn parse_factor(&mut self) -> Result<Factor, SyntaxError> {
        let negated = self.eat(&TokenKind::Not);

        // Both candidate productions here, boolean group and scalar
        // sub-expression, open with '(' Expression ')'. Parse the inside once
        // and let the token after ')' decide: an operation token means the
        // parens were a scalar on the left of a predicate.
        if matches!(self.peek_kind(), TokenKind::LParen) {
            let expression = self.parse_group()?;

            if self.starts_operation() {
                let operation = self.parse_operation()?;
                return Ok(Factor {
                    negated,
                    kind: FactorKind::Predicate(Predicate {
                        left: Value::SubExpr(Box::new(expression)),
                        operation,
                    }),
                });
            }

            return Ok(Factor {
                negated,
                kind: FactorKind::Group(expression),
            });
        }

        let predicate = self.parse_predicate()?;
        Ok(Factor {
            negated,
            kind: FactorKind::Predicate(predicate),
        })
    }

    fn parse_group(&mut self) -> Result<Expression, SyntaxError> {
        self.expect(&TokenKind::LParen, "'('")?;
        let expression = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(expression)
    }

    fn parse_predicate(&mut self) -> Result<Predicate, SyntaxError> {
        let left = self.parse_value()?;
        let operation = self.parse_operation()?;
        Ok(Predicate { left, operation })
    }

    fn parse_operation(&mut self) -> Result<Operation, SyntaxError> {
        let kind = self.peek_kind().clone();
        match kind {
            TokenKind::Equal => self.parse_compare(CompareOperator::Eq),
            TokenKind::NotEqual => self.parse_compare(CompareOperator::NotEq),
            TokenKind::Less => self.parse_compare(CompareOperator::Lt),
            TokenKind::Greater => self.parse_compare(CompareOperator::Gt),
            TokenKind::LessOrEqual => self.parse_compare(CompareOperator::LtEq),
            TokenKind::GreaterOrEqual => self.parse_compare(CompareOperator::GtEq),
            TokenKind::Not => {
                self.advance();
                let kind = self.peek_kind().clone();
                match kind {
                    TokenKind::Like => self.parse_like(true, false),
                    TokenKind::ILike => self.parse_like(true, true),
                    TokenKind::Between => self.parse_between(true),
                    TokenKind::In => self.parse_in(true),
                    _ => Err(self.error_here("LIKE, ILIKE, BETWEEN or IN after NOT")),
                }
            }
            TokenKind::Like => self.parse_like(false, false),
            TokenKind::ILike => self.parse_like(false, true),
            TokenKind::Between => self.parse_between(false),
            TokenKind::In => self.parse_in(false),
            TokenKind::Is => {
                self.advance();
                let negated = self.eat(&TokenKind::Not);
                self.expect(&TokenKind::Null, "NULL")?;
                Ok(Operation::IsNull { negated })
            }
            _ => Err(self.error_here("comparison operator, LIKE, BETWEEN, IN or IS")),
        }
    }

    fn parse_compare(&mut self, operator: CompareOperator) -> Result<Operation, SyntaxError> {
        self.advance();
        let right = self.parse_value()?;
        Ok(Operation::Compare { operator, right })
    }

    fn parse_like(&mut self, negated: bool, case_insensitive: bool) -> Result<Operation, SyntaxError> {
        self.advance();
        let pattern = self.parse_value()?;
        Ok(Operation::Like {
            negated,
            case_insensitive,
            pattern,
        })
    }

    fn parse_between(&mut self, negated: bool) -> Result<Operation, SyntaxError> {
        self.advance();
        let lower = self.parse_value()?;
        self.expect(&TokenKind::And, "AND")?;
        let upper = self.parse_value()?;
        Ok(Operation::Between {
            negated,
            lower,
            upper,
        })
    }

    fn parse_in(&mut self, negated: bool) -> Result<Operation, SyntaxError> {
        self.advance();
        self.expect(&TokenKind::LParen, "'('")?;
        let mut values = vec![self.parse_value()?];
        while self.eat(&TokenKind::Comma) {
            values.push(self.parse_value()?);
        }
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(Operation::In { negated, values })
    }

    fn parse_value(&mut self) -> Result<Value, SyntaxError> {
        let kind = self.peek_kind().clone();
        match kind {
            // Lookahead: an identifier immediately followed by '(' is a
            // function call, otherwise a field reference.
            TokenKind::Ident(name)
                if matches!(self.peek_nth_kind(1), TokenKind::LParen) =>
            {
                self.advance();
                self.advance();
                let mut args = Vec::new();
                if !matches!(self.peek_kind(), TokenKind::RParen) {
                    args.push(self.parse_value()?);
                    while self.eat(&TokenKind::Comma) {
                        args.push(self.parse_value()?);
                    }
                }
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(Value::FunctionCall { name, args })
            }
            TokenKind::Ident(part) | TokenKind::QuotedIdent(part) => {
                self.advance();
                let mut parts = vec![part];
                while self.eat(&TokenKind::Dot) {
                    let kind = self.peek_kind().clone();
                    match kind {
                        TokenKind::Ident(p) | TokenKind::QuotedIdent(p) => {
                            self.advance();
                            parts.push(p);
                        }
                        _ => return Err(self.error_here("identifier after '.'")),
                    }
                }
                Ok(Value::Field(FieldRef::new(parts)))
            }
            TokenKind::String(s) => {
                self.advance();
                Ok(Value::Literal(Literal::String(s)))
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(Value::Literal(Literal::Number(n)))
            }
            TokenKind::True => {
                self.advance();
                Ok(Value::Literal(Literal::Boolean(true)))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Literal(Literal::Boolean(false)))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Value::Literal(Literal::Null))
            }
            TokenKind::LParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(Value::SubExpr(Box::new(expression)))
            }
            _ => Err(self.error_here("value")),
        }
    }

    /// True when the current token can begin a predicate operation, including
    /// the NOT LIKE/NOT BETWEEN/NOT IN forms.
    fn starts_operation(&self) -> bool {
        match self.peek_kind() {
            TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::LessOrEqual
            | TokenKind::GreaterOrEqual
            | TokenKind::Like
            | TokenKind::ILike
            | TokenKind::Between
            | TokenKind::In
            | TokenKind::Is => true,
            TokenKind::Not => matches!(
                self.peek_nth_kind(1),
                TokenKind::Like | TokenKind::ILike | TokenKind::Between | TokenKind::In
            ),
            _ => false,
        }
    }

    fn peek(&self) -> &Token {
        // The lexer always appends Eof, so the last token is a safe fallback.
        self.tokens
            .get(self.pos)
            .unwrap_or_else(|| &self.tokens[self.tokens.len() - 1])
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn peek_nth_kind(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<(), SyntaxError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error_here(expected))
        }
    }

    fn error_here(&self, expected: &str) -> SyntaxError {
        let token = self.peek();
        if matches!(token.kind, TokenKind::Eof) {
            SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            SyntaxError::UnexpectedToken {
                line: token.line,
                column: token.column,
                expected: expected.to_string(),
                found: token.kind.to_string(),
            }
        }
    }
}
