use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_binary_expr,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`   (numeric negation)
/// - `√`   (square root)
/// - `not` (logical not)
///
/// Negation and square root apply to a single atom; they cannot be chained
/// without parentheses (`--x` is a parse error, `-(-x)` is not). The `not`
/// operator is different: its operand is parsed at the minimum precedence, so
/// it swallows the entire remaining operator chain. `not 0 si 0` therefore
/// reads as `not (0 si 0)`. This is the language's published behavior; keep
/// it.
///
/// Grammar:
/// ```text
///     unary := ("-" | "√") atom
///            | "not" binary(1)
///            | atom
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a plain atom.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, line)) => {
            let line = *line;
            tokens.next();
            let operand = parse_atom(tokens)?;
            Ok(Expr::Unary { op: UnaryOperator::Negate,
                             operand: Box::new(operand),
                             line })
        },
        Some((Token::Sqrt, line)) => {
            let line = *line;
            tokens.next();
            let operand = parse_atom(tokens)?;
            Ok(Expr::Unary { op: UnaryOperator::Sqrt,
                             operand: Box::new(operand),
                             line })
        },
        Some((Token::Not, line)) => {
            let line = *line;
            tokens.next();
            let operand = parse_binary_expr(tokens, 1)?;
            Ok(Expr::Unary { op: UnaryOperator::Not,
                             operand: Box::new(operand),
                             line })
        },
        _ => parse_atom(tokens),
    }
}

/// Parses a primary (atomic) expression.
///
/// Atoms form the base of the expression grammar and include:
/// - numeric literals
/// - string literals
/// - variable references
/// - parenthesized expressions (`( expr )`)
/// - truncation expressions (`[ expr ]`)
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | STRING
///           | NAME
///           | "(" expression ")"
///           | "[" expression "]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
///
/// # Returns
/// The parsed atom [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(value), line)) => {
            let (value, line) = (*value, *line);
            tokens.next();
            Ok(Expr::Number { value, line })
        },
        Some((Token::Text(value), line)) => {
            let (value, line) = (value.clone(), *line);
            tokens.next();
            Ok(Expr::Text { value, line })
        },
        Some((Token::Identifier(name), line)) => {
            let (name, line) = (name.clone(), *line);
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        Some((Token::LParen, line)) => {
            let line = *line;
            tokens.next();
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(Expr::Grouping { expr: Box::new(expr),
                                                                line }),
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },
        Some((Token::LBracket, line)) => {
            let line = *line;
            tokens.next();
            let operand = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RBracket, _)) => Ok(Expr::Unary { op: UnaryOperator::Trunc,
                                                               operand: Box::new(operand),
                                                               line }),
                _ => Err(ParseError::ExpectedClosingBracket { line }),
            }
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an expression, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
