use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a block-structured construct (`daca`, `pentru`, `cat timp`, `executa`,
///   `repeta`),
/// - a simple statement (assignment, swap, `citeste`, `scrie`), possibly
///   joined with further simple statements by `;` into one group.
///
/// There are no bare expression statements in this language; an identifier
/// must be followed by `<-` or `<->`.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Daca, _)) => parse_if(tokens),
        Some((Token::Pentru, _)) => parse_for(tokens),
        Some((Token::Cat, _)) => parse_while(tokens),
        Some((Token::Executa, _)) => parse_do_while(tokens),
        Some((Token::Repeta, _)) => parse_repeat(tokens),
        _ => {
            let line = tokens.peek().map_or(0, |(_, l)| *l);
            let first = parse_simple_statement(tokens)?;

            if !matches!(tokens.peek(), Some((Token::Semicolon, _))) {
                return Ok(first);
            }

            let mut statements = vec![first];
            while let Some((Token::Semicolon, _)) = tokens.peek() {
                tokens.next();
                statements.push(parse_simple_statement(tokens)?);
            }

            Ok(Stmt::Multi { statements, line })
        },
    }
}

/// Parses a simple statement: assignment, swap, `citeste` or `scrie`.
///
/// These are the only forms that may appear inside a `;`-joined group.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the statement start.
///
/// # Returns
/// A parsed [`Stmt`] node.
///
/// # Errors
/// Returns a `ParseError` if the next token starts none of the four forms.
fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Citeste, _)) => parse_read(tokens),
        Some((Token::Scrie, _)) => parse_write(tokens),
        Some((Token::Identifier(_), _)) => parse_assign_or_swap(tokens),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a statement, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an assignment or a swap, both of which start with an identifier.
///
/// Supported forms:
///
/// - `<identifier> <- <expression>`
/// - `<identifier> <-> <identifier>` (also spelled `<-->`)
fn parse_assign_or_swap<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::Arrow, line)) => {
            let value = parse_expression(tokens)?;
            Ok(Stmt::Assign { name,
                              value,
                              line: *line })
        },
        Some((Token::SwapArrow, line)) => {
            let other = parse_identifier(tokens)?;
            Ok(Stmt::Swap { left:  name,
                            right: other,
                            line:  *line, })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '<-' or '<->' after '{name}', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an input statement: `citeste NAME (',' NAME)*`.
fn parse_read<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Citeste, "'citeste'")?;

    let mut names = vec![parse_identifier(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        names.push(parse_identifier(tokens)?);
    }

    Ok(Stmt::Read { names, line })
}

/// Parses an output statement: `scrie expr (',' expr)*`.
fn parse_write<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Scrie, "'scrie'")?;

    let mut values = vec![parse_expression(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        values.push(parse_expression(tokens)?);
    }

    Ok(Stmt::Write { values, line })
}

/// Parses a conditional statement.
///
/// Syntax:
/// ```text
///     daca <condition> atunci
///         <statements>
///     altfel
///         <statements>
///     sf
/// ```
/// The `altfel` branch is optional; when absent the else block is empty.
///
/// # Errors
/// - `UnexpectedToken` if `atunci` or `sf` is missing.
/// - Propagates any errors from condition or body parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Daca, "'daca'")?;

    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::Atunci, "'atunci' after the condition")?;

    let then_block = parse_block(tokens, &[Token::Altfel, Token::Sf], line)?;

    let else_block = if let Some((Token::Altfel, _)) = tokens.peek() {
        tokens.next();
        parse_block(tokens, &[Token::Sf], line)?
    } else {
        Vec::new()
    };

    expect_token(tokens, &Token::Sf, "'sf' to close 'daca'")?;

    Ok(Stmt::If { condition,
                  then_block,
                  else_block,
                  line })
}

/// Parses a counted loop.
///
/// Syntax:
/// ```text
///     pentru <var> <- <from>, <to>[, <step>] executa
///         <statements>
///     sf
/// ```
/// The step expression is optional and defaults to `1` at evaluation time.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Pentru, "'pentru'")?;

    let var = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Arrow, "'<-' after the loop variable")?;

    let from = parse_expression(tokens)?;
    expect_token(tokens, &Token::Comma, "',' after the initial value")?;
    let to = parse_expression(tokens)?;

    let step = if let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect_token(tokens, &Token::Executa, "'executa' after the loop bounds")?;
    let body = parse_block(tokens, &[Token::Sf], line)?;
    expect_token(tokens, &Token::Sf, "'sf' to close 'pentru'")?;

    Ok(Stmt::For { var,
                   from,
                   to,
                   step,
                   body,
                   line })
}

/// Parses a pre-test loop: `cat timp <condition> executa ... sf`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Cat, "'cat'")?;
    expect_token(tokens, &Token::Timp, "'timp' after 'cat'")?;

    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::Executa, "'executa' after the condition")?;

    let body = parse_block(tokens, &[Token::Sf], line)?;
    expect_token(tokens, &Token::Sf, "'sf' to close 'cat timp'")?;

    Ok(Stmt::While { condition, body, line })
}

/// Parses a post-test loop: `executa ... cat timp <condition>`.
///
/// The body runs until the `cat` keyword; the loop continues while the
/// condition is true.
fn parse_do_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Executa, "'executa'")?;

    let body = parse_block(tokens, &[Token::Cat], line)?;
    expect_token(tokens, &Token::Cat, "'cat' after the loop body")?;
    expect_token(tokens, &Token::Timp, "'timp' after 'cat'")?;

    let condition = parse_expression(tokens)?;

    Ok(Stmt::DoWhile { body, condition, line })
}

/// Parses a post-test loop: `repeta ... pana cand <condition>`.
///
/// The body runs until the `pana` keyword; the loop continues while the
/// condition is *false* (it terminates once the condition becomes true).
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Repeta, "'repeta'")?;

    let body = parse_block(tokens, &[Token::Pana], line)?;
    expect_token(tokens, &Token::Pana, "'pana' after the loop body")?;
    expect_token(tokens, &Token::Cand, "'cand' after 'pana'")?;

    let condition = parse_expression(tokens)?;

    Ok(Stmt::RepeatUntil { body, condition, line })
}
