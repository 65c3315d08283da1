use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a statement block up to (but not including) a terminator keyword.
///
/// Block-structured statements share this helper: an `if` body runs until
/// `altfel` or `sf`, loop bodies until `sf`, a do-while body until `cat`, a
/// repeat body until `pana`. The terminator itself is left in the stream for
/// the caller to consume.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first body statement.
/// - `terminators`: Keywords that end the block.
/// - `line`: Line of the construct's opening keyword, for the end-of-input
///   error.
///
/// # Returns
/// The statements of the block, possibly empty.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if the stream ends before any
/// terminator, and propagates statement parse errors.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          terminators: &[Token],
                          line: usize)
                          -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
            Some((tok, _)) if terminators.contains(tok) => break,
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(statements)
}
