use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a chain of binary operators using precedence climbing.
///
/// A single loop consumes operators whose precedence is at least
/// `min_precedence`; the right operand is parsed recursively with the
/// consumed operator's precedence plus one, which makes every operator
/// left-associative.
///
/// Grammar: `binary(p) := unary (op[prec >= p] binary(prec + 1))*`
///
/// The precedence table is the language's published one, reproduced exactly:
/// `sau` (level 3) binds *tighter* than `si` (level 2), the opposite of the
/// usual convention. See [`precedence`].
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `min_precedence`: The lowest operator precedence this call may consume.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed chain.
pub fn parse_binary_expr<'a, I>(tokens: &mut Peekable<I>, min_precedence: u8) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;

    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && precedence(op) >= min_precedence
        {
            let line = *line;
            tokens.next();

            let right = parse_binary_expr(tokens, precedence(op) + 1)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Returns the binding strength of a binary operator.
///
/// Higher values bind tighter. The table is intentionally unusual at the
/// logic levels (`sau` above `si`); do not reorder it.
#[must_use]
pub const fn precedence(op: BinaryOperator) -> u8 {
    use BinaryOperator::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

    match op {
        Mul | Div | Mod => 10,
        Add | Sub => 8,
        Eq | Ne | Lt | Le | Gt | Ge => 5,
        Or => 3,
        And => 2,
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`*`, `/`, `%`, `+`, `-`, comparison operators, `sau`, `si`).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Equal => Some(BinaryOperator::Eq),
        Token::NotEqual => Some(BinaryOperator::Ne),
        Token::Less => Some(BinaryOperator::Lt),
        Token::LessEqual => Some(BinaryOperator::Le),
        Token::Greater => Some(BinaryOperator::Gt),
        Token::GreaterEqual => Some(BinaryOperator::Ge),
        Token::Sau => Some(BinaryOperator::Or),
        Token::Si => Some(BinaryOperator::And),
        _ => None,
    }
}
