use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Cursor, Parsed, check_depth},
            term::parse_term,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression. The returned
/// cursor sits directly after the last operand; trailing whitespace is left
/// unconsumed.
pub fn parse_additive(cursor: Cursor<'_>) -> Parsed<'_, Expr> {
    log::trace!("parse_additive at {}", cursor.position());
    parse_left_fold(cursor, parse_multiplicative, additive_operator)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `×`, `/` and `÷`, all of which
/// bind equally.
///
/// The rule is: `multiplicative := term (("*" | "/") term)*`
pub fn parse_multiplicative(cursor: Cursor<'_>) -> Parsed<'_, Expr> {
    log::trace!("parse_multiplicative at {}", cursor.position());
    parse_left_fold(cursor, parse_term, multiplicative_operator)
}

/// Parses `operand (operator operand)*` and folds it into a left-leaning
/// tree: `a - b - c` becomes `(a - b) - c`.
///
/// Whitespace before each operand and around each operator is skipped.
///
/// # Errors
/// `TooDeep` at the offending operator once the tree grows past
/// [`MAX_DEPTH`](super::core::MAX_DEPTH).
fn parse_left_fold<'a>(cursor: Cursor<'a>,
                       operand: fn(Cursor<'a>) -> Parsed<'a, Expr>,
                       operator: fn(Token) -> Option<BinaryOperator>)
                       -> Parsed<'a, Expr> {
    let (mut left, mut cursor) = operand(cursor.skip_whitespace())?;
    let mut depth = left.depth();
    loop {
        let lookahead = cursor.skip_whitespace();
        if let Some(lexeme) = lookahead.peek()
           && let Some(op) = operator(lexeme.token)
        {
            let (right, rest) = operand(lookahead.advance().skip_whitespace())?;
            depth = 1 + depth.max(right.depth());
            check_depth(depth, lexeme.position)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: lexeme.position };
            cursor = rest;
            continue;
        }
        break;
    }
    Ok((left, cursor))
}

const fn additive_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
