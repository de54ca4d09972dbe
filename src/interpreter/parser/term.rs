use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Cursor, Parsed, check_depth, parse_expression},
            literal::parse_literal,
            utils::{expect_closing_paren, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a term, the operand of the multiplicative level.
///
/// The alternatives are told apart by their first lexeme, so no alternative
/// ever has to be retried:
///
/// ```text
///     term := function_call     (identifier)
///           | "(" expression ")"
///           | literal           (digit or "-")
/// ```
pub fn parse_term(cursor: Cursor<'_>) -> Parsed<'_, Expr> {
    match cursor.peek_token() {
        Some(Token::Identifier) => parse_function_call(cursor),
        Some(Token::LParen) => parse_grouping(cursor),
        _ => parse_literal(cursor),
    }
}

/// Parses a function call such as `max(1, sqrt(4))`.
///
/// The name must be followed immediately by `(`, with no whitespace in
/// between. The argument count is not checked here; arity is resolved when
/// the call is evaluated.
///
/// Grammar: `function_call := identifier "(" (expression ("," expression)*)? ")"`
///
/// # Errors
/// - `UnexpectedToken` if the identifier is not followed by `(`.
/// - `TooDeep` if the call opens too many parentheses or would build too
///   deep a tree.
/// - Propagates any errors from argument parsing.
pub fn parse_function_call(cursor: Cursor<'_>) -> Parsed<'_, Expr> {
    let Some(name) = cursor.peek().filter(|lexeme| lexeme.token == Token::Identifier) else {
        return Err(unexpected(cursor));
    };
    log::trace!("parse_function_call `{}` at {}", name.text, name.position);

    let cursor = cursor.advance();
    if cursor.peek_token() != Some(Token::LParen) {
        return Err(ParseError::UnexpectedToken { token:    name.text.to_string(),
                                                 position: name.position, });
    }

    let (arguments, cursor) = parse_comma_separated(cursor.enter()?.advance(), parse_expression)?;
    let depth = 1 + arguments.iter().map(Expr::depth).max().unwrap_or(0);
    check_depth(depth, name.position)?;

    Ok((Expr::FunctionCall { name: name.text.to_string(),
                             arguments,
                             position: name.position },
        cursor.leave()))
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// - `ExpectedClosingParen` if the input ends before the closing `)`.
/// - `TooDeep` at the `(` if too many parentheses are already open.
/// - Propagates any errors from the inner expression.
pub fn parse_grouping(cursor: Cursor<'_>) -> Parsed<'_, Expr> {
    log::trace!("parse_grouping at {}", cursor.position());

    if cursor.peek_token() != Some(Token::LParen) {
        return Err(unexpected(cursor));
    }

    let (expr, cursor) = parse_expression(cursor.enter()?.advance())?;
    let ((), cursor) = expect_closing_paren(cursor)?;

    Ok((expr, cursor.leave()))
}
