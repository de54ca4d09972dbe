use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Cursor, Parsed},
    },
};

/// Builds the error for a cursor that holds no acceptable lexeme.
///
/// At the end of input this is [`ParseError::UnexpectedEndOfInput`];
/// otherwise the lexeme under the cursor is reported as an unexpected token.
pub(in crate::interpreter::parser) fn unexpected(cursor: Cursor<'_>) -> ParseError {
    match cursor.peek() {
        Some(lexeme) => ParseError::UnexpectedToken { token:    lexeme.text.to_string(),
                                                      position: lexeme.position, },
        None => ParseError::UnexpectedEndOfInput { position: cursor.position() },
    }
}

/// Consumes a closing parenthesis, skipping whitespace before it.
///
/// # Errors
/// - `ExpectedClosingParen` if the input ends before the parenthesis.
/// - `UnexpectedToken` if anything else stands where `)` belongs.
pub(in crate::interpreter::parser) fn expect_closing_paren(cursor: Cursor<'_>) -> Parsed<'_, ()> {
    let cursor = cursor.skip_whitespace();
    match cursor.peek_token() {
        Some(Token::RParen) => Ok(((), cursor.advance())),
        Some(_) => Err(unexpected(cursor)),
        None => Err(ParseError::ExpectedClosingParen { position: cursor.position() }),
    }
}

/// Parses a comma-separated list of items up to a closing parenthesis.
///
/// The cursor must be positioned just after the opening `(`. An immediately
/// encountered `)` produces an empty list. Whitespace around items and commas
/// is skipped.
///
/// Grammar (simplified): `list := (item ("," item)*)? ")"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token follows an item,
/// - the input ends before the closing parenthesis.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, T>(
    cursor: Cursor<'a>,
    parse_item: impl Fn(Cursor<'a>) -> Parsed<'a, T>)
    -> Parsed<'a, Vec<T>> {
    let mut items = Vec::new();
    let mut cursor = cursor.skip_whitespace();

    if cursor.peek_token() == Some(Token::RParen) {
        return Ok((items, cursor.advance()));
    }

    loop {
        let (item, rest) = parse_item(cursor)?;
        items.push(item);

        let rest = rest.skip_whitespace();
        match rest.peek_token() {
            Some(Token::Comma) => cursor = rest.advance(),
            Some(Token::RParen) => return Ok((items, rest.advance())),
            Some(_) => return Err(unexpected(rest)),
            None => return Err(ParseError::ExpectedClosingParen { position: rest.position() }),
        }
    }
}
