use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{Cursor, Parsed},
            utils::unexpected,
        },
    },
};

/// Parses a signed decimal literal.
///
/// Grammar: `literal := "-"? digits ("." digits?)?`
///
/// The whole part is mandatory. A trailing period without fractional digits is
/// consumed and counts as a zero fraction, so `5.` is `5.0`. No whitespace is
/// allowed between the sign, the digits and the period.
///
/// # Errors
/// - `UnexpectedToken`/`UnexpectedEndOfInput` if no digit run follows the
///   optional sign. The caller's cursor is unaffected.
/// - `LiteralTooLarge` if the digits do not fit in a finite `f64`.
pub fn parse_literal(cursor: Cursor<'_>) -> Parsed<'_, Expr> {
    let position = cursor.position();
    log::trace!("parse_literal at {position}");

    let (negative, cursor) = match cursor.peek_token() {
        Some(Token::Minus) => (true, cursor.advance()),
        _ => (false, cursor),
    };

    let Some(Lexeme { token: Token::Digits,
                      text: whole,
                      .. }) = cursor.peek()
    else {
        return Err(unexpected(cursor));
    };
    let mut cursor = cursor.advance();

    let mut fraction = "";
    if cursor.peek_token() == Some(Token::Period) {
        cursor = cursor.advance();
        if let Some(Lexeme { token: Token::Digits,
                             text, .. }) = cursor.peek()
        {
            fraction = *text;
            cursor = cursor.advance();
        }
    }

    let value = decimal_value(negative, whole, fraction).ok_or(ParseError::LiteralTooLarge { position })?;

    Ok((Expr::Literal { value, position }, cursor))
}

/// Computes `sign × (whole + fraction / 10^len(fraction))`.
///
/// The digits are converted as one decimal string so the result is the
/// correctly rounded `f64`. Returns `None` if the value is not finite.
fn decimal_value(negative: bool, whole: &str, fraction: &str) -> Option<f64> {
    let magnitude: f64 = if fraction.is_empty() {
        whole.parse().ok()?
    } else {
        format!("{whole}.{fraction}").parse().ok()?
    };

    let value = if negative { -magnitude } else { magnitude };
    value.is_finite().then_some(value)
}
