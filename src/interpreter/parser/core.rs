use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest expression tree the parser will build, counted in nodes from
/// the root to the deepest literal.
pub const MAX_DEPTH: usize = 512;

/// How many parentheses and argument lists may be open at once.
pub const MAX_NESTING: usize = 128;

/// The value produced by a grammar rule together with the cursor positioned
/// just past the input the rule consumed.
pub type Parsed<'a, T> = ParseResult<(T, Cursor<'a>)>;

/// An immutable position in a lexeme stream.
///
/// Grammar rules never mutate a cursor; they return a new one for the input
/// that follows what they matched. A failed rule simply drops its cursor, so
/// the caller's position is untouched.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    lexemes: &'a [Lexeme<'a>],
    index:   usize,
    end:     usize,
    nesting: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `lexemes`. `end` is the byte length of
    /// the input the lexemes were produced from.
    #[must_use]
    pub const fn new(lexemes: &'a [Lexeme<'a>], end: usize) -> Self {
        Self { lexemes,
               index: 0,
               end,
               nesting: 0 }
    }

    /// Returns the lexeme under the cursor, or `None` at the end of input.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Lexeme<'a>> {
        self.lexemes.get(self.index)
    }

    /// Returns the token class under the cursor.
    #[must_use]
    pub fn peek_token(&self) -> Option<Token> {
        self.peek().map(|lexeme| lexeme.token)
    }

    /// Returns a cursor one lexeme further along. Advancing at the end of
    /// input is a no-op.
    #[must_use]
    pub fn advance(self) -> Self {
        Self { index: (self.index + 1).min(self.lexemes.len()),
               ..self }
    }

    /// Returns a cursor past any whitespace under this one.
    #[must_use]
    pub fn skip_whitespace(self) -> Self {
        let mut cursor = self;
        while cursor.peek_token() == Some(Token::Whitespace) {
            cursor = cursor.advance();
        }
        cursor
    }

    /// Byte offset of the lexeme under the cursor, or the input length at the
    /// end of input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.peek().map_or(self.end, |lexeme| lexeme.position)
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.index >= self.lexemes.len()
    }

    /// Opens one more level of parentheses at the current position.
    ///
    /// # Errors
    /// Returns [`ParseError::TooDeep`] at the current position once
    /// [`MAX_NESTING`] levels are already open.
    pub fn enter(self) -> ParseResult<Self> {
        if self.nesting >= MAX_NESTING {
            log::debug!("nesting limit reached at {}", self.position());
            return Err(ParseError::TooDeep { position: self.position() });
        }
        Ok(Self { nesting: self.nesting + 1,
                  ..self })
    }

    /// Closes the level opened by [`Cursor::enter`].
    #[must_use]
    pub const fn leave(self) -> Self {
        Self { nesting: self.nesting.saturating_sub(1),
               ..self }
    }
}

/// Fails with [`ParseError::TooDeep`] at `position` if `depth` is past
/// [`MAX_DEPTH`].
pub(super) fn check_depth(depth: usize, position: usize) -> ParseResult<()> {
    if depth > MAX_DEPTH {
        log::debug!("expression depth {depth} exceeds {MAX_DEPTH} at {position}");
        return Err(ParseError::TooDeep { position });
    }
    Ok(())
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition, and descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression(cursor: Cursor<'_>) -> Parsed<'_, Expr> {
    parse_additive(cursor)
}

/// Parses `input` as one complete expression.
///
/// Surrounding whitespace is ignored. Any other input left over after the
/// expression is an [`ParseError::UnexpectedTrailingTokens`] error.
///
/// Input that would build a tree deeper than [`MAX_DEPTH`], or open more than
/// [`MAX_NESTING`] parentheses at once, is a [`ParseError::TooDeep`] error.
///
/// # Errors
/// Returns a [`ParseError`] naming the byte offset at which `input` stopped
/// matching the grammar.
///
/// # Example
/// ```
/// use tally::{ast::Expr, parse};
///
/// let expr = parse("sqrt(2)").unwrap();
/// assert!(matches!(&expr, Expr::FunctionCall { name, arguments, .. }
///                  if name == "sqrt" && arguments.len() == 1));
///
/// assert!(parse("1 + 2)").is_err());
/// ```
pub fn parse(input: &str) -> ParseResult<Expr> {
    let lexemes = tokenize(input);
    let (expr, rest) = parse_expression(Cursor::new(&lexemes, input.len()))?;
    let rest = rest.skip_whitespace();

    if rest.is_at_end() {
        Ok(expr)
    } else {
        let position = rest.position();
        log::trace!("rejecting trailing input at {position}");
        Err(ParseError::UnexpectedTrailingTokens { token: input[position..].to_string(),
                                                   position })
    }
}

/// Parses the longest expression at the start of `input`.
///
/// Unlike [`parse`], leftover input is not an error: it is returned alongside
/// the expression, starting at the first character the grammar did not
/// consume. Whitespace directly after the expression is not consumed.
///
/// # Errors
/// Returns a [`ParseError`] if no expression can be parsed from the start of
/// `input`, or if an operator is not followed by a valid operand.
///
/// # Example
/// ```
/// use tally::parse_partial;
///
/// let (expr, rest) = parse_partial("1 + 2 = 3").unwrap();
///
/// assert_eq!(expr.to_string(), "1 + 2");
/// assert_eq!(rest, " = 3");
/// ```
pub fn parse_partial(input: &str) -> ParseResult<(Expr, &str)> {
    let lexemes = tokenize(input);
    let (expr, rest) = parse_expression(Cursor::new(&lexemes, input.len()))?;
    Ok((expr, &input[rest.position()..]))
}
