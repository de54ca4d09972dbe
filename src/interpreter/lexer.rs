use logos::Logos;

/// Represents a lexical token class in the source input.
///
/// A token is a run of one or more characters of the same category. Tokens do
/// not carry their text; the parser reads it back through the [`Lexeme`] that
/// wraps each token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A run of decimal digits, such as `42` or `007`.
    #[regex(r"[0-9]+")]
    Digits,
    /// Function names such as `sqrt`. Letters only, case-sensitive.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*` or `×`
    #[token("*")]
    #[token("×")]
    Star,
    /// `/` or `÷`
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `.`
    #[token(".")]
    Period,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    /// Any character that fits no other category.
    Other,
}

/// A token together with the slice of input it was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// The token class.
    pub token:    Token,
    /// The exact input text covered by the token.
    pub text:     &'a str,
    /// Byte offset of the first character of `text` in the input.
    pub position: usize,
}

/// Splits `source` into lexemes, left to right.
///
/// Tokenizing never fails: characters the lexer does not recognize are
/// emitted as [`Token::Other`] and left for the parser to reject.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("123.456");
/// let kinds: Vec<Token> = lexemes.iter().map(|l| l.token).collect();
///
/// assert_eq!(kinds, [Token::Digits, Token::Period, Token::Digits]);
/// assert_eq!(lexemes[2].text, "456");
/// assert_eq!(lexemes[2].position, 4);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
    Token::lexer(source).spanned()
                        .map(|(token, span)| Lexeme { token:    token.unwrap_or(Token::Other),
                                                      text:     &source[span.clone()],
                                                      position: span.start, })
                        .collect()
}
