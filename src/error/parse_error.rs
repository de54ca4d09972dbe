use thiserror::Error;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The text of the offending token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an expression was still incomplete.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset where the parenthesis was expected.
        position: usize,
    },
    /// Found input left over after a complete expression.
    #[error("Error at position {position}: Extra input after expression: {token}")]
    UnexpectedTrailingTokens {
        /// The unconsumed remainder of the input.
        token:    String,
        /// Byte offset of the first unconsumed character.
        position: usize,
    },
    /// The expression nests deeper than the parser allows.
    #[error("Error at position {position}: Expression is nested too deeply.")]
    TooDeep {
        /// Byte offset of the operator, parenthesis or function name that
        /// went past the limit.
        position: usize,
    },
    /// A literal value was too large to be represented as a finite number.
    #[error("Error at position {position}: Literal is too large.")]
    LiteralTooLarge {
        /// Byte offset where the literal starts.
        position: usize,
    },
}

impl ParseError {
    /// Gets the byte offset at which parsing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::TooDeep { position }
            | Self::LiteralTooLarge { position } => *position,
        }
    }
}
