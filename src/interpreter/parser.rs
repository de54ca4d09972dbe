/// Core parsing types and entry points.
///
/// Declares the input cursor every grammar rule threads through, the result
/// aliases, and the `parse`/`parse_partial` entry points.
pub mod core;

/// Additive and multiplicative expression parsing.
///
/// Both precedence levels are left-folded chains of operands joined by
/// operators of equal binding strength.
pub mod binary;

/// Term parsing: function calls and parenthesized expressions.
pub mod term;

/// Signed decimal literal parsing.
pub mod literal;

/// Shared parser helpers.
pub mod utils;
