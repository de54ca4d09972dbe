/// Parsing errors.
///
/// Defines all error types that can occur while turning an input string into
/// an expression tree. Every parse error carries the byte offset at which the
/// input stopped matching the grammar.
pub mod parse_error;
/// Environment errors.
///
/// Contains the error types raised by the function and variable registries:
/// duplicate definitions, invalid names, and reads of undefined variables.
/// Evaluation itself never fails; see [`crate::evaluate`].
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
