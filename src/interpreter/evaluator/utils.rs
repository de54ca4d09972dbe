/// Checks whether `name` could appear as an identifier in an expression.
///
/// Identifiers are one or more ASCII letters; digits, underscores and other
/// symbols are not allowed.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}
