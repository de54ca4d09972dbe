/// Built-in function implementations.
///
/// Contains the standard math functions every new environment starts with.
pub mod builtin;

/// The function registry and call evaluation.
pub mod core;
