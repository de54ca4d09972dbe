/// Binary operator evaluation logic.
///
/// Applies the four arithmetic operators with plain IEEE-754 semantics.
pub mod binary;

/// Core evaluation logic and environment management.
///
/// Contains the evaluation environment and the main evaluation entry point.
pub mod core;

/// Function registry and function call evaluation.
///
/// Handles built-in and runtime-registered functions, arity checking, and the
/// not-a-number soft failure for unresolvable calls.
pub mod function;

/// Utility functions for evaluation.
pub mod utils;

/// Variable and constant registry.
///
/// Stores named constants and mutable variables for an environment.
pub mod variables;
