//! # tally
//!
//! tally is an arithmetic expression parser and evaluator written in Rust.
//! It turns strings such as `"1 + 2 * sqrt(9)"` into a typed syntax tree and
//! reduces that tree to a number against an environment of named functions
//! and variables.
//!
//! Parsing and evaluation fail through separate channels: a malformed input
//! is a [`ParseError`], while an expression that cannot be computed (an
//! unknown function, a wrong argument count) simply evaluates to NaN.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the binary operators. The AST is
/// built by the parser, rendered through `Display`, and reduced to a number
/// by the evaluator.
pub mod ast;
/// Provides the error types for parsing and for the environment registries.
///
/// # Responsibilities
/// - Defines error enums for parse failures and registry misuse.
/// - Attaches byte positions to parse failures.
pub mod error;
/// Orchestrates lexing, parsing, evaluation, and sessions.
///
/// This module ties together the lexer, parser, evaluator and the
/// session type that keeps an environment alive across many inputs.
pub mod interpreter;

pub use crate::{
    ast::{BinaryOperator, Expr},
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Environment, EvalResult},
            function::core::{Function, FunctionRegistry},
            variables::VariableRegistry,
        },
        parser::core::{MAX_DEPTH, MAX_NESTING, ParseResult, parse, parse_partial},
        session::{HistoryEntry, Session},
    },
};

/// Evaluates an expression tree against an environment.
///
/// Always returns a number: failures inside the tree surface as NaN.
///
/// # Examples
/// ```
/// use tally::{Environment, evaluate, parse};
///
/// let env = Environment::new();
///
/// let expr = parse("(1 + 2) * 3").unwrap();
/// assert_eq!(evaluate(&expr, &env), 9.0);
///
/// // `pow` takes two arguments.
/// let expr = parse("pow(2)").unwrap();
/// assert!(evaluate(&expr, &env).is_nan());
/// ```
#[must_use]
pub fn evaluate(expr: &Expr, env: &Environment) -> f64 {
    env.eval(expr)
}

/// Parses and evaluates `source` in one step.
///
/// Any parse failure maps to NaN, the single "invalid expression" state a
/// calculator display shows. Use [`parse`] and [`evaluate`] separately when
/// the failure needs to be told apart from a NaN result.
///
/// # Examples
/// ```
/// use tally::{Environment, calculate};
///
/// let env = Environment::new();
///
/// assert_eq!(calculate("1 + 2 * 3 + 4", &env), 11.0);
/// assert!(calculate("(1", &env).is_nan());
/// ```
#[must_use]
pub fn calculate(source: &str, env: &Environment) -> f64 {
    parse(source).map_or(f64::NAN, |expr| env.eval(&expr))
}
