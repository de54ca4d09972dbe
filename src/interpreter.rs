/// The evaluator module reduces AST nodes to numbers.
///
/// The evaluator traverses the AST against an environment of functions and
/// variables and produces a single `f64`.
///
/// # Responsibilities
/// - Evaluates AST nodes with IEEE-754 arithmetic.
/// - Holds the function and variable registries.
/// - Turns unresolvable function calls into NaN rather than errors.
pub mod evaluator;
/// The lexer module classifies input characters into tokens.
///
/// The lexer reads the raw input and produces a stream of lexemes such as
/// digit runs, identifiers, operators and whitespace, each with its position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from lexemes.
///
/// # Responsibilities
/// - Converts lexemes into structured AST nodes.
/// - Encodes operator precedence and left associativity.
/// - Reports the position at which the input stopped matching the grammar.
pub mod parser;
/// Calculation sessions with input history.
pub mod session;
