use crate::{ast::Expr, error::ParseError, interpreter::evaluator::core::Environment};

/// One submitted line and what became of it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The raw input line.
    pub input:  String,
    /// The rendered expression tree, or the reason the line did not parse.
    pub parsed: Result<String, ParseError>,
    /// The numeric result; NaN when the line did not parse.
    pub value:  f64,
}

impl HistoryEntry {
    /// Whether the line parsed. A valid line may still evaluate to NaN.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.parsed.is_ok()
    }
}

/// A calculation session: one environment reused across many lines, plus the
/// history of everything submitted to it.
///
/// ```
/// use tally::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.submit("1 + 2 * 3").value, 7.0);
///
/// let entry = session.submit("1 +");
/// assert!(!entry.is_valid());
/// assert!(entry.value.is_nan());
///
/// assert_eq!(session.history().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
    history:     Vec<HistoryEntry>,
}

impl Session {
    /// Starts a session over the default environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(Environment::new())
    }

    /// Starts a session over `environment`, with an empty history.
    #[must_use]
    pub fn with_environment(environment: Environment) -> Self {
        Self { environment,
               history: Vec::new() }
    }

    /// Parses and evaluates `input`, records it in the history and returns
    /// the new entry.
    pub fn submit(&mut self, input: &str) -> &HistoryEntry {
        let entry = match crate::parse(input) {
            Ok(expr) => self.entry_for(input, &expr),
            Err(e) => {
                log::debug!("`{input}` did not parse: {e}");
                HistoryEntry { input:  input.to_string(),
                               parsed: Err(e),
                               value:  f64::NAN, }
            },
        };
        self.history.push(entry);
        &self.history[self.history.len() - 1]
    }

    fn entry_for(&self, input: &str, expr: &Expr) -> HistoryEntry {
        HistoryEntry { input:  input.to_string(),
                       parsed: Ok(expr.to_string()),
                       value:  self.environment.eval(expr), }
    }

    /// The entries submitted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Forgets every submitted line. The environment is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The environment every line is evaluated in.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mutable access to the environment, for defining functions, constants
    /// and variables between lines.
    pub const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }
}
