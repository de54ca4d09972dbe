use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{function::core::FunctionRegistry, variables::VariableRegistry},
};

/// Result type used by the environment's registries.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation environment.
///
/// This struct bundles one function registry and one variable registry. An
/// environment is created once per independent calculation context and
/// reused, so variables persist from one expression to the next.
///
/// ## Usage
///
/// ```
/// use tally::{Environment, parse};
///
/// let mut env = Environment::new();
/// env.functions.define_unary("double", |x| x * 2.0).unwrap();
///
/// let expr = parse("double(pow(2, 3)) + 1").unwrap();
/// assert_eq!(env.eval(&expr), 17.0);
/// ```
///
/// The environment has no internal locking. Share one across threads only
/// behind a lock of the caller's choosing.
#[derive(Debug, Default)]
pub struct Environment {
    /// The functions calls can resolve to.
    pub functions: FunctionRegistry,
    /// Named constants and variables.
    pub variables: VariableRegistry,
}

impl Environment {
    /// Creates an environment seeded with the built-in functions and
    /// constants.
    #[must_use]
    pub fn new() -> Self {
        Self { functions: FunctionRegistry::new(),
               variables: VariableRegistry::new(), }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// Evaluation never fails. Calls to unknown functions, or with the wrong
    /// number of arguments, evaluate to NaN; arithmetic edge cases such as
    /// division by zero follow IEEE-754 and propagate through the tree.
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Literal { value, .. } => *value,
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => self.eval_function_call(name, arguments, *position),
        }
    }

    /// Registers a function; see [`FunctionRegistry::define`].
    ///
    /// # Errors
    /// Fails if `name` is taken or is not a valid identifier.
    pub fn define_function(&mut self,
                           name: &str,
                           arity: usize,
                           func: impl Fn(&[f64]) -> f64 + 'static)
                           -> EvalResult<()> {
        self.functions.define(name, arity, func)
    }

    /// Adds a named constant; see [`VariableRegistry::add_constant`].
    ///
    /// # Errors
    /// Fails if a constant with the same name exists or `name` is not a valid
    /// identifier.
    pub fn add_constant(&mut self, name: &str, value: f64) -> EvalResult<()> {
        self.variables.add_constant(name, value)
    }

    /// Sets a variable; see [`VariableRegistry::set_variable`].
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.set_variable(name, value);
    }
}
