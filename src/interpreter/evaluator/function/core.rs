use std::{collections::HashMap, fmt};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Environment, EvalResult},
        function::builtin::BUILTIN_TABLE,
        utils::is_valid_identifier,
    },
};

/// The calling convention shared by every registered function.
///
/// The slice always holds exactly as many numbers as the function's arity.
pub type Callable = Box<dyn Fn(&[f64]) -> f64>;

/// A registry entry: a callable together with its fixed arity.
pub struct Function {
    arity: usize,
    func:  Callable,
}

impl Function {
    /// The number of arguments the function expects.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Calls the function.
    ///
    /// Returns NaN if `args` does not hold exactly [`Self::arity`] numbers.
    #[must_use]
    pub fn call(&self, args: &[f64]) -> f64 {
        if args.len() == self.arity {
            (self.func)(args)
        } else {
            f64::NAN
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// A name-to-function table.
///
/// Names are unique. [`FunctionRegistry::new`] seeds the table with the
/// built-in functions listed in [`BUILTIN_FUNCTIONS`]; more can be added at
/// runtime.
///
/// [`BUILTIN_FUNCTIONS`]: crate::interpreter::evaluator::function::builtin::BUILTIN_FUNCTIONS
#[derive(Debug)]
pub struct FunctionRegistry {
    functions: HashMap<String, Function>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    /// Creates a registry holding the built-in functions.
    #[must_use]
    pub fn new() -> Self {
        let functions = BUILTIN_TABLE.iter()
                                     .map(|builtin| {
                                         (builtin.name.to_string(),
                                          Function { arity: builtin.arity,
                                                     func:  Box::new(builtin.func), })
                                     })
                                     .collect();
        Self { functions }
    }

    /// Creates a registry with no functions at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { functions: HashMap::new() }
    }

    /// Looks up a function by name. Absence is not an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Checks whether a function named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns the registered names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registers a function taking `arity` arguments.
    ///
    /// `func` receives a slice of exactly `arity` numbers.
    ///
    /// # Errors
    /// - `FunctionAlreadyDefined` if `name` is already registered.
    /// - `InvalidIdentifier` if `name` is not made of letters only, since no
    ///   expression could call it.
    ///
    /// # Example
    /// ```
    /// use tally::{Environment, RuntimeError, calculate};
    ///
    /// let mut env = Environment::new();
    /// env.functions.define("sum", 3, |args| args.iter().sum()).unwrap();
    ///
    /// assert_eq!(calculate("sum(1, 2, 3)", &env), 6.0);
    /// assert!(matches!(env.functions.define("sum", 2, |_| 0.0),
    ///                  Err(RuntimeError::FunctionAlreadyDefined { .. })));
    /// ```
    pub fn define(&mut self,
                  name: &str,
                  arity: usize,
                  func: impl Fn(&[f64]) -> f64 + 'static)
                  -> EvalResult<()> {
        validate_function_name(self, name)?;
        log::debug!("defining function `{name}` with arity {arity}");
        self.functions.insert(name.to_string(),
                              Function { arity,
                                         func: Box::new(func) });
        Ok(())
    }

    /// Registers a one-argument function.
    ///
    /// # Errors
    /// Same as [`Self::define`].
    pub fn define_unary(&mut self, name: &str, func: impl Fn(f64) -> f64 + 'static) -> EvalResult<()> {
        self.define(name, 1, move |args| func(args[0]))
    }

    /// Registers a two-argument function.
    ///
    /// # Errors
    /// Same as [`Self::define`].
    pub fn define_binary(&mut self,
                         name: &str,
                         func: impl Fn(f64, f64) -> f64 + 'static)
                         -> EvalResult<()> {
        self.define(name, 2, move |args| func(args[0], args[1]))
    }
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The function is looked up by name and its arity compared with the
    /// number of supplied arguments before any argument is evaluated. An
    /// unknown name and a wrong argument count both produce NaN. Otherwise the
    /// arguments are evaluated left to right and passed to the function.
    pub(crate) fn eval_function_call(&self, name: &str, arguments: &[Expr], position: usize) -> f64 {
        let Some(function) = self.functions.get(name) else {
            log::debug!("unknown function `{name}` at {position}; evaluating to NaN");
            return f64::NAN;
        };

        if function.arity() != arguments.len() {
            log::debug!("`{name}` at {position} expects {} argument(s), got {}; evaluating to NaN",
                        function.arity(),
                        arguments.len());
            return f64::NAN;
        }

        let values: Vec<f64> = arguments.iter().map(|argument| self.eval(argument)).collect();
        function.call(&values)
    }
}

/// Ensures that a new function name is valid.
///
/// A function name is rejected if:
/// - a function with the same name already exists in the registry, or
/// - the name is not an identifier the parser can produce.
pub fn validate_function_name(registry: &FunctionRegistry, name: &str) -> EvalResult<()> {
    if registry.contains(name) {
        return Err(RuntimeError::FunctionAlreadyDefined { name: name.to_string() });
    }
    if !is_valid_identifier(name) {
        return Err(RuntimeError::InvalidIdentifier { name: name.to_string() });
    }
    Ok(())
}
