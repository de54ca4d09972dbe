use std::{collections::HashMap, ops::Index};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::is_valid_identifier},
};

/// The golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// A name-to-number table split into immutable constants and mutable
/// variables.
///
/// A name is defined if either map holds it. When a name is in both maps,
/// lookups return the constant: writing a variable never changes what a
/// constant's name resolves to.
///
/// ```
/// use tally::VariableRegistry;
///
/// let mut vars = VariableRegistry::new();
/// vars.set_variable("pi", 1.0);
///
/// assert_eq!(vars.try_get("pi"), Some(std::f64::consts::PI));
/// ```
#[derive(Debug, Clone)]
pub struct VariableRegistry {
    constants: HashMap<String, f64>,
    variables: HashMap<String, f64>,
}

impl Default for VariableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableRegistry {
    /// Creates a registry with the constants `pi`, `tau`, `e` and `gold` and
    /// no variables.
    #[must_use]
    pub fn new() -> Self {
        let constants = [("pi", std::f64::consts::PI),
                         ("tau", std::f64::consts::TAU),
                         ("e", std::f64::consts::E),
                         ("gold", GOLDEN_RATIO)].into_iter()
                                                .map(|(name, value)| (name.to_string(), value))
                                                .collect();
        Self { constants,
               variables: HashMap::new() }
    }

    /// Creates a registry with no constants and no variables.
    #[must_use]
    pub fn empty() -> Self {
        Self { constants: HashMap::new(),
               variables: HashMap::new(), }
    }

    /// Checks whether `name` is a constant or a variable.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.constants.contains_key(name) || self.variables.contains_key(name)
    }

    /// Checks whether `name` is a constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Adds a named constant.
    ///
    /// # Errors
    /// - `ConstantAlreadyDefined` if a constant with this name exists.
    /// - `InvalidIdentifier` if `name` is not made of letters only.
    pub fn add_constant(&mut self, name: &str, value: f64) -> EvalResult<()> {
        if self.is_constant(name) {
            return Err(RuntimeError::ConstantAlreadyDefined { name: name.to_string() });
        }
        if !is_valid_identifier(name) {
            return Err(RuntimeError::InvalidIdentifier { name: name.to_string() });
        }
        self.constants.insert(name.to_string(), value);
        Ok(())
    }

    /// Inserts or overwrites a variable.
    ///
    /// The constant map is never touched. Setting a variable named like a
    /// constant stores it, but lookups keep returning the constant.
    #[doc(alias = "set")]
    pub fn set_variable(&mut self, name: &str, value: f64) {
        if self.is_constant(name) {
            log::warn!("variable `{name}` is shadowed by the constant of the same name");
        }
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up `name`, constants first.
    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<f64> {
        self.lookup(name).copied()
    }

    /// Looks up `name`, constants first.
    ///
    /// # Errors
    /// `UnknownVariable` if `name` is neither a constant nor a variable.
    pub fn get(&self, name: &str) -> EvalResult<f64> {
        self.try_get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Iterates over the constants in no particular order.
    pub fn constants(&self) -> impl Iterator<Item = (&str, f64)> {
        self.constants.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Iterates over the variables in no particular order, including any
    /// shadowed by a constant.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    fn lookup(&self, name: &str) -> Option<&f64> {
        self.constants.get(name).or_else(|| self.variables.get(name))
    }
}

impl Index<&str> for VariableRegistry {
    type Output = f64;

    /// Reads a constant or variable.
    ///
    /// # Panics
    /// Panics if `name` is not defined. Use [`VariableRegistry::get`] for a
    /// fallible read.
    fn index(&self, name: &str) -> &f64 {
        self.lookup(name)
            .unwrap_or_else(|| panic!("Variable {name} is not defined."))
    }
}
