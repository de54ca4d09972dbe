use thiserror::Error;

/// Represents all errors raised by the evaluation environment's registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Read a variable or constant that was never defined.
    #[error("Variable {name} is not defined.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted to define a function that already exists.
    #[error("Function {name} is already defined.")]
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
    },
    /// Attempted to add a constant that already exists.
    #[error("Constant {name} is already defined.")]
    ConstantAlreadyDefined {
        /// The name of the constant.
        name: String,
    },
    /// A name that the grammar could never refer to.
    #[error("'{name}' is not a valid identifier. Names must consist of letters only.")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },
}
