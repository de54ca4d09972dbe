use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of three variants. Every node exclusively owns its
/// children, so a tree is dropped by plain recursive destruction; the parser
/// never builds a tree deeper than [`MAX_DEPTH`]. Each variant
/// also records a byte offset into the parsed input, used for diagnostics
/// only; it takes no part in evaluation or rendering.
///
/// Rendering goes through [`fmt::Display`]: literals print their default
/// decimal text, binary operations print `"<left> <glyph> <right>"` with the
/// glyphs `+ - × ÷`, and calls print `"<name>(<arg0>, <arg1>, …)"`.
///
/// [`MAX_DEPTH`]: crate::interpreter::parser::core::MAX_DEPTH
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A finite numeric literal.
    Literal {
        /// The literal's value.
        value:    f64,
        /// Byte offset where the literal starts.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Function call expression (e.g. `sqrt(2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Byte offset where the function name starts.
        position:  usize,
    },
}

impl Expr {
    /// Builds a literal node that does not originate from parsed input.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value,
                        position: 0 }
    }

    /// Builds a binary operation node that does not originate from parsed
    /// input.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position: 0 }
    }

    /// Builds a function call node that does not originate from parsed input.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::FunctionCall { name: name.into(),
                             arguments,
                             position: 0 }
    }

    /// Gets the byte offset recorded in `self`.
    /// ## Example
    /// ```
    /// use tally::parse;
    ///
    /// let expr = parse("1 + 2").unwrap();
    ///
    /// // Binary operations record the position of their operator.
    /// assert_eq!(expr.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Counts the nodes on the longest path from `self` to a leaf. A literal
    /// has depth 1.
    ///
    /// Walks the tree with an explicit stack, so it is safe on trees of any
    /// depth.
    /// ## Example
    /// ```
    /// use tally::parse;
    ///
    /// assert_eq!(parse("1 + 2 * 3").unwrap().depth(), 3);
    /// assert_eq!(parse("max(1, sqrt(4))").unwrap().depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((expr, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match expr {
                Self::Literal { .. } => {},
                Self::BinaryOp { left, right, .. } => {
                    pending.push((&**left, depth + 1));
                    pending.push((&**right, depth + 1));
                },
                Self::FunctionCall { arguments, .. } => {
                    pending.extend(arguments.iter().map(|argument| (argument, depth + 1)));
                },
            }
        }
        deepest
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "{left} {op} {right}"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*` or `×`)
    Mul,
    /// Division (`/` or `÷`)
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        };
        write!(f, "{glyph}")
    }
}
