use thiserror::Error;

use crate::{ast::NodeKind, context::Arity};

/// Result type used by the evaluator and the symbol context.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while evaluating a tree.
///
/// Every error is detected at the point of use and propagated unchanged to the
/// caller of [`crate::evaluate`]. There is no partial result: an evaluation
/// either yields one number or one of these errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Called a function that is not registered in the context.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Referenced a constant that is neither a host constant nor registered in
    /// the context.
    #[error("Unknown constant '{name}'.")]
    UnknownConstant {
        /// The name of the constant.
        name: String,
    },
    /// Referenced a variable that is not registered in the context.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// The divisor of a division or modulo evaluated to zero.
    #[error("Division by zero (numerator {numerator}).")]
    DivisionByZero {
        /// The value that was about to be divided.
        numerator: f64,
    },
    /// The tree contains a node kind the evaluator does not know.
    #[error("Node kind '{kind}' is not supported.")]
    UnsupportedNodeKind {
        /// The kind as it was spelled by the producer of the tree.
        kind: String,
    },
    /// A node of a known kind does not have the shape its kind requires.
    #[error("Malformed {kind} node: {details}.")]
    MalformedNode {
        /// The kind of the offending node.
        kind:    NodeKind,
        /// What is wrong with the node.
        details: String,
    },
    /// A number token could not be read as a floating-point value.
    #[error("Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The raw token text.
        literal: String,
    },
    /// A function was called with a number of arguments it does not accept.
    #[error("Function '{name}' expects {expected} argument(s), but found {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The accepted argument counts.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A function rejected one of its arguments.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Why the argument was rejected.
        details: String,
    },
    /// The tree is nested deeper than the configured limit.
    #[error("Evaluation exceeded the maximum depth of {max_depth}.")]
    RecursionLimitExceeded {
        /// The configured limit.
        max_depth: usize,
    },
    /// Evaluation was cancelled through the cancellation flag.
    #[error("Evaluation was cancelled.")]
    Cancelled,
}

impl EvalError {
    /// Builds a [`EvalError::MalformedNode`] for `kind`.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::NodeKind, error::EvalError};
    ///
    /// let err = EvalError::malformed(NodeKind::Group, "expected 1 child, found 2");
    /// assert_eq!(err.to_string(), "Malformed group node: expected 1 child, found 2.");
    /// ```
    #[must_use]
    pub fn malformed(kind: NodeKind, details: impl Into<String>) -> Self {
        Self::MalformedNode { kind,
                              details: details.into() }
    }

    /// Returns `true` for errors that describe a broken tree rather than a
    /// problem with the expression itself.
    ///
    /// Contract violations should not occur when the tree comes from a
    /// well-formed parser.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::UnsupportedNodeKind { .. } | Self::MalformedNode { .. })
    }
}
