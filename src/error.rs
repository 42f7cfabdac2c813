/// Evaluation errors.
///
/// Defines every error the evaluator can raise while walking a tree: unknown
/// identifiers, division by zero, arity mismatches, malformed or unsupported
/// nodes and exhausted resource limits.
pub mod eval_error;
/// Tree loading errors.
///
/// Raised when a parser tree in its serialized interchange form cannot be
/// decoded or does not describe a valid arithmetic tree.
pub mod load_error;

pub use eval_error::{EvalError, EvalResult};
pub use load_error::LoadError;
