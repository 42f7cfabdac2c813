/// Core evaluation logic.
///
/// Contains the [`Evaluator`] itself, the per-node dispatch, token and
/// variable resolution, and the depth and cancellation guards.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic operators, including the associativity
/// correction for `+`/`-` chains and the division-by-zero checks.
pub mod binary;

/// Function call evaluation.
///
/// Resolves the function name, evaluates the arguments and invokes the
/// callable.
pub mod function;

/// Evaluation limits and cancellation.
pub mod options;

pub use self::core::Evaluator;
pub use options::EvalOptions;
