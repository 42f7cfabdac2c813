use thiserror::Error;

use crate::error::EvalError;

/// Errors raised while loading a parser tree from its JSON interchange form.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input is not valid JSON or does not match the node layout.
    #[error("Invalid tree document: {0}")]
    Json(#[from] serde_json::Error),
    /// The document decoded, but describes a tree the evaluator rejects.
    #[error("Invalid tree: {0}")]
    Tree(#[from] EvalError),
}
