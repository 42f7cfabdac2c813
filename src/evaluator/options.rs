use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Default maximum depth of the tree walk.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configuration options for an evaluation.
///
/// These options control resource limits; they never change the numeric
/// result of an evaluation that completes.
///
/// # Example
/// ```
/// use std::sync::{Arc, atomic::AtomicBool};
///
/// use reckon::evaluator::EvalOptions;
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let options = EvalOptions::default().with_max_depth(64)
///                                     .with_cancel_flag(Arc::clone(&cancel));
///
/// assert_eq!(options.max_depth, 64);
/// assert!(!options.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct EvalOptions {
    /// Maximum depth of nested nodes, counting the root as depth 0.
    ///
    /// A tree nested deeper fails with
    /// [`crate::error::EvalError::RecursionLimitExceeded`] instead of
    /// exhausting the stack.
    ///
    /// Default: 1000
    pub max_depth: usize,

    /// Cooperative cancellation flag, checked before every node is visited.
    ///
    /// Default: None
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               cancel:    None, }
    }
}

impl EvalOptions {
    /// Sets the maximum depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the cancellation flag. Storing `true` in it aborts evaluations
    /// that use these options at the next node boundary.
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Returns `true` once the cancellation flag has been raised.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
