/// Numeric conversion helpers.
///
/// Reading number literals from token text and converting argument counts to
/// `f64` without silent precision loss.
pub mod num;
/// Stack growth for the recursive tree walks.
pub(crate) mod stack;
