use std::{fmt, sync::Arc};

use crate::error::{EvalError, EvalResult};

/// The callable behind a registered function.
///
/// A callable receives the evaluated arguments in order and returns one
/// number, or an error describing why it could not.
pub type Callable = Arc<dyn Fn(&[f64]) -> EvalResult<f64> + Send + Sync>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the function accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    /// Any number of arguments, including none.
    pub const VARIADIC: Self = Self::AtLeast(0);

    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use reckon::context::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2));
    /// assert!(Arity::OneOf(&[1, 2]).check(1));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(arr) => {
                let counts = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Checks that `args` satisfies `arity`.
///
/// `name` is only used for error reporting.
///
/// # Errors
/// [`EvalError::ArityMismatch`] if the argument count is not accepted.
pub(crate) fn check_arity(name: &str, arity: Arity, args: &[f64]) -> EvalResult<()> {
    if arity.check(args.len()) {
        Ok(())
    } else {
        Err(EvalError::ArityMismatch { name:     name.to_string(),
                                       expected: arity,
                                       found:    args.len(), })
    }
}

/// A function that can be called from an expression.
///
/// Pairs a [`Callable`] with the [`Arity`] it accepts. The arity is checked
/// before the callable runs, so callables may index into their argument slice
/// without bounds checks of their own.
#[derive(Clone)]
pub struct Function {
    arity:    Arity,
    callable: Callable,
}

impl Function {
    /// Creates a function accepting `arity` arguments.
    pub fn new<F>(arity: Arity, callable: F) -> Self
        where F: Fn(&[f64]) -> EvalResult<f64> + Send + Sync + 'static
    {
        Self { arity,
               callable: Arc::new(callable) }
    }

    /// Creates a function that accepts any number of arguments and validates
    /// them itself.
    pub fn variadic<F>(callable: F) -> Self
        where F: Fn(&[f64]) -> EvalResult<f64> + Send + Sync + 'static
    {
        Self::new(Arity::VARIADIC, callable)
    }

    /// The accepted argument counts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Calls the function after checking the argument count.
    ///
    /// `name` is only used for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     context::{Arity, Function},
    ///     error::EvalError,
    /// };
    ///
    /// let double = Function::new(Arity::Exact(1), |args| Ok(args[0] * 2.0));
    /// assert_eq!(double.call("double", &[21.0]), Ok(42.0));
    /// assert!(matches!(double.call("double", &[1.0, 2.0]),
    ///                  Err(EvalError::ArityMismatch { found: 2, .. })));
    /// ```
    pub fn call(&self, name: &str, args: &[f64]) -> EvalResult<f64> {
        check_arity(name, self.arity, args)?;
        (self.callable)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}
