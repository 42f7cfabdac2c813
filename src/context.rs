use std::{collections::HashMap, fmt, sync::Arc};

use tracing::debug;

use crate::error::{EvalError, EvalResult};

/// The default function library.
///
/// Rounding, trigonometric, logarithmic and aggregate functions loaded into
/// every [`Context::new`].
pub mod builtin;
/// Default and host-environment constants.
pub mod constants;
/// Callable functions and their accepted argument counts.
pub mod function;

pub use function::{Arity, Callable, Function};

/// Supplies the current value of a variable.
///
/// Suppliers are invoked on every read, so a variable may change between
/// evaluations, or even between two reads in one evaluation.
pub type Supplier = Arc<dyn Fn() -> f64 + Send + Sync>;

/// Stores the names an expression can refer to.
///
/// This struct holds three independent tables: functions, constants and
/// variables. Names are case-sensitive and unique within each table.
///
/// ## Usage
///
/// `Context` is created once and reused for any number of evaluations. It is
/// never reset between evaluations; registering a name that already exists
/// replaces the previous binding for all later evaluations.
///
/// A context is `Send + Sync`. Any number of evaluations may read it at the
/// same time, but registering names requires `&mut self`, so no evaluation can
/// observe a half-finished update.
///
/// # Example
/// ```
/// use reckon::context::Context;
///
/// let mut context = Context::new();
/// assert_eq!(context.get_constant("PI").unwrap(), std::f64::consts::PI);
///
/// context.add_constant("TAU", std::f64::consts::TAU);
/// context.add_function("twice", |args| Ok(args.iter().sum::<f64>() * 2.0));
/// context.add_variable("answer", || 42.0);
///
/// assert!(context.has_function("twice"));
/// assert_eq!(context.get_variable("answer").unwrap(), 42.0);
/// ```
#[derive(Clone)]
pub struct Context {
    functions: HashMap<String, Function>,
    constants: HashMap<String, f64>,
    variables: HashMap<String, Supplier>,
}

impl Context {
    /// Creates a context holding the default function library and the
    /// default constants.
    #[must_use]
    pub fn new() -> Self {
        let mut context = Self::empty();

        for (name, function) in builtin::builtins() {
            context.functions.insert(name.to_string(), function);
        }
        for &(name, value) in constants::DEFAULT_CONSTANTS {
            context.constants.insert(name.to_string(), value);
        }

        context
    }

    /// Creates a context with no functions, constants or variables.
    #[must_use]
    pub fn empty() -> Self {
        Self { functions: HashMap::new(),
               constants: HashMap::new(),
               variables: HashMap::new(), }
    }

    /// Looks up a function by name.
    ///
    /// # Errors
    /// [`EvalError::UnknownFunction`] if no function has this name.
    pub fn get_function(&self, name: &str) -> EvalResult<&Function> {
        self.functions
            .get(name)
            .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })
    }

    /// Looks up a constant by name.
    ///
    /// Only the context's own table is consulted; host constants are resolved
    /// by the evaluator.
    ///
    /// # Errors
    /// [`EvalError::UnknownConstant`] if no constant has this name.
    pub fn get_constant(&self, name: &str) -> EvalResult<f64> {
        self.constants
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownConstant { name: name.to_string() })
    }

    /// Reads a variable by invoking its supplier.
    ///
    /// # Errors
    /// [`EvalError::UnknownVariable`] if no variable has this name.
    pub fn get_variable(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .map(|supplier| supplier())
            .ok_or_else(|| EvalError::UnknownVariable { name: name.to_string() })
    }

    /// Registers a function that accepts any number of arguments.
    ///
    /// The callable is responsible for rejecting argument lists it cannot
    /// handle, typically with [`EvalError::InvalidArgument`].
    pub fn add_function<F>(&mut self, name: impl Into<String>, callable: F)
        where F: Fn(&[f64]) -> EvalResult<f64> + Send + Sync + 'static
    {
        self.insert_function(name.into(), Function::variadic(callable));
    }

    /// Registers a function whose argument count is checked before each call.
    ///
    /// # Example
    /// ```
    /// use reckon::context::{Arity, Context};
    ///
    /// let mut context = Context::empty();
    /// context.add_function_with_arity("hypot", Arity::Exact(2), |args| {
    ///            Ok(args[0].hypot(args[1]))
    ///        });
    ///
    /// let hypot = context.get_function("hypot").unwrap();
    /// assert_eq!(hypot.call("hypot", &[3.0, 4.0]), Ok(5.0));
    /// assert!(hypot.call("hypot", &[3.0]).is_err());
    /// ```
    pub fn add_function_with_arity<F>(&mut self, name: impl Into<String>, arity: Arity, callable: F)
        where F: Fn(&[f64]) -> EvalResult<f64> + Send + Sync + 'static
    {
        self.insert_function(name.into(), Function::new(arity, callable));
    }

    /// Registers a constant, replacing any constant of the same name.
    pub fn add_constant(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if self.constants.insert(name.clone(), value).is_some() {
            debug!(%name, value, "overriding constant");
        }
    }

    /// Registers a variable, replacing any variable of the same name.
    pub fn add_variable<F>(&mut self, name: impl Into<String>, supplier: F)
        where F: Fn() -> f64 + Send + Sync + 'static
    {
        let name = name.into();
        if self.variables.insert(name.clone(), Arc::new(supplier)).is_some() {
            debug!(%name, "overriding variable");
        }
    }

    /// Returns `true` if a function with this name is registered.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns `true` if a constant with this name is registered.
    #[must_use]
    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Returns `true` if a variable with this name is registered.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterates over the names of all registered functions, in no particular
    /// order.
    pub fn functions(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Iterates over the names of all registered constants, in no particular
    /// order.
    pub fn constants(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }

    /// Iterates over the names of all registered variables, in no particular
    /// order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    fn insert_function(&mut self, name: String, function: Function) {
        if self.functions.contains_key(&name) {
            debug!(%name, arity = %function.arity(), "overriding function");
        }
        self.functions.insert(name, function);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut variables = self.variables.keys().collect::<Vec<_>>();
        variables.sort();

        f.debug_struct("Context")
         .field("functions", &self.functions.len())
         .field("constants", &self.constants)
         .field("variables", &variables)
         .finish()
    }
}
