use ordered_float::OrderedFloat;

use crate::{
    context::function::{Arity, Function, check_arity},
    error::{EvalError, EvalResult},
    util::num::usize_to_f64_checked,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments. Its arity has already been
/// checked by [`Function::call`].
type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used to seed a context),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the functions loaded into every default context.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"     => { arity: Arity::Exact(1), func: abs },
    "acos"    => { arity: Arity::Exact(1), func: acos },
    "asin"    => { arity: Arity::Exact(1), func: asin },
    "atan"    => { arity: Arity::Exact(1), func: atan },
    "average" => { arity: Arity::AtLeast(1), func: average },
    "avg"     => { arity: Arity::AtLeast(1), func: average },
    "ceil"    => { arity: Arity::Exact(1), func: ceil },
    "cos"     => { arity: Arity::Exact(1), func: cos },
    "count"   => { arity: Arity::VARIADIC, func: count },
    "deg2rad" => { arity: Arity::Exact(1), func: deg2rad },
    "exp"     => { arity: Arity::Exact(1), func: exp },
    "floor"   => { arity: Arity::Exact(1), func: floor },
    "ln"      => { arity: Arity::Exact(1), func: ln },
    "log"     => { arity: Arity::OneOf(&[1, 2]), func: log },
    "log10"   => { arity: Arity::Exact(1), func: log10 },
    "max"     => { arity: Arity::AtLeast(1), func: max },
    "min"     => { arity: Arity::AtLeast(1), func: min },
    "pow"     => { arity: Arity::Exact(2), func: pow },
    "rad2deg" => { arity: Arity::Exact(1), func: rad2deg },
    "sin"     => { arity: Arity::Exact(1), func: sin },
    "sqrt"    => { arity: Arity::Exact(1), func: sqrt },
    "sum"     => { arity: Arity::VARIADIC, func: sum },
    "tan"     => { arity: Arity::Exact(1), func: tan },
}

/// Returns every builtin as a named [`Function`].
pub(crate) fn builtins() -> impl Iterator<Item = (&'static str, Function)> {
    BUILTIN_TABLE.iter()
                 .map(|def| (def.name, Function::new(def.arity, def.func)))
}

/// Applies a unary `f64` method to the single argument.
///
/// The generated functions accept exactly one argument and fail with
/// [`EvalError::ArityMismatch`] otherwise. Trigonometric functions work in
/// radians.
///
/// # Example
/// ```
/// use reckon::context::builtin::sin;
///
/// let r = sin(&[std::f64::consts::PI / 2.0]).unwrap();
/// assert_eq!(r, 1.0);
/// assert!(sin(&[]).is_err());
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $method:ident) => {
        #[doc = concat!("Computes `", stringify!($method), "` of the single argument.")]
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity(stringify!($fname), Arity::Exact(1), args)?;

            Ok(args[0].$method())
        }
    };
}

unary_builtin!(abs, abs);
unary_builtin!(acos, acos);
unary_builtin!(asin, asin);
unary_builtin!(atan, atan);
unary_builtin!(ceil, ceil);
unary_builtin!(cos, cos);
unary_builtin!(deg2rad, to_radians);
unary_builtin!(exp, exp);
unary_builtin!(floor, floor);
unary_builtin!(ln, ln);
unary_builtin!(log10, log10);
unary_builtin!(rad2deg, to_degrees);
unary_builtin!(sin, sin);
unary_builtin!(sqrt, sqrt);
unary_builtin!(tan, tan);

/// Raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use reckon::{context::builtin::pow, error::EvalError};
///
/// assert_eq!(pow(&[2.0, 10.0]), Ok(1024.0));
/// assert!(matches!(pow(&[2.0]), Err(EvalError::ArityMismatch { found: 1, .. })));
/// ```
pub fn pow(args: &[f64]) -> EvalResult<f64> {
    check_arity("pow", Arity::Exact(2), args)?;

    Ok(args[0].powf(args[1]))
}

/// Computes the logarithm of a value, in base 10 unless a base is given.
///
/// `log(value, base) = ln(value) / ln(base)`. Division by zero occurs when
/// `ln(base)` equals zero, i.e. for base 1.
///
/// # Example
/// ```
/// use reckon::context::builtin::log;
///
/// assert_eq!(log(&[1000.0]).unwrap(), 3.0);
/// assert_eq!(log(&[8.0, 2.0]).unwrap(), 3.0);
/// assert!(log(&[8.0, 1.0]).is_err());
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    check_arity("log", Arity::OneOf(&[1, 2]), args)?;

    let Some(&base) = args.get(1) else {
        return Ok(args[0].log10());
    };

    let ln_value = args[0].ln();
    let ln_base = base.ln();

    if ln_base == 0.0 {
        return Err(EvalError::DivisionByZero { numerator: ln_value });
    }

    Ok(ln_value / ln_base)
}

/// Computes the sum of all arguments. The empty sum is `0`.
pub fn sum(args: &[f64]) -> EvalResult<f64> {
    Ok(args.iter().sum())
}

/// Returns the number of arguments.
///
/// # Example
/// ```
/// use reckon::context::builtin::count;
///
/// assert_eq!(count(&[7.0, 7.0, 7.0]).unwrap(), 3.0);
/// assert_eq!(count(&[]).unwrap(), 0.0);
/// ```
pub fn count(args: &[f64]) -> EvalResult<f64> {
    usize_to_f64_checked(args.len()).ok_or_else(|| too_many_arguments(args.len()))
}

/// Computes the arithmetic mean of the arguments.
///
/// # Example
/// ```
/// use reckon::context::builtin::average;
///
/// assert_eq!(average(&[1.0, 2.0, 6.0]).unwrap(), 3.0);
/// assert!(average(&[]).is_err());
/// ```
pub fn average(args: &[f64]) -> EvalResult<f64> {
    check_arity("average", Arity::AtLeast(1), args)?;

    Ok(sum(args)? / count(args)?)
}

/// Computes the minimum or maximum of the arguments.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Values are compared with a total order in which `NaN` is greater
/// than every other value.
///
/// # Example
/// ```
/// use reckon::context::builtin::min_max;
///
/// assert_eq!(min_max("min", &[3.0, -1.5, 7.0]).unwrap(), -1.5);
/// assert_eq!(min_max("max", &[3.0, -1.5, 7.0]).unwrap(), 7.0);
/// assert!(min_max("max", &[]).is_err());
/// ```
pub fn min_max(name: &str, args: &[f64]) -> EvalResult<f64> {
    check_arity(name, Arity::AtLeast(1), args)?;

    let values = args.iter().copied().map(OrderedFloat);

    let result = if name == "min" {
        values.min()
    } else {
        values.max()
    };

    result.map(OrderedFloat::into_inner)
          .ok_or_else(|| EvalError::InvalidArgument { details: format!("{name} of no values") })
}

/// Returns the smallest argument.
pub fn min(args: &[f64]) -> EvalResult<f64> {
    min_max("min", args)
}

/// Returns the largest argument.
pub fn max(args: &[f64]) -> EvalResult<f64> {
    min_max("max", args)
}

fn too_many_arguments(found: usize) -> EvalError {
    EvalError::InvalidArgument { details: format!("{found} arguments cannot be counted exactly") }
}
