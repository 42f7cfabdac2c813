use std::f64::consts;

/// `sqrt(π)`.
const SQRT_PI: f64 = 1.772_453_850_905_515_9;
/// `sqrt(3)`.
const SQRT_3: f64 = 1.732_050_807_568_877_2;
/// `ln(π)`.
const LN_PI: f64 = 1.144_729_885_849_400_2;
/// The Euler-Mascheroni constant.
const EULER: f64 = 0.577_215_664_901_532_9;

/// Constants loaded into every [`crate::context::Context::new`].
///
/// These live in the context and can be overridden per context.
pub const DEFAULT_CONSTANTS: &[(&str, f64)] = &[("PI", consts::PI),
                                                ("π", consts::PI),
                                                ("PI_2", consts::FRAC_PI_2),
                                                ("PI_4", consts::FRAC_PI_4),
                                                ("E", consts::E),
                                                ("SQRT_PI", SQRT_PI),
                                                ("SQRT_2", consts::SQRT_2),
                                                ("SQRT_3", SQRT_3),
                                                ("LN_PI", LN_PI)];

/// Constants provided by the host environment.
///
/// These are the `<math.h>` constants and the IEEE `INF`/`NAN` values. They
/// are resolved before the context is consulted and cannot be overridden.
/// Any other name, including `MAX` or `EPSILON`, is left to the context.
pub const HOST_CONSTANTS: &[(&str, f64)] = &[("M_PI", consts::PI),
                                             ("M_E", consts::E),
                                             ("M_LOG2E", consts::LOG2_E),
                                             ("M_LOG10E", consts::LOG10_E),
                                             ("M_LN2", consts::LN_2),
                                             ("M_LN10", consts::LN_10),
                                             ("M_PI_2", consts::FRAC_PI_2),
                                             ("M_PI_4", consts::FRAC_PI_4),
                                             ("M_1_PI", consts::FRAC_1_PI),
                                             ("M_2_PI", consts::FRAC_2_PI),
                                             ("M_SQRTPI", SQRT_PI),
                                             ("M_2_SQRTPI", consts::FRAC_2_SQRT_PI),
                                             ("M_SQRT2", consts::SQRT_2),
                                             ("M_SQRT3", SQRT_3),
                                             ("M_SQRT1_2", consts::FRAC_1_SQRT_2),
                                             ("M_LNPI", LN_PI),
                                             ("M_EULER", EULER),
                                             ("INF", f64::INFINITY),
                                             ("NAN", f64::NAN)];

/// Looks up a host constant by name.
///
/// # Example
/// ```
/// use reckon::context::constants::host_constant;
///
/// assert_eq!(host_constant("M_PI"), Some(std::f64::consts::PI));
/// assert_eq!(host_constant("PI"), None);
/// ```
#[must_use]
pub fn host_constant(name: &str) -> Option<f64> {
    HOST_CONSTANTS.iter()
                  .find(|(host, _)| *host == name)
                  .map(|&(_, value)| value)
}
