/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns one
/// number.
type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used to seed new registries),
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
        pub(crate) struct BuiltinDef {
            pub(crate) name:  &'static str,
            pub(crate) arity: usize,
            pub(crate) func:  BuiltinFn,
        }
        pub(crate) static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "pow"   => { arity: 2, func: pow },
    "sqrt"  => { arity: 1, func: sqrt },
    "root"  => { arity: 2, func: root },
    "sin"   => { arity: 1, func: sin },
    "cos"   => { arity: 1, func: cos },
    "tan"   => { arity: 1, func: tan },
    "asin"  => { arity: 1, func: asin },
    "acos"  => { arity: 1, func: acos },
    "atan"  => { arity: 1, func: atan },
    "min"   => { arity: 2, func: min },
    "max"   => { arity: 2, func: max },
    "floor" => { arity: 1, func: floor },
    "ceil"  => { arity: 1, func: ceil },
}

/// Generates one-argument builtins that forward to the `f64` method of the
/// same name.
///
/// Any slice that does not hold exactly one number yields NaN.
///
/// # Example
/// ```
/// use tally::interpreter::evaluator::function::builtin::{sin, sqrt};
///
/// assert_eq!(sqrt(&[9.0]), 3.0);
/// assert_eq!(sin(&[0.0]), 0.0);
/// assert!(sqrt(&[1.0, 2.0]).is_nan());
/// ```
macro_rules! real_builtin {
    ($($fname:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $fname(args: &[f64]) -> f64 {
                match args {
                    [x] => x.$fname(),
                    _ => f64::NAN,
                }
            }
        )*
    };
}

real_builtin!(sqrt, sin, cos, tan, asin, acos, atan, floor, ceil);

/// Raises `args[0]` to the power `args[1]`.
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    match args {
        [base, exponent] => base.powf(*exponent),
        _ => f64::NAN,
    }
}

/// Computes the n-th root: `root(x, n) = x^(1 / n)`.
///
/// A negative radicand has a real root when the degree is an odd integer, so
/// `root(-8, 3)` is `-2`. Other negative radicands give NaN.
///
/// # Example
/// ```
/// use tally::interpreter::evaluator::function::builtin::root;
///
/// assert!((root(&[16.0, 4.0]) - 2.0).abs() < 1e-12);
/// assert!((root(&[-8.0, 3.0]) + 2.0).abs() < 1e-12);
/// assert!(root(&[-16.0, 4.0]).is_nan());
/// ```
#[must_use]
pub fn root(args: &[f64]) -> f64 {
    match args {
        [value, degree] if *value < 0.0 && is_odd_integer(*degree) => -(-value).powf(degree.recip()),
        [value, degree] => value.powf(degree.recip()),
        _ => f64::NAN,
    }
}

/// Returns the smaller of two numbers.
#[must_use]
pub fn min(args: &[f64]) -> f64 {
    match args {
        [left, right] => left.min(*right),
        _ => f64::NAN,
    }
}

/// Returns the larger of two numbers.
#[must_use]
pub fn max(args: &[f64]) -> f64 {
    match args {
        [left, right] => left.max(*right),
        _ => f64::NAN,
    }
}

fn is_odd_integer(x: f64) -> bool {
    x.fract() == 0.0 && x.rem_euclid(2.0) == 1.0
}
