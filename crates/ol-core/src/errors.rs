//! Error types for optionlattice.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report. The `ensure!`, `ensure_param!` and `fail!` macros are the
//! short-hand used at validation boundaries.

use thiserror::Error;

/// The top-level error type used throughout optionlattice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A pricing input is outside its admissible domain
    /// (non-positive spot, strike, maturity or volatility, non-finite
    /// rates, or fewer than one lattice step).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Full Greeks were required but the lattice is too shallow to
    /// provide gamma and theta.
    #[error("degenerate greeks: gamma and theta need at least 2 binomial steps, got {steps}")]
    DegenerateGreeks {
        /// The effective number of lattice steps.
        steps: usize,
    },

    /// Precondition violated (solver brackets, distribution parameters).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime failure (e.g. a solver ran out of iterations).
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout optionlattice.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ol_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ol_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ol_core::{ensure_param, errors::Error};
/// fn steps(n: usize) -> ol_core::errors::Result<usize> {
///     ensure_param!(n >= 1, "steps must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(steps(10).is_ok());
/// assert_eq!(
///     steps(0),
///     Err(Error::InvalidParameter("steps must be >= 1, got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure_param {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ol_core::{fail, errors::Error};
/// fn always_err() -> ol_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
