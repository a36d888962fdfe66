//! # ol-core
//!
//! Core types, error definitions and pricing policies for optionlattice.
//!
//! This crate provides the building blocks shared across the workspace –
//! type aliases, the error enum with its validation macros, the option and
//! exercise enums, and the validation / Greek policies.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_param!` / `fail!` macros.
pub mod errors;

/// Option type (call/put) and exercise style (European/American).
pub mod option;

/// Validation and Greek policies.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes, indices and step counts.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use option::{ExerciseType, OptionType};
pub use settings::{GreekPolicy, ValidationMode};
