//! # ol-math
//!
//! Mathematical utilities: the normal and binomial distributions (via
//! statrs) and 1-D root finders.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_pdf, BinomialDistribution};
pub use solvers1d::brent;
