//! # optionlattice
//!
//! Recombining binomial and trinomial lattices for vanilla option pricing,
//! with delta, gamma and theta taken from the same backward pass.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `ol-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! optionlattice = "0.1"
//! ```
//!
//! ```rust
//! use optionlattice::core::{ExerciseType, OptionType};
//! use optionlattice::methods::{price_and_greeks, TreeVariant};
//!
//! let r = price_and_greeks(
//!     ExerciseType::European,
//!     OptionType::Call,
//!     100.0, 100.0, 0.5, 0.1, 0.02, 0.125, 200,
//!     TreeVariant::CoxRossRubinstein,
//! )
//! .unwrap();
//! assert!((r.price - 3.865263891560955).abs() < 1e-10);
//! assert!(r.gamma.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and policies.
pub use ol_core as core;

/// Normal and binomial distributions, Brent root finder.
pub use ol_math as math;

/// Lattice geometries, backward induction and in-pass Greeks.
pub use ol_methods as methods;

/// Closed-form Black-Scholes and implied volatility.
pub use ol_pricingengines as pricingengines;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn facade_reaches_every_crate() {
        use crate::core::{ExerciseType, OptionType};
        use crate::methods::{LatticeEngine, ParameterSet};

        let params = ParameterSet::new(
            OptionType::Put,
            ExerciseType::European,
            100.0,
            110.0,
            0.5,
            0.1,
            0.02,
            0.125,
            200,
        );
        let lattice = LatticeEngine::default().price(&params).unwrap();
        let sum = methods::lattice::european_binomial::price(
            OptionType::Put,
            100.0,
            110.0,
            0.5,
            0.1,
            0.02,
            0.125,
            200,
        )
        .unwrap();
        assert_abs_diff_eq!(lattice, sum, epsilon = 1e-9);

        let closed = pricingengines::generalised_black_scholes::price(
            OptionType::Put,
            100.0,
            110.0,
            0.5,
            0.1,
            0.02,
            0.125,
        );
        assert_abs_diff_eq!(lattice, closed, epsilon = 5e-3);
        assert_abs_diff_eq!(math::normal_cdf(0.0), 0.5, epsilon = 1e-15);
    }
}
