//! Recombining lattices for vanilla option pricing.
//!
//! # Overview
//!
//! A valuation flows through five small pieces:
//!
//! 1. [`ParameterSet`] — the inputs, validated per [`ValidationMode`](ol_core::ValidationMode)
//! 2. [`TreeVariant::build`] — up/down factors and probabilities ([`TreeGeometry`])
//! 3. [`payoff::initialize_terminal`] — payoff at every terminal node
//! 4. [`BackwardInduction`] — discounted expectation step by step on a
//!    ping-pong [`NodeBuffer`], with early exercise for American options
//! 5. [`GreekSnapshot`] + [`Greeks::extract`] — delta, gamma and theta from
//!    the nodes at steps 1 and 2 of the same pass, packaged by
//!    [`LatticeResult::assemble`]
//!
//! [`LatticeEngine`] wires them together; [`price_and_greeks`] is the
//! one-call entry point with default settings.
//!
//! ```
//! use ol_core::{ExerciseType, OptionType};
//! use ol_methods::lattice::{price_and_greeks, TreeVariant};
//!
//! let r = price_and_greeks(
//!     ExerciseType::American,
//!     OptionType::Put,
//!     100.0, 100.0, 0.5, 0.1, 0.02, 0.125, 200,
//!     TreeVariant::CoxRossRubinstein,
//! )
//! .unwrap();
//! assert!((r.price - 3.034209281414657).abs() < 1e-10);
//! ```

pub mod engine;
pub mod european_binomial;
pub mod geometry;
pub mod greeks;
pub mod induction;
pub mod parameters;
pub mod payoff;
pub mod result;
pub mod settings;

pub use engine::LatticeEngine;
pub use geometry::{BinomialGeometry, TreeGeometry, TreeVariant, TrinomialGeometry};
pub use greeks::{GreekSnapshot, Greeks, DAYS_PER_YEAR};
pub use induction::{BackwardInduction, NodeBuffer, StepObserver};
pub use parameters::ParameterSet;
pub use result::LatticeResult;
pub use settings::LatticeSettings;

use ol_core::{ExerciseType, OptionType, Rate, Real, Result, Size, Time, Volatility};

/// Price and Greeks of a vanilla option on one lattice pass.
///
/// Uses strict input validation and best-effort Greeks: for a one-step
/// binomial tree gamma and theta are `None`. Leisen-Reimer rounds an even
/// `steps` up to the next odd count.
#[allow(clippy::too_many_arguments)]
pub fn price_and_greeks(
    exercise: ExerciseType,
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    steps: Size,
    variant: TreeVariant,
) -> Result<LatticeResult> {
    let params = ParameterSet::new(
        option_type,
        exercise,
        spot,
        strike,
        maturity,
        rate,
        carry,
        volatility,
        steps,
    );
    LatticeEngine::new(LatticeSettings::default().with_variant(variant)).calculate(&params)
}
