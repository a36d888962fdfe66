//! Closed-form CRR price of a European option.
//!
//! The European lattice value has no early-exercise decisions, so it equals
//! the discounted expectation of the terminal payoff under the binomial
//! distribution of up-moves:
//!
//! `V = e^{−rT} Σⱼ C(n,j) pʲ (1−p)^{n−j} · payoff(S uʲ d^{n−j})`
//!
//! Only terminal nodes in the money contribute, so the sum starts (calls) or
//! stops (puts) at the first up-move count `A` that ends above the strike.

use ol_core::{
    ensure_param, errors::Result, ExerciseType, OptionType, Price, Rate, Real, Size, Time,
    ValidationMode, Volatility,
};
use ol_math::BinomialDistribution;

use super::{BinomialGeometry, ParameterSet};

/// CRR European price as a binomial sum over the `n + 1` terminal nodes.
///
/// Agrees with the European [`TreeVariant::CoxRossRubinstein`](super::TreeVariant)
/// lattice to rounding. Fails with `InvalidParameter` on out-of-domain inputs
/// or when the CRR probability leaves `[0, 1]`.
#[allow(clippy::too_many_arguments)]
pub fn price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
    steps: Size,
) -> Result<Price> {
    let params = ParameterSet::new(
        option_type,
        ExerciseType::European,
        spot,
        strike,
        maturity,
        rate,
        carry,
        volatility,
        steps,
    );
    params.validate(ValidationMode::Strict)?;

    let g = BinomialGeometry::cox_ross_rubinstein(&params);
    ensure_param!(g.p.is_finite(), "CRR probability is not finite for these inputs");
    let weights = BinomialDistribution::new(g.p, steps as u64)?;

    let n = steps;
    let lowest = spot * g.down.powf(n as Real);
    let threshold = ((strike / lowest).ln() / (g.up / g.down).ln()).floor();
    let first_in_the_money = (threshold + 1.0).clamp(0.0, n as Real + 1.0) as Size;

    let node = |j: Size| spot * g.up.powf(j as Real) * g.down.powf((n - j) as Real);
    let sum: Real = match option_type {
        OptionType::Call => (first_in_the_money..=n)
            .map(|j| weights.pmf(j as u64) * (node(j) - strike))
            .sum(),
        OptionType::Put => (0..first_in_the_money)
            .map(|j| weights.pmf(j as u64) * (strike - node(j)))
            .sum(),
    };

    Ok((-rate * maturity).exp() * sum)
}
