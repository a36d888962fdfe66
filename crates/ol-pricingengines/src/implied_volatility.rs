//! Implied volatility by Brent's method.
//!
//! Both solvers search `v ∈ [0.005, 4.0]`. A target price that the bracket
//! cannot reproduce is a `Precondition` error; running out of iterations is a
//! `Runtime` error.

use ol_core::{
    ensure, ensure_param, errors::Result, ExerciseType, OptionType, Price, Rate, Real, Size, Time,
    ValidationMode, Volatility,
};
use ol_math::brent;
use ol_methods::lattice::{BackwardInduction, NodeBuffer, ParameterSet, TreeVariant};
use tracing::debug;

use crate::generalised_black_scholes;

/// Lowest volatility searched.
pub const MIN_VOLATILITY: Volatility = 0.005;
/// Highest volatility searched.
pub const MAX_VOLATILITY: Volatility = 4.0;
/// Default absolute accuracy on the volatility.
pub const DEFAULT_ACCURACY: Real = 1.0e-8;

fn solve<F>(target: Price, accuracy: Real, price_at: F) -> Result<Volatility>
where
    F: Fn(Volatility) -> Price,
{
    ensure_param!(target.is_finite(), "target price must be finite, got {target}");
    let low = price_at(MIN_VOLATILITY);
    let high = price_at(MAX_VOLATILITY);
    ensure!(
        (low.min(high)..=low.max(high)).contains(&target),
        "target price {target} is outside [{low}, {high}], the range spanned by \
         volatilities in [{MIN_VOLATILITY}, {MAX_VOLATILITY}]"
    );
    brent(|v| price_at(v) - target, MIN_VOLATILITY, MAX_VOLATILITY, accuracy)
}

/// Volatility at which the `variant` lattice prices `params` at `target`.
///
/// `params.volatility` is ignored. A non-positive `accuracy` uses the
/// solver default.
pub fn lattice(
    target: Price,
    params: &ParameterSet,
    variant: TreeVariant,
    accuracy: Real,
) -> Result<Volatility> {
    params
        .with_volatility(MIN_VOLATILITY)
        .validate(ValidationMode::Strict)?;

    let price_at = |v: Volatility| {
        let p = params.with_volatility(v);
        let geometry = variant.build(&p);
        let mut buffer = NodeBuffer::new(geometry.buffer_len());
        BackwardInduction::new(&p, &geometry).run(&mut buffer, &mut |_: Size, _: &[Real]| {})
    };
    let volatility = solve(target, accuracy, price_at)?;
    debug!(
        ?variant,
        steps = params.steps,
        exercise = %params.exercise,
        target,
        volatility,
        "lattice implied volatility"
    );
    Ok(volatility)
}

/// Volatility at which the generalised Black-Scholes formula gives `target`.
#[allow(clippy::too_many_arguments)]
pub fn black_scholes(
    target: Price,
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    carry: Rate,
    accuracy: Real,
) -> Result<Volatility> {
    ParameterSet::new(
        option_type,
        ExerciseType::European,
        spot,
        strike,
        maturity,
        rate,
        carry,
        MIN_VOLATILITY,
        1,
    )
    .validate(ValidationMode::Strict)?;

    let volatility = solve(target, accuracy, |v| {
        generalised_black_scholes::price(option_type, spot, strike, maturity, rate, carry, v)
    })?;
    debug!(%option_type, target, volatility, "black-scholes implied volatility");
    Ok(volatility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_core::Error;

    #[test]
    fn black_scholes_round_trip() {
        let p =
            generalised_black_scholes::price(OptionType::Put, 95.0, 100.0, 1.0, 0.04, 0.01, 0.37);
        let v = black_scholes(p, OptionType::Put, 95.0, 100.0, 1.0, 0.04, 0.01, DEFAULT_ACCURACY)
            .unwrap();
        assert!((v - 0.37).abs() < 1e-7, "v = {v}");
    }

    #[test]
    fn price_above_bracket_is_a_precondition_error() {
        let err = black_scholes(200.0, OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.05, 1e-8)
            .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let err = black_scholes(5.0, OptionType::Call, -100.0, 100.0, 1.0, 0.05, 0.05, 1e-8)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        let err = black_scholes(Real::NAN, OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.05, 1e-8)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
