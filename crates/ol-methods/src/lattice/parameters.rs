//! Pricing inputs for one lattice valuation.

use ol_core::{
    ensure_param, errors::Result, ExerciseType, OptionType, Rate, Real, Size, Time,
    ValidationMode, Volatility,
};

use super::TreeVariant;

/// The inputs of a single lattice valuation.
///
/// `carry` is the cost of carry `b`: `r` for a non-dividend stock, `r − q`
/// with a continuous dividend yield `q`, `0` for futures, `r − r_f` for FX.
///
/// A `ParameterSet` is a plain record; nothing is checked until
/// [`validate`](Self::validate) is called (the engine always does so first).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// Call or put.
    pub option_type: OptionType,
    /// European or American.
    pub exercise: ExerciseType,
    /// Spot price of the underlying, `S`.
    pub spot: Real,
    /// Strike, `K`.
    pub strike: Real,
    /// Time to expiry in years, `T`.
    pub maturity: Time,
    /// Continuously compounded risk-free rate, `r`.
    pub rate: Rate,
    /// Cost of carry, `b`.
    pub carry: Rate,
    /// Volatility of the underlying, `v`.
    pub volatility: Volatility,
    /// Requested number of time steps, `n`.
    pub steps: Size,
}

impl ParameterSet {
    /// Collect the inputs of one valuation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        option_type: OptionType,
        exercise: ExerciseType,
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        carry: Rate,
        volatility: Volatility,
        steps: Size,
    ) -> Self {
        Self {
            option_type,
            exercise,
            spot,
            strike,
            maturity,
            rate,
            carry,
            volatility,
            steps,
        }
    }

    /// Same inputs with a different volatility.
    pub fn with_volatility(self, volatility: Volatility) -> Self {
        Self { volatility, ..self }
    }

    /// Same inputs with a different step count.
    pub fn with_steps(self, steps: Size) -> Self {
        Self { steps, ..self }
    }

    /// Same inputs with a different spot.
    pub fn with_spot(self, spot: Real) -> Self {
        Self { spot, ..self }
    }

    /// Same inputs with a different exercise style.
    pub fn with_exercise(self, exercise: ExerciseType) -> Self {
        Self { exercise, ..self }
    }

    /// Same inputs with a different option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// The step count actually used by `variant` (Leisen-Reimer rounds even
    /// counts up to the next odd one). The caller's `steps` is not modified.
    pub fn effective_steps(&self, variant: TreeVariant) -> Size {
        variant.effective_steps(self.steps)
    }

    /// Check the inputs against `mode`.
    ///
    /// A zero step count is rejected in every mode: the lattice has no
    /// time increment without at least one step.
    pub fn validate(&self, mode: ValidationMode) -> Result<()> {
        ensure_param!(self.steps >= 1, "steps must be >= 1, got {}", self.steps);
        if mode == ValidationMode::Permissive {
            return Ok(());
        }
        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ] {
            ensure_param!(
                value.is_finite() && value > 0.0,
                "{name} must be finite and > 0, got {value}"
            );
        }
        ensure_param!(self.rate.is_finite(), "rate must be finite, got {}", self.rate);
        ensure_param!(
            self.carry.is_finite(),
            "carry must be finite, got {}",
            self.carry
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_core::Error;

    fn base() -> ParameterSet {
        ParameterSet::new(
            OptionType::Call,
            ExerciseType::European,
            100.0,
            100.0,
            0.5,
            0.1,
            0.02,
            0.125,
            200,
        )
    }

    #[test]
    fn strict_accepts_reasonable_inputs() {
        assert!(base().validate(ValidationMode::Strict).is_ok());
        // negative rates and carry are fine
        let p = ParameterSet {
            rate: -0.01,
            carry: -0.03,
            ..base()
        };
        assert!(p.validate(ValidationMode::Strict).is_ok());
    }

    #[test]
    fn strict_rejects_non_positive_inputs() {
        for p in [
            base().with_spot(0.0),
            ParameterSet { strike: -1.0, ..base() },
            ParameterSet { maturity: 0.0, ..base() },
            base().with_volatility(0.0),
            base().with_volatility(f64::NAN),
            ParameterSet { rate: f64::INFINITY, ..base() },
            ParameterSet { carry: f64::NAN, ..base() },
        ] {
            assert!(
                matches!(p.validate(ValidationMode::Strict), Err(Error::InvalidParameter(_))),
                "{p:?} should be rejected"
            );
        }
    }

    #[test]
    fn zero_steps_rejected_in_every_mode() {
        let p = base().with_steps(0);
        assert!(p.validate(ValidationMode::Strict).is_err());
        assert!(p.validate(ValidationMode::Permissive).is_err());
    }

    #[test]
    fn permissive_lets_bad_values_through() {
        let p = base().with_volatility(-0.2).with_spot(0.0);
        assert!(p.validate(ValidationMode::Permissive).is_ok());
    }

    #[test]
    fn effective_steps_leaves_input_untouched() {
        let p = base().with_steps(100);
        assert_eq!(p.effective_steps(TreeVariant::LeisenReimer), 101);
        assert_eq!(p.effective_steps(TreeVariant::CoxRossRubinstein), 100);
        assert_eq!(p.steps, 100);
    }
}
