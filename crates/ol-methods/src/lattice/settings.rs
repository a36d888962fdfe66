//! Engine configuration.

use ol_core::{
    ExerciseType, GreekPolicy, OptionType, Rate, Real, Size, Time, ValidationMode, Volatility,
};

use super::{ParameterSet, TreeVariant};

/// Default number of lattice steps.
pub const DEFAULT_STEPS: Size = 200;

/// Configuration of a [`LatticeEngine`](super::LatticeEngine).
///
/// `steps` is the step count used when the engine builds a
/// [`ParameterSet`] itself ([`parameters`](Self::parameters)); a caller-built
/// `ParameterSet` carries its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LatticeSettings {
    /// Tree construction.
    pub variant: TreeVariant,
    /// Default number of steps.
    pub steps: Size,
    /// Input validation applied before every valuation.
    pub validation: ValidationMode,
    /// What to do when gamma and theta are unavailable.
    pub greeks: GreekPolicy,
}

impl Default for LatticeSettings {
    fn default() -> Self {
        Self {
            variant: TreeVariant::default(),
            steps: DEFAULT_STEPS,
            validation: ValidationMode::default(),
            greeks: GreekPolicy::default(),
        }
    }
}

impl LatticeSettings {
    /// Use `variant`.
    pub fn with_variant(mut self, variant: TreeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Use `steps` by default.
    pub fn with_steps(mut self, steps: Size) -> Self {
        self.steps = steps;
        self
    }

    /// Validate inputs with `validation`.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Apply `greeks` to shallow trees.
    pub fn with_greeks(mut self, greeks: GreekPolicy) -> Self {
        self.greeks = greeks;
        self
    }

    /// A [`ParameterSet`] using the configured step count.
    #[allow(clippy::too_many_arguments)]
    pub fn parameters(
        &self,
        option_type: OptionType,
        exercise: ExerciseType,
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        carry: Rate,
        volatility: Volatility,
    ) -> ParameterSet {
        ParameterSet::new(
            option_type,
            exercise,
            spot,
            strike,
            maturity,
            rate,
            carry,
            volatility,
            self.steps,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = LatticeSettings::default();
        assert_eq!(s.variant, TreeVariant::CoxRossRubinstein);
        assert_eq!(s.steps, 200);
        assert_eq!(s.validation, ValidationMode::Strict);
        assert_eq!(s.greeks, GreekPolicy::BestEffort);
    }

    #[test]
    fn builders_and_parameters() {
        let s = LatticeSettings::default()
            .with_variant(TreeVariant::Trinomial)
            .with_steps(50)
            .with_validation(ValidationMode::Permissive)
            .with_greeks(GreekPolicy::RequireFull);
        assert_eq!(s.variant, TreeVariant::Trinomial);
        assert_eq!(s.validation, ValidationMode::Permissive);
        assert_eq!(s.greeks, GreekPolicy::RequireFull);

        let p = s.parameters(
            OptionType::Call,
            ExerciseType::American,
            100.0,
            95.0,
            0.25,
            0.03,
            0.01,
            0.3,
        );
        assert_eq!(p.steps, 50);
        assert_eq!(p.strike, 95.0);
    }
}
