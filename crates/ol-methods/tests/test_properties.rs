//! Property tests over randomly drawn market inputs.

use ol_core::{ExerciseType, OptionType, Real};
use ol_methods::lattice::{LatticeEngine, LatticeSettings, ParameterSet, TreeVariant};
use proptest::prelude::*;

fn variant_strategy() -> impl Strategy<Value = TreeVariant> {
    prop::sample::select(TreeVariant::ALL.to_vec())
}

fn option_type_strategy() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

prop_compose! {
    fn params_strategy()(
        option_type in option_type_strategy(),
        spot in 50.0..150.0,
        strike in 50.0..150.0,
        maturity in 0.1..2.0,
        rate in -0.02..0.12,
        carry in -0.05..0.10,
        volatility in 0.1..0.6,
        steps in 10usize..150,
    ) -> ParameterSet {
        ParameterSet::new(
            option_type,
            ExerciseType::European,
            spot,
            strike,
            maturity,
            rate,
            carry,
            volatility,
            steps,
        )
    }
}

fn engine(variant: TreeVariant) -> LatticeEngine {
    LatticeEngine::new(LatticeSettings::default().with_variant(variant))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn american_never_below_european(params in params_strategy(), variant in variant_strategy()) {
        let engine = engine(variant);
        let european = engine.price(&params).unwrap();
        let american = engine.price(&params.with_exercise(ExerciseType::American)).unwrap();
        prop_assert!(
            american >= european - 1e-12,
            "{variant:?}: American {american} < European {european}"
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical(params in params_strategy(), variant in variant_strategy()) {
        let engine = engine(variant);
        let params = params.with_exercise(ExerciseType::American);
        let first = engine.calculate(&params).unwrap().to_array();
        let second = engine.calculate(&params).unwrap().to_array();
        for (a, b) in first.iter().zip(second) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn crr_put_call_parity(params in params_strategy()) {
        let engine = engine(TreeVariant::CoxRossRubinstein);
        let call = engine.price(&params.with_option_type(OptionType::Call)).unwrap();
        let put = engine.price(&params.with_option_type(OptionType::Put)).unwrap();
        let t = params.maturity;
        let forward_value: Real = params.spot * ((params.carry - params.rate) * t).exp()
            - params.strike * (-params.rate * t).exp();
        prop_assert!(
            (call - put - forward_value).abs() < 1e-9,
            "C - P = {}, expected {forward_value}",
            call - put
        );
    }

    #[test]
    fn european_prices_are_bounded(params in params_strategy(), variant in variant_strategy()) {
        let price = engine(variant).price(&params).unwrap();
        let t = params.maturity;
        let bound = match params.option_type {
            OptionType::Call => params.spot * ((params.carry - params.rate) * t).exp(),
            OptionType::Put => params.strike * (-params.rate * t).exp(),
        };
        prop_assert!(price >= 0.0);
        prop_assert!(price <= bound + 1e-9, "{price} above {bound}");
    }
}
