//! Terminal and early-exercise payoffs on the lattice.

use ol_core::{OptionType, Real, Size};

use super::TreeGeometry;

/// Unfloored exercise value `z·(s − K)` with `z = ±1` for call/put.
///
/// The American comparison uses this value directly; only the terminal
/// layer is floored at zero.
#[inline]
pub fn intrinsic(option_type: OptionType, node_spot: Real, strike: Real) -> Real {
    option_type.sign() * (node_spot - strike)
}

/// Vanilla payoff at expiry, `max(0, z·(s − K))`.
///
/// A NaN exercise value stays NaN instead of being floored to zero.
#[inline]
pub fn terminal_payoff(option_type: OptionType, node_spot: Real, strike: Real) -> Real {
    let value = intrinsic(option_type, node_spot, strike);
    if value.is_nan() {
        value
    } else {
        value.max(0.0)
    }
}

/// Fill `values` with the payoff at every node of the final step.
///
/// `values` must hold at least [`TreeGeometry::buffer_len`] elements; only
/// the first `width(steps)` are written.
pub fn initialize_terminal(
    values: &mut [Real],
    geometry: &TreeGeometry,
    option_type: OptionType,
    spot: Real,
    strike: Real,
) {
    let n: Size = geometry.steps();
    let width = geometry.width(n);
    for (i, value) in values[..width].iter_mut().enumerate() {
        *value = terminal_payoff(option_type, geometry.node_spot(spot, n, i), strike);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{ParameterSet, TreeVariant};
    use ol_core::ExerciseType;

    #[test]
    fn intrinsic_is_not_floored() {
        assert_eq!(intrinsic(OptionType::Call, 90.0, 100.0), -10.0);
        assert_eq!(intrinsic(OptionType::Put, 90.0, 100.0), 10.0);
        assert_eq!(terminal_payoff(OptionType::Call, 90.0, 100.0), 0.0);
        assert_eq!(terminal_payoff(OptionType::Put, 110.0, 100.0), 0.0);
    }

    #[test]
    fn nan_spot_is_not_floored() {
        assert!(terminal_payoff(OptionType::Call, f64::NAN, 100.0).is_nan());
        assert!(terminal_payoff(OptionType::Put, 100.0, f64::NAN).is_nan());
    }

    #[test]
    fn terminal_layer_matches_node_spots() {
        let params = ParameterSet::new(
            OptionType::Put,
            ExerciseType::European,
            100.0,
            100.0,
            1.0,
            0.05,
            0.05,
            0.2,
            3,
        );
        for variant in TreeVariant::ALL {
            let g = variant.build(&params);
            let mut values = vec![f64::NAN; g.buffer_len()];
            initialize_terminal(&mut values, &g, OptionType::Put, 100.0, 100.0);
            for (i, v) in values.iter().enumerate() {
                let s = g.node_spot(100.0, g.steps(), i);
                assert_eq!(*v, (100.0 - s).max(0.0), "{variant:?} node {i}");
            }
        }
    }

    #[test]
    fn trinomial_centre_node_sits_at_the_money() {
        let params = ParameterSet::new(
            OptionType::Call,
            ExerciseType::European,
            100.0,
            100.0,
            1.0,
            0.0,
            0.0,
            0.2,
            2,
        );
        let g = TreeVariant::Trinomial.build(&params);
        let mut values = vec![0.0; g.buffer_len()];
        initialize_terminal(&mut values, &g, OptionType::Call, 100.0, 100.0);
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[1], 0.0);
        assert_eq!(values[2], 0.0);
        assert!(values[3] > 0.0 && values[4] > values[3]);
    }
}
