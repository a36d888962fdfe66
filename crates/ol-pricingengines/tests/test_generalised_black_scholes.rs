//! Closed-form reference values: `r = 0.1`, `q = 0.08` (`b = 0.02`),
//! `T = 0.5`, `v = 0.125`.

use ol_core::{OptionType, Real};
use ol_pricingengines::generalised_black_scholes::{greeks, price};
use ol_pricingengines::implied_volatility;

use OptionType::{Call, Put};

/// `statrs`' erfc is good to about 1e-11, scaled here by spot and strike.
const TOL: Real = 1e-9;

/// `(option_type, S, K, [price, delta, gamma, theta per year, vega, rho])`
#[rustfmt::skip]
const CASES: [(OptionType, Real, Real, [Real; 6]); 6] = [
    (Call, 110.0, 100.0, [11.069546131685598, 0.8567400985874144, 0.018374151835767315, -2.514805144448628, 13.895452325799033, 41.58593235646499]),
    (Put, 110.0, 100.0, [0.505650275001452, -0.10404934056490878, 0.018374151835767315, -1.457457963981934, 13.895452325799033, -5.975538868570712]),
    (Call, 100.0, 100.0, [3.8695002999527546, 0.5404518486173583, 0.042831984686328525, -4.040202470858858, 26.76999042895533, 25.08784228089154]),
    (Put, 100.0, 100.0, [2.913498834791845, -0.42033759053496483, 0.042831984686328525, -2.2142237390703023, 26.76999042895533, -22.47362894414416]),
    (Call, 100.0, 110.0, [0.7881685580252977, 0.17153007262292186, 0.028376442324910798, -2.48115284607697, 17.7352764530692, 8.182419352133445]),
    (Put, 100.0, 110.0, [9.344461337871536, -0.7892593665294013, 0.028376442324910798, 0.2960553102122976, 17.7352764530692, -44.13519899540583]),
];

#[test]
fn prices_and_greeks() {
    for (option_type, spot, strike, expected) in CASES {
        let label = format!("{option_type} S={spot} K={strike}");
        let p = price(option_type, spot, strike, 0.5, 0.1, 0.02, 0.125);
        assert!((p - expected[0]).abs() < TOL, "{label} price {p}");

        let g = greeks(option_type, spot, strike, 0.5, 0.1, 0.02, 0.125);
        let actual = [g.price, g.delta, g.gamma, g.theta * 365.0, g.vega, g.rho];
        let names = ["price", "delta", "gamma", "theta", "vega", "rho"];
        for ((a, e), name) in actual.iter().zip(expected).zip(names) {
            assert!((a - e).abs() < TOL, "{label} {name}: expected {e}, found {a}");
        }
    }
}

#[test]
fn implied_volatility_recovers_the_input() {
    for (option_type, spot, strike, expected) in CASES {
        let v = implied_volatility::black_scholes(
            expected[0],
            option_type,
            spot,
            strike,
            0.5,
            0.1,
            0.02,
            implied_volatility::DEFAULT_ACCURACY,
        )
        .unwrap();
        assert!((v - 0.125).abs() < 1e-7, "{option_type} S={spot} K={strike}: {v}");
    }
}
