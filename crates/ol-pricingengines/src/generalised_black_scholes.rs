//! Generalised Black-Scholes closed form for European options.
//!
//! The cost of carry `b` selects the model:
//!
//! * `b = r` — Black-Scholes (1973), non-dividend stock
//! * `b = r − q` — Merton (1973), continuous dividend yield `q`
//! * `b = 0` — Black (1976), options on futures
//! * `b = r − r_f` — Garman-Kohlhagen (1983), currency options
//!
//! Arguments follow the lattice order `(option_type, S, K, T, r, b, v)`, so
//! the two can be swapped in tests.

use ol_core::{OptionType, Price, Rate, Real, Time, Volatility};
use ol_math::{normal_cdf, normal_pdf};
use ol_methods::lattice::DAYS_PER_YEAR;

/// Price and analytic Greeks of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyticGreeks {
    /// Option value.
    pub price: Price,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂t per calendar day.
    pub theta: Real,
    /// ∂V/∂v per unit (1.0 = 100 vol points).
    pub vega: Real,
    /// ∂V/∂r per unit rate.
    pub rho: Real,
}

fn d1_d2(
    spot: Real,
    strike: Real,
    maturity: Time,
    carry: Rate,
    volatility: Volatility,
) -> (Real, Real) {
    let std_dev = volatility * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (carry + volatility * volatility / 2.0) * maturity) / std_dev;
    (d1, d1 - std_dev)
}

/// Closed-form European price.
///
/// $$C = S e^{(b-r)T} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{(b-r)T} N(-d_1)$$
pub fn price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
) -> Price {
    let (d1, d2) = d1_d2(spot, strike, maturity, carry, volatility);
    let carry_df = ((carry - rate) * maturity).exp();
    let df = (-rate * maturity).exp();
    match option_type {
        OptionType::Call => spot * carry_df * normal_cdf(d1) - strike * df * normal_cdf(d2),
        OptionType::Put => strike * df * normal_cdf(-d2) - spot * carry_df * normal_cdf(-d1),
    }
}

/// Closed-form price with delta, gamma, theta (per day), vega and rho.
pub fn greeks(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    carry: Rate,
    volatility: Volatility,
) -> AnalyticGreeks {
    let phi = option_type.sign();
    let sqrt_t = maturity.sqrt();
    let (d1, d2) = d1_d2(spot, strike, maturity, carry, volatility);
    let carry_df = ((carry - rate) * maturity).exp();
    let df = (-rate * maturity).exp();

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    // Theta (per year)
    let theta_annual = -spot * carry_df * npd1 * volatility / (2.0 * sqrt_t)
        - phi * (carry - rate) * spot * carry_df * nd1
        - phi * rate * strike * df * nd2;

    AnalyticGreeks {
        price: phi * (spot * carry_df * nd1 - strike * df * nd2),
        delta: phi * carry_df * nd1,
        gamma: carry_df * npd1 / (spot * volatility * sqrt_t),
        theta: theta_annual / DAYS_PER_YEAR,
        vega: spot * carry_df * npd1 * sqrt_t,
        rho: phi * maturity * strike * df * nd2,
    }
}
