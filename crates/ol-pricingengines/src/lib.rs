//! # ol-pricingengines
//!
//! Pricing functions that sit next to the lattice engine.
//!
//! ## Engines
//!
//! - [`generalised_black_scholes`] — closed-form European price and analytic
//!   Greeks with a cost-of-carry parameter
//! - [`implied_volatility`] — Brent-based implied volatility for the closed
//!   form and for any lattice variant

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod generalised_black_scholes;
pub mod implied_volatility;

pub use generalised_black_scholes::AnalyticGreeks;
