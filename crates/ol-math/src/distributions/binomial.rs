//! Binomial distribution.
//!
//! Wraps the `statrs` crate's binomial implementation.

use ol_core::{ensure_param, errors::Result, Real};
use statrs::distribution::{Binomial, Discrete};

/// Binomial distribution with `n` trials and success probability `p`.
#[derive(Debug, Clone)]
pub struct BinomialDistribution {
    dist: Binomial,
}

impl BinomialDistribution {
    /// Create a binomial distribution with `n` trials and probability `p`.
    ///
    /// Fails with `InvalidParameter` if `p` is not in `[0, 1]`.
    pub fn new(p: Real, n: u64) -> Result<Self> {
        ensure_param!(
            (0.0..=1.0).contains(&p),
            "binomial probability must be in [0, 1], got {p}"
        );
        let dist = Binomial::new(p, n).map_err(|e| {
            ol_core::Error::InvalidParameter(format!("binomial({n}, {p}): {e}"))
        })?;
        Ok(Self { dist })
    }

    /// Probability mass function P(X = k).
    pub fn pmf(&self, k: u64) -> Real {
        self.dist.pmf(k)
    }
}
