//! The packaged output of a lattice valuation.

use ol_core::{Error, GreekPolicy, Price, Real, Result, Size};

use super::{Greeks, TreeGeometry, TreeVariant};

/// Price and Greeks of one valuation, with the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeResult {
    /// Value at the root node.
    pub price: Price,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S²; `None` for a one-step binomial tree.
    pub gamma: Option<Real>,
    /// Theta per calendar day; `None` for a one-step binomial tree.
    pub theta: Option<Real>,
    /// Tree construction used.
    pub variant: TreeVariant,
    /// Effective number of steps (odd for Leisen-Reimer).
    pub steps: Size,
}

impl LatticeResult {
    /// Package a price and its Greeks, applying `policy` to missing Greeks.
    pub fn assemble(
        price: Price,
        greeks: Greeks,
        geometry: &TreeGeometry,
        policy: GreekPolicy,
    ) -> Result<Self> {
        if policy == GreekPolicy::RequireFull && !greeks.is_complete() {
            return Err(Error::DegenerateGreeks {
                steps: geometry.steps(),
            });
        }
        Ok(Self {
            price,
            delta: greeks.delta,
            gamma: greeks.gamma,
            theta: greeks.theta,
            variant: geometry.variant(),
            steps: geometry.steps(),
        })
    }

    /// The Greeks alone.
    pub fn greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta,
            gamma: self.gamma,
            theta: self.theta,
        }
    }

    /// `[price, delta, gamma, theta]` with NaN standing in for missing Greeks.
    pub fn to_array(&self) -> [Real; 4] {
        [
            self.price,
            self.delta,
            self.gamma.unwrap_or(Real::NAN),
            self.theta.unwrap_or(Real::NAN),
        ]
    }
}
