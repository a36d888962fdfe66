//! Delta, gamma and theta read from the nodes nearest the valuation date.
//!
//! The values are captured during the same backward pass that produces the
//! price, so the Greeks cost no extra tree evaluation.
//!
//! * binomial trees use step 1 for delta and step 2 for gamma and theta
//!   (theta spans `2·dt`);
//! * the trinomial tree has three nodes at step 1 and reads all three Greeks
//!   there (theta spans `dt`).

use ol_core::{Real, Size};

use super::{StepObserver, TreeGeometry};

/// Calendar days per year used to quote theta per day.
pub const DAYS_PER_YEAR: Real = 365.0;

// ─── GreekSnapshot ────────────────────────────────────────────────────────────

/// Copies of the first three nodes of steps 1 and 2.
///
/// Populated through [`StepObserver`]; a step that the lattice never reaches
/// (step 2 of a one-step tree) stays `None`. Layers narrower than three
/// nodes are padded with NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GreekSnapshot {
    /// Nodes `0..3` of step 1.
    pub step_one: Option<[Real; 3]>,
    /// Nodes `0..3` of step 2.
    pub step_two: Option<[Real; 3]>,
}

impl GreekSnapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    fn capture(values: &[Real]) -> [Real; 3] {
        let mut nodes = [Real::NAN; 3];
        for (slot, value) in nodes.iter_mut().zip(values) {
            *slot = *value;
        }
        nodes
    }
}

impl StepObserver for GreekSnapshot {
    fn on_step(&mut self, step: Size, values: &[Real]) {
        match step {
            1 => self.step_one = Some(Self::capture(values)),
            2 => self.step_two = Some(Self::capture(values)),
            _ => {}
        }
    }
}

// ─── Greeks ───────────────────────────────────────────────────────────────────

/// Lattice Greeks. Gamma and theta are `None` when the tree is too shallow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Option<Real>,
    /// ∂V/∂t per calendar day.
    pub theta: Option<Real>,
}

impl Greeks {
    /// Combine the captured nodes into finite-difference Greeks.
    ///
    /// `spot` is the valuation spot and `price` the root value of the same
    /// pass.
    pub fn extract(
        snapshot: &GreekSnapshot,
        geometry: &TreeGeometry,
        spot: Real,
        price: Real,
    ) -> Self {
        match geometry {
            TreeGeometry::Binomial(g) => {
                let delta = snapshot
                    .step_one
                    .map_or(Real::NAN, |v| (v[1] - v[0]) / (spot * g.up - spot * g.down));

                let centre = g.centre_spot(spot);
                let high = spot * g.up.powf(2.0);
                let low = spot * g.down.powf(2.0);
                let gamma = snapshot.step_two.map(|v| {
                    ((v[2] - v[1]) / (high - centre) - (v[1] - v[0]) / (centre - low))
                        / (0.5 * (high - low))
                });
                let theta = snapshot
                    .step_two
                    .map(|v| (v[1] - price) / (2.0 * g.dt) / DAYS_PER_YEAR);

                Self { delta, gamma, theta }
            }
            TreeGeometry::Trinomial(g) => match snapshot.step_one {
                Some(v) => {
                    let up = spot * g.up;
                    let down = spot * g.down;
                    Self {
                        delta: (v[2] - v[0]) / (up - down),
                        gamma: Some(
                            ((v[2] - v[1]) / (up - spot) - (v[1] - v[0]) / (spot - down))
                                / (0.5 * (up - down)),
                        ),
                        theta: Some((v[1] - price) / g.dt / DAYS_PER_YEAR),
                    }
                }
                None => Self {
                    delta: Real::NAN,
                    gamma: None,
                    theta: None,
                },
            },
        }
    }

    /// Whether gamma and theta are both available.
    pub fn is_complete(&self) -> bool {
        self.gamma.is_some() && self.theta.is_some()
    }
}
