//! Per-step tree geometry: up/down factors and transition probabilities.
//!
//! Four recombining trees are supported:
//!
//! | Variant | Branches | Drift lives in | Recombines at `S` |
//! |---|---|---|---|
//! | [`TreeVariant::CoxRossRubinstein`] | 2 | probability | yes (`u·d = 1`) |
//! | [`TreeVariant::JarrowRudd`] | 2 | factors (`p = ½`) | no |
//! | [`TreeVariant::LeisenReimer`] | 2 | factors and probability | no |
//! | [`TreeVariant::Trinomial`] | 3 | probabilities | yes (`u·d = 1`) |
//!
//! Probabilities are not clamped to `[0, 1]`; extreme inputs (very few steps,
//! large carry relative to volatility) can push them outside and the lattice
//! then produces an unreliable but finite result.
//! [`TreeGeometry::probabilities_in_unit_interval`] reports the condition.

use ol_core::{DiscountFactor, Real, Size, Time};

use super::ParameterSet;

/// The lattice construction scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeVariant {
    /// Cox, Ross & Rubinstein (1979): `u = e^{v√dt}`, `d = 1/u`.
    #[default]
    CoxRossRubinstein,
    /// Jarrow & Rudd (1983): equal probabilities, drift in the factors.
    JarrowRudd,
    /// Leisen & Reimer (1996): Peizer-Pratt inverted probabilities, odd steps.
    LeisenReimer,
    /// Three-branch tree with `u = e^{v√(2dt)}`.
    Trinomial,
}

impl TreeVariant {
    /// All variants, in declaration order.
    pub const ALL: [TreeVariant; 4] = [
        TreeVariant::CoxRossRubinstein,
        TreeVariant::JarrowRudd,
        TreeVariant::LeisenReimer,
        TreeVariant::Trinomial,
    ];

    /// The step count this variant actually uses for a requested `steps`.
    ///
    /// Leisen-Reimer needs an odd count: even requests become `steps + 1`.
    pub fn effective_steps(self, steps: Size) -> Size {
        match self {
            TreeVariant::LeisenReimer if steps % 2 == 0 => steps + 1,
            _ => steps,
        }
    }

    /// Build the geometry of this variant for `params`.
    pub fn build(self, params: &ParameterSet) -> TreeGeometry {
        match self {
            TreeVariant::CoxRossRubinstein => {
                TreeGeometry::Binomial(BinomialGeometry::cox_ross_rubinstein(params))
            }
            TreeVariant::JarrowRudd => TreeGeometry::Binomial(BinomialGeometry::jarrow_rudd(params)),
            TreeVariant::LeisenReimer => {
                TreeGeometry::Binomial(BinomialGeometry::leisen_reimer(params))
            }
            TreeVariant::Trinomial => TreeGeometry::Trinomial(TrinomialGeometry::new(params)),
        }
    }
}

// ─── Binomial ─────────────────────────────────────────────────────────────────

/// Geometry of a two-branch tree.
///
/// Node `i` of step `j` (`0 ≤ i ≤ j`) has spot `S·uⁱ·d^(j−i)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialGeometry {
    /// Which scheme produced these factors.
    pub variant: TreeVariant,
    /// Effective number of steps.
    pub steps: Size,
    /// Time increment per step.
    pub dt: Time,
    /// Up factor.
    pub up: Real,
    /// Down factor.
    pub down: Real,
    /// Up probability; the down probability is `1 − p`.
    pub p: Real,
    /// Per-step discount factor `e^{−r·dt}`.
    pub discount: DiscountFactor,
}

impl BinomialGeometry {
    /// Cox-Ross-Rubinstein tree.
    ///
    /// `u = e^{v√dt}`, `d = 1/u`, `p = (e^{b·dt} − d) / (u − d)`.
    pub fn cox_ross_rubinstein(params: &ParameterSet) -> Self {
        let steps = TreeVariant::CoxRossRubinstein.effective_steps(params.steps);
        let dt = params.maturity / steps as Real;
        let up = (params.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (params.carry * dt).exp();
        Self {
            variant: TreeVariant::CoxRossRubinstein,
            steps,
            dt,
            up,
            down,
            p: (growth - down) / (up - down),
            discount: (-params.rate * dt).exp(),
        }
    }

    /// Jarrow-Rudd tree.
    ///
    /// `u, d = e^{(b − v²/2)dt ± v√dt}`, `p = ½`.
    pub fn jarrow_rudd(params: &ParameterSet) -> Self {
        let steps = TreeVariant::JarrowRudd.effective_steps(params.steps);
        let dt = params.maturity / steps as Real;
        let v = params.volatility;
        let drift = (params.carry - v * v / 2.0) * dt;
        let diffusion = v * dt.sqrt();
        Self {
            variant: TreeVariant::JarrowRudd,
            steps,
            dt,
            up: (drift + diffusion).exp(),
            down: (drift - diffusion).exp(),
            p: 0.5,
            discount: (-params.rate * dt).exp(),
        }
    }

    /// Leisen-Reimer tree on an odd number of steps.
    ///
    /// The Black-Scholes `d1`, `d2` of the full-horizon European option are
    /// mapped through the Peizer-Pratt method 2 inversion to `h(d1)`, `h(d2)`;
    /// then `p = h(d2)`, `u = e^{b·dt}·h(d1)/h(d2)`, `d = (e^{b·dt} − p·u)/(1 − p)`.
    pub fn leisen_reimer(params: &ParameterSet) -> Self {
        let steps = TreeVariant::LeisenReimer.effective_steps(params.steps);
        let ParameterSet {
            spot: s,
            strike: k,
            maturity: t,
            carry: b,
            volatility: v,
            ..
        } = *params;

        let d1 = ((s / k).ln() + (b + v * v / 2.0) * t) / (v * t.sqrt());
        let d2 = d1 - v * t.sqrt();
        let hd1 = peizer_pratt_inversion(d1, steps);
        let hd2 = peizer_pratt_inversion(d2, steps);

        let dt = t / steps as Real;
        let growth = (b * dt).exp();
        let p = hd2;
        let up = growth * hd1 / hd2;
        let down = (growth - p * up) / (1.0 - p);
        Self {
            variant: TreeVariant::LeisenReimer,
            steps,
            dt,
            up,
            down,
            p,
            discount: (-params.rate * dt).exp(),
        }
    }

    /// Spot of the middle node of step 2 (`S·u·d`), used by the gamma
    /// estimate. CRR recombines exactly at `S`.
    pub fn centre_spot(&self, spot: Real) -> Real {
        match self.variant {
            TreeVariant::CoxRossRubinstein => spot,
            _ => spot * self.up * self.down,
        }
    }
}

/// Peizer-Pratt method 2 inversion for an `n`-step (odd) tree.
///
/// `h(z) = ½ + sgn(z)·√(¼ − ¼·exp(−(z / (n + ⅓ + 0.1/(n+1)))²·(n + ⅙)))`,
/// with `sgn(0) = 0` so that `h(0) = ½` exactly.
pub fn peizer_pratt_inversion(z: Real, n: Size) -> Real {
    let nf = n as Real;
    let x = z / (nf + 1.0 / 3.0 + 0.1 / (nf + 1.0));
    0.5 + sign(z) * (0.25 - 0.25 * (-(x * x) * (nf + 1.0 / 6.0)).exp()).sqrt()
}

fn sign(x: Real) -> Real {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        Real::NAN
    }
}

// ─── Trinomial ────────────────────────────────────────────────────────────────

/// Geometry of a three-branch tree.
///
/// Step `j` has `2j + 1` nodes; node `i` has spot
/// `S·u^max(i−j, 0)·d^max(j−i, 0)`, so node `j` sits at `S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrinomialGeometry {
    /// Effective number of steps.
    pub steps: Size,
    /// Time increment per step.
    pub dt: Time,
    /// Up factor `e^{v√(2dt)}`.
    pub up: Real,
    /// Down factor `e^{−v√(2dt)}`.
    pub down: Real,
    /// Up probability.
    pub pu: Real,
    /// Middle probability, `1 − pu − pd`.
    pub pm: Real,
    /// Down probability.
    pub pd: Real,
    /// Per-step discount factor `e^{−r·dt}`.
    pub discount: DiscountFactor,
}

impl TrinomialGeometry {
    /// Build the trinomial tree for `params`.
    ///
    /// `pu = ((e^{b·dt/2} − e^{−v√(dt/2)}) / (e^{v√(dt/2)} − e^{−v√(dt/2)}))²`,
    /// `pd` likewise with the numerator `e^{v√(dt/2)} − e^{b·dt/2}`.
    pub fn new(params: &ParameterSet) -> Self {
        let steps = TreeVariant::Trinomial.effective_steps(params.steps);
        let dt = params.maturity / steps as Real;
        let v = params.volatility;

        let half_growth = (params.carry * dt / 2.0).exp();
        let half_up = (v * (dt / 2.0).sqrt()).exp();
        let half_down = (-v * (dt / 2.0).sqrt()).exp();
        let spread = half_up - half_down;

        let pu = ((half_growth - half_down) / spread).powi(2);
        let pd = ((half_up - half_growth) / spread).powi(2);
        Self {
            steps,
            dt,
            up: (v * (2.0 * dt).sqrt()).exp(),
            down: (-v * (2.0 * dt).sqrt()).exp(),
            pu,
            pm: 1.0 - pu - pd,
            pd,
            discount: (-params.rate * dt).exp(),
        }
    }
}

// ─── TreeGeometry ─────────────────────────────────────────────────────────────

/// Geometry of any supported lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeGeometry {
    /// Two-branch tree (CRR, Jarrow-Rudd, Leisen-Reimer).
    Binomial(BinomialGeometry),
    /// Three-branch tree.
    Trinomial(TrinomialGeometry),
}

impl TreeGeometry {
    /// The scheme that produced this geometry.
    pub fn variant(&self) -> TreeVariant {
        match self {
            TreeGeometry::Binomial(g) => g.variant,
            TreeGeometry::Trinomial(_) => TreeVariant::Trinomial,
        }
    }

    /// Effective number of steps.
    pub fn steps(&self) -> Size {
        match self {
            TreeGeometry::Binomial(g) => g.steps,
            TreeGeometry::Trinomial(g) => g.steps,
        }
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        match self {
            TreeGeometry::Binomial(g) => g.dt,
            TreeGeometry::Trinomial(g) => g.dt,
        }
    }

    /// Up factor.
    pub fn up(&self) -> Real {
        match self {
            TreeGeometry::Binomial(g) => g.up,
            TreeGeometry::Trinomial(g) => g.up,
        }
    }

    /// Down factor.
    pub fn down(&self) -> Real {
        match self {
            TreeGeometry::Binomial(g) => g.down,
            TreeGeometry::Trinomial(g) => g.down,
        }
    }

    /// Per-step discount factor.
    pub fn discount(&self) -> DiscountFactor {
        match self {
            TreeGeometry::Binomial(g) => g.discount,
            TreeGeometry::Trinomial(g) => g.discount,
        }
    }

    /// Number of meaningful nodes at time step `step`.
    pub fn width(&self, step: Size) -> Size {
        match self {
            TreeGeometry::Binomial(_) => step + 1,
            TreeGeometry::Trinomial(_) => 2 * step + 1,
        }
    }

    /// Node-buffer length needed for the whole valuation (the terminal width).
    pub fn buffer_len(&self) -> Size {
        self.width(self.steps())
    }

    /// Spot price at node `index` of time step `step`.
    pub fn node_spot(&self, spot: Real, step: Size, index: Size) -> Real {
        let (ups, downs) = match self {
            TreeGeometry::Binomial(_) => (index, step - index),
            TreeGeometry::Trinomial(_) => (index.saturating_sub(step), step.saturating_sub(index)),
        };
        spot * self.up().powf(ups as Real) * self.down().powf(downs as Real)
    }

    /// Whether every transition probability is finite and within `[0, 1]`.
    pub fn probabilities_in_unit_interval(&self) -> bool {
        let valid = |p: Real| (0.0..=1.0).contains(&p);
        match self {
            TreeGeometry::Binomial(g) => valid(g.p),
            TreeGeometry::Trinomial(g) => valid(g.pu) && valid(g.pm) && valid(g.pd),
        }
    }
}
