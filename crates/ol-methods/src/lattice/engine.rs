//! The lattice pricing engine.

use ol_core::{Price, Real, Result, Size};
use tracing::{debug, trace, warn};

use super::{
    BackwardInduction, GreekSnapshot, Greeks, LatticeResult, LatticeSettings, NodeBuffer,
    ParameterSet, TreeGeometry,
};

/// Prices vanilla options on the lattice chosen by its [`LatticeSettings`].
///
/// The engine holds configuration only; every call builds its own geometry
/// and node buffer, so one engine can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatticeEngine {
    settings: LatticeSettings,
}

impl LatticeEngine {
    /// Create an engine with `settings`.
    pub fn new(settings: LatticeSettings) -> Self {
        Self { settings }
    }

    /// The engine's configuration.
    pub fn settings(&self) -> &LatticeSettings {
        &self.settings
    }

    /// Price and Greeks in a single backward pass.
    pub fn calculate(&self, params: &ParameterSet) -> Result<LatticeResult> {
        let geometry = self.prepare(params)?;
        let mut snapshot = GreekSnapshot::new();
        let price = BackwardInduction::new(params, &geometry)
            .run(&mut NodeBuffer::new(geometry.buffer_len()), &mut snapshot);
        let greeks = Greeks::extract(&snapshot, &geometry, params.spot, price);

        debug!(
            variant = ?geometry.variant(),
            steps = geometry.steps(),
            exercise = %params.exercise,
            option_type = %params.option_type,
            price,
            delta = greeks.delta,
            "lattice valuation"
        );
        LatticeResult::assemble(price, greeks, &geometry, self.settings.greeks)
    }

    /// Price only; no Greeks are captured.
    pub fn price(&self, params: &ParameterSet) -> Result<Price> {
        let mut buffer = NodeBuffer::default();
        self.price_with_buffer(params, &mut buffer)
    }

    /// Price only, reusing `buffer` for the node layers.
    ///
    /// Useful when the same engine is evaluated many times, e.g. inside a
    /// root finder.
    pub fn price_with_buffer(
        &self,
        params: &ParameterSet,
        buffer: &mut NodeBuffer,
    ) -> Result<Price> {
        let geometry = self.prepare(params)?;
        let price = BackwardInduction::new(params, &geometry)
            .run(buffer, &mut |_: Size, _: &[Real]| {});
        debug!(
            variant = ?geometry.variant(),
            steps = geometry.steps(),
            exercise = %params.exercise,
            price,
            "lattice price"
        );
        Ok(price)
    }

    fn prepare(&self, params: &ParameterSet) -> Result<TreeGeometry> {
        params.validate(self.settings.validation)?;
        let geometry = self.settings.variant.build(params);
        trace!(?geometry, "lattice geometry");

        let factors_finite = geometry.up().is_finite() && geometry.down().is_finite();
        if !factors_finite || !geometry.probabilities_in_unit_interval() {
            warn!(
                variant = ?geometry.variant(),
                steps = geometry.steps(),
                up = geometry.up(),
                down = geometry.down(),
                "degenerate lattice: transition probabilities outside [0, 1] or non-finite \
                 factors; the result is unreliable"
            );
        }
        Ok(geometry)
    }
}
