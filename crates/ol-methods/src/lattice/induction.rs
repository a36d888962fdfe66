//! Backward induction over a recombining lattice.
//!
//! Two fixed-size layers alternate ("ping-pong"): every node of step `j` is
//! computed from the untouched values of step `j + 1`, then the layers swap.
//! Nothing is allocated per step.

use ol_core::{ExerciseType, Real, Size};

use super::payoff::{initialize_terminal, intrinsic};
use super::{ParameterSet, TreeGeometry};

// ─── NodeBuffer ───────────────────────────────────────────────────────────────

/// Two alternating node layers of equal length.
///
/// The buffer can be reused across valuations; [`ensure_len`](Self::ensure_len)
/// only reallocates when a deeper tree is requested.
#[derive(Debug, Clone, Default)]
pub struct NodeBuffer {
    current: Vec<Real>,
    scratch: Vec<Real>,
}

impl NodeBuffer {
    /// A buffer holding `len` nodes per layer.
    pub fn new(len: Size) -> Self {
        Self {
            current: vec![0.0; len],
            scratch: vec![0.0; len],
        }
    }

    /// Grow both layers to at least `len` nodes.
    pub fn ensure_len(&mut self, len: Size) {
        if self.current.len() < len {
            self.current.resize(len, 0.0);
            self.scratch.resize(len, 0.0);
        }
    }

    /// Nodes per layer.
    pub fn len(&self) -> Size {
        self.current.len()
    }

    /// Whether the layers are empty.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// The layer holding the most recently completed step.
    pub fn current(&self) -> &[Real] {
        &self.current
    }

    fn current_mut(&mut self) -> &mut [Real] {
        &mut self.current
    }

    /// The completed layer (read) and the layer being written.
    fn layers(&mut self) -> (&[Real], &mut [Real]) {
        (&self.current, &mut self.scratch)
    }

    /// Make the freshly written layer current.
    fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }
}

// ─── StepObserver ─────────────────────────────────────────────────────────────

/// Receives every layer of the induction while it is still intact.
///
/// Called once for the terminal layer (`step == n`) and then once per step
/// down to `step == 0`. `values` holds exactly the meaningful nodes of that
/// step.
pub trait StepObserver {
    /// Inspect the node values of `step`.
    fn on_step(&mut self, step: Size, values: &[Real]);
}

impl<F> StepObserver for F
where
    F: FnMut(Size, &[Real]),
{
    fn on_step(&mut self, step: Size, values: &[Real]) {
        (*self)(step, values)
    }
}

// ─── BackwardInduction ────────────────────────────────────────────────────────

/// One backward pass of a lattice, from expiry to the valuation date.
#[derive(Debug, Clone, Copy)]
pub struct BackwardInduction<'a> {
    params: &'a ParameterSet,
    geometry: &'a TreeGeometry,
}

impl<'a> BackwardInduction<'a> {
    /// Prepare a pass of `geometry` for `params`.
    pub fn new(params: &'a ParameterSet, geometry: &'a TreeGeometry) -> Self {
        Self { params, geometry }
    }

    /// Run the induction and return the value at the root node.
    ///
    /// `buffer` is grown if needed; its previous contents are ignored.
    pub fn run<O>(&self, buffer: &mut NodeBuffer, observer: &mut O) -> Real
    where
        O: StepObserver + ?Sized,
    {
        let geometry = self.geometry;
        let n = geometry.steps();
        buffer.ensure_len(geometry.buffer_len());

        initialize_terminal(
            buffer.current_mut(),
            geometry,
            self.params.option_type,
            self.params.spot,
            self.params.strike,
        );
        observer.on_step(n, &buffer.current()[..geometry.width(n)]);

        for step in (0..n).rev() {
            let width = geometry.width(step);
            let (previous, next) = buffer.layers();
            for (i, value) in next[..width].iter_mut().enumerate() {
                *value = self.node_value(previous, step, i);
            }
            buffer.advance();
            observer.on_step(step, &buffer.current()[..width]);
        }

        buffer.current()[0]
    }

    /// Value of node `i` at `step`, read from the layer of `step + 1`.
    #[inline]
    fn node_value(&self, previous: &[Real], step: Size, i: Size) -> Real {
        let continuation = match self.geometry {
            TreeGeometry::Binomial(g) => {
                (g.p * previous[i + 1] + (1.0 - g.p) * previous[i]) * g.discount
            }
            TreeGeometry::Trinomial(g) => {
                (g.pu * previous[i + 2] + g.pm * previous[i + 1] + g.pd * previous[i]) * g.discount
            }
        };
        match self.params.exercise {
            ExerciseType::European => continuation,
            ExerciseType::American => {
                let spot = self.geometry.node_spot(self.params.spot, step, i);
                let exercise = intrinsic(self.params.option_type, spot, self.params.strike);
                // a NaN continuation is carried through, never replaced by exercise
                if continuation > exercise || continuation.is_nan() {
                    continuation
                } else {
                    exercise
                }
            }
        }
    }
}
