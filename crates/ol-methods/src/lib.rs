//! # ol-methods
//!
//! Numerical methods: recombining lattices and the backward-induction
//! engine that prices vanilla options on them.
//!
//! # Modules
//!
//! * [`lattice`] — tree geometries (CRR, Jarrow-Rudd, Leisen-Reimer,
//!   trinomial), backward induction, in-pass Greek extraction

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: tree geometries, backward induction, Greeks.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    price_and_greeks, BackwardInduction, GreekSnapshot, Greeks, LatticeEngine, LatticeResult,
    LatticeSettings, NodeBuffer, ParameterSet, StepObserver, TreeGeometry, TreeVariant,
};
