//! Pricing policies shared by every lattice call.
//!
//! These are plain values carried by the caller's configuration; nothing
//! here is process-wide.

/// How strictly pricing inputs are checked before any lattice is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationMode {
    /// Reject non-positive or non-finite spot, strike, maturity and
    /// volatility, non-finite rate and carry, and fewer than one step.
    #[default]
    Strict,
    /// Only reject a zero step count; every other input flows through the
    /// formulas unchanged, so bad inputs surface as NaN or infinity.
    Permissive,
}

/// What to do when the lattice is too shallow for gamma and theta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreekPolicy {
    /// Report the Greeks that exist and leave the rest as `None`.
    #[default]
    BestEffort,
    /// Fail with [`Error::DegenerateGreeks`](crate::Error::DegenerateGreeks).
    RequireFull,
}
