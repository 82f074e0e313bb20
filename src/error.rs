//! Error taxonomy for one (R, B) solve.
//!
//! Every failure is local to a single parameter pair: a sweep over many pairs
//! reports these per task and keeps going.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reward is NaN or infinite. Rejected before any O(D²) matrix work.
    #[error("reward parameter is not finite: {0}")]
    InvalidReward(f64),

    /// Selection intensity is NaN, infinite, or negative.
    #[error("selection intensity must be finite and non-negative, got {0}")]
    InvalidSelection(f64),

    /// LU elimination hit a pivot too small to divide by. The resolvent
    /// I + U − T is nonsingular for a correctly built irreducible stochastic
    /// T, so this indicates a structurally broken chain for these parameters.
    #[error("resolvent matrix is numerically singular at elimination step {step} (|pivot| = {pivot:e})")]
    SingularResolvent { step: usize, pivot: f64 },

    /// The solve produced NaN or infinite entries.
    #[error("stationary solve produced non-finite entries")]
    NonFiniteSolution,

    /// Writing or reading an abundance artifact failed.
    #[error("artifact I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
