//! Parameter sweep: independent (R, B) tasks in parallel.
//!
//! Each task owns its transition matrix and stationary vector, writes one
//! artifact, and reports success or a typed failure on its own; one broken
//! pair never aborts the rest of the sweep. Matrices are ~768 MB each at the
//! standard claim space, so the per-pair parallelism here compounds with the
//! per-row parallelism inside the build and solve.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::abundance::claim_abundance;
use crate::error::Error;
use crate::stationary::stationary_distribution;
use crate::storage::save_abundance;
use crate::transition::build_transition_matrix;
use crate::types::{ClaimSpace, Params};

/// Outcome of one sweep task.
#[derive(Debug)]
pub struct SweepOutcome {
    pub params: Params,
    /// Final artifact path on success, the task's own failure otherwise.
    pub result: Result<PathBuf, Error>,
    /// Wall time for this pair.
    pub seconds: f64,
}

/// The full exact pipeline for one parameter pair:
/// validate → build T → solve for u → aggregate marginals.
///
/// A pure function of (R, B) and the claim space; re-running it reproduces
/// the same abundance vector.
pub fn compute_abundance(space: &ClaimSpace, params: &Params) -> Result<Vec<f64>, Error> {
    params.validate()?;
    let matrix = build_transition_matrix(space, params);
    let stationary = stationary_distribution(matrix)?;
    Ok(claim_abundance(&stationary, space))
}

/// Run every (R, B) pair, writing one artifact per pair into `out_dir`.
///
/// Pairs are fully independent and may run in any order; outcomes come back
/// in input order.
pub fn run_sweep(space: &ClaimSpace, pairs: &[Params], out_dir: &Path) -> Vec<SweepOutcome> {
    pairs
        .par_iter()
        .map(|params| {
            let t0 = Instant::now();
            let result = compute_abundance(space, params).and_then(|abundance| {
                save_abundance(out_dir, params, &abundance).map_err(Error::from)
            });
            SweepOutcome {
                params: *params,
                result,
                seconds: t0.elapsed().as_secs_f64(),
            }
        })
        .collect()
}
