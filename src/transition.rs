//! Transition-matrix construction for asynchronous introspection dynamics.
//!
//! One update step picks one of the two players (probability 1/2 each) and
//! one uniformly random alternative claim (probability 1/(n−1)), which the
//! chosen player adopts with the Fermi probability. Per row this leaves
//! exactly 2(n−1) reachable off-diagonal states — the single-coordinate
//! moves — plus the diagonal, which carries the complement mass so every row
//! sums to exactly 1 in exact arithmetic. Moves that change both claims at
//! once have probability 0 and stay at the dense matrix's zero fill.

use rayon::prelude::*;

use crate::payoff::{fermi, payoff};
use crate::types::{ClaimSpace, Params};

/// Dense row-major row-stochastic matrix over the joint claim space.
///
/// Row `i` holds the probability of moving from state `i` to every state in
/// one asynchronous update step. D = 9,801 for the standard claim space, so
/// the buffer is ~768 MB of f64.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl TransitionMatrix {
    /// Number of states D (the matrix is D×D).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row `from` as a slice of length D.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.dim..(from + 1) * self.dim]
    }

    /// Probability of moving from state `from` to state `to` in one step.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.dim + to]
    }

    /// Hand the raw buffer to the stationary solver, which reuses it for the
    /// resolvent factorization.
    pub(crate) fn into_data(self) -> (usize, Vec<f64>) {
        (self.dim, self.data)
    }

    #[cfg(test)]
    pub(crate) fn from_raw(dim: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), dim * dim);
        Self { dim, data }
    }
}

/// Mass of a single-coordinate move: `(1 / (2(n−1))) · fermi(alt, current)`.
///
/// The constant encodes the 1/2 chance this player is the one updating,
/// times the uniform 1/(n−1) proposal over the other claims.
#[inline(always)]
fn switch_mass(current_payoff: f64, alt_payoff: f64, selection: f64, n: usize) -> f64 {
    fermi(alt_payoff, current_payoff, selection) / (2.0 * (n - 1) as f64)
}

/// Build the full D×D transition matrix for the given parameters.
///
/// Rows are independent and filled in parallel. Callers should run
/// [`Params::validate`] first; this function assumes finite inputs.
pub fn build_transition_matrix(space: &ClaimSpace, params: &Params) -> TransitionMatrix {
    let n = space.num_claims();
    let dim = space.num_states();
    let mut data = vec![0.0f64; dim * dim];

    data.par_chunks_mut(dim)
        .enumerate()
        .for_each(|(row_index, row)| {
            let (c1, c2) = space.state_claims(row_index);
            let payoff1 = payoff(c1, c2, params.reward);
            let payoff2 = payoff(c2, c1, params.reward);

            let mut off_diagonal = 0.0;
            for alt in space.claims() {
                if alt != c1 {
                    // Player 1 proposes `alt` against c2.
                    let mass = switch_mass(
                        payoff1,
                        payoff(alt, c2, params.reward),
                        params.selection,
                        n,
                    );
                    row[space.state_index(alt, c2)] = mass;
                    off_diagonal += mass;
                }
                if alt != c2 {
                    // Player 2 proposes `alt` against c1.
                    let mass = switch_mass(
                        payoff2,
                        payoff(alt, c1, params.reward),
                        params.selection,
                        n,
                    );
                    row[space.state_index(c1, alt)] = mass;
                    off_diagonal += mass;
                }
            }

            // Row-stochasticity closure: the no-change mass is whatever is
            // left. Each fermi value is ≤ 1, so off_diagonal ≤ 1 and the
            // diagonal is non-negative.
            row[row_index] = 1.0 - off_diagonal;
        });

    TransitionMatrix { dim, data }
}
