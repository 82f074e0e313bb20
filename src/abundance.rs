//! Marginal per-claim abundance from the joint stationary vector.

use crate::types::ClaimSpace;

/// Long-run probability that player 1 holds each claim.
///
/// Entry k sums the contiguous block of n states whose player-1 claim is
/// fixed at L + k (the blocks are contiguous by the state-index layout).
/// The n partial sums inherit Σ = 1 from the stationary vector.
pub fn claim_abundance(stationary: &[f64], space: &ClaimSpace) -> Vec<f64> {
    let n = space.num_claims();
    debug_assert_eq!(stationary.len(), space.num_states());
    stationary
        .chunks_exact(n)
        .map(|block| block.iter().sum())
        .collect()
}

/// Player-2 marginal: strided sums over the partner's positions.
///
/// The game is symmetric under swapping the players, so this must agree
/// with [`claim_abundance`]; it exists as a cross-check on the chain
/// construction rather than as a second output.
pub fn partner_abundance(stationary: &[f64], space: &ClaimSpace) -> Vec<f64> {
    let n = space.num_claims();
    debug_assert_eq!(stationary.len(), space.num_states());
    let mut out = vec![0.0f64; n];
    for (index, &p) in stationary.iter().enumerate() {
        out[index % n] += p;
    }
    out
}
