//! Core value types: the claim space (state indexer) and solver parameters.

use crate::constants::{CLAIM_MAX, CLAIM_MIN};
use crate::error::Error;

/// Closed integer interval of admissible claims, plus the bijection between
/// claim pairs and flat state indices.
///
/// State (c1, c2) maps to `(c1 − L)·n + (c2 − L)`, so all n states sharing a
/// player-1 claim form one contiguous block of the stationary vector. Exactly
/// one instance is threaded through the pipeline so the encoding is never
/// recomputed inconsistently between components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimSpace {
    low: i32,
    high: i32,
}

impl ClaimSpace {
    /// The standard Traveler's Dilemma interval [2, 100].
    pub fn standard() -> Self {
        Self {
            low: CLAIM_MIN,
            high: CLAIM_MAX,
        }
    }

    /// Arbitrary interval, used for reduced-size chains in tests.
    ///
    /// Panics if the interval holds fewer than two claims (a one-claim space
    /// has no alternative to propose).
    pub fn new(low: i32, high: i32) -> Self {
        assert!(
            high > low,
            "claim interval [{low}, {high}] must contain at least two claims"
        );
        Self { low, high }
    }

    /// Lowest admissible claim L.
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Highest admissible claim U.
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Number of distinct claims n.
    pub fn num_claims(&self) -> usize {
        (self.high - self.low + 1) as usize
    }

    /// Number of joint states D = n².
    pub fn num_states(&self) -> usize {
        self.num_claims() * self.num_claims()
    }

    /// Flat index of state (c1, c2): `(c1 − L)·n + (c2 − L)`.
    #[inline(always)]
    pub fn state_index(&self, c1: i32, c2: i32) -> usize {
        debug_assert!(self.contains(c1) && self.contains(c2));
        (c1 - self.low) as usize * self.num_claims() + (c2 - self.low) as usize
    }

    /// Inverse of [`state_index`](Self::state_index): the claim pair at a
    /// flat index.
    #[inline(always)]
    pub fn state_claims(&self, index: usize) -> (i32, i32) {
        debug_assert!(index < self.num_states());
        let n = self.num_claims();
        (self.low + (index / n) as i32, self.low + (index % n) as i32)
    }

    /// Whether `claim` lies in [L, U].
    pub fn contains(&self, claim: i32) -> bool {
        claim >= self.low && claim <= self.high
    }

    /// Iterate claims in increasing order.
    pub fn claims(&self) -> impl Iterator<Item = i32> {
        self.low..=self.high
    }
}

/// Parameters of one introspection-dynamics instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Reward/punishment R: added to the lower claimant's payoff, deducted
    /// from the higher claimant's.
    pub reward: f64,
    /// Selection intensity B of the Fermi rule. B = 0 is payoff-blind
    /// uniform mixing, valid and useful as a calibration case.
    pub selection: f64,
}

impl Params {
    pub fn new(reward: f64, selection: f64) -> Self {
        Self { reward, selection }
    }

    /// Reject values that would poison O(D²) matrix work: reward must be
    /// finite, selection finite and non-negative.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.reward.is_finite() {
            return Err(Error::InvalidReward(self.reward));
        }
        if !self.selection.is_finite() || self.selection < 0.0 {
            return Err(Error::InvalidSelection(self.selection));
        }
        Ok(())
    }
}
