//! Claim-interval constants for the standard Traveler's Dilemma.
//!
//! The strategy space is the closed integer interval
//! [[`CLAIM_MIN`], [`CLAIM_MAX`]] = [2, 100], giving [`NUM_CLAIMS`] = 99
//! distinct claims and [`NUM_STATES`] = 99² = 9,801 joint states. The flat
//! encoding of a state (c1, c2) is `(c1 − CLAIM_MIN) · NUM_CLAIMS +
//! (c2 − CLAIM_MIN)`; the mapping is owned by
//! [`crate::types::ClaimSpace`] and every component goes through it rather
//! than recomputing it locally.

/// Lowest admissible claim L.
pub const CLAIM_MIN: i32 = 2;

/// Highest admissible claim U.
pub const CLAIM_MAX: i32 = 100;

/// Number of distinct claims n = U − L + 1.
pub const NUM_CLAIMS: usize = (CLAIM_MAX - CLAIM_MIN + 1) as usize;

/// Number of joint states D = n².
pub const NUM_STATES: usize = NUM_CLAIMS * NUM_CLAIMS;
