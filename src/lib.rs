//! # Traveler — Exact stationary distributions for introspection dynamics
//!
//! Computes the long-run distribution over joint claim pairs in the repeated
//! **Traveler's Dilemma** under asynchronous stochastic introspection: at
//! each step one randomly chosen player evaluates one uniformly proposed
//! alternative claim and adopts it with Fermi probability
//! `1 / (1 + exp(−B·Δpayoff))`. Instead of sampling trajectories, the crate
//! builds the full Markov transition matrix over the D = 99² = 9,801 joint
//! states and solves for its unique stationary vector in closed form.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Payoff + Fermi rule | [`payoff`] | Traveler's Dilemma payoff scheme and logistic acceptance |
//! | Matrix build | [`transition`] | Fill the dense D×D row-stochastic matrix, rows in parallel |
//! | Stationary solve | [`stationary`] | `u = e · (I + U − T)⁻¹` via dense LU with partial pivoting |
//! | Marginals | [`abundance`] | Per-claim abundance by summing over the partner's claim |
//! | Persistence | [`storage`] | Atomic `Results_<B>_<R>.txt` artifacts |
//! | Sweep | [`sweep`] | Embarrassingly parallel, failure-isolated (R, B) grid |
//!
//! ## State representation
//!
//! A state is an ordered claim pair (c1, c2) with each claim in [2, 100];
//! the flat index `(c1 − 2)·99 + (c2 − 2)` is owned by
//! [`types::ClaimSpace`]. The stationary vector is ordered by that index, so
//! player-1 marginals are contiguous block sums and player-2 marginals are
//! strided sums.
//!
//! ## f64 throughout
//!
//! The transition matrix (~768 MB), the LU factorization, and all output
//! vectors use f64: the stationary entries of interest range over many
//! orders of magnitude once B grows, and the O(D³) elimination accumulates
//! long dot products.

#![allow(clippy::needless_range_loop)]

pub mod abundance;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod payoff;
pub mod stationary;
pub mod storage;
pub mod sweep;
pub mod transition;
pub mod types;
