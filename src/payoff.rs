//! Traveler's Dilemma payoff scheme and the Fermi acceptance rule.

/// Payoff of a player claiming `my_claim` against `other_claim`.
///
/// The lower claimant collects the lower claim plus R, the higher claimant
/// collects the lower claim minus R, and equal claims pay themselves.
/// Negative payoffs pass through unclamped (see DESIGN.md).
#[inline(always)]
pub fn payoff(my_claim: i32, other_claim: i32, reward: f64) -> f64 {
    let lower = my_claim.min(other_claim) as f64;
    if my_claim > other_claim {
        lower - reward
    } else if my_claim < other_claim {
        lower + reward
    } else {
        lower
    }
}

/// Probability of adopting the alternative claim given its payoff edge:
/// `1 / (1 + exp(−B·(alt − current)))`.
///
/// Evaluated with the sign-split logistic so large |B·Δ| saturates to 0 or 1
/// instead of overflowing `exp` into infinity or NaN.
#[inline(always)]
pub fn fermi(alt_payoff: f64, current_payoff: f64, selection: f64) -> f64 {
    let x = selection * (alt_payoff - current_payoff);
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
