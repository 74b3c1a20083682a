//! Signal-strength ranker.
//!
//! Produces a permutation index rather than mutating the observation slice,
//! so callers can render ranked output without disturbing discovery order.
//! `slice::sort_by` is a stable merge sort — ties between equal signal
//! strengths keep their discovery order, which the original index-exchange
//! sort only happened to provide.

use crate::survey::observation::NetworkObservation;

/// Rank observations by signal strength, strongest first.
///
/// Returns the permutation: `result[0]` is the index of the strongest
/// observation.  Empty input yields an empty permutation.
pub fn rank_by_signal(observations: &[NetworkObservation]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..observations.len()).collect();
    order.sort_by(|&a, &b| observations[b].signal_dbm.cmp(&observations[a].signal_dbm));
    order
}
