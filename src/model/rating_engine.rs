use lazy_static::lazy_static;
use tracing::debug;

use crate::{
    error::EstimatorError,
    model::constants::{
        COLD_START_OFFSET, CORRECTION_HORIZON, DECAY_FACTOR, DECAY_FACTOR_SQ, PERFORMANCE_SCALE, SEARCH_ITERATIONS,
        SEARCH_LOWER_BOUND, SEARCH_UPPER_BOUND
    }
};

lazy_static! {
    /// Limit of [`bigf`] for an infinitely long history.
    static ref FINF: f64 = bigf(CORRECTION_HORIZON);
}

/// The powers are accumulated by repeated multiplication rather than `powi`.
/// Ratings computed here are compared against values derived from this exact
/// operation order, so the two must not be mixed.
fn bigf(n: usize) -> f64 {
    let mut numerator: f64 = 1.0;
    let mut denominator: f64 = 1.0;
    for _ in 0..n {
        numerator *= DECAY_FACTOR_SQ;
        denominator *= DECAY_FACTOR;
    }

    let numerator = (1.0 - numerator) * DECAY_FACTOR_SQ / 0.19;
    let denominator = (1.0 - denominator) * DECAY_FACTOR / 0.1;

    numerator.sqrt() / denominator
}

/// Correction subtracted from the raw weighted aggregate of `n` performances.
/// Equals [`COLD_START_OFFSET`] for a single contest and tends to zero as `n` grows.
fn correction(n: usize) -> f64 {
    (bigf(n) - *FINF) / (bigf(1) - *FINF) * COLD_START_OFFSET
}

/// Computes an unpositivized rating from a performance history.
///
/// `history[0]` is the most recent contest. Each older contest contributes
/// with an extra factor of 0.9, so recent results dominate.
///
/// The history must not be empty: an empty slice yields `NaN`. Use
/// [`try_calc_rating_from_history`] to reject it instead.
pub fn calc_rating_from_history(history: &[f64]) -> f64 {
    let n = history.len();
    let mut numerator: f64 = 0.0;
    let mut denominator: f64 = 0.0;
    for perf in history.iter().rev() {
        numerator *= DECAY_FACTOR;
        numerator += DECAY_FACTOR * 2f64.powf(perf / PERFORMANCE_SCALE);
        denominator *= DECAY_FACTOR;
        denominator += DECAY_FACTOR;
    }

    (numerator / denominator).log2() * PERFORMANCE_SCALE - correction(n)
}

/// Computes the unpositivized rating after one more contest, given the
/// previous unpositivized rating `last` over `rated_matches` contests.
///
/// Equivalent to calling [`calc_rating_from_history`] with `perf` prepended
/// to the full history, without rescanning it.
pub fn calc_rating_from_last(last: f64, perf: f64, rated_matches: usize) -> f64 {
    if rated_matches == 0 {
        return perf - COLD_START_OFFSET;
    }

    let last = last + correction(rated_matches);
    let weight = 9.0 - 9.0 * DECAY_FACTOR.powi(rated_matches as i32);
    let numerator = weight * 2f64.powf(last / PERFORMANCE_SCALE) + 2f64.powf(perf / PERFORMANCE_SCALE);
    let denominator = 1.0 + weight;

    (numerator / denominator).log2() * PERFORMANCE_SCALE - correction(rated_matches + 1)
}

/// Finds the performance needed in the next contest so that the resulting
/// unpositivized rating reaches `target_rating`.
///
/// Bisects `[-10000, 10000]` for a fixed number of iterations and returns the
/// lower bound of the final interval, i.e. a conservative estimate.
pub fn calc_required_performance(target_rating: f64, history: &[f64]) -> f64 {
    let mut upper = SEARCH_UPPER_BOUND;
    let mut lower = SEARCH_LOWER_BOUND;

    let mut candidate = Vec::with_capacity(history.len() + 1);
    candidate.push(0.0);
    candidate.extend_from_slice(history);

    for _ in 0..SEARCH_ITERATIONS {
        let mid = (lower + upper) / 2.0;
        candidate[0] = mid;

        let rating = calc_rating_from_history(&candidate);
        if target_rating <= rating {
            upper = mid;
        } else {
            lower = mid;
        }
    }

    debug!(target_rating, history_len = history.len(), performance = lower, "Solved required performance");

    lower
}

pub fn try_calc_rating_from_history(history: &[f64]) -> Result<f64, EstimatorError> {
    if history.is_empty() {
        return Err(EstimatorError::InvalidInput(
            "performance history must contain at least one contest".to_string()
        ));
    }
    ensure_finite("performance history", history)?;

    Ok(calc_rating_from_history(history))
}

pub fn try_calc_rating_from_last(last: f64, perf: f64, rated_matches: usize) -> Result<f64, EstimatorError> {
    ensure_finite("previous rating and performance", &[last, perf])?;

    Ok(calc_rating_from_last(last, perf, rated_matches))
}

pub fn try_calc_required_performance(target_rating: f64, history: &[f64]) -> Result<f64, EstimatorError> {
    ensure_finite("target rating", &[target_rating])?;
    ensure_finite("performance history", history)?;

    Ok(calc_required_performance(target_rating, history))
}

/// Rejects NaN and infinite values, naming the offending position.
pub(crate) fn ensure_finite(what: &str, values: &[f64]) -> Result<(), EstimatorError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(EstimatorError::InvalidInput(format!(
            "{} contains a non-finite value at index {}: {}",
            what, idx, values[idx]
        ))),
        None => Ok(())
    }
}
