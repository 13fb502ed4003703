use itertools::Itertools;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    error::EstimatorError,
    model::{
        rating_engine::{calc_rating_from_history, calc_required_performance, ensure_finite, try_calc_required_performance},
        rating_utils::{positivize_rating, try_unpositivize_rating, unpositivize_rating},
        structures::{rating_color::RatingColor, rating_summary::RatingSummary, user_result::UserResult}
    }
};

/// Extracts the performances of rated contests, most recent first.
pub fn performance_history(results: &[UserResult]) -> Vec<f64> {
    results
        .iter()
        .filter(|r| r.is_rated)
        .sorted_by(|a, b| b.end_time.cmp(&a.end_time))
        .map(|r| r.performance)
        .collect()
}

pub fn rated_matches(results: &[UserResult]) -> usize {
    results.iter().filter(|r| r.is_rated).count()
}

/// Summarizes a most-recent-first performance history. An empty history
/// describes an unrated user.
pub fn summarize(history: &[f64]) -> Result<RatingSummary, EstimatorError> {
    ensure_finite("performance history", history)?;

    let rating = if history.is_empty() {
        None
    } else {
        Some(calc_rating_from_history(history))
    };
    let display_rating = rating.map(positivize_rating);
    let color = display_rating.map_or(RatingColor::Unrated, RatingColor::from_rating);

    let next_color = next_color(display_rating.unwrap_or(0.0));
    let next_color_performance = next_color
        .and_then(RatingColor::lower_bound)
        .map(|bound| calc_required_performance(unpositivize_rating(bound), history));

    debug!(
        rated_matches = history.len(),
        ?display_rating,
        %color,
        "Summarized performance history"
    );

    Ok(RatingSummary {
        rated_matches: history.len(),
        rating,
        display_rating,
        color,
        next_color,
        next_color_performance
    })
}

pub fn summarize_results(results: &[UserResult]) -> Result<RatingSummary, EstimatorError> {
    summarize(&performance_history(results))
}

/// Performance needed in the next contest to reach the display rating `target`.
pub fn required_performance_for(target: f64, history: &[f64]) -> Result<f64, EstimatorError> {
    let target_rating = try_unpositivize_rating(target)?;

    try_calc_required_performance(target_rating, history)
}

/// First color whose band starts strictly above `display_rating`.
fn next_color(display_rating: f64) -> Option<RatingColor> {
    RatingColor::iter().find(|c| c.lower_bound().is_some_and(|bound| bound > display_rating))
}
