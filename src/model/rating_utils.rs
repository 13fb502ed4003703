use crate::{error::EstimatorError, model::constants::POSITIVIZE_THRESHOLD};

/// Maps an unpositivized rating in (-inf, inf) onto a display rating in (0, inf).
///
/// Ratings at or above 400 are unchanged. Lower ratings decay exponentially
/// toward zero, meeting the identity with matching slope at 400.
pub fn positivize_rating(rating: f64) -> f64 {
    if rating >= POSITIVIZE_THRESHOLD {
        return rating;
    }

    POSITIVIZE_THRESHOLD * ((rating - POSITIVIZE_THRESHOLD) / POSITIVIZE_THRESHOLD).exp()
}

/// Inverse of [`positivize_rating`]. Non-positive input has no preimage and
/// yields `NaN` or negative infinity.
pub fn unpositivize_rating(rating: f64) -> f64 {
    if rating >= POSITIVIZE_THRESHOLD {
        return rating;
    }

    POSITIVIZE_THRESHOLD + POSITIVIZE_THRESHOLD * (rating / POSITIVIZE_THRESHOLD).ln()
}

pub fn try_unpositivize_rating(rating: f64) -> Result<f64, EstimatorError> {
    if rating.is_nan() || rating <= 0.0 || rating.is_infinite() {
        return Err(EstimatorError::InvalidInput(format!(
            "display rating must be positive and finite, got {}",
            rating
        )));
    }

    Ok(unpositivize_rating(rating))
}
