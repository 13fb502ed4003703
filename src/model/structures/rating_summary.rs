use serde::Serialize;

use super::rating_color::RatingColor;

/// Rating state derived from a performance history
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub rated_matches: usize,
    /// Internal rating, `None` for a user without rated contests
    pub rating: Option<f64>,
    /// Positivized rating shown to the user
    pub display_rating: Option<f64>,
    pub color: RatingColor,
    /// Next color above the current display rating, `None` once red
    pub next_color: Option<RatingColor>,
    /// Performance needed in the next contest to reach `next_color`
    pub next_color_performance: Option<f64>
}
