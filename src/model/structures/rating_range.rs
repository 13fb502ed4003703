use serde::{Deserialize, Serialize};

/// Inclusive range of display ratings. `upper` may be infinite.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RatingRange {
    pub lower: f64,
    pub upper: f64
}

impl RatingRange {
    pub const ALL: RatingRange = RatingRange {
        lower: 0.0,
        upper: f64::INFINITY
    };

    /// A range that contains no rating.
    pub const EMPTY: RatingRange = RatingRange { lower: 0.0, upper: -1.0 };

    pub fn new(lower: f64, upper: f64) -> RatingRange {
        RatingRange { lower, upper }
    }

    pub fn contains(&self, rating: f64) -> bool {
        self.lower <= rating && rating <= self.upper
    }

    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }
}
