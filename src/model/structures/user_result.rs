use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One entry of a user's contest history as published by the judge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserResult {
    pub is_rated: bool,
    pub place: i32,
    pub old_rating: i32,
    pub new_rating: i32,
    pub performance: f64,
    pub inner_performance: f64,
    pub contest_screen_name: String,
    pub contest_name: String,
    pub end_time: DateTime<FixedOffset>
}
