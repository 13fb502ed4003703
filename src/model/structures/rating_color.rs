use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::model::constants::COLOR_BAND_WIDTH;

/// Color band of a positivized rating. Each band is 400 points wide, with
/// everything from 2800 upward being red.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum RatingColor {
    Unrated = 0,
    Gray = 1,
    Brown = 2,
    Green = 3,
    Cyan = 4,
    Blue = 5,
    Yellow = 6,
    Orange = 7,
    Red = 8
}

impl RatingColor {
    /// Classifies a positivized rating. Zero, negative and `NaN` ratings are
    /// [`RatingColor::Unrated`].
    pub fn from_rating(rating: f64) -> RatingColor {
        if rating.is_nan() || rating <= 0.0 {
            return RatingColor::Unrated;
        }

        // Clamp before the cast so huge ratings cannot overflow the index
        let band = (rating / COLOR_BAND_WIDTH).floor().min(7.0) as i32;

        RatingColor::try_from(band + 1).unwrap_or(RatingColor::Red)
    }

    /// Lowest positivized rating shown in this color.
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            RatingColor::Unrated => None,
            color => Some((color as u8 - 1) as f64 * COLOR_BAND_WIDTH)
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<i32> for RatingColor {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(RatingColor::Unrated),
            1 => Ok(RatingColor::Gray),
            2 => Ok(RatingColor::Brown),
            3 => Ok(RatingColor::Green),
            4 => Ok(RatingColor::Cyan),
            5 => Ok(RatingColor::Blue),
            6 => Ok(RatingColor::Yellow),
            7 => Ok(RatingColor::Orange),
            8 => Ok(RatingColor::Red),
            _ => Err(())
        }
    }
}

/// Name of the color band a positivized rating falls into.
pub fn get_color(rating: f64) -> &'static str {
    RatingColor::from_rating(rating).name()
}
