pub mod args;
pub mod error;
pub mod model;
pub mod utils;

pub use error::EstimatorError;
pub use model::{
    rating_engine::{calc_rating_from_history, calc_rating_from_last, calc_required_performance},
    rating_utils::{positivize_rating, unpositivize_rating},
    structures::rating_color::{get_color, RatingColor}
};
