pub mod rating_color;
pub mod rating_range;
pub mod rating_summary;
pub mod user_result;
