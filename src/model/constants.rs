// Model constants
pub const DECAY_FACTOR: f64 = 0.9;
pub const DECAY_FACTOR_SQ: f64 = 0.81;
pub const PERFORMANCE_SCALE: f64 = 800.0;
pub const COLD_START_OFFSET: f64 = 1200.0;
/// Number of contests standing in for an infinite history in the correction term.
pub const CORRECTION_HORIZON: usize = 400;
// Display transform
pub const POSITIVIZE_THRESHOLD: f64 = 400.0;
// Required performance search
pub const SEARCH_LOWER_BOUND: f64 = -10000.0;
pub const SEARCH_UPPER_BOUND: f64 = 10000.0;
pub const SEARCH_ITERATIONS: usize = 100;
// Colors
pub const COLOR_BAND_WIDTH: f64 = 400.0;
