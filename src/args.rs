use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "rating-estimator",
    author = "rating-estimator contributors",
    about = "Estimates a contest rating from a performance history",
    long_about = "Estimates a competitive programming rating, its color and the performance \
    needed to reach the next color from a user's contest results"
)]
pub struct Args {
    /// Contest results JSON as published on the user's history page.
    /// Read from stdin when neither this nor --performances is given.
    #[arg(
        short = 'f',
        long,
        env,
        conflicts_with = "performances",
        help = "Path to a contest results JSON file"
    )]
    pub history_file: Option<PathBuf>,

    /// Performances of rated contests, most recent first
    #[arg(
        short,
        long,
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true,
        help = "Comma separated performances, most recent first"
    )]
    pub performances: Option<Vec<f64>>,

    /// Display rating to compute the required next performance for
    #[arg(short, long, help = "Target display rating")]
    pub target: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
