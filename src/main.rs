use clap::Parser;
use rating_estimator::{
    args::Args,
    error::EstimatorError,
    model::{
        data_processing::{performance_history, required_performance_for, summarize},
        structures::user_result::UserResult
    }
};
use serde_json::json;
use std::{fs, io::Read};
use tracing::{error, info};

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), EstimatorError> {
    let history = match &args.performances {
        Some(performances) => performances.clone(),
        None => {
            let results = read_results(args)?;
            info!("Loaded {} contest results", results.len());
            performance_history(&results)
        }
    };

    info!("Estimating rating from {} rated contests", history.len());
    let summary = summarize(&history)?;

    let output = match args.target {
        Some(target) => {
            let required = required_performance_for(target, &history)?;
            json!({ "summary": summary, "target": target, "target_performance": required })
        }
        None => json!({ "summary": summary })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn read_results(args: &Args) -> Result<Vec<UserResult>, EstimatorError> {
    let raw = match &args.history_file {
        Some(path) => {
            info!("Reading contest results from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            info!("Reading contest results from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}
