mod common;

use approx::assert_abs_diff_eq;
use common::init_test_env;
use rating_estimator::{
    error::EstimatorError,
    model::{
        contest_information::ContestInformation,
        data_processing::{performance_history, rated_matches, summarize_results},
        history_cache::HistoryCache,
        rating_engine::calc_rating_from_last,
        structures::{rating_color::RatingColor, user_result::UserResult}
    },
    utils::test_utils::generate_user_results
};
use std::{io::Write, process::Command};

const HISTORY_JSON: &str = r#"[
    {"IsRated": true, "Place": 2011, "OldRating": 0, "NewRating": 310, "Performance": 1510, "InnerPerformance": 1510,
     "ContestScreenName": "abc101.contest.atcoder.jp", "ContestName": "ABC 101", "EndTime": "2018-06-23T22:40:00+09:00"},
    {"IsRated": false, "Place": 30, "OldRating": 310, "NewRating": 310, "Performance": 2900, "InnerPerformance": 2900,
     "ContestScreenName": "arc100.contest.atcoder.jp", "ContestName": "ARC 100", "EndTime": "2018-07-01T22:40:00+09:00"},
    {"IsRated": true, "Place": 1200, "OldRating": 310, "NewRating": 602, "Performance": 1700, "InnerPerformance": 1700,
     "ContestScreenName": "abc102.contest.atcoder.jp", "ContestName": "ABC 102", "EndTime": "2018-07-01T22:40:00+09:00"}
]"#;

#[test]
fn test_summary_from_judge_json() {
    init_test_env();

    let results: Vec<UserResult> = serde_json::from_str(HISTORY_JSON).unwrap();
    let history = performance_history(&results);

    assert_eq!(history, vec![1700.0, 1510.0]);
    assert_eq!(rated_matches(&results), 2);

    let summary = summarize_results(&results).unwrap();
    let expected = calc_rating_from_last(calc_rating_from_last(0.0, 1510.0, 0), 1700.0, 1);

    assert_eq!(summary.rated_matches, 2);
    assert_abs_diff_eq!(summary.rating.unwrap(), expected, epsilon = 1e-6);
    assert_eq!(summary.color, RatingColor::from_rating(summary.display_rating.unwrap()));
}

#[test]
fn test_incremental_replay_of_generated_results() {
    init_test_env();

    let results = generate_user_results(40);

    // Results are listed oldest first; fold them one contest at a time
    let mut rating = 0.0;
    let mut matches = 0;
    for result in results.iter().filter(|r| r.is_rated) {
        rating = calc_rating_from_last(rating, result.performance, matches);
        matches += 1;
    }

    let summary = summarize_results(&results).unwrap();

    assert_eq!(summary.rated_matches, matches);
    assert_abs_diff_eq!(summary.rating.unwrap(), rating, epsilon = 1e-6);
}

#[test]
fn test_cache_feeds_summary() {
    init_test_env();

    let mut cache = HistoryCache::new();
    let results = cache
        .get_or_try_insert_with("chokudai", || serde_json::from_str::<Vec<UserResult>>(HISTORY_JSON))
        .unwrap()
        .to_vec();

    assert_eq!(summarize_results(&results).unwrap().rated_matches, 2);
    assert_eq!(cache.performance_history("chokudai"), Some(vec![1700.0, 1510.0]));

    cache.invalidate("chokudai");
    assert!(cache.get("chokudai").is_none());
}

#[test]
fn test_contest_rated_range_against_summary() {
    init_test_env();

    let results: Vec<UserResult> = serde_json::from_str(HISTORY_JSON).unwrap();
    let display = summarize_results(&results).unwrap().display_rating.unwrap();

    let beginner = ContestInformation::from_lines(&["Can Participate: All", "Rated Range: ~ 1999", "Penalty: 5分"]).unwrap();
    let grand = ContestInformation::parse("All", "1200 ~ ", "5 minutes").unwrap();

    assert!(beginner.is_rated_for(display));
    assert_eq!(grand.is_rated_for(display), display >= 1200.0);
}

#[test]
fn test_contest_information_rejects_bad_penalty() {
    init_test_env();

    let result = ContestInformation::parse("All", "All", "later");

    assert!(matches!(result, Err(EstimatorError::InvalidDuration(_))));
}

#[test]
fn test_cli_performances() {
    let output = Command::new(env!("CARGO_BIN_EXE_rating-estimator"))
        .args(["--performances", "1500", "--target", "400", "--log-level", "error"])
        .env_remove("HISTORY_FILE")
        .output()
        .expect("Failed to execute rating-estimator");

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_abs_diff_eq!(json["summary"]["rating"].as_f64().unwrap(), 300.0, epsilon = 1e-9);
    assert_eq!(json["summary"]["color"], "gray");
    assert_eq!(json["summary"]["next_color"], "brown");
    assert!(json["target_performance"].as_f64().is_some());
}

#[test]
fn test_cli_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rating-estimator"))
        .args(["--log-level", "error"])
        .env_remove("HISTORY_FILE")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .expect("Failed to execute rating-estimator");

    child.stdin.take().unwrap().write_all(HISTORY_JSON.as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["rated_matches"], 2);
}

#[test]
fn test_cli_fails_on_invalid_json() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rating-estimator"))
        .args(["--log-level", "error"])
        .env_remove("HISTORY_FILE")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .expect("Failed to execute rating-estimator");

    child.stdin.take().unwrap().write_all(b"not json").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to deserialize contest results"));
}
