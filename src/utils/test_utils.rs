use crate::model::structures::user_result::UserResult;
use chrono::{Duration, TimeZone, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a performance history of `len` contests, most recent first.
/// The same `seed` always yields the same history.
pub fn generate_history(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Performances scatter around a per-history level
    let level: f64 = rng.random_range(400.0..=2800.0);
    (0..len)
        .map(|_| (level + rng.random_range(-600.0..=600.0f64)).round())
        .collect()
}

/// Generates `n` contest results one week apart, oldest first, the way the
/// judge lists them. Roughly one in five results is unrated.
pub fn generate_user_results(n: usize) -> Vec<UserResult> {
    // Initialize seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let start_time = Utc
        .with_ymd_and_hms(2020, 1, 4, 12, 40, 0)
        .unwrap()
        .fixed_offset();

    let mut old_rating = 0;
    (0..n)
        .map(|i| {
            let is_rated = i == 0 || rng.random_range(0..5) != 0;
            let performance: f64 = rng.random_range(200.0..=3200.0);
            let new_rating = if is_rated {
                (old_rating + performance as i32) / 2
            } else {
                old_rating
            };

            let result = UserResult {
                is_rated,
                place: rng.random_range(1..=8000),
                old_rating,
                new_rating,
                performance: performance.round(),
                inner_performance: performance.round(),
                contest_screen_name: format!("abc{:03}", i + 1),
                contest_name: format!("Beginner Contest {:03}", i + 1),
                end_time: start_time + Duration::weeks(i as i64)
            };
            old_rating = new_rating;

            result
        })
        .collect()
}
