use chrono::Duration;

use crate::{error::EstimatorError, model::structures::rating_range::RatingRange};

/// Eligibility and penalty settings listed on a contest's top page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestInformation {
    pub participatable_range: RatingRange,
    pub rated_range: RatingRange,
    pub penalty: Duration
}

impl ContestInformation {
    pub fn parse(participatable: &str, rated: &str, penalty: &str) -> Result<ContestInformation, EstimatorError> {
        Ok(ContestInformation {
            participatable_range: parse_range_string(participatable),
            rated_range: parse_range_string(rated),
            penalty: parse_duration_string(penalty)?
        })
    }

    /// Parses the three `Label: value` lines of the information block, in
    /// the order participatable range, rated range, penalty.
    pub fn from_lines(lines: &[&str]) -> Result<ContestInformation, EstimatorError> {
        let values = lines
            .iter()
            .map(|line| {
                line.split_once(':')
                    .map(|(_, value)| value.trim())
                    .ok_or_else(|| EstimatorError::InvalidInput(format!("missing ':' in contest information line '{}'", line)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [participatable, rated, penalty, ..] => ContestInformation::parse(participatable, rated, penalty),
            _ => Err(EstimatorError::InvalidInput(format!(
                "expected 3 contest information lines, got {}",
                values.len()
            )))
        }
    }

    pub fn is_rated_for(&self, display_rating: f64) -> bool {
        self.rated_range.contains(display_rating)
    }
}

/// Parses strings like `All`, `~ 1999`, `1200 ~` or `1200 ~ 2799`. Anything
/// without a `~` is a range nobody falls into.
pub fn parse_range_string(s: &str) -> RatingRange {
    let s = s.trim();
    if s == "All" {
        return RatingRange::ALL;
    }
    if !s.contains('~') {
        return RatingRange::EMPTY;
    }

    let mut bounds = s.split('~').map(|part| parse_leading_int(part.trim()));
    let lower = bounds.next().flatten().map_or(0.0, |v| v as f64);
    let upper = bounds.next().flatten().map_or(f64::INFINITY, |v| v as f64);

    RatingRange::new(lower, upper)
}

/// Parses a penalty such as `5分`, `1時間30分` or `5 minutes`. `None` and
/// `なし` mean no penalty.
pub fn parse_duration_string(s: &str) -> Result<Duration, EstimatorError> {
    let s = s.trim();
    if s == "None" || s == "なし" {
        return Ok(Duration::zero());
    }

    let tokens = duration_tokens(s);
    if tokens.is_empty() {
        return Err(EstimatorError::InvalidDuration(s.to_string()));
    }

    tokens.into_iter().try_fold(Duration::zero(), |total, (digits, unit)| {
        let amount = digits
            .parse::<i32>()
            .map_err(|_| EstimatorError::InvalidDuration(s.to_string()))?;
        let unit = unit_duration(unit).ok_or_else(|| EstimatorError::InvalidDuration(format!("unknown unit '{}' in '{}'", unit, s)))?;

        unit.checked_mul(amount)
            .and_then(|d| total.checked_add(&d))
            .ok_or_else(|| EstimatorError::InvalidDuration(s.to_string()))
    })
}

/// Splits `s` into `(digits, unit)` pairs, each a run of digits followed by a
/// run of non-digits. Leading text and trailing bare digits are ignored.
fn duration_tokens(s: &str) -> Vec<(&str, &str)> {
    let mut tokens = Vec::new();
    let mut rest = s;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let number = &rest[start..];
        let digits_end = number.find(|c: char| !c.is_ascii_digit()).unwrap_or(number.len());
        let after = &number[digits_end..];
        let unit_end = after.find(|c: char| c.is_ascii_digit()).unwrap_or(after.len());
        if unit_end == 0 {
            break;
        }

        tokens.push((&number[..digits_end], after[..unit_end].trim()));
        rest = &after[unit_end..];
    }

    tokens
}

fn unit_duration(unit: &str) -> Option<Duration> {
    match unit {
        // Calendar months count as 30 days
        "ヶ月" | "month" | "months" => Some(Duration::days(30)),
        "日" | "day" | "days" => Some(Duration::days(1)),
        "時間" | "hour" | "hours" => Some(Duration::hours(1)),
        "分" | "minute" | "minutes" => Some(Duration::minutes(1)),
        "秒" | "second" | "seconds" => Some(Duration::seconds(1)),
        _ => None
    }
}

/// Integer prefix of `s`, with an optional sign. `None` if there is none.
fn parse_leading_int(s: &str) -> Option<i64> {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let digits_end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }

    let sign_len = s.len() - unsigned.len();
    s[..sign_len + digits_end].parse().ok()
}
