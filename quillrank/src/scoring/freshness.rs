//! Freshness scoring with exponential half-life decay
//!
//! Content recency is one of the fused relevance signals: a brand-new
//! document scores ~1.0 and a document exactly one half-life old scores 0.5.
//! Date parsing is deliberately forgiving because upstream indexes mix
//! several encodings; anything that cannot be parsed scores 0.0 rather than
//! failing the search call.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::models::BusinessDate;

/// Epoch values above this are interpreted as milliseconds
const EPOCH_MILLIS_CUTOFF: f64 = 1e12;

/// Computes recency decay scores from content dates
///
/// `score = exp(-ln 2 * age_days / half_life_days)`, with age clamped to
/// zero for future-dated content. This function never fails: missing or
/// unparseable dates score exactly 0.0.
#[derive(Debug, Clone)]
pub struct FreshnessScorer {
    half_life_days: f64,
}

impl FreshnessScorer {
    /// Create a scorer with the given half-life in days
    pub fn new(half_life_days: f64) -> Self {
        Self { half_life_days }
    }

    /// Score a content date against the current time
    pub fn score(&self, date: Option<&BusinessDate>) -> f64 {
        self.score_at(date, Utc::now())
    }

    /// Score a content date against an explicit reference time
    pub fn score_at(&self, date: Option<&BusinessDate>, now: DateTime<Utc>) -> f64 {
        let Some(date) = date else {
            return 0.0;
        };

        let Some(parsed) = parse_date(date) else {
            debug!(?date, "could not parse business date, freshness is 0.0");
            return 0.0;
        };

        // Whole days, matching the granularity the weights were tuned for
        let age_days = (now - parsed).num_days().max(0) as f64;
        let lambda = std::f64::consts::LN_2 / self.half_life_days;
        (-lambda * age_days).exp()
    }
}

fn parse_date(date: &BusinessDate) -> Option<DateTime<Utc>> {
    match date {
        BusinessDate::Timestamp(ts) => Some(*ts),
        BusinessDate::Epoch(raw) => parse_epoch(*raw),
        BusinessDate::Text(text) => parse_text(text),
    }
}

fn parse_epoch(raw: f64) -> Option<DateTime<Utc>> {
    let secs = if raw > EPOCH_MILLIS_CUTOFF {
        raw / 1000.0
    } else {
        raw
    };
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp(secs as i64, 0)
}

/// Parse the string date shapes seen in practice. Naive datetimes are
/// assumed UTC.
fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const HALF_LIFE: f64 = 250.0;

    fn scorer() -> FreshnessScorer {
        FreshnessScorer::new(HALF_LIFE)
    }

    #[test]
    fn fresh_content_scores_near_one() {
        let now = Utc::now();
        let score = scorer().score_at(Some(&BusinessDate::Timestamp(now)), now);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn half_life_old_content_scores_half() {
        let now = Utc::now();
        let old = now - Duration::days(HALF_LIFE as i64);
        let score = scorer().score_at(Some(&BusinessDate::Timestamp(old)), now);
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn future_dates_clamp_to_one() {
        let now = Utc::now();
        let future = now + Duration::days(30);
        let score = scorer().score_at(Some(&BusinessDate::Timestamp(future)), now);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn score_is_always_in_unit_interval() {
        let now = Utc::now();
        for days in [0, 1, 100, 1_000, 10_000] {
            let date = BusinessDate::Timestamp(now - Duration::days(days));
            let score = scorer().score_at(Some(&date), now);
            assert!(score > 0.0 && score <= 1.0, "days={days} score={score}");
        }
    }

    #[test]
    fn missing_date_scores_zero() {
        assert_eq!(scorer().score(None), 0.0);
    }

    #[test]
    fn garbage_string_scores_zero() {
        let garbage = BusinessDate::Text("garbage".to_string());
        assert_eq!(scorer().score(Some(&garbage)), 0.0);
        let empty = BusinessDate::Text("  ".to_string());
        assert_eq!(scorer().score(Some(&empty)), 0.0);
    }

    #[test]
    fn naive_datetime_string_assumed_utc() {
        let now = Utc::now();
        let date = BusinessDate::Text("2022-04-04 18:36:24".to_string());
        let score = scorer().score_at(Some(&date), now);
        assert!(score > 0.0);
    }

    #[test]
    fn bare_date_string_parses() {
        let now = Utc::now();
        let date = BusinessDate::Text("2024-01-15".to_string());
        assert!(scorer().score_at(Some(&date), now) > 0.0);
    }

    #[test]
    fn trailing_z_string_parses() {
        let now = Utc::now();
        let date = BusinessDate::Text("2024-01-15T12:00:00Z".to_string());
        assert!(scorer().score_at(Some(&date), now) > 0.0);
    }

    #[test]
    fn epoch_millis_rescaled() {
        let now = Utc::now();
        let secs = now.timestamp() as f64;
        let as_secs = scorer().score_at(Some(&BusinessDate::Epoch(secs)), now);
        let as_millis = scorer().score_at(Some(&BusinessDate::Epoch(secs * 1000.0)), now);
        assert!((as_secs - 1.0).abs() < 1e-6);
        assert!((as_millis - 1.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_epoch_scores_zero() {
        assert_eq!(scorer().score(Some(&BusinessDate::Epoch(f64::NAN))), 0.0);
        assert_eq!(
            scorer().score(Some(&BusinessDate::Epoch(f64::INFINITY))),
            0.0
        );
    }
}
