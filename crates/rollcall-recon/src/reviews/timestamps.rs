use chrono::{DateTime, NaiveDate, NaiveDateTime};

use rollcall_core::ReviewRecord;

const NAIVE_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const ZONED_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Render a review timestamp as ISO-8601 with milliseconds.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DD HH:MM:SS ±ZZZZ UTC`. Returns `None` for anything else.
pub fn normalize_timestamp(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(chrono::NaiveTime::MIN).format(NAIVE_MILLIS).to_string());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.format(NAIVE_MILLIS).to_string());
    }
    if let Ok(datetime) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z UTC") {
        return Some(datetime.format(ZONED_MILLIS).to_string());
    }
    None
}

/// Rewrite `timestamp` and `adminReviewedAt` in place; unparseable values are kept.
pub fn normalize_timestamps(reviews: &mut [ReviewRecord]) {
    for review in reviews.iter_mut() {
        if let Some(ts) = normalize_timestamp(&review.timestamp) {
            review.timestamp = ts;
        }
        if let Some(ts) = review.admin_reviewed_at.as_deref().and_then(normalize_timestamp) {
            review.admin_reviewed_at = Some(ts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only() {
        assert_eq!(
            normalize_timestamp("2023-01-05").as_deref(),
            Some("2023-01-05T00:00:00.000")
        );
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(
            normalize_timestamp("2023-01-05T14:03:09").as_deref(),
            Some("2023-01-05T14:03:09.000")
        );
    }

    #[test]
    fn test_utc_suffixed() {
        assert_eq!(
            normalize_timestamp("2023-01-05 14:03:09 +0000 UTC").as_deref(),
            Some("2023-01-05T14:03:09.000+00:00")
        );
        assert_eq!(
            normalize_timestamp("2023-01-05 14:03:09 -0500 UTC").as_deref(),
            Some("2023-01-05T14:03:09.000-05:00")
        );
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(normalize_timestamp(""), None);
        assert_eq!(normalize_timestamp("yesterday"), None);
        assert_eq!(normalize_timestamp("05/01/2023"), None);
    }
}
