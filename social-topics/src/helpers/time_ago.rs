use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Compact relative age of `then` as seen at `now`: `Just now`, `5m` or `3h`.
///
/// Dates in the future count as `Just now`.
///
/// ```
/// use chrono::{Duration, Utc};
/// use social_topics::helpers::format_time_ago;
///
/// let now = Utc::now();
/// assert_eq!(format_time_ago(now - Duration::seconds(150), now), "2m");
/// ```
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_seconds();

    if elapsed < SECONDS_PER_MINUTE {
        "Just now".to_string()
    } else if elapsed < SECONDS_PER_HOUR {
        format!("{}m", elapsed / SECONDS_PER_MINUTE)
    } else {
        format!("{}h", elapsed / SECONDS_PER_HOUR)
    }
}

pub fn format_time_ago_from_now(then: DateTime<Utc>) -> String {
    format_time_ago(then, Utc::now())
}
