//! Relative timestamps ("about 2 hours ago") for card headers.

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Describe the distance from `now_ms` to `then_ms` in words, with a suffix.
///
/// ```
/// use notecard_core::time::format_relative;
///
/// let now = 1_700_000_000_000;
/// assert_eq!(format_relative(now - 3 * 60_000, now), "3 minutes ago");
/// assert_eq!(format_relative(now + 2 * 86_400_000, now), "in 2 days");
/// ```
#[must_use]
pub fn format_relative(then_ms: i64, now_ms: i64) -> String {
    let distance = distance_in_words(now_ms.abs_diff(then_ms) / 1000);
    if then_ms > now_ms {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// [`format_relative`] against the current time
#[must_use]
pub fn format_relative_now(then_ms: i64) -> String {
    format_relative(then_ms, chrono::Utc::now().timestamp_millis())
}

#[allow(clippy::cast_possible_wrap)] // distances fit comfortably in i64 minutes
fn distance_in_words(seconds: u64) -> String {
    let minutes = round_div(seconds as i64, 60);

    if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!(
            "about {}",
            plural(round_div(minutes, MINUTES_IN_HOUR), "hour")
        )
    } else if minutes < 42 * MINUTES_IN_HOUR {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        plural(round_div(minutes, MINUTES_IN_DAY), "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        format!(
            "about {}",
            plural(round_div(minutes, MINUTES_IN_MONTH), "month")
        )
    } else if minutes < 12 * MINUTES_IN_MONTH {
        plural(round_div(minutes, MINUTES_IN_MONTH), "month")
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        let years = months / 12;
        match months % 12 {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

const fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
