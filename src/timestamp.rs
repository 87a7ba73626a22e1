// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Human-relative timestamp formatting and day counting.
//!
//! Buckets below one day come from the elapsed duration alone; day and
//! month buckets compare calendar fields, so "yesterday" and "last month"
//! track calendar boundaries rather than fixed millisecond multiples.

use chrono::{DateTime, Datelike, Utc};

/// Count whole days between two timestamps, truncated.
pub fn get_days_passed(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_days()
}

/// Bucket the elapsed time between `from` (epoch seconds) and `to` (epoch
/// milliseconds) into a human-relative phrase.
///
/// The two arguments use different epoch units on purpose; callers hold
/// second-precision timestamps while the reference instant comes from a
/// millisecond clock. First match wins:
///
/// - under one second, or `to` before `from`: `"now"`
/// - under a minute/hour/day: `"N second[s]/minute[s]/hour[s] ago"`
/// - exactly one calendar day: `"yesterday"`
/// - under one calendar month: `"N days ago"`
/// - exactly one calendar month: `"last month"`
/// - under a year: `"N months ago"`
/// - otherwise: `"more than a year ago"`
pub fn format_timestamp(from_secs: i64, to_millis: i64) -> String {
    let elapsed_millis = to_millis.saturating_sub(from_secs.saturating_mul(1_000));
    if elapsed_millis < 1_000 {
        return "now".to_string();
    }

    let seconds = elapsed_millis / 1_000;
    if seconds < 60 {
        return ago(seconds, "second");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }

    let from = datetime_from_secs(from_secs);
    let to = datetime_from_millis(to_millis);
    let months = months_passed(from, to);

    if months == 0 {
        let days = (to.date_naive() - from.date_naive()).num_days();
        if days == 1 {
            return "yesterday".to_string();
        }
        return ago(days, "day");
    }
    if months == 1 {
        return "last month".to_string();
    }
    if months < 12 {
        return ago(i64::from(months), "month");
    }

    "more than a year ago".to_string()
}

/// Format a timestamp (epoch seconds) relative to the current time.
pub fn format_timestamp_now(from_secs: i64) -> String {
    format_timestamp(from_secs, Utc::now().timestamp_millis())
}

/// Pluralizing `N <unit>[s] ago` helper; drops the `s` when `count` is 1.
fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Full calendar months elapsed from `from` to `to`.
///
/// A month counts only once the day-of-month (and, on equal days, the
/// time-of-day) has been reached.
fn months_passed(from: DateTime<Utc>, to: DateTime<Utc>) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() || (to.day() == from.day() && to.time() < from.time()) {
        months -= 1;
    }
    months.max(0)
}

/// Epoch seconds to UTC, clamped to chrono's representable range.
fn datetime_from_secs(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(if secs < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Epoch milliseconds to UTC, clamped to chrono's representable range.
fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
