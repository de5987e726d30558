//! Time utilities: relative "time ago" labels, elapsed time formatting.

use chrono::{DateTime, Utc};

/// Short relative label for a past instant.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

pub fn format_elapsed(hours: i64, minutes: i64) -> String {
    format!("{}h {}m", hours, minutes)
}
