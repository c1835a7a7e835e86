use chrono::{DateTime, Utc};

/// Format an entry age in milliseconds: "just now", "45s", "3m", "2h", "4d"
pub fn format_age(age_millis: i64) -> String {
    if age_millis < 0 {
        return "in the future".to_string();
    }

    let seconds = age_millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else if seconds > 0 {
        format!("{}s ago", seconds)
    } else {
        "just now".to_string()
    }
}

/// Format milliseconds since epoch as "2024-05-01 10:00:00 UTC"
pub fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{} ms", millis))
}
