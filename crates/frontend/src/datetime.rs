//! Timestamp display formatting

use chrono::{DateTime, Local, NaiveDateTime};

/// Rendered for absent timestamps
const EMPTY_PLACEHOLDER: &str = "-";

/// Rendered when the input cannot be parsed
const INVALID_PLACEHOLDER: &str = "invalid date";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Offset-less layouts the backend is known to emit
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Render a backend timestamp as `YYYY-MM-DD HH:mm` for display.
///
/// Offset-bearing inputs are converted to the viewer's local timezone;
/// offset-less inputs are taken as local wall-clock time already. Absent
/// or empty input renders as `-`.
pub fn format_date_time(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return EMPTY_PLACEHOLDER.to_string(),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    for layout in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
            return naive.format(DISPLAY_FORMAT).to_string();
        }
    }

    INVALID_PLACEHOLDER.to_string()
}
