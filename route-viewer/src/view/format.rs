//! Small formatting helpers for labels.

use chrono::{NaiveTime, Timelike};

/// Format a duration in minutes as `"{h}h {m}m"`, or `"{m}m"` under an hour.
///
/// Zero formats as the empty string so an unknown duration shows nothing.
///
/// # Examples
///
/// ```
/// use route_viewer::view::format_duration;
///
/// assert_eq!(format_duration(95), "1h 35m");
/// assert_eq!(format_duration(42), "42m");
/// assert_eq!(format_duration(0), "");
/// ```
pub fn format_duration(minutes: u32) -> String {
    if minutes == 0 {
        return String::new();
    }
    let (h, m) = (minutes / 60, minutes % 60);
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}

/// Format a count with comma thousands separators, rounding to a whole number.
///
/// ```
/// use route_viewer::view::format_count;
///
/// assert_eq!(format_count(1_234_567.0), "1,234,567");
/// assert_eq!(format_count(999.6), "1,000");
/// ```
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Minutes from `departure` to `arrival`, both `"HH:MM"`.
///
/// An arrival earlier than the departure is taken to be after midnight.
/// Returns `None` if either time does not parse, e.g. the missing-time
/// placeholder.
pub fn minutes_between(departure: &str, arrival: &str) -> Option<u32> {
    let dep = NaiveTime::parse_from_str(departure, "%H:%M").ok()?;
    let arr = NaiveTime::parse_from_str(arrival, "%H:%M").ok()?;
    let dep = dep.hour() * 60 + dep.minute();
    let arr = arr.hour() * 60 + arr.minute();
    Some(if arr >= dep { arr - dep } else { arr + 24 * 60 - dep })
}
