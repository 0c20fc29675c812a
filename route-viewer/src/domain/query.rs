//! Search form input.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

/// Error returned when the search form input is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A required field was empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The departure time was not `HH:MM` or `HHMM`
    #[error("invalid departure time: {0}")]
    InvalidTime(String),
}

/// A validated route search: two station names and a departure time.
///
/// # Examples
///
/// ```
/// use route_viewer::domain::SearchQuery;
///
/// let query = SearchQuery::new(" Tokyo ", "Shinjuku", "0830").unwrap();
/// assert_eq!(query.from(), "Tokyo");
/// assert_eq!(query.time(), "08:30");
///
/// assert!(SearchQuery::new("", "Shinjuku", "08:30").is_err());
/// assert!(SearchQuery::new("Tokyo", "Shinjuku", "8:30pm").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    from: String,
    to: String,
    time: String,
}

impl SearchQuery {
    /// Validates and normalizes form input.
    ///
    /// Station names are trimmed. The time may be given as `HH:MM` or as
    /// four digits `HHMM`; it is stored as `HH:MM`.
    pub fn new(from: &str, to: &str, time: &str) -> Result<Self, QueryError> {
        let from = from.trim();
        let to = to.trim();
        let time = time.trim();

        if from.is_empty() {
            return Err(QueryError::MissingField("from"));
        }
        if to.is_empty() {
            return Err(QueryError::MissingField("to"));
        }
        if time.is_empty() {
            return Err(QueryError::MissingField("time"));
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            time: normalize_time(time)?,
        })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Departure time as `HH:MM`.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Page header while the search runs, e.g. `"Tokyo → Shinjuku"`.
    pub fn header(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }

    /// Sub-header while the search runs.
    pub fn searching_label(&self) -> String {
        format!("Searching trains after {}...", self.time)
    }

    /// Formats a wall-clock time the way the form pre-fills it.
    pub fn default_time(now: NaiveTime) -> String {
        format!("{:02}:{:02}", now.hour(), now.minute())
    }
}

/// Normalizes `HHMM` to `HH:MM` and checks the result is a valid time.
fn normalize_time(input: &str) -> Result<String, QueryError> {
    let candidate = if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &input[..2], &input[2..])
    } else {
        input.to_string()
    };

    if candidate.len() != 5 {
        return Err(QueryError::InvalidTime(input.to_string()));
    }

    NaiveTime::parse_from_str(&candidate, "%H:%M")
        .map_err(|_| QueryError::InvalidTime(input.to_string()))?;

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_colon_form() {
        let query = SearchQuery::new("Tokyo", "Shinjuku", "08:30").unwrap();
        assert_eq!(query.time(), "08:30");
    }

    #[test]
    fn normalizes_compact_form() {
        let query = SearchQuery::new("Tokyo", "Shinjuku", "2359").unwrap();
        assert_eq!(query.time(), "23:59");
    }

    #[test]
    fn trims_station_names() {
        let query = SearchQuery::new("  Tokyo", "Shinjuku  ", "08:30").unwrap();
        assert_eq!(query.from(), "Tokyo");
        assert_eq!(query.to(), "Shinjuku");
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            SearchQuery::new(" ", "Shinjuku", "08:30"),
            Err(QueryError::MissingField("from"))
        );
        assert_eq!(
            SearchQuery::new("Tokyo", "", "08:30"),
            Err(QueryError::MissingField("to"))
        );
        assert_eq!(
            SearchQuery::new("Tokyo", "Shinjuku", ""),
            Err(QueryError::MissingField("time"))
        );
    }

    #[test]
    fn rejects_bad_times() {
        for bad in ["8:30", "25:00", "12:60", "abcd", "08-30", "083", "08:300"] {
            assert!(
                matches!(
                    SearchQuery::new("Tokyo", "Shinjuku", bad),
                    Err(QueryError::InvalidTime(_))
                ),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn headers() {
        let query = SearchQuery::new("Tokyo", "Shinjuku", "08:30").unwrap();
        assert_eq!(query.header(), "Tokyo → Shinjuku");
        assert_eq!(query.searching_label(), "Searching trains after 08:30...");
    }

    #[test]
    fn default_time_pads() {
        let now = NaiveTime::from_hms_opt(7, 5, 42).unwrap();
        assert_eq!(SearchQuery::default_time(now), "07:05");
    }
}
