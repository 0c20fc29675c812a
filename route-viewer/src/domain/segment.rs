//! Ride segments.

use serde::Serialize;

/// Placeholder shown wherever a time is absent from the search response.
pub const MISSING_TIME: &str = "--:--";

/// One uninterrupted ride on a single railway between two stations.
///
/// Times are kept as the `"HH:MM"` text the search service sent. Absent
/// times are normalized to [`MISSING_TIME`] so display code never has to
/// handle the missing case.
///
/// # Examples
///
/// ```
/// use route_viewer::domain::{Segment, MISSING_TIME};
///
/// let seg = Segment::new("Chuo", "Tokyo", "Shinjuku").with_times("08:00", "08:20");
/// assert_eq!(seg.departure_time, "08:00");
///
/// let bare = Segment::new("Chuo", "Tokyo", "Shinjuku");
/// assert_eq!(bare.arrival_time, MISSING_TIME);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Railway line name
    pub railway: String,

    /// Boarding station
    pub from: String,

    /// Alighting station
    pub to: String,

    /// Departure time from `from`
    pub departure_time: String,

    /// Arrival time at `to`
    pub arrival_time: String,

    /// Train type (e.g. "Rapid")
    pub train_type: Option<String>,

    /// Train number
    pub train_number: Option<String>,

    /// Operational note, e.g. a platform change
    pub note: Option<String>,
}

impl Segment {
    /// Creates a segment with no times or train details.
    pub fn new(railway: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            railway: railway.into(),
            from: from.into(),
            to: to.into(),
            departure_time: MISSING_TIME.to_string(),
            arrival_time: MISSING_TIME.to_string(),
            train_type: None,
            train_number: None,
            note: None,
        }
    }

    /// Sets the departure and arrival times.
    pub fn with_times(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_time = departure.into();
        self.arrival_time = arrival.into();
        self
    }

    /// Sets the train type and optional number.
    pub fn with_train(mut self, train_type: impl Into<String>, number: Option<&str>) -> Self {
        self.train_type = Some(train_type.into());
        self.train_number = number.map(str::to_string);
        self
    }

    /// Attaches an operational note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Label for the train running this segment.
    ///
    /// `"{train_type} {train_number}"` when a number is known, the type
    /// alone otherwise, and empty when neither is known.
    pub fn train_label(&self) -> String {
        match (self.train_type.as_deref(), self.train_number.as_deref()) {
            (Some(kind), Some(number)) => format!("{kind} {number}"),
            (None, Some(number)) => number.to_string(),
            (Some(kind), None) => kind.to_string(),
            (None, None) => String::new(),
        }
    }
}
