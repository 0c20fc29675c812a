//! Timeline construction.
//!
//! A route is drawn as a vertical timeline. For segments `0..n` the rows are
//!
//! ```text
//! Start, Travel[0], Transfer[0], Travel[1], ..., Transfer[n-2], Travel[n-1], End
//! ```
//!
//! which is always `2n + 1` rows: one start, `n` travel rows, `n - 1`
//! transfers and one end.

use serde::Serialize;

use crate::domain::Segment;

use super::colors::{ColorToken, LineColors};

/// One row of a route timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineRow {
    /// Departure from the origin.
    Start {
        time: String,
        station_name: String,
        color: ColorToken,
    },

    /// Riding one segment.
    Travel {
        railway_name: String,
        train_label: String,
        /// Operational warning for this ride, shown only when present
        note: Option<String>,
        color: ColorToken,
    },

    /// Changing trains between two segments.
    Transfer {
        /// When the incoming train arrives
        arrival_time: String,
        /// When the outgoing train departs
        departure_time: String,
        station_name: String,
        color: ColorToken,
    },

    /// Arrival at the destination.
    End {
        time: String,
        station_name: String,
        color: ColorToken,
    },
}

impl TimelineRow {
    /// The row's color token.
    pub fn color(&self) -> &ColorToken {
        match self {
            TimelineRow::Start { color, .. }
            | TimelineRow::Travel { color, .. }
            | TimelineRow::Transfer { color, .. }
            | TimelineRow::End { color, .. } => color,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, TimelineRow::Start { .. })
    }

    pub fn is_travel(&self) -> bool {
        matches!(self, TimelineRow::Travel { .. })
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, TimelineRow::Transfer { .. })
    }

    pub fn is_end(&self) -> bool {
        matches!(self, TimelineRow::End { .. })
    }
}

/// Build the timeline rows for a route's segments.
///
/// Each row carries the color of the railway it belongs to: the start and
/// first travel row use the first segment's railway, a transfer uses the
/// railway being changed onto, and the end uses the last segment's.
///
/// An empty segment list yields no rows; there is nothing to draw.
///
/// # Examples
///
/// ```
/// use route_viewer::domain::Segment;
/// use route_viewer::timeline::{RailwayPalette, TimelineRow, build_timeline};
///
/// let segments = vec![
///     Segment::new("Chuo", "Tokyo", "Shinjuku").with_times("08:00", "08:20"),
/// ];
/// let rows = build_timeline(&segments, &RailwayPalette::tokyo());
///
/// assert_eq!(rows.len(), 3);
/// assert!(rows[0].is_start());
/// assert!(matches!(&rows[1], TimelineRow::Travel { railway_name, .. } if railway_name == "Chuo"));
/// assert!(matches!(&rows[2], TimelineRow::End { time, .. } if time == "08:20"));
/// ```
pub fn build_timeline(segments: &[Segment], colors: &dyn LineColors) -> Vec<TimelineRow> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return Vec::new();
    };

    let segment_colors: Vec<ColorToken> =
        segments.iter().map(|s| colors.color_for(&s.railway)).collect();

    let mut rows = Vec::with_capacity(2 * segments.len() + 1);

    rows.push(TimelineRow::Start {
        time: first.departure_time.clone(),
        station_name: first.from.clone(),
        color: segment_colors[0].clone(),
    });

    for (i, segment) in segments.iter().enumerate() {
        rows.push(TimelineRow::Travel {
            railway_name: segment.railway.clone(),
            train_label: segment.train_label(),
            note: segment.note.clone(),
            color: segment_colors[i].clone(),
        });

        if let Some(next) = segments.get(i + 1) {
            rows.push(TimelineRow::Transfer {
                arrival_time: segment.arrival_time.clone(),
                departure_time: next.departure_time.clone(),
                station_name: segment.to.clone(),
                color: segment_colors[i + 1].clone(),
            });
        }
    }

    rows.push(TimelineRow::End {
        time: last.arrival_time.clone(),
        station_name: last.to.clone(),
        color: segment_colors[segments.len() - 1].clone(),
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MISSING_TIME;
    use crate::timeline::colors::{NEUTRAL_COLOR, RailwayPalette};

    fn palette() -> RailwayPalette {
        RailwayPalette::neutral()
            .with_rule(&["Chuo"], "bg-orange-500")
            .with_rule(&["Yamanote"], "bg-green-500")
    }

    fn three_segments() -> Vec<Segment> {
        vec![
            Segment::new("Chuo", "Tokyo", "Shinjuku")
                .with_times("08:00", "08:14")
                .with_train("Rapid", Some("801H")),
            Segment::new("Yamanote", "Shinjuku", "Ikebukuro")
                .with_times("08:20", "08:29")
                .with_note("Platform changed to 14"),
            Segment::new("Tobu Tojo", "Ikebukuro", "Narimasu").with_times("08:35", "08:55"),
        ]
    }

    #[test]
    fn single_segment() {
        let segments =
            vec![Segment::new("Chuo", "Tokyo", "Shinjuku").with_times("08:00", "08:20")];
        let rows = build_timeline(&segments, &palette());

        assert_eq!(
            rows,
            vec![
                TimelineRow::Start {
                    time: "08:00".into(),
                    station_name: "Tokyo".into(),
                    color: ColorToken::from_static("bg-orange-500"),
                },
                TimelineRow::Travel {
                    railway_name: "Chuo".into(),
                    train_label: String::new(),
                    note: None,
                    color: ColorToken::from_static("bg-orange-500"),
                },
                TimelineRow::End {
                    time: "08:20".into(),
                    station_name: "Shinjuku".into(),
                    color: ColorToken::from_static("bg-orange-500"),
                },
            ]
        );
    }

    #[test]
    fn interleaves_transfers() {
        let rows = build_timeline(&three_segments(), &palette());
        let kinds: Vec<&str> = rows
            .iter()
            .map(|r| match r {
                TimelineRow::Start { .. } => "start",
                TimelineRow::Travel { .. } => "travel",
                TimelineRow::Transfer { .. } => "transfer",
                TimelineRow::End { .. } => "end",
            })
            .collect();

        assert_eq!(
            kinds,
            vec!["start", "travel", "transfer", "travel", "transfer", "travel", "end"]
        );
    }

    #[test]
    fn transfer_times_come_from_adjacent_segments() {
        let rows = build_timeline(&three_segments(), &palette());

        assert_eq!(
            rows[2],
            TimelineRow::Transfer {
                arrival_time: "08:14".into(),
                departure_time: "08:20".into(),
                station_name: "Shinjuku".into(),
                color: ColorToken::from_static("bg-green-500"),
            }
        );
        assert_eq!(
            rows[4],
            TimelineRow::Transfer {
                arrival_time: "08:29".into(),
                departure_time: "08:35".into(),
                station_name: "Ikebukuro".into(),
                color: ColorToken::from_static(NEUTRAL_COLOR),
            }
        );
    }

    #[test]
    fn travel_rows_carry_label_and_note() {
        let rows = build_timeline(&three_segments(), &palette());

        let TimelineRow::Travel {
            train_label, note, ..
        } = &rows[1]
        else {
            panic!("expected travel row");
        };
        assert_eq!(train_label, "Rapid 801H");
        assert!(note.is_none());

        let TimelineRow::Travel { note, .. } = &rows[3] else {
            panic!("expected travel row");
        };
        assert_eq!(note.as_deref(), Some("Platform changed to 14"));
    }

    #[test]
    fn missing_times_show_placeholder() {
        let segments = vec![
            Segment::new("Chuo", "Tokyo", "Shinjuku"),
            Segment::new("Yamanote", "Shinjuku", "Ikebukuro"),
        ];
        let rows = build_timeline(&segments, &palette());

        assert!(matches!(&rows[0], TimelineRow::Start { time, .. } if time == MISSING_TIME));
        assert!(matches!(
            &rows[2],
            TimelineRow::Transfer { arrival_time, departure_time, .. }
                if arrival_time == MISSING_TIME && departure_time == MISSING_TIME
        ));
        assert!(matches!(&rows[4], TimelineRow::End { time, .. } if time == MISSING_TIME));
    }

    #[test]
    fn empty_segments_yield_no_rows() {
        assert!(build_timeline(&[], &palette()).is_empty());
    }

    #[test]
    fn unknown_railway_gets_neutral_color() {
        let segments = vec![Segment::new("Keio", "Shinjuku", "Chofu")];
        let rows = build_timeline(&segments, &palette());
        assert!(rows.iter().all(|r| r.color().as_str() == NEUTRAL_COLOR));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let segments = vec![Segment::new("Chuo", "Tokyo", "Shinjuku").with_times("08:00", "08:20")];
        let rows = build_timeline(&segments, &palette());
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["kind"], "start");
        assert_eq!(json["station_name"], "Tokyo");
        assert_eq!(json["color"], "bg-orange-500");
    }
}
