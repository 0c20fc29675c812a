//! Candidate routes and their annotations.

use std::fmt;

use serde::Serialize;

use super::segment::{MISSING_TIME, Segment};

/// Predictive delay likelihood for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Parses a level label. Unrecognized labels are treated as `Low`.
    ///
    /// ```
    /// use route_viewer::domain::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_label("HIGH"), RiskLevel::High);
    /// assert_eq!(RiskLevel::from_label("SEVERE"), RiskLevel::Low);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "MEDIUM" => RiskLevel::Medium,
            "HIGH" => RiskLevel::High,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crowding classification along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl CrowdLevel {
    /// Parses a level label. Unrecognized labels are treated as `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "LOW" => CrowdLevel::Low,
            "MEDIUM" => CrowdLevel::Medium,
            "HIGH" => CrowdLevel::High,
            _ => CrowdLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "LOW",
            CrowdLevel::Medium => "MEDIUM",
            CrowdLevel::High => "HIGH",
            CrowdLevel::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delay risk computed from historical delay records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Risk {
    pub level: RiskLevel,
    pub reasons: Vec<String>,
}

/// Station-scale crowding estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Crowd {
    pub level: CrowdLevel,
    /// Average daily passengers across the stations used
    pub score: f64,
    pub details: Vec<String>,
}

/// A delay currently reported on a railway used by the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelayWarning {
    pub railway: String,
    pub delay_minutes: u32,
}

/// A ranked candidate itinerary.
///
/// Position in the route set defines display rank; index 0 is the primary
/// recommendation, which is not necessarily the earliest arrival.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Route {
    /// Ordered ride segments. Segment `i`'s `to` is segment `i + 1`'s `from`.
    pub segments: Vec<Segment>,

    /// Transfer count as reported by the search service.
    ///
    /// Usually `segments.len() - 1`, but displayed as sent rather than
    /// recomputed.
    pub transfers: u32,

    pub risk: Risk,

    pub crowd: Crowd,

    /// Live delays, independent of the predictive `risk`
    pub delay_warnings: Vec<DelayWarning>,
}

impl Route {
    /// Creates a route with default annotations.
    pub fn new(segments: Vec<Segment>, transfers: u32) -> Self {
        Self {
            segments,
            transfers,
            ..Self::default()
        }
    }

    /// Departure time of the first segment.
    pub fn first_departure(&self) -> &str {
        self.segments
            .first()
            .map_or(MISSING_TIME, |s| s.departure_time.as_str())
    }

    /// Arrival time of the last segment.
    pub fn final_arrival(&self) -> &str {
        self.segments
            .last()
            .map_or(MISSING_TIME, |s| s.arrival_time.as_str())
    }

    /// Boarding station of the first segment.
    pub fn origin(&self) -> Option<&str> {
        self.segments.first().map(|s| s.from.as_str())
    }

    /// Alighting station of the last segment.
    pub fn destination(&self) -> Option<&str> {
        self.segments.last().map(|s| s.to.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_labels() {
        assert_eq!(RiskLevel::from_label("LOW"), RiskLevel::Low);
        assert_eq!(RiskLevel::from_label("MEDIUM"), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_label("high"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label(""), RiskLevel::Low);
        assert_eq!(RiskLevel::from_label("CRITICAL"), RiskLevel::Low);
    }

    #[test]
    fn crowd_level_labels() {
        assert_eq!(CrowdLevel::from_label("LOW"), CrowdLevel::Low);
        assert_eq!(CrowdLevel::from_label("Medium"), CrowdLevel::Medium);
        assert_eq!(CrowdLevel::from_label("HIGH"), CrowdLevel::High);
        assert_eq!(CrowdLevel::from_label("packed"), CrowdLevel::Unknown);
    }

    #[test]
    fn defaults() {
        let risk = Risk::default();
        assert_eq!(risk.level, RiskLevel::Low);
        assert!(risk.reasons.is_empty());

        let crowd = Crowd::default();
        assert_eq!(crowd.level, CrowdLevel::Unknown);
        assert_eq!(crowd.score, 0.0);
        assert!(crowd.details.is_empty());
    }

    #[test]
    fn route_endpoints() {
        let route = Route::new(
            vec![
                Segment::new("Chuo", "Tokyo", "Shinjuku").with_times("08:00", "08:20"),
                Segment::new("Yamanote", "Shinjuku", "Ikebukuro").with_times("08:25", "08:35"),
            ],
            1,
        );

        assert_eq!(route.first_departure(), "08:00");
        assert_eq!(route.final_arrival(), "08:35");
        assert_eq!(route.origin(), Some("Tokyo"));
        assert_eq!(route.destination(), Some("Ikebukuro"));
    }

    #[test]
    fn empty_route_uses_placeholders() {
        let route = Route::default();
        assert_eq!(route.first_departure(), MISSING_TIME);
        assert_eq!(route.final_arrival(), MISSING_TIME);
        assert_eq!(route.origin(), None);
    }

    #[test]
    fn level_serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
        let json = serde_json::to_string(&CrowdLevel::Unknown).unwrap();
        assert_eq!(json, "\"UNKNOWN\"");
    }
}
