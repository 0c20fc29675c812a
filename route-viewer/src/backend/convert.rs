//! Conversion from search service DTOs to domain routes.
//!
//! Normalization is total apart from one case: a route whose `segments` is
//! missing or not a list. Everything else that is absent or malformed is
//! replaced with a display-safe default.

use serde_json::Value;
use tracing::debug;

use crate::domain::{
    Crowd, CrowdLevel, DelayWarning, MISSING_TIME, Risk, RiskLevel, Route, Segment,
};

use super::types::{CrowdDto, DelayWarningDto, RiskDto, RouteDto, RouteSetDto, SegmentDto};

/// Error for a route set payload that cannot be displayed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The payload is not a route set at all
    #[error("malformed route set: {0}")]
    Malformed(String),

    /// A route entry is not an object
    #[error("route {route}: expected an object, got {kind}")]
    RouteNotObject { route: usize, kind: &'static str },

    /// A route has no `segments` field
    #[error("route {route}: missing segments")]
    MissingSegments { route: usize },

    /// A route's `segments` field is not a list
    #[error("route {route}: segments is not a list")]
    SegmentsNotSequence { route: usize },
}

/// Normalize a raw search response into display-ready routes.
///
/// Accepts either the `{"routes": [...]}` envelope or a bare list of
/// routes. A missing or `null` route list yields an empty set, which the
/// caller reports as "no route found".
///
/// # Examples
///
/// ```
/// use route_viewer::backend::normalize_route_set;
/// use route_viewer::domain::{CrowdLevel, RiskLevel};
/// use serde_json::json;
///
/// let routes = normalize_route_set(&json!({
///     "routes": [{
///         "segments": [{"railway": "Chuo", "from": "Tokyo", "to": "Shinjuku",
///                       "departure_time": "08:00"}]
///     }]
/// }))
/// .unwrap();
///
/// assert_eq!(routes[0].segments[0].arrival_time, "--:--");
/// assert_eq!(routes[0].transfers, 0);
/// assert_eq!(routes[0].risk.level, RiskLevel::Low);
/// assert_eq!(routes[0].crowd.level, CrowdLevel::Unknown);
///
/// assert!(normalize_route_set(&json!({"routes": [{"transfers": 1}]})).is_err());
/// ```
pub fn normalize_route_set(raw: &Value) -> Result<Vec<Route>, ValidationError> {
    let raw_routes = match raw {
        Value::Array(items) => items.clone(),
        Value::Object(_) => {
            let dto: RouteSetDto = serde_json::from_value(raw.clone())
                .map_err(|e| ValidationError::Malformed(e.to_string()))?;
            dto.routes.unwrap_or_default()
        }
        Value::Null => Vec::new(),
        other => {
            return Err(ValidationError::Malformed(format!(
                "expected an object or list, got {}",
                json_kind(other)
            )));
        }
    };

    let routes = raw_routes
        .iter()
        .enumerate()
        .map(|(i, route)| normalize_route(i, route))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = routes.len(), "normalized route set");
    Ok(routes)
}

/// Normalize a single raw route. `index` is used for error reporting.
pub fn normalize_route(index: usize, raw: &Value) -> Result<Route, ValidationError> {
    if !raw.is_object() {
        return Err(ValidationError::RouteNotObject {
            route: index,
            kind: json_kind(raw),
        });
    }
    let dto: RouteDto = serde_json::from_value(raw.clone())
        .map_err(|e| ValidationError::Malformed(format!("route {index}: {e}")))?;

    let raw_segments = match dto.segments {
        None => return Err(ValidationError::MissingSegments { route: index }),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::SegmentsNotSequence { route: index }),
    };

    let segments = raw_segments
        .into_iter()
        .map(|value| convert_segment(serde_json::from_value(value).unwrap_or_default()))
        .collect();

    let delay_warnings = dto
        .delay_warnings
        .into_iter()
        .filter_map(|value| serde_json::from_value::<DelayWarningDto>(value).ok())
        .map(convert_delay_warning)
        .collect();

    Ok(Route {
        segments,
        transfers: dto.transfers.unwrap_or(0),
        risk: dto.risk.map(convert_risk).unwrap_or_default(),
        crowd: dto.crowd.map(convert_crowd).unwrap_or_default(),
        delay_warnings,
    })
}

fn convert_segment(dto: SegmentDto) -> Segment {
    Segment {
        railway: dto.railway.unwrap_or_default(),
        from: dto.from.unwrap_or_default(),
        to: dto.to.unwrap_or_default(),
        departure_time: present(dto.departure_time).unwrap_or_else(|| MISSING_TIME.to_string()),
        arrival_time: present(dto.arrival_time).unwrap_or_else(|| MISSING_TIME.to_string()),
        train_type: present(dto.train_type),
        train_number: present(dto.train_number),
        note: present(dto.note),
    }
}

fn convert_risk(dto: RiskDto) -> Risk {
    Risk {
        level: dto
            .level
            .as_deref()
            .map(RiskLevel::from_label)
            .unwrap_or_default(),
        reasons: dto.reasons,
    }
}

fn convert_crowd(dto: CrowdDto) -> Crowd {
    Crowd {
        level: dto
            .level
            .as_deref()
            .map(CrowdLevel::from_label)
            .unwrap_or_default(),
        score: dto.score.filter(|s| s.is_finite()).unwrap_or(0.0),
        details: dto.details,
    }
}

fn convert_delay_warning(dto: DelayWarningDto) -> DelayWarning {
    let delay_minutes = dto
        .delay_minutes
        .or_else(|| dto.delay_seconds.map(|s| u32::try_from(s / 60).unwrap_or(u32::MAX)))
        .unwrap_or(0);

    DelayWarning {
        railway: dto.railway.unwrap_or_default(),
        delay_minutes,
    }
}

/// Blank text counts as absent.
fn present(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_route() -> Value {
        json!({
            "segments": [
                {
                    "railway": "Chuo Rapid",
                    "from": "Tokyo",
                    "to": "Shinjuku",
                    "departure_time": "08:00",
                    "arrival_time": "08:14",
                    "train_type": "Rapid",
                    "train_number": "801H",
                    "note": "Departs from platform 1"
                },
                {
                    "railway": "Yamanote",
                    "from": "Shinjuku",
                    "to": "Ikebukuro",
                    "departure_time": "08:20",
                    "arrival_time": "08:29"
                }
            ],
            "transfers": 1,
            "risk": {"level": "MEDIUM", "reasons": ["Chuo Rapid: delayed 12% of weekdays"]},
            "crowd": {"level": "HIGH", "score": 512345, "details": ["Shinjuku: 650,000"]},
            "delay_warnings": [{"railway": "Yamanote", "delay_minutes": 5}]
        })
    }

    #[test]
    fn normalizes_complete_route() {
        let routes = normalize_route_set(&json!({"routes": [full_route()], "total_found": 4}))
            .unwrap();
        assert_eq!(routes.len(), 1);

        let route = &routes[0];
        assert_eq!(route.segments.len(), 2);
        assert_eq!(route.transfers, 1);
        assert_eq!(route.segments[0].train_label(), "Rapid 801H");
        assert_eq!(
            route.segments[0].note.as_deref(),
            Some("Departs from platform 1")
        );
        assert_eq!(route.risk.level, RiskLevel::Medium);
        assert_eq!(route.risk.reasons.len(), 1);
        assert_eq!(route.crowd.level, CrowdLevel::High);
        assert_eq!(route.crowd.score, 512345.0);
        assert_eq!(
            route.delay_warnings,
            vec![DelayWarning {
                railway: "Yamanote".into(),
                delay_minutes: 5
            }]
        );
    }

    #[test]
    fn defaults_missing_fields() {
        let routes = normalize_route_set(&json!({
            "routes": [{"segments": [{"railway": "Chuo", "from": "Tokyo", "to": "Shinjuku"}]}]
        }))
        .unwrap();

        let route = &routes[0];
        assert_eq!(route.segments[0].departure_time, MISSING_TIME);
        assert_eq!(route.segments[0].arrival_time, MISSING_TIME);
        assert_eq!(route.transfers, 0);
        assert_eq!(route.risk, Risk::default());
        assert_eq!(route.crowd, Crowd::default());
        assert!(route.delay_warnings.is_empty());
    }

    #[test]
    fn blank_strings_are_absent() {
        let routes = normalize_route_set(&json!([{
            "segments": [{
                "railway": "Chuo", "from": "Tokyo", "to": "Shinjuku",
                "departure_time": "", "note": "  ", "train_number": ""
            }]
        }]))
        .unwrap();

        let segment = &routes[0].segments[0];
        assert_eq!(segment.departure_time, MISSING_TIME);
        assert!(segment.note.is_none());
        assert!(segment.train_number.is_none());
    }

    #[test]
    fn missing_route_list_is_empty() {
        assert!(normalize_route_set(&json!({})).unwrap().is_empty());
        assert!(normalize_route_set(&json!({"routes": null})).unwrap().is_empty());
        assert!(normalize_route_set(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn missing_segments_is_rejected() {
        let err = normalize_route_set(&json!({"routes": [full_route(), {"transfers": 0}]}))
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingSegments { route: 1 });
    }

    #[test]
    fn non_list_segments_is_rejected() {
        let err = normalize_route_set(&json!({"routes": [{"segments": "Tokyo-Shinjuku"}]}))
            .unwrap_err();
        assert_eq!(err, ValidationError::SegmentsNotSequence { route: 0 });
    }

    #[test]
    fn non_object_route_is_rejected() {
        let err = normalize_route_set(&json!({"routes": ["Tokyo"]})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RouteNotObject {
                route: 0,
                kind: "a string"
            }
        );
        assert_eq!(err.to_string(), "route 0: expected an object, got a string");
    }

    #[test]
    fn non_list_delay_warnings_read_as_none() {
        for warnings in [json!("none"), json!({"railway": "Chuo"}), json!(5)] {
            let routes = normalize_route_set(&json!({"routes": [{
                "segments": [{"railway": "Chuo", "from": "Tokyo", "to": "Shinjuku"}],
                "delay_warnings": warnings
            }]}))
            .unwrap();

            assert_eq!(routes[0].segments.len(), 1);
            assert!(routes[0].delay_warnings.is_empty());
        }
    }

    #[test]
    fn non_collection_payload_is_rejected() {
        let err = normalize_route_set(&json!("error")).unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
    }

    #[test]
    fn empty_segment_list_is_tolerated() {
        let routes = normalize_route_set(&json!({"routes": [{"segments": []}]})).unwrap();
        assert!(routes[0].segments.is_empty());
    }

    #[test]
    fn delay_minutes_fall_back_to_seconds() {
        let routes = normalize_route_set(&json!({"routes": [{
            "segments": [],
            "delay_warnings": [
                {"railway": "Chuo", "delay_seconds": 600},
                {"railway": "Sobu"},
                "garbage"
            ]
        }]}))
        .unwrap();

        let warnings = &routes[0].delay_warnings;
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].delay_minutes, 10);
        assert_eq!(warnings[1].delay_minutes, 0);
    }

    #[test]
    fn unknown_levels_fall_back() {
        let routes = normalize_route_set(&json!({"routes": [{
            "segments": [],
            "risk": {"level": "EXTREME", "reasons": ["x"]},
            "crowd": {"level": "RUSH", "score": 10}
        }]}))
        .unwrap();

        assert_eq!(routes[0].risk.level, RiskLevel::Low);
        assert_eq!(routes[0].crowd.level, CrowdLevel::Unknown);
    }
}
