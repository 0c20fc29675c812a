//! Search service response DTOs.
//!
//! These types map onto the JSON the search service returns. The service is
//! loosely typed: fields go missing, come back `null`, or switch between
//! strings and numbers. Every field therefore deserializes leniently, and a
//! value of the wrong shape reads as absent instead of failing the payload.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Response from `/search_multi`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteSetDto {
    /// Candidate routes, best first. Kept raw so each can be validated
    /// separately.
    #[serde(default)]
    pub routes: Option<Vec<Value>>,

    /// Number of distinct candidates found before truncation.
    #[serde(default, deserialize_with = "lenient")]
    pub total_found: Option<usize>,
}

/// One candidate route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteDto {
    /// Ride segments. Kept raw: a route whose segments are missing or not a
    /// list is the one malformation that is rejected.
    #[serde(default)]
    pub segments: Option<Value>,

    #[serde(default, deserialize_with = "lenient")]
    pub transfers: Option<u32>,

    #[serde(default, deserialize_with = "lenient")]
    pub risk: Option<RiskDto>,

    #[serde(default, deserialize_with = "lenient")]
    pub crowd: Option<CrowdDto>,

    /// Kept raw so one bad entry drops alone.
    #[serde(default, deserialize_with = "lenient_list")]
    pub delay_warnings: Vec<Value>,
}

/// One ride segment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub railway: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub from: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub to: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub departure_time: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub arrival_time: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub train_type: Option<String>,

    /// Sometimes sent as a bare number.
    #[serde(default, deserialize_with = "lenient_text")]
    pub train_number: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub note: Option<String>,
}

/// Predictive delay risk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: Option<String>,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub reasons: Vec<String>,
}

/// Crowding estimate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrowdDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<f64>,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub details: Vec<String>,
}

/// A live delay report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DelayWarningDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub railway: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub delay_minutes: Option<u32>,

    /// Older responses carry seconds only.
    #[serde(default, deserialize_with = "lenient")]
    pub delay_seconds: Option<u64>,
}

/// Reads any value, keeping it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads a string or number as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_text(&value))
}

/// Reads a list of strings, dropping entries that are not text.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let strings = match value {
        Value::Array(items) => items.iter().filter_map(value_as_text).collect(),
        _ => Vec::new(),
    };
    Ok(strings)
}

/// Reads a list, treating anything else as empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
