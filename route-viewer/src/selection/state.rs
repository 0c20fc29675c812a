//! Selection state and the settings that shape the controller.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::Route;

/// Whether the route list or a single route's detail is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Detail,
}

/// How multiple routes are presented.
///
/// A controller uses exactly one layout for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Summary cards first; picking one opens its detail, and back returns.
    #[default]
    ListDetail,
    /// One tab per route with the active route's detail always showing.
    Tabs,
}

/// What to do with a search completion that is not the latest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Ignore completions of superseded requests.
    #[default]
    Discard,
    /// Apply every completion in arrival order.
    AcceptAll,
}

/// A setting value that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {setting} '{value}'")]
pub struct ParseSettingError {
    pub setting: &'static str,
    pub value: String,
}

impl FromStr for Layout {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "list_detail" | "list-detail" => Ok(Layout::ListDetail),
            "tabs" => Ok(Layout::Tabs),
            _ => Err(ParseSettingError {
                setting: "layout",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for StaleResponsePolicy {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(StaleResponsePolicy::Discard),
            "accept" | "accept_all" | "accept-all" => Ok(StaleResponsePolicy::AcceptAll),
            _ => Err(ParseSettingError {
                setting: "stale response policy",
                value: s.to_string(),
            }),
        }
    }
}

/// Why a search produced nothing to show.
///
/// The display text is the message shown to the user; the underlying
/// detail is logged where the failure is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum SearchFailure {
    /// The payload could not be turned into routes.
    #[error("No result could be shown for this search.")]
    Validation,

    /// The search call failed or returned a non-success status.
    #[error("Could not reach the server.")]
    Network,

    /// The search succeeded but found no routes.
    #[error("No route found.")]
    EmptyResult,
}

/// Where the current search stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search yet.
    #[default]
    Idle,
    Loading,
    /// Routes are available.
    Ready,
    Failed(SearchFailure),
}

/// Identifies one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub(crate) u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the views need to know about the current selection.
///
/// `active_index` is always in range while `routes` is non-empty, and 0
/// otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub(crate) routes: Vec<Route>,
    pub(crate) active_index: usize,
    pub(crate) view_mode: ViewMode,
    pub(crate) phase: SearchPhase,
}

impl SelectionState {
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The route currently selected, if there are any routes.
    pub fn active_route(&self) -> Option<&Route> {
        self.routes.get(self.active_index)
    }
}
