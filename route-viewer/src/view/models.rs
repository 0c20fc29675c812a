//! View models.
//!
//! Plain data describing what to show. They carry every label already
//! formatted, so a renderer only lays them out.

use serde::Serialize;

use crate::domain::{RiskLevel, SearchQuery};
use crate::selection::{Layout, ViewMode};

/// Styling class of a route card, from its risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Caution,
    Alert,
}

impl Tone {
    /// Exhaustive over [`RiskLevel`]; unrecognized labels already parse as
    /// `Low` and so land on `Neutral`.
    pub fn from_risk(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Tone::Neutral,
            RiskLevel::Medium => Tone::Caution,
            RiskLevel::High => Tone::Alert,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Caution => "caution",
            Tone::Alert => "alert",
        }
    }
}

/// One card in the route list, or one tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCardView {
    pub index: usize,
    pub is_active: bool,
    /// e.g. `"08:20 arr"`
    pub arrival_label: String,
    /// e.g. `"(08:00 dep)"`
    pub departure_label: String,
    /// e.g. `"1 transfer(s)"`
    pub transfers_label: String,
    pub crowd_label: &'static str,
    pub risk_label: &'static str,
    pub tone: Tone,
}

impl RouteCardView {
    pub fn tone_class(&self) -> &'static str {
        self.tone.as_str()
    }
}

/// The route list (or tab strip).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub view_mode: ViewMode,
    pub active_index: usize,
    pub cards: Vec<RouteCardView>,
}

impl SummaryView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// What kind of timeline row a [`RowView`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Start,
    Travel,
    Transfer,
    End,
}

/// One timeline row, flattened for templates.
///
/// Fields that do not apply to the row's kind are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub kind: RowKind,
    /// Start/end time, or the arrival time at a transfer
    pub time: String,
    /// Departure time of the next train at a transfer
    pub departure_time: String,
    pub station_name: String,
    pub railway_name: String,
    pub train_label: String,
    pub note: Option<String>,
    pub color: String,
}

impl RowView {
    pub fn is_start(&self) -> bool {
        self.kind == RowKind::Start
    }

    pub fn is_travel(&self) -> bool {
        self.kind == RowKind::Travel
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == RowKind::Transfer
    }

    pub fn is_end(&self) -> bool {
        self.kind == RowKind::End
    }

    pub fn has_train_label(&self) -> bool {
        !self.train_label.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView {
    pub rows: Vec<RowView>,
}

impl TimelineView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Station-scale block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrowdBlockView {
    /// e.g. `"Average station size: 1,234,567 people/day (Metropolitan)"`
    pub headline: String,
    /// e.g. `"Stations along the way: Shinjuku (3.5M), Tokyo (1.2M)"`
    pub details: String,
}

/// Predictive delay risk block, listing every reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBlockView {
    pub tone: Tone,
    /// e.g. `"Delay risk: High"`
    pub headline: String,
    pub reasons: Vec<String>,
}

impl RiskBlockView {
    pub fn tone_class(&self) -> &'static str {
        self.tone.as_str()
    }
}

/// A live delay on one railway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelayBlockView {
    pub railway: String,
    /// e.g. `"About 5 min delay now"`
    pub message: String,
}

/// Annotation blocks shown above the timeline, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnnotationsView {
    pub crowd: Option<CrowdBlockView>,
    pub risk: Option<RiskBlockView>,
    pub delays: Vec<DelayBlockView>,
}

impl AnnotationsView {
    /// The panel is hidden when this is true.
    pub fn is_empty(&self) -> bool {
        self.crowd.is_none() && self.risk.is_none() && self.delays.is_empty()
    }
}

/// One route's detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// e.g. `"08:00 dep → 08:20 arr"`
    pub header: String,
    pub first_departure: String,
    pub final_arrival: String,
    pub transfers_label: String,
    /// Empty when either end time is unknown
    pub duration_label: String,
    pub annotations: AnnotationsView,
    pub timeline: TimelineView,
}

/// Station suggestions under one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub visible: bool,
    pub items: Vec<String>,
    /// Field text after the event, so a pick can fill the input
    pub value: String,
}

/// What the results page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Loading,
    Error,
    List,
    Detail,
}

/// The whole results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub query: SearchQuery,
    pub layout: Layout,
    pub status: PageStatus,
    pub header: String,
    pub subheader: String,
    /// User-facing message when `status` is `Error`
    pub error: Option<String>,
    /// Route list, or the tab strip in the tab layout
    pub summary: Option<SummaryView>,
    pub detail: Option<DetailView>,
}

impl PageView {
    pub fn is_loading(&self) -> bool {
        self.status == PageStatus::Loading
    }

    pub fn is_tabs(&self) -> bool {
        self.layout == Layout::Tabs
    }

    /// A back link is offered from a detail reached through the list.
    pub fn show_back(&self) -> bool {
        self.layout == Layout::ListDetail && self.status == PageStatus::Detail
    }
}
