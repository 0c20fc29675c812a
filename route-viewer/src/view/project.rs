//! Projections from state to view models.
//!
//! Every function here is pure: the same input always yields an equal view.

use crate::autocomplete::Autocomplete;
use crate::domain::{Crowd, CrowdLevel, DelayWarning, Risk, RiskLevel, Route, SearchQuery};
use crate::selection::{Layout, SearchPhase, SelectionController, SelectionState, ViewMode};
use crate::timeline::{LineColors, TimelineRow, build_timeline};

use super::format::{format_count, format_duration, minutes_between};
use super::models::{
    AnnotationsView, CrowdBlockView, DelayBlockView, DetailView, DropdownView, PageStatus,
    PageView, RiskBlockView, RouteCardView, RowKind, RowView, SummaryView, TimelineView, Tone,
};

/// Header of the results page while the route list is showing.
pub const LIST_HEADER: &str = "Search results";

fn transfers_label(transfers: u32) -> String {
    format!("{transfers} transfer(s)")
}

fn crowd_chip(level: CrowdLevel) -> &'static str {
    match level {
        CrowdLevel::High => "Crowded",
        CrowdLevel::Medium => "Moderate",
        CrowdLevel::Low | CrowdLevel::Unknown => "Quiet",
    }
}

fn risk_chip(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "High delay risk",
        RiskLevel::Medium => "Delay caution",
        RiskLevel::Low => "Normal service",
    }
}

fn card(index: usize, route: &Route, active_index: usize) -> RouteCardView {
    RouteCardView {
        index,
        is_active: index == active_index,
        arrival_label: format!("{} arr", route.final_arrival()),
        departure_label: format!("({} dep)", route.first_departure()),
        transfers_label: transfers_label(route.transfers),
        crowd_label: crowd_chip(route.crowd.level),
        risk_label: risk_chip(route.risk.level),
        tone: Tone::from_risk(route.risk.level),
    }
}

/// Project the selection state onto the route list (or tab strip).
pub fn render_summary(state: &SelectionState) -> SummaryView {
    SummaryView {
        view_mode: state.view_mode(),
        active_index: state.active_index(),
        cards: state
            .routes()
            .iter()
            .enumerate()
            .map(|(i, route)| card(i, route, state.active_index()))
            .collect(),
    }
}

fn crowd_block(crowd: &Crowd) -> Option<CrowdBlockView> {
    let scale = match crowd.level {
        CrowdLevel::Unknown => return None,
        CrowdLevel::High => "Metropolitan",
        CrowdLevel::Medium => "Mid-size",
        CrowdLevel::Low => "Suburban",
    };

    Some(CrowdBlockView {
        headline: format!(
            "Average station size: {} people/day ({scale})",
            format_count(crowd.score)
        ),
        details: if crowd.details.is_empty() {
            String::new()
        } else {
            format!("Stations along the way: {}", crowd.details.join(", "))
        },
    })
}

fn risk_block(risk: &Risk) -> Option<RiskBlockView> {
    let severity = match risk.level {
        RiskLevel::Low => return None,
        RiskLevel::Medium => "Moderate",
        RiskLevel::High => "High",
    };
    if risk.reasons.is_empty() {
        return None;
    }

    Some(RiskBlockView {
        tone: Tone::from_risk(risk.level),
        headline: format!("Delay risk: {severity}"),
        reasons: risk.reasons.clone(),
    })
}

fn delay_block(warning: &DelayWarning) -> DelayBlockView {
    DelayBlockView {
        railway: warning.railway.clone(),
        message: format!("About {} min delay now", warning.delay_minutes),
    }
}

/// Crowd, risk and live delay blocks for a route, in display order.
pub fn render_annotations(route: &Route) -> AnnotationsView {
    AnnotationsView {
        crowd: crowd_block(&route.crowd),
        risk: risk_block(&route.risk),
        delays: route.delay_warnings.iter().map(delay_block).collect(),
    }
}

/// Project one route onto its detail panel, timeline included.
pub fn render_detail(route: &Route, colors: &dyn LineColors) -> DetailView {
    let departure = route.first_departure();
    let arrival = route.final_arrival();

    DetailView {
        header: format!("{departure} dep → {arrival} arr"),
        first_departure: departure.to_string(),
        final_arrival: arrival.to_string(),
        transfers_label: transfers_label(route.transfers),
        duration_label: minutes_between(departure, arrival)
            .map(format_duration)
            .unwrap_or_default(),
        annotations: render_annotations(route),
        timeline: render_timeline(&build_timeline(&route.segments, colors)),
    }
}

/// Flatten timeline rows for display.
pub fn render_timeline(rows: &[TimelineRow]) -> TimelineView {
    let rows = rows
        .iter()
        .map(|row| match row {
            TimelineRow::Start {
                time,
                station_name,
                color,
            } => RowView {
                kind: RowKind::Start,
                time: time.clone(),
                departure_time: String::new(),
                station_name: station_name.clone(),
                railway_name: String::new(),
                train_label: String::new(),
                note: None,
                color: color.to_string(),
            },
            TimelineRow::Travel {
                railway_name,
                train_label,
                note,
                color,
            } => RowView {
                kind: RowKind::Travel,
                time: String::new(),
                departure_time: String::new(),
                station_name: String::new(),
                railway_name: railway_name.clone(),
                train_label: train_label.clone(),
                note: note.clone(),
                color: color.to_string(),
            },
            TimelineRow::Transfer {
                arrival_time,
                departure_time,
                station_name,
                color,
            } => RowView {
                kind: RowKind::Transfer,
                time: arrival_time.clone(),
                departure_time: departure_time.clone(),
                station_name: station_name.clone(),
                railway_name: String::new(),
                train_label: String::new(),
                note: None,
                color: color.to_string(),
            },
            TimelineRow::End {
                time,
                station_name,
                color,
            } => RowView {
                kind: RowKind::End,
                time: time.clone(),
                departure_time: String::new(),
                station_name: station_name.clone(),
                railway_name: String::new(),
                train_label: String::new(),
                note: None,
                color: color.to_string(),
            },
        })
        .collect();

    TimelineView { rows }
}

/// Project a field's autocomplete state onto its dropdown.
pub fn render_autocomplete(field: &Autocomplete) -> DropdownView {
    DropdownView {
        visible: field.is_dropdown_visible(),
        items: if field.is_dropdown_visible() {
            field.matches().to_vec()
        } else {
            Vec::new()
        },
        value: field.query().to_string(),
    }
}

/// Project the controller onto the whole results page for `query`.
pub fn render_page(
    query: &SearchQuery,
    controller: &SelectionController,
    colors: &dyn LineColors,
) -> PageView {
    let state = controller.state();
    let layout = controller.layout();

    let mut page = PageView {
        query: query.clone(),
        layout,
        status: PageStatus::Loading,
        header: query.header(),
        subheader: query.searching_label(),
        error: None,
        summary: None,
        detail: None,
    };

    match state.phase() {
        SearchPhase::Idle | SearchPhase::Loading => {}
        SearchPhase::Failed(failure) => {
            page.status = PageStatus::Error;
            page.subheader = String::new();
            page.error = Some(failure.to_string());
        }
        SearchPhase::Ready => {
            let detail = state.active_route().map(|r| render_detail(r, colors));
            page.subheader = query.header();

            match (layout, state.view_mode()) {
                (Layout::ListDetail, ViewMode::List) => {
                    page.status = PageStatus::List;
                    page.header = LIST_HEADER.to_string();
                    page.summary = Some(render_summary(state));
                }
                (Layout::ListDetail, ViewMode::Detail) => {
                    page.status = PageStatus::Detail;
                    page.header = detail.as_ref().map(|d| d.header.clone()).unwrap_or_default();
                    page.detail = detail;
                }
                (Layout::Tabs, _) => {
                    page.status = PageStatus::Detail;
                    page.header = LIST_HEADER.to_string();
                    page.summary = Some(render_summary(state));
                    page.detail = detail;
                }
            }
        }
    }

    page
}
