//! Presentation.
//!
//! State is projected onto plain view models by pure functions, and a
//! [`Renderer`] turns those into HTML or JSON. Rendering the same state twice
//! gives the same output.

mod format;
mod models;
mod project;
mod renderer;

pub use format::{format_count, format_duration, minutes_between};
pub use models::{
    AnnotationsView, CrowdBlockView, DelayBlockView, DetailView, DropdownView, PageStatus,
    PageView, RiskBlockView, RouteCardView, RowKind, RowView, SummaryView, TimelineView, Tone,
};
pub use project::{
    LIST_HEADER, render_annotations, render_autocomplete, render_detail, render_page,
    render_summary, render_timeline,
};
pub use renderer::{HtmlRenderer, JsonRenderer, Renderer};
