//! Page templates served directly by the web layer.
//!
//! The results page and dropdown fragment are rendered by
//! [`HtmlRenderer`](crate::view::HtmlRenderer).

use askama::Template;

/// Departure times offered as one-click presets on the search form.
pub const TIME_PRESETS: &[&str] = &["07:00", "08:00", "12:00", "17:00", "20:00"];

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Prefilled departure time, `HH:MM`
    pub default_time: String,
    pub presets: &'static [&'static str],
    /// Whether station fields get suggestions
    pub autocomplete: bool,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
