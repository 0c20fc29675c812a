//! Renderers turning view models into output.
//!
//! [`HtmlRenderer`] produces the server-rendered pages and fragments through
//! askama templates; [`JsonRenderer`] serializes the same view models for API
//! clients.

use askama::Template;
use serde_json::Value;

use super::models::{DropdownView, PageView};

/// Output technology for view models.
pub trait Renderer {
    type Output;
    type Error: std::error::Error;

    /// Render the results page.
    fn render_page(&self, page: &PageView) -> Result<Self::Output, Self::Error>;

    /// Render the suggestion dropdown for the input named `field`.
    fn render_dropdown(
        &self,
        field: &str,
        dropdown: &DropdownView,
    ) -> Result<Self::Output, Self::Error>;
}

/// Results page (extends base.html).
#[derive(Template)]
#[template(path = "routes.html")]
struct RoutesTemplate<'a> {
    page: &'a PageView,
}

/// Suggestion dropdown fragment.
#[derive(Template)]
#[template(path = "dropdown.html")]
struct DropdownTemplate<'a> {
    field: &'a str,
    dropdown: &'a DropdownView,
}

/// Renders HTML with askama.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    type Output = String;
    type Error = askama::Error;

    fn render_page(&self, page: &PageView) -> Result<String, askama::Error> {
        RoutesTemplate { page }.render()
    }

    fn render_dropdown(
        &self,
        field: &str,
        dropdown: &DropdownView,
    ) -> Result<String, askama::Error> {
        DropdownTemplate { field, dropdown }.render()
    }
}

/// Renders view models as JSON values.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Output = Value;
    type Error = serde_json::Error;

    fn render_page(&self, page: &PageView) -> Result<Value, serde_json::Error> {
        serde_json::to_value(page)
    }

    fn render_dropdown(
        &self,
        _field: &str,
        dropdown: &DropdownView,
    ) -> Result<Value, serde_json::Error> {
        serde_json::to_value(dropdown)
    }
}
