//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error};

use crate::autocomplete::Autocomplete;
use crate::domain::{QueryError, SearchQuery};
use crate::selection::{Layout, SelectionController};
use crate::view::{HtmlRenderer, JsonRenderer, Renderer, render_autocomplete, render_page};

use super::search::run_search;
use super::state::AppState;
use super::templates::{ErrorTemplate, IndexTemplate, TIME_PRESETS};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/routes", get(routes_page))
        .route("/stations/suggest", get(suggest_stations))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        default_time: SearchQuery::default_time(Local::now().time()),
        presets: TIME_PRESETS,
        autocomplete: !state.stations.is_empty(),
    };
    let html = template.render().map_err(AppError::template)?;
    Ok(Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Query parameters for `/routes`.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub time: String,
    /// Route to open (list layout) or tab to show (tab layout)
    pub route: Option<usize>,
}

/// Search and show the results page.
///
/// The server keeps no session: each request runs the search afresh and
/// replays the selection named by `route` on a new controller.
async fn routes_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RoutesRequest>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);

    let query = match SearchQuery::new(&req.from, &req.to, &req.time) {
        Ok(query) => query,
        Err(e) if html => return invalid_search_page(&e),
        Err(e) => return Err(e.into()),
    };

    let mut controller = SelectionController::new(state.config.layout, state.config.stale_policy);
    let ticket = controller.begin_search();
    let outcome = run_search(&state.backend, &query).await;
    controller.complete_search(ticket, outcome);

    if let Some(index) = req.route {
        match controller.layout() {
            Layout::ListDetail => controller.select(index),
            Layout::Tabs => controller.switch_tab(index),
        };
    }

    let page = render_page(&query, &controller, state.colors.as_ref());

    if html {
        let body = HtmlRenderer.render_page(&page).map_err(AppError::template)?;
        Ok(Html(body).into_response())
    } else {
        let body = JsonRenderer.render_page(&page).map_err(AppError::serialize)?;
        Ok(Json(body).into_response())
    }
}

fn invalid_search_page(e: &QueryError) -> Result<Response, AppError> {
    let template = ErrorTemplate {
        title: "Invalid search".to_string(),
        message: e.to_string(),
    };
    let html = template.render().map_err(AppError::template)?;
    Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
}

/// Browser event on a station input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldEvent {
    /// Text changed
    #[default]
    Input,
    Focus,
    /// Click outside the field and its dropdown
    Dismiss,
    /// A suggestion was clicked; its index is in `pick`
    Pick,
}

/// Query parameters for `/stations/suggest`.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Field text when the event fired
    #[serde(default)]
    pub q: String,
    /// Which input the dropdown belongs to
    pub field: Option<String>,
    #[serde(default)]
    pub event: FieldEvent,
    pub pick: Option<usize>,
}

/// Replay one input event against the field's autocomplete state.
///
/// The browser keeps no dropdown state of its own: it sends the current
/// text with each event and swaps in whatever fragment comes back.
fn apply_field_event(field: &mut Autocomplete, req: &SuggestRequest) {
    field.on_input(&req.q);
    match req.event {
        FieldEvent::Input => {}
        FieldEvent::Focus => field.on_focus(),
        FieldEvent::Dismiss => field.on_outside_click(),
        FieldEvent::Pick => {
            if let Some(index) = req.pick {
                field.select(index);
            }
        }
    }
}

/// Station suggestions after one input event.
async fn suggest_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<SuggestRequest>,
) -> Result<Response, AppError> {
    let mut field = Autocomplete::new(state.stations.clone());
    apply_field_event(&mut field, &req);
    let dropdown = render_autocomplete(&field);
    let name = field_name(req.field.as_deref());

    if accepts_html(&headers) {
        let body = HtmlRenderer
            .render_dropdown(name, &dropdown)
            .map_err(AppError::template)?;
        Ok(Html(body).into_response())
    } else {
        let body = JsonRenderer
            .render_dropdown(name, &dropdown)
            .map_err(AppError::serialize)?;
        Ok(Json(body).into_response())
    }
}

/// Restrict the field name to something safe to use in an element id.
fn field_name(requested: Option<&str>) -> &str {
    match requested {
        Some(name)
            if !name.is_empty()
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
        {
            name
        }
        _ => "station",
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn template(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    }

    fn serialize(e: serde_json::Error) -> Self {
        AppError::Internal {
            message: format!("Serialization error: {e}"),
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => {
                error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
