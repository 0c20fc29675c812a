//! Web layer for the route viewer.
//!
//! Serves the search form, the results page and station suggestions, as HTML
//! for browsers and JSON for everything else.

mod routes;
mod search;
mod state;
pub mod templates;

pub use routes::{
    AppError, ErrorResponse, FieldEvent, RoutesRequest, SuggestRequest, create_router,
};
pub use search::{run_search, search_outcome};
pub use state::AppState;
