//! Route selection.
//!
//! [`SelectionController`] owns the candidate routes returned by a search,
//! which one is active, and whether the list or the detail is showing. The
//! views read its [`SelectionState`] and never mutate it.

mod controller;
mod state;

pub use controller::SelectionController;
pub use state::{
    Layout, ParseSettingError, RequestTicket, SearchFailure, SearchPhase, SelectionState,
    StaleResponsePolicy, ViewMode,
};
