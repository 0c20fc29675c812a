//! Type-ahead station name matching for the search form.
//!
//! One [`StationDirectory`] is loaded at startup and shared by every field.
//! Each field keeps its own [`Autocomplete`] state. If the station list
//! cannot be loaded, fields fall back to plain text inputs.

mod directory;
mod field;
mod matcher;

pub use directory::StationDirectory;
pub use field::Autocomplete;
pub use matcher::match_candidates;
