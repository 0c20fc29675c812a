//! Per-field autocomplete state.

use tracing::trace;

use super::directory::StationDirectory;

/// Autocomplete state for one text input.
///
/// Driven by the input's events: typing recomputes the matches, picking a
/// match fills the field, and a click elsewhere on the page closes the
/// dropdown. The dropdown is visible only while there is at least one
/// match.
///
/// # Examples
///
/// ```
/// use route_viewer::autocomplete::{Autocomplete, StationDirectory};
///
/// let stations = StationDirectory::from_names(["Shinjuku", "Nishi-Shinjuku", "Tokyo"]);
/// let mut field = Autocomplete::new(stations);
///
/// field.on_input("Shinjuku");
/// assert!(field.is_dropdown_visible());
/// assert_eq!(field.matches(), ["Shinjuku", "Nishi-Shinjuku"]);
///
/// assert_eq!(field.select(1), Some("Nishi-Shinjuku"));
/// assert_eq!(field.query(), "Nishi-Shinjuku");
/// assert!(!field.is_dropdown_visible());
/// ```
#[derive(Debug, Clone)]
pub struct Autocomplete {
    candidates: StationDirectory,
    query: String,
    matches: Vec<String>,
    dropdown_visible: bool,
}

impl Autocomplete {
    /// Create a field over the given candidates, with empty text.
    pub fn new(candidates: StationDirectory) -> Self {
        Self {
            candidates,
            query: String::new(),
            matches: Vec::new(),
            dropdown_visible: false,
        }
    }

    /// Current field text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matches for the current text, as last computed.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.dropdown_visible
    }

    /// The user typed: recompute matches and show or hide the dropdown.
    pub fn on_input(&mut self, text: &str) {
        self.query = text.to_string();
        self.recompute();
    }

    /// The field regained focus.
    ///
    /// With text already present the matches are recomputed, so the
    /// dropdown reappears without retyping.
    pub fn on_focus(&mut self) {
        if !self.query.is_empty() {
            self.recompute();
        }
    }

    /// A click landed outside the field and its dropdown.
    ///
    /// Hides the dropdown; the text is kept.
    pub fn on_outside_click(&mut self) {
        self.dropdown_visible = false;
    }

    /// Pick the match at `index`.
    ///
    /// Sets the field text to the match verbatim, clears the matches and
    /// hides the dropdown. Returns the picked name, or `None` (and changes
    /// nothing) if `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let picked = self.matches.get(index)?.clone();
        self.query = picked;
        self.matches.clear();
        self.dropdown_visible = false;
        Some(&self.query)
    }

    fn recompute(&mut self) {
        self.matches = self.candidates.suggest(&self.query);
        self.dropdown_visible = !self.matches.is_empty();
        trace!(query = %self.query, matches = self.matches.len(), "autocomplete recomputed");
    }
}
