//! Station name matching.

/// Return every candidate containing `query`, in candidate order.
///
/// Matching is case-sensitive substring containment with no result limit.
/// Station names are often searched by an interior fragment (a line name
/// embedded in a station name), so prefix or fuzzy matching would miss
/// them. An empty query matches nothing.
///
/// # Examples
///
/// ```
/// use route_viewer::autocomplete::match_candidates;
///
/// let stations = ["Shinjuku", "Shin-Okubo", "Nishi-Shinjuku", "Tokyo"];
///
/// assert_eq!(
///     match_candidates("Shinjuku", &stations),
///     vec!["Shinjuku", "Nishi-Shinjuku"]
/// );
/// assert!(match_candidates("", &stations).is_empty());
/// assert!(match_candidates("shinjuku", &stations).is_empty());
/// ```
pub fn match_candidates<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| candidate.contains(query))
        .map(str::to_string)
        .collect()
}
