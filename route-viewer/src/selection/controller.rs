//! The route selection state machine.

use tracing::debug;

use crate::domain::Route;

use super::state::{
    Layout, RequestTicket, SearchFailure, SearchPhase, SelectionState, StaleResponsePolicy,
    ViewMode,
};

/// Owns the current routes, the active selection and the view mode.
///
/// Search outcomes arrive through [`complete_search`](Self::complete_search);
/// user actions through [`select`](Self::select),
/// [`switch_tab`](Self::switch_tab) and [`back`](Self::back). Each action
/// returns whether it changed anything, so the caller knows when to
/// re-render.
///
/// # Examples
///
/// ```
/// use route_viewer::domain::{Route, Segment};
/// use route_viewer::selection::{Layout, SelectionController, StaleResponsePolicy, ViewMode};
///
/// let mut controller = SelectionController::new(Layout::ListDetail, StaleResponsePolicy::Discard);
/// let routes = vec![
///     Route::new(vec![Segment::new("Chuo", "Tokyo", "Shinjuku")], 0),
///     Route::new(vec![Segment::new("Yamanote", "Tokyo", "Shinjuku")], 0),
/// ];
///
/// let ticket = controller.begin_search();
/// assert!(controller.complete_search(ticket, Ok(routes)));
/// assert_eq!(controller.state().view_mode(), ViewMode::List);
///
/// assert!(controller.select(1));
/// assert_eq!(controller.state().view_mode(), ViewMode::Detail);
///
/// assert!(controller.back());
/// assert_eq!(controller.state().active_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionController {
    layout: Layout,
    policy: StaleResponsePolicy,
    state: SelectionState,
    /// Sequence number of the latest issued request; 0 before any.
    latest: u64,
}

impl SelectionController {
    pub fn new(layout: Layout, policy: StaleResponsePolicy) -> Self {
        Self {
            layout,
            policy,
            state: SelectionState::default(),
            latest: 0,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Issue a ticket for a new search request and enter the loading phase.
    pub fn begin_search(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state.phase = SearchPhase::Loading;
        debug!(ticket = self.latest, "search started");
        RequestTicket(self.latest)
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Under [`StaleResponsePolicy::Discard`] only the latest issued ticket
    /// is applied; older ones return `false` and leave the state untouched.
    pub fn complete_search(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<Route>, SearchFailure>,
    ) -> bool {
        if self.policy == StaleResponsePolicy::Discard && ticket.0 != self.latest {
            debug!(%ticket, latest = self.latest, "discarding stale search response");
            return false;
        }

        match outcome {
            Ok(routes) => self.search_succeeded(routes),
            Err(failure) => self.search_failed(failure),
        }
        true
    }

    /// Replace the routes with a fresh result set.
    ///
    /// The first route becomes active. The list layout shows the summary
    /// list; the tab layout opens straight into the first route's detail.
    /// An empty set is an [`SearchFailure::EmptyResult`].
    pub fn search_succeeded(&mut self, routes: Vec<Route>) {
        if routes.is_empty() {
            self.search_failed(SearchFailure::EmptyResult);
            return;
        }

        debug!(routes = routes.len(), layout = ?self.layout, "search succeeded");
        self.state.routes = routes;
        self.state.active_index = 0;
        self.state.view_mode = match self.layout {
            Layout::ListDetail => ViewMode::List,
            Layout::Tabs => ViewMode::Detail,
        };
        self.state.phase = SearchPhase::Ready;
    }

    /// Clear the routes and record why the search failed.
    ///
    /// The view mode is left alone; with no routes there is nothing to show
    /// in either mode.
    pub fn search_failed(&mut self, failure: SearchFailure) {
        debug!(?failure, "search failed");
        self.state.routes.clear();
        self.state.active_index = 0;
        self.state.phase = SearchPhase::Failed(failure);
    }

    /// Open the detail of the route at `index` from the summary list.
    ///
    /// Does nothing outside the list layout, outside list mode, or when
    /// `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if self.layout != Layout::ListDetail
            || self.state.view_mode != ViewMode::List
            || index >= self.state.routes.len()
        {
            debug!(index, routes = self.state.routes.len(), "select ignored");
            return false;
        }

        self.state.active_index = index;
        self.state.view_mode = ViewMode::Detail;
        debug!(index, "route selected");
        true
    }

    /// Make the route at `index` the active tab.
    ///
    /// Only meaningful in the tab layout. The view mode never changes.
    pub fn switch_tab(&mut self, index: usize) -> bool {
        if self.layout != Layout::Tabs || index >= self.state.routes.len() {
            debug!(index, routes = self.state.routes.len(), "tab switch ignored");
            return false;
        }

        self.state.active_index = index;
        debug!(index, "tab switched");
        true
    }

    /// Return from a route's detail to the summary list.
    ///
    /// The active index is kept, so selecting again shows the same route.
    pub fn back(&mut self) -> bool {
        if self.layout != Layout::ListDetail || self.state.view_mode != ViewMode::Detail {
            return false;
        }

        self.state.view_mode = ViewMode::List;
        debug!(index = self.state.active_index, "back to list");
        true
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(Layout::default(), StaleResponsePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Segment;

    fn routes(n: usize) -> Vec<Route> {
        (0..n)
            .map(|i| {
                Route::new(
                    vec![
                        Segment::new("Chuo", "Tokyo", "Shinjuku").with_times(
                            format!("08:{:02}", i * 10),
                            format!("08:{:02}", i * 10 + 9),
                        ),
                    ],
                    0,
                )
            })
            .collect()
    }

    fn list_with(n: usize) -> SelectionController {
        let mut c = SelectionController::default();
        let ticket = c.begin_search();
        c.complete_search(ticket, Ok(routes(n)));
        c
    }

    fn tabs_with(n: usize) -> SelectionController {
        let mut c = SelectionController::new(Layout::Tabs, StaleResponsePolicy::Discard);
        let ticket = c.begin_search();
        c.complete_search(ticket, Ok(routes(n)));
        c
    }

    #[test]
    fn initial_state() {
        let c = SelectionController::default();
        assert_eq!(c.layout(), Layout::ListDetail);
        assert_eq!(c.state().view_mode(), ViewMode::List);
        assert_eq!(c.state().active_index(), 0);
        assert_eq!(c.state().phase(), SearchPhase::Idle);
    }

    #[test]
    fn begin_search_enters_loading() {
        let mut c = SelectionController::default();
        let first = c.begin_search();
        let second = c.begin_search();
        assert!(second > first);
        assert_eq!(c.state().phase(), SearchPhase::Loading);
    }

    #[test]
    fn success_shows_list_with_first_active() {
        let c = list_with(3);
        assert_eq!(c.state().routes().len(), 3);
        assert_eq!(c.state().active_index(), 0);
        assert_eq!(c.state().view_mode(), ViewMode::List);
        assert_eq!(c.state().phase(), SearchPhase::Ready);
    }

    #[test]
    fn tabs_open_in_detail() {
        let c = tabs_with(2);
        assert_eq!(c.state().view_mode(), ViewMode::Detail);
        assert_eq!(c.state().active_index(), 0);
    }

    #[test]
    fn new_results_reset_selection() {
        let mut c = list_with(3);
        c.select(2);
        let ticket = c.begin_search();
        c.complete_search(ticket, Ok(routes(2)));
        assert_eq!(c.state().active_index(), 0);
        assert_eq!(c.state().view_mode(), ViewMode::List);
    }

    #[test]
    fn empty_result_is_a_failure() {
        let c = list_with(0);
        assert_eq!(
            c.state().phase(),
            SearchPhase::Failed(SearchFailure::EmptyResult)
        );
        assert!(c.state().routes().is_empty());
    }

    #[test]
    fn failure_clears_routes() {
        let mut c = list_with(3);
        c.select(1);
        let ticket = c.begin_search();
        assert!(c.complete_search(ticket, Err(SearchFailure::Network)));
        assert!(c.state().routes().is_empty());
        assert_eq!(c.state().active_index(), 0);
        assert_eq!(c.state().phase(), SearchPhase::Failed(SearchFailure::Network));
        assert!(c.state().active_route().is_none());
    }

    #[test]
    fn select_opens_detail() {
        let mut c = list_with(3);
        assert!(c.select(2));
        assert_eq!(c.state().active_index(), 2);
        assert_eq!(c.state().view_mode(), ViewMode::Detail);
        assert_eq!(c.state().active_route(), Some(&c.state().routes()[2]));
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let mut c = list_with(3);
        let before = c.state().clone();
        assert!(!c.select(3));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn select_from_detail_is_noop() {
        let mut c = list_with(3);
        c.select(1);
        assert!(!c.select(2));
        assert_eq!(c.state().active_index(), 1);
    }

    #[test]
    fn select_before_any_search_is_noop() {
        let mut c = SelectionController::default();
        assert!(!c.select(0));
        assert_eq!(c.state().view_mode(), ViewMode::List);
    }

    #[test]
    fn back_keeps_active_index() {
        let mut c = list_with(3);
        c.select(2);
        assert!(c.back());
        assert_eq!(c.state().view_mode(), ViewMode::List);
        assert_eq!(c.state().active_index(), 2);
        assert!(!c.back());
    }

    #[test]
    fn switch_tab_keeps_view_mode() {
        let mut c = tabs_with(3);
        assert!(c.switch_tab(2));
        assert_eq!(c.state().active_index(), 2);
        assert_eq!(c.state().view_mode(), ViewMode::Detail);
        assert!(!c.switch_tab(3));
        assert_eq!(c.state().active_index(), 2);
    }

    #[test]
    fn actions_are_layout_specific() {
        let mut list = list_with(3);
        assert!(!list.switch_tab(1));
        assert_eq!(list.state().active_index(), 0);

        let mut tabs = tabs_with(3);
        assert!(!tabs.select(1));
        assert!(!tabs.back());
        assert_eq!(tabs.state().view_mode(), ViewMode::Detail);
    }

    #[test]
    fn stale_completion_discarded() {
        let mut c = SelectionController::default();
        let old = c.begin_search();
        let new = c.begin_search();

        assert!(c.complete_search(new, Ok(routes(2))));
        assert!(!c.complete_search(old, Ok(routes(3))));
        assert_eq!(c.state().routes().len(), 2);

        // A late failure of the old request does not wipe the new result
        assert!(!c.complete_search(old, Err(SearchFailure::Network)));
        assert_eq!(c.state().phase(), SearchPhase::Ready);
    }

    #[test]
    fn stale_completion_accepted_in_arrival_order() {
        let mut c = SelectionController::new(Layout::ListDetail, StaleResponsePolicy::AcceptAll);
        let old = c.begin_search();
        let new = c.begin_search();

        assert!(c.complete_search(new, Ok(routes(2))));
        assert!(c.complete_search(old, Ok(routes(3))));
        assert_eq!(c.state().routes().len(), 3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Segment;
    use proptest::prelude::*;

    fn controller(n: usize, layout: Layout) -> SelectionController {
        let mut c = SelectionController::new(layout, StaleResponsePolicy::Discard);
        let routes = (0..n)
            .map(|_| Route::new(vec![Segment::new("Chuo", "Tokyo", "Shinjuku")], 0))
            .collect();
        let ticket = c.begin_search();
        c.complete_search(ticket, Ok(routes));
        c
    }

    proptest! {
        #[test]
        fn out_of_range_select_changes_nothing(n in 0usize..6, extra in 0usize..100) {
            let mut c = controller(n, Layout::ListDetail);
            let before = c.state().clone();
            prop_assert!(!c.select(n + extra));
            prop_assert_eq!(c.state(), &before);
        }

        #[test]
        fn out_of_range_tab_changes_nothing(n in 0usize..6, extra in 0usize..100) {
            let mut c = controller(n, Layout::Tabs);
            let before = c.state().clone();
            prop_assert!(!c.switch_tab(n + extra));
            prop_assert_eq!(c.state(), &before);
        }

        /// Whatever the action sequence, the active index stays in range
        #[test]
        fn active_index_stays_in_range(
            n in 1usize..6,
            actions in proptest::collection::vec((0u8..3, 0usize..8), 0..20),
        ) {
            let mut c = controller(n, Layout::ListDetail);
            for (action, index) in actions {
                match action {
                    0 => { c.select(index); }
                    1 => { c.back(); }
                    _ => { c.switch_tab(index); }
                }
                prop_assert!(c.state().active_index() < n);
            }
        }
    }
}
