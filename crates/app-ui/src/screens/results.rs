//! Results list for a search

use app_state::DelayedAction;
use route_core::{ModeId, Route, RouteFilter};

use super::ScreenContext;
use crate::components::RouteCard;
use crate::navigation::Screen;
use crate::params::{DetailsParams, EntryRef, FiltersParams, ResultsParams};

/// Routes of the requested mode, in fixture order
///
/// The profile and the filter input are carried for display only. They do
/// not narrow or reorder the list.
#[derive(Debug)]
pub struct ResultsLister {
    ctx: ScreenContext,
    params: ResultsParams,
    routes: &'static [Route],
    filter: RouteFilter,
    selected: Option<String>,
    pending: Option<DelayedAction>,
}

impl ResultsLister {
    /// Resolve the list for `params`; an unknown mode gives an empty list
    pub fn new(ctx: ScreenContext, params: ResultsParams) -> Self {
        let routes = ctx.store.routes_for_mode_key(&params.mode);
        let filter_mode = params.mode_id().unwrap_or_default();
        let filter = ctx.session.filters().route_filter(filter_mode);

        Self {
            ctx,
            params,
            routes,
            filter,
            selected: None,
            pending: None,
        }
    }

    /// Replace the filter input
    pub fn with_filter(mut self, filter: RouteFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Parameters the list was opened with
    pub fn params(&self) -> &ResultsParams {
        &self.params
    }

    /// Favorite or history entry that opened the list
    pub fn entry(&self) -> Option<&EntryRef> {
        self.params.entry.as_ref()
    }

    /// Parsed mode, if known
    pub fn mode(&self) -> Option<ModeId> {
        self.params.mode_id()
    }

    /// Filter input
    pub fn filter(&self) -> &RouteFilter {
        &self.filter
    }

    /// Listed routes
    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// "Home → Work"
    pub fn header(&self) -> String {
        format!("{} → {}", self.params.origin, self.params.destination)
    }

    /// "3 routes found"
    pub fn count_label(&self) -> String {
        format!("{} routes found", self.routes.len())
    }

    /// Cards in list order
    pub fn cards(&self) -> Vec<RouteCard> {
        let units = self.ctx.session.preferences().units;
        self.routes
            .iter()
            .map(|route| {
                let selected = self.selected.as_deref() == Some(route.id.as_str());
                RouteCard::new(route, units, selected)
            })
            .collect()
    }

    /// Highlighted route id
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether a transition to details is waiting
    pub fn has_pending_selection(&self) -> bool {
        self.pending.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// Press a card
    ///
    /// The card is highlighted at once and details open after the selection
    /// delay. Pressing another card restarts the delay for that card.
    pub fn select(&mut self, route_id: &str) -> bool {
        if !self.routes.iter().any(|route| route.id == route_id) {
            tracing::warn!(route_id, mode = %self.params.mode, "selected route is not listed");
            return false;
        }

        self.selected = Some(route_id.to_string());
        let target = Screen::RouteDetails(DetailsParams::new(self.params.mode.clone(), route_id));
        self.pending = Some(self.ctx.navigator.schedule(
            "route-selection",
            self.ctx.timing.selection_delay(),
            self.ctx.navigation_from_here(target),
        ));
        true
    }

    /// Filter button in the header
    pub fn open_filters(&self) {
        self.ctx
            .navigator
            .navigate(Screen::Filters(FiltersParams::new(self.params.mode.clone())));
    }

    /// Header back button
    pub fn go_back(&self) {
        self.ctx.navigator.back();
    }
}
