//! Past trips tab

use route_core::{HistoryEntry, HistoryFilter};
use serde::Serialize;

use super::ScreenContext;
use crate::components::{format_duration, profile_label};
use crate::navigation::Screen;
use crate::params::{EntryRef, ResultsParams};
use crate::theme::{self, Color};

/// Display form of a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// Opaque id
    pub id: String,
    /// Origin
    pub from: String,
    /// Destination
    pub to: String,
    /// "Apr 10, 2025"
    pub date: String,
    /// "22 min"
    pub duration: String,
    /// "Fast Route"
    pub profile: String,
    /// Mode tint
    pub color: Color,
}

impl HistoryRow {
    fn new(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            from: entry.from.clone(),
            to: entry.to.clone(),
            date: entry.formatted_date(),
            duration: format_duration(entry.duration),
            profile: profile_label(&entry.profile),
            color: theme::mode_palette(entry.mode).primary,
        }
    }
}

/// Trips with a mode filter
#[derive(Debug)]
pub struct HistoryViewer {
    ctx: ScreenContext,
    filter: HistoryFilter,
}

impl HistoryViewer {
    /// Header title
    pub const TITLE: &'static str = "Travel History";

    /// Shown when the selected tab has no trips
    pub const EMPTY_MESSAGE: &'static str = "No history found for this category";

    /// Mount on the "All" tab
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            filter: HistoryFilter::All,
        }
    }

    /// Tabs in display order
    pub fn tabs(&self) -> [HistoryFilter; 5] {
        HistoryFilter::tabs()
    }

    /// Selected tab
    pub fn filter(&self) -> HistoryFilter {
        self.filter
    }

    /// Select a tab
    pub fn select_tab(&mut self, filter: HistoryFilter) {
        self.filter = filter;
    }

    /// Select a tab by key (`all`, `walking`, ...)
    pub fn select_tab_key(&mut self, key: &str) -> bool {
        match key.parse() {
            Ok(filter) => {
                self.filter = filter;
                true
            }
            Err(_) => false,
        }
    }

    /// Trips under the selected tab
    pub fn entries(&self) -> Vec<&'static HistoryEntry> {
        self.ctx.store.list_history(self.filter)
    }

    /// Display rows under the selected tab
    pub fn rows(&self) -> Vec<HistoryRow> {
        self.entries().into_iter().map(HistoryRow::new).collect()
    }

    /// Empty-state text, when the tab has no trips
    pub fn empty_message(&self) -> Option<&'static str> {
        self.entries().is_empty().then_some(Self::EMPTY_MESSAGE)
    }

    /// "Repeat" on a trip
    pub fn open(&self, id: &str) -> bool {
        if !self.entries().iter().any(|entry| entry.id == id) {
            tracing::warn!(id, "history entry not shown");
            return false;
        }
        self.ctx
            .navigator
            .navigate(Screen::RouteResults(ResultsParams::for_entry(EntryRef::history(id))));
        true
    }
}
