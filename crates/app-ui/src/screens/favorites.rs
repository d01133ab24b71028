//! Saved places tab

use route_core::FavoriteLocation;

use super::ScreenContext;
use crate::navigation::Screen;
use crate::params::{EntryRef, ResultsParams};

/// List of saved places
#[derive(Debug)]
pub struct FavoritesViewer {
    ctx: ScreenContext,
}

impl FavoritesViewer {
    /// Header title
    pub const TITLE: &'static str = "Saved Places";

    /// Mount
    pub fn new(ctx: ScreenContext) -> Self {
        Self { ctx }
    }

    /// Places in fixture order
    pub fn entries(&self) -> &'static [FavoriteLocation] {
        self.ctx.store.list_favorites()
    }

    /// Open the results list for a place
    ///
    /// The place id travels as an opaque reference; the list itself shows
    /// default parameters.
    pub fn open(&self, id: &str) -> bool {
        if !self.entries().iter().any(|place| place.id == id) {
            tracing::warn!(id, "unknown favorite");
            return false;
        }
        self.ctx
            .navigator
            .navigate(Screen::RouteResults(ResultsParams::for_entry(EntryRef::favorite(id))));
        true
    }
}
