//! Filter panel
//!
//! Edits a draft copy of the session's filter settings. "Apply" commits the
//! draft to the session and closes the panel; closing any other way drops
//! the draft. The results list does not read these values.

use route_core::{FilterSetting, ModeId};
use storage::FilterPreferences;

use super::ScreenContext;
use crate::params::{parse_mode, FiltersParams};
use crate::theme::{self, Color};

/// Per-mode toggles and the time-versus-distance slider
#[derive(Debug)]
pub struct FilterPanel {
    ctx: ScreenContext,
    params: FiltersParams,
    mode: ModeId,
    draft: FilterPreferences,
}

impl FilterPanel {
    /// Header title
    pub const TITLE: &'static str = "Advanced Filters";

    /// Seed the draft from the session; an unknown mode shows walking toggles
    pub fn new(ctx: ScreenContext, params: FiltersParams) -> Self {
        let mode = parse_mode(&params.mode).unwrap_or_else(|| {
            tracing::warn!(mode = %params.mode, "filters opened for unknown mode");
            ModeId::default()
        });
        let draft = ctx.session.filters();
        Self {
            ctx,
            params,
            mode,
            draft,
        }
    }

    /// Mode whose toggles are shown
    pub fn mode(&self) -> ModeId {
        self.mode
    }

    /// Slider and switch tint, from the raw mode key
    pub fn color(&self) -> Color {
        theme::mode_color(&self.params.mode)
    }

    /// "Walking Options"
    pub fn section_title(&self) -> String {
        format!("{} Options", self.mode.display_name())
    }

    /// Toggles of the shown mode
    pub fn toggles(&self) -> &[FilterSetting] {
        self.draft.for_mode(self.mode)
    }

    /// Flip a toggle of the shown mode
    pub fn toggle(&mut self, index: usize) -> bool {
        self.draft.toggle(self.mode, index)
    }

    /// Slider value
    pub fn time_vs_distance(&self) -> u8 {
        self.draft.time_vs_distance
    }

    /// Move the slider, clamped to 0..=100
    pub fn set_time_vs_distance(&mut self, value: u8) {
        self.draft.set_time_vs_distance(value);
    }

    /// "Reset"; restores every mode and the slider
    pub fn reset(&mut self) {
        self.draft.reset();
    }

    /// Draft values
    pub fn draft(&self) -> &FilterPreferences {
        &self.draft
    }

    /// "Apply Filters"
    pub fn apply(&self) {
        self.ctx.session.set_filters(self.draft.clone());
        self.ctx.navigator.back();
    }

    /// Back button; discards the draft
    pub fn go_back(&self) {
        self.ctx.navigator.back();
    }
}
