//! Search composer, the root of the search tab

use route_core::{ModeId, Profile, RecentDestination, TransportMode};

use super::ScreenContext;
use crate::components::{self, ModeOption, ProfileOption, QuickFilters};
use crate::navigation::Screen;
use crate::params::{MapParams, ResultsParams, DEFAULT_ORIGIN, UNKNOWN_DESTINATION};

/// Origin/destination form plus mode and profile choice
#[derive(Debug)]
pub struct SearchComposer {
    ctx: ScreenContext,
    origin: String,
    destination: String,
    mode: ModeId,
    profile: String,
    quick_filters: QuickFilters,
}

impl SearchComposer {
    /// Walking with its first profile, empty fields
    pub fn new(ctx: ScreenContext) -> Self {
        let mode = ModeId::default();
        let profile = first_profile_id(&ctx, mode);
        Self {
            ctx,
            origin: String::new(),
            destination: String::new(),
            mode,
            profile,
            quick_filters: QuickFilters::default(),
        }
    }

    /// Origin field
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Edit the origin field
    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    /// Destination field
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Edit the destination field
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Selected mode
    pub fn mode(&self) -> ModeId {
        self.mode
    }

    /// Selected profile id
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// All modes
    pub fn modes(&self) -> &'static [TransportMode] {
        self.ctx.store.list_modes()
    }

    /// Profiles of the selected mode
    pub fn profiles(&self) -> &'static [Profile] {
        &self.ctx.store.mode(self.mode).profiles
    }

    /// Mode chips
    pub fn mode_options(&self) -> Vec<ModeOption> {
        components::mode_options(self.modes(), self.mode)
    }

    /// Profile rows
    pub fn profile_options(&self) -> Vec<ProfileOption> {
        components::profile_options(self.profiles(), &self.profile)
    }

    /// Choose a mode; the profile always resets to the mode's first profile
    pub fn select_mode(&mut self, mode: ModeId) {
        self.mode = mode;
        self.profile = first_profile_id(&self.ctx, mode);
    }

    /// Choose a profile of the selected mode; returns false for foreign ids
    pub fn select_profile(&mut self, profile_id: &str) -> bool {
        if self.ctx.store.mode(self.mode).profile(profile_id).is_some() {
            self.profile = profile_id.to_string();
            true
        } else {
            false
        }
    }

    /// Shortcuts under the form
    pub fn recent_destinations(&self) -> &'static [RecentDestination] {
        self.ctx.store.recent_destinations()
    }

    /// Copy a recent destination into the destination field
    pub fn pick_recent(&mut self, index: usize) -> bool {
        match self.ctx.store.recent_destinations().get(index) {
            Some(recent) => {
                self.destination = recent.label.clone();
                true
            }
            None => false,
        }
    }

    /// Quick filter card
    pub fn quick_filters(&self) -> &QuickFilters {
        &self.quick_filters
    }

    /// Quick filter card, mutably
    pub fn quick_filters_mut(&mut self) -> &mut QuickFilters {
        &mut self.quick_filters
    }

    /// Parameters "Find Routes" would send
    pub fn results_params(&self) -> ResultsParams {
        ResultsParams {
            mode: self.mode.as_str().to_string(),
            profile: self.profile.clone(),
            origin: non_empty_or(&self.origin, DEFAULT_ORIGIN),
            destination: non_empty_or(&self.destination, UNKNOWN_DESTINATION),
            entry: None,
        }
    }

    /// "Find Routes"
    pub fn submit(&self) -> ResultsParams {
        let params = self.results_params();
        tracing::debug!(mode = %params.mode, profile = %params.profile, "route search submitted");
        self.ctx.navigator.navigate(Screen::RouteResults(params.clone()));
        params
    }

    /// Map button in the header
    pub fn open_map(&self) {
        self.ctx.navigator.navigate(Screen::Map(MapParams::default()));
    }
}

fn first_profile_id(ctx: &ScreenContext, mode: ModeId) -> String {
    ctx.store
        .first_profile(mode)
        .map(|profile| profile.id.clone())
        .unwrap_or_default()
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
