//! Route detail viewer

use route_core::Route;
use serde::Serialize;

use super::ScreenContext;
use crate::components::{
    format_distance, format_duration, format_elevation, step_rows, ElevationChart, StepRow,
    CHART_HEIGHT,
};
use crate::navigation::Screen;
use crate::params::{DetailsParams, MapParams};
use crate::theme::{self, Color};

/// Sub-view under the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    /// Numbered steps
    #[default]
    Steps,
    /// Elevation chart
    Elevation,
}

/// Metrics row at the top of the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    /// Duration
    pub duration: String,
    /// Distance
    pub distance: String,
    /// Elevation gain, absent when the route is flat
    pub elevation: Option<String>,
}

/// One route, or a not-found view when the key does not resolve
#[derive(Debug)]
pub struct RouteDetailViewer {
    ctx: ScreenContext,
    params: DetailsParams,
    route: Option<&'static Route>,
    tab: DetailTab,
    voice_guidance: bool,
}

impl RouteDetailViewer {
    /// Text of the not-found view
    pub const NOT_FOUND_MESSAGE: &'static str = "Route not found";

    /// Resolve the route
    pub fn new(ctx: ScreenContext, params: DetailsParams) -> Self {
        let route = match ctx.store.get_route(&params.mode, &params.route_id) {
            Ok(route) => Some(route),
            Err(err) => {
                tracing::warn!(error = %err, "route details unavailable");
                None
            }
        };

        Self {
            ctx,
            params,
            route,
            tab: DetailTab::default(),
            voice_guidance: false,
        }
    }

    /// Parameters the viewer was opened with
    pub fn params(&self) -> &DetailsParams {
        &self.params
    }

    /// Resolved route
    pub fn route(&self) -> Option<&'static Route> {
        self.route
    }

    /// Whether the not-found view is showing
    pub fn is_not_found(&self) -> bool {
        self.route.is_none()
    }

    /// Mode tint
    pub fn color(&self) -> Color {
        theme::mode_color(&self.params.mode)
    }

    /// Metrics row
    pub fn summary(&self) -> Option<RouteSummary> {
        let units = self.ctx.session.preferences().units;
        self.route.map(|route| RouteSummary {
            duration: format_duration(route.duration),
            distance: format_distance(route.distance, units),
            elevation: route
                .has_elevation_gain()
                .then(|| format_elevation(route.elevation)),
        })
    }

    /// Active sub-view
    pub fn active_tab(&self) -> DetailTab {
        self.tab
    }

    /// Switch sub-view
    pub fn select_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    /// Step list
    pub fn steps(&self) -> Vec<StepRow> {
        let units = self.ctx.session.preferences().units;
        self.route
            .map(|route| step_rows(route, units))
            .unwrap_or_default()
    }

    /// Elevation chart laid out for `width`
    pub fn elevation_chart(&self, width: f64) -> Option<ElevationChart> {
        self.route.map(|route| {
            ElevationChart::new(&route.elevation_profile, width, CHART_HEIGHT, self.color())
        })
    }

    /// Text under the chart
    pub fn elevation_description(&self) -> Option<String> {
        self.route.map(|route| {
            format!(
                "This route has a total elevation gain of {} meters. The steepest part occurs \
                 around the middle of your journey, with a gradual descent towards the end.",
                route.elevation
            )
        })
    }

    /// Whether the speaker button is on; starts off on every visit
    pub fn voice_guidance(&self) -> bool {
        self.voice_guidance
    }

    /// Speaker button
    pub fn toggle_voice_guidance(&mut self) {
        self.voice_guidance = !self.voice_guidance;
    }

    /// "Start Navigation"; does nothing on the not-found view
    pub fn start_navigation(&self) -> bool {
        match self.route {
            Some(route) => {
                self.ctx.navigator.navigate(Screen::Map(MapParams::navigate_route(
                    self.params.mode.clone(),
                    route.id.clone(),
                )));
                true
            }
            None => false,
        }
    }

    /// Map button in the header
    pub fn open_map(&self) {
        self.ctx.navigator.navigate(Screen::Map(MapParams::default()));
    }

    /// Header back button, and "Go Back" on the not-found view
    pub fn go_back(&self) {
        self.ctx.navigator.back();
    }
}
