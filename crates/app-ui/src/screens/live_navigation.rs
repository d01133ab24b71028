//! Live navigation map
//!
//! Steps through a route one leg at a time. The map markers and polyline are
//! the fixed demo geometry whatever route is being followed.

use route_core::{Coordinate, MapGeometry, Region, Route, Step};
use serde::Serialize;

use super::ScreenContext;
use crate::components::{format_distance, format_duration};
use crate::params::MapParams;
use crate::theme::{self, Color};

/// A pin on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapMarker {
    /// Callout title
    pub title: &'static str,
    /// Position
    pub coordinate: Coordinate,
}

/// Map with an optional step-by-step info sheet
#[derive(Debug)]
pub struct LiveNavigation {
    ctx: ScreenContext,
    params: MapParams,
    route: Option<&'static Route>,
    active_leg: usize,
    voice_guidance: bool,
    info_expanded: bool,
    region: Region,
}

impl LiveNavigation {
    /// Resolve the route, if any, and start at its first step
    pub fn new(ctx: ScreenContext, params: MapParams) -> Self {
        let route = params.route_id.as_deref().and_then(|route_id| {
            match ctx.store.get_route(&params.mode, route_id) {
                Ok(route) => Some(route),
                Err(err) => {
                    tracing::warn!(error = %err, "map opened without a resolvable route");
                    None
                }
            }
        });
        let region = ctx.store.map_geometry().initial_region();

        Self {
            voice_guidance: params.navigate,
            ctx,
            params,
            route,
            active_leg: 0,
            info_expanded: true,
            region,
        }
    }

    /// Parameters the map was opened with
    pub fn params(&self) -> &MapParams {
        &self.params
    }

    /// Followed route
    pub fn route(&self) -> Option<&'static Route> {
        self.route
    }

    /// Mode tint for the polyline and controls
    pub fn color(&self) -> Color {
        theme::mode_color(&self.params.mode)
    }

    /// Demo geometry
    pub fn geometry(&self) -> &'static MapGeometry {
        self.ctx.store.map_geometry()
    }

    /// "Your Location" and "Destination" pins
    pub fn markers(&self) -> [MapMarker; 2] {
        let geometry = self.geometry();
        [
            MapMarker {
                title: "Your Location",
                coordinate: geometry.user_location,
            },
            MapMarker {
                title: "Destination",
                coordinate: geometry.destination,
            },
        ]
    }

    /// Polyline drawn between the pins
    pub fn polyline(&self) -> &'static [Coordinate] {
        &self.geometry().route
    }

    /// Zero-based index of the current step
    pub fn active_leg(&self) -> usize {
        self.active_leg
    }

    /// Current step
    pub fn current_step(&self) -> Option<&'static Step> {
        self.route.and_then(|route| route.step(self.active_leg))
    }

    /// "Step 2 of 5"
    pub fn step_label(&self) -> Option<String> {
        self.route
            .map(|route| format!("Step {} of {}", self.active_leg + 1, route.step_count()))
    }

    /// Current step distance
    pub fn step_distance(&self) -> Option<String> {
        let units = self.ctx.session.preferences().units;
        self.current_step()
            .map(|step| format_distance(step.distance, units))
    }

    /// Current step duration
    pub fn step_duration(&self) -> Option<String> {
        self.current_step().map(|step| format_duration(step.duration))
    }

    /// "Previous" is enabled
    pub fn can_go_previous(&self) -> bool {
        self.route.is_some() && self.active_leg > 0
    }

    /// "Next" is enabled
    pub fn can_go_next(&self) -> bool {
        self.route
            .is_some_and(|route| self.active_leg < route.last_step_index())
    }

    /// Move back one step; no-op on the first step
    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.active_leg -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one step; no-op on the last step
    pub fn next(&mut self) -> bool {
        if self.can_go_next() {
            self.active_leg += 1;
            true
        } else {
            false
        }
    }

    /// Speaker button state
    pub fn voice_guidance(&self) -> bool {
        self.voice_guidance
    }

    /// Speaker button
    pub fn toggle_voice_guidance(&mut self) {
        self.voice_guidance = !self.voice_guidance;
    }

    /// Whether the step sheet is open
    pub fn info_expanded(&self) -> bool {
        self.info_expanded
    }

    /// Sheet handle
    pub fn toggle_info_sheet(&mut self) {
        self.info_expanded = !self.info_expanded;
    }

    /// Visible region
    pub fn region(&self) -> Region {
        self.region
    }

    /// Recenter button
    pub fn recenter(&mut self) -> Region {
        self.region = self.geometry().recenter_region();
        self.region
    }

    /// Close button
    pub fn go_back(&self) {
        self.ctx.navigator.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationAction;
    use crate::screens::test_support::{context, drain};

    #[test]
    fn test_starts_at_first_step() {
        let (ctx, _rx) = context();
        let map = LiveNavigation::new(ctx, MapParams::navigate_route("walking", "w2"));

        assert_eq!(map.active_leg(), 0);
        assert_eq!(map.current_step().unwrap().instruction, "Start at Main Street");
        assert_eq!(map.step_label().as_deref(), Some("Step 1 of 5"));
        assert!(map.voice_guidance());
        assert!(map.info_expanded());
        assert!(!map.can_go_previous());
        assert!(map.can_go_next());
    }

    #[test]
    fn test_leg_is_clamped() {
        let (ctx, _rx) = context();
        let mut map = LiveNavigation::new(ctx, MapParams::navigate_route("transit", "t2"));

        assert!(!map.previous());
        assert_eq!(map.active_leg(), 0);

        let mut moves = 0;
        while map.next() {
            moves += 1;
        }
        assert_eq!(moves, 5);
        assert_eq!(map.active_leg(), 5);
        assert!(!map.next());
        assert_eq!(map.step_label().as_deref(), Some("Step 6 of 6"));
        assert_eq!(map.current_step().unwrap().instruction, "Walk to destination");

        assert!(map.previous());
        assert_eq!(map.active_leg(), 4);
    }

    #[test]
    fn test_without_route() {
        let (ctx, mut rx) = context();
        let mut map = LiveNavigation::new(ctx, MapParams::default());

        assert!(map.route().is_none());
        assert!(!map.voice_guidance());
        assert!(map.step_label().is_none());
        assert!(!map.next());
        assert!(!map.previous());
        assert_eq!(map.polyline().len(), 9);
        assert_eq!(map.markers()[1].title, "Destination");

        map.go_back();
        assert_eq!(drain(&mut rx), vec![NavigationAction::Back]);
    }

    #[test]
    fn test_unresolved_route_id() {
        let (ctx, _rx) = context();
        let map = LiveNavigation::new(ctx, MapParams::navigate_route("car", "c1"));
        assert!(map.route().is_none());
        assert!(map.voice_guidance());
    }

    #[test]
    fn test_regions_and_toggles() {
        let (ctx, _rx) = context();
        let mut map = LiveNavigation::new(ctx, MapParams::default());

        assert_eq!(map.region().latitude_delta, 0.015);
        let region = map.recenter();
        assert_eq!(region.latitude_delta, 0.01);
        assert_eq!(map.region(), region);

        map.toggle_info_sheet();
        assert!(!map.info_expanded());
        map.toggle_voice_guidance();
        assert!(map.voice_guidance());
    }

    #[test]
    fn test_step_metrics() {
        let (ctx, _rx) = context();
        let mut map = LiveNavigation::new(ctx, MapParams::navigate_route("walking", "w1"));
        map.next();
        assert_eq!(map.step_distance().as_deref(), Some("0.5 km"));
        assert_eq!(map.step_duration().as_deref(), Some("8 min"));
        assert_eq!(map.color(), "#4CAF50");
    }
}
