//! Display models shared by screens
//!
//! These turn fixture records into the labels and geometry a renderer draws.
//! Nothing here holds navigation or session state.

use route_core::{IconDescriptor, ModeId, Profile, Route, TransportMode};
use serde::Serialize;
use storage::DistanceUnit;

use crate::theme::{self, Color};

// =============================================================================
// Formatting
// =============================================================================

/// One decimal place plus the unit suffix, e.g. "2.3 km"
pub fn format_distance(km: f64, units: DistanceUnit) -> String {
    format!("{:.1} {}", units.from_km(km), units.suffix())
}

/// Whole minutes, e.g. "35 min"
pub fn format_duration(minutes: u32) -> String {
    format!("{} min", minutes)
}

/// Metres of climb, e.g. "12 m"
pub fn format_elevation(metres: u32) -> String {
    format!("{} m", metres)
}

/// "Safe Route", "Less-walking Route"
pub fn profile_label(profile: &str) -> String {
    let mut chars = profile.chars();
    match chars.next() {
        Some(first) => format!("{}{} Route", first.to_uppercase(), chars.as_str()),
        None => "Route".to_string(),
    }
}

// =============================================================================
// Selectors
// =============================================================================

/// A chip in the transport mode selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeOption {
    /// Mode
    pub id: ModeId,
    /// Display name
    pub name: String,
    /// Glyph
    pub icon: IconDescriptor,
    /// Mode tint
    pub color: Color,
    /// Currently chosen
    pub selected: bool,
}

/// Chips for every mode
pub fn mode_options(modes: &[TransportMode], selected: ModeId) -> Vec<ModeOption> {
    modes
        .iter()
        .map(|mode| ModeOption {
            id: mode.id,
            name: mode.name.clone(),
            icon: mode.icon,
            color: theme::mode_palette(mode.id).primary,
            selected: mode.id == selected,
        })
        .collect()
}

/// A row in the profile selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileOption {
    /// Profile id
    pub id: String,
    /// Display name
    pub name: String,
    /// Description line
    pub description: String,
    /// Glyph
    pub icon: IconDescriptor,
    /// Chip tint
    pub color: Color,
    /// Currently chosen
    pub selected: bool,
}

/// Rows for a mode's profiles
pub fn profile_options(profiles: &[Profile], selected: &str) -> Vec<ProfileOption> {
    profiles
        .iter()
        .map(|profile| ProfileOption {
            id: profile.id.clone(),
            name: profile.name.clone(),
            description: profile.description.clone(),
            icon: profile.icon,
            color: theme::profile_color(&profile.id),
            selected: profile.id == selected,
        })
        .collect()
}

// =============================================================================
// Route Card
// =============================================================================

/// One entry of the results list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCard {
    /// Route id, used when the card is pressed
    pub route_id: String,
    /// Badge text
    pub profile_label: String,
    /// Mode tint for badge, icons and selection border
    pub color: Color,
    /// Duration
    pub duration: String,
    /// Distance
    pub distance: String,
    /// Elevation gain, absent when the route is flat
    pub elevation: Option<String>,
    /// "Route Score" value
    pub score: String,
    /// Highlighted
    pub selected: bool,
}

impl RouteCard {
    /// Build a card
    pub fn new(route: &Route, units: DistanceUnit, selected: bool) -> Self {
        Self {
            route_id: route.id.clone(),
            profile_label: profile_label(&route.profile),
            color: theme::mode_palette(route.mode).primary,
            duration: format_duration(route.duration),
            distance: format_distance(route.distance, units),
            elevation: route
                .has_elevation_gain()
                .then(|| format_elevation(route.elevation)),
            score: format!("{:.1}", route.conformity),
            selected,
        }
    }
}

// =============================================================================
// Steps
// =============================================================================

/// One numbered row of the step list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRow {
    /// 1-based number
    pub number: usize,
    /// Instruction text
    pub instruction: String,
    /// Hidden when the step has no distance
    pub distance: Option<String>,
    /// Hidden when the step has no duration
    pub duration: Option<String>,
    /// Last row has no connector line
    pub is_last: bool,
}

/// Rows for every step of a route
pub fn step_rows(route: &Route, units: DistanceUnit) -> Vec<StepRow> {
    let last = route.last_step_index();
    route
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| StepRow {
            number: index + 1,
            instruction: step.instruction.clone(),
            distance: (step.distance > 0.0).then(|| format_distance(step.distance, units)),
            duration: (step.duration > 0).then(|| format_duration(step.duration)),
            is_last: index == last,
        })
        .collect()
}

// =============================================================================
// Elevation Chart
// =============================================================================

/// Default chart height in points
pub const CHART_HEIGHT: f64 = 120.0;

/// Space reserved for y-axis labels on the left
const AXIS_GUTTER: f64 = 30.0;
/// Space above the plot
const TOP_PADDING: f64 = 10.0;

/// A polyline vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Horizontal position
    pub x: f64,
    /// Vertical position, growing downwards
    pub y: f64,
}

/// Line chart of an elevation profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationChart {
    /// Polyline vertices in sample order
    pub points: Vec<ChartPoint>,
    /// Lowest sample
    pub min: i32,
    /// Highest sample
    pub max: i32,
    /// Y-axis labels: min, midpoint, max
    pub ticks: [f64; 3],
    /// Line color
    pub color: Color,
}

impl ElevationChart {
    /// Lay out `samples` in a `width` by `height` box
    ///
    /// A flat profile is drawn along the vertical middle. A single sample sits
    /// on the y-axis.
    pub fn new(samples: &[i32], width: f64, height: f64, color: Color) -> Self {
        let min = samples.iter().copied().min().unwrap_or(0);
        let max = samples.iter().copied().max().unwrap_or(0);
        let range = f64::from(max - min);

        let graph_height = height - 30.0;
        let graph_width = width - 40.0;
        let steps = samples.len().saturating_sub(1).max(1) as f64;

        let points = samples
            .iter()
            .enumerate()
            .map(|(index, &elevation)| {
                let normalized = if range == 0.0 {
                    0.5
                } else {
                    f64::from(elevation - min) / range
                };
                ChartPoint {
                    x: index as f64 / steps * graph_width + AXIS_GUTTER,
                    y: graph_height - normalized * graph_height + TOP_PADDING,
                }
            })
            .collect();

        Self {
            points,
            min,
            max,
            ticks: [f64::from(min), f64::from(min) + range / 2.0, f64::from(max)],
            color,
        }
    }

    /// SVG-style "x,y x,y" point list
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// Quick Filters
// =============================================================================

/// A switch in the quick filter card
///
/// The four switches are shared by every mode; each mode shows a subset
/// under its own labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuickToggle {
    /// Safety-flavoured preference
    SafetyLevel,
    /// Terrain or road-type preference
    AvoidHills,
    /// Surface or efficiency preference
    PreferPaved,
    /// Accessibility preference
    AccessibilityMode,
}

/// A labelled switch as shown for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickFilterItem {
    /// Which switch
    pub toggle: QuickToggle,
    /// Label for the mode
    pub label: &'static str,
    /// Current value
    pub value: bool,
}

/// Collapsible "Advanced Filters" card on the search screen
///
/// The values are local to the card and never reach the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickFilters {
    expanded: bool,
    time_vs_distance: u8,
    safety_level: bool,
    avoid_hills: bool,
    prefer_paved: bool,
    accessibility_mode: bool,
}

impl Default for QuickFilters {
    fn default() -> Self {
        Self {
            expanded: false,
            time_vs_distance: route_core::TIME_VS_DISTANCE_DEFAULT,
            safety_level: true,
            avoid_hills: false,
            prefer_paved: true,
            accessibility_mode: false,
        }
    }
}

impl QuickFilters {
    /// Card title
    pub const TITLE: &'static str = "Advanced Filters";

    /// Whether the body is shown
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expand or collapse
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Slider value
    pub fn time_vs_distance(&self) -> u8 {
        self.time_vs_distance
    }

    /// Move the slider, clamped to 0..=100
    pub fn set_time_vs_distance(&mut self, value: u8) {
        self.time_vs_distance = value.min(route_core::filters::TIME_VS_DISTANCE_MAX);
    }

    /// Current value of a switch
    pub fn value(&self, toggle: QuickToggle) -> bool {
        match toggle {
            QuickToggle::SafetyLevel => self.safety_level,
            QuickToggle::AvoidHills => self.avoid_hills,
            QuickToggle::PreferPaved => self.prefer_paved,
            QuickToggle::AccessibilityMode => self.accessibility_mode,
        }
    }

    /// Flip a switch
    pub fn toggle(&mut self, toggle: QuickToggle) {
        let slot = match toggle {
            QuickToggle::SafetyLevel => &mut self.safety_level,
            QuickToggle::AvoidHills => &mut self.avoid_hills,
            QuickToggle::PreferPaved => &mut self.prefer_paved,
            QuickToggle::AccessibilityMode => &mut self.accessibility_mode,
        };
        *slot = !*slot;
    }

    /// Switches shown for a mode, in display order
    pub fn items(&self, mode: ModeId) -> Vec<QuickFilterItem> {
        use QuickToggle::*;

        let layout: &[(QuickToggle, &'static str)] = match mode {
            ModeId::Walking => &[
                (SafetyLevel, "Prioritize well-lit paths"),
                (AvoidHills, "Avoid hills"),
                (PreferPaved, "Prefer paved paths"),
                (AccessibilityMode, "Accessibility mode"),
            ],
            ModeId::Cycling => &[
                (SafetyLevel, "Prefer bike lanes"),
                (AvoidHills, "Avoid hills"),
                (PreferPaved, "Prefer paved routes"),
            ],
            ModeId::Car => &[
                (SafetyLevel, "Avoid tolls"),
                (AvoidHills, "Avoid highways"),
                (PreferPaved, "Eco-friendly route"),
            ],
            ModeId::Transit => &[
                (SafetyLevel, "Minimize transfers"),
                (AccessibilityMode, "Prefer wheelchair access"),
                (AvoidHills, "Less walking"),
            ],
        };

        layout
            .iter()
            .map(|&(toggle, label)| QuickFilterItem {
                toggle,
                label,
                value: self.value(toggle),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_core::FixtureStore;

    #[test]
    fn test_formatting() {
        assert_eq!(format_distance(2.3, DistanceUnit::Km), "2.3 km");
        assert_eq!(format_distance(12.5, DistanceUnit::Km), "12.5 km");
        assert_eq!(format_distance(1.609344, DistanceUnit::Miles), "1.0 mi");
        assert_eq!(format_duration(35), "35 min");
        assert_eq!(profile_label("safe"), "Safe Route");
        assert_eq!(profile_label("less-walking"), "Less-walking Route");
        assert_eq!(profile_label(""), "Route");
    }

    #[test]
    fn test_route_card() {
        let store = FixtureStore::shared();
        let w1 = store.get_route("walking", "w1").unwrap();
        let card = RouteCard::new(w1, DistanceUnit::Km, false);
        assert_eq!(card.profile_label, "Safe Route");
        assert_eq!(card.duration, "35 min");
        assert_eq!(card.distance, "2.3 km");
        assert_eq!(card.elevation.as_deref(), Some("12 m"));
        assert_eq!(card.score, "4.8");
        assert_eq!(card.color, "#4CAF50");

        let v1 = store.get_route("car", "v1").unwrap();
        assert_eq!(RouteCard::new(v1, DistanceUnit::Km, true).elevation, None);
    }

    #[test]
    fn test_step_rows_hide_zero_values() {
        let store = FixtureStore::shared();
        let t1 = store.get_route("transit", "t1").unwrap();
        let rows = step_rows(t1, DistanceUnit::Km);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].instruction, "Start at Main Street");
        assert_eq!(rows[0].distance, None);
        assert_eq!(rows[0].duration, None);
        assert_eq!(rows[1].distance.as_deref(), Some("0.5 km"));
        assert!(rows[4].is_last);
        assert!(!rows[3].is_last);
    }

    #[test]
    fn test_elevation_chart_layout() {
        let chart = ElevationChart::new(&[0, 5, 10], 240.0, CHART_HEIGHT, "#000");
        assert_eq!(chart.min, 0);
        assert_eq!(chart.max, 10);
        assert_eq!(chart.ticks, [0.0, 5.0, 10.0]);

        // graph is 200 wide and 90 tall
        assert_eq!(chart.points[0], ChartPoint { x: 30.0, y: 100.0 });
        assert_eq!(chart.points[1], ChartPoint { x: 130.0, y: 55.0 });
        assert_eq!(chart.points[2], ChartPoint { x: 230.0, y: 10.0 });
        assert_eq!(chart.polyline(), "30,100 130,55 230,10");
    }

    #[test]
    fn test_elevation_chart_flat_and_short() {
        let flat = ElevationChart::new(&[5, 5, 5], 240.0, CHART_HEIGHT, "#000");
        assert!(flat.points.iter().all(|p| p.y == 55.0));

        let single = ElevationChart::new(&[7], 240.0, CHART_HEIGHT, "#000");
        assert_eq!(single.points, vec![ChartPoint { x: 30.0, y: 55.0 }]);

        let empty = ElevationChart::new(&[], 240.0, CHART_HEIGHT, "#000");
        assert!(empty.points.is_empty());
    }

    #[test]
    fn test_quick_filters_per_mode() {
        let mut filters = QuickFilters::default();
        assert_eq!(filters.items(ModeId::Walking).len(), 4);
        assert_eq!(filters.items(ModeId::Car)[1].label, "Avoid highways");

        filters.toggle(QuickToggle::AvoidHills);
        let transit = filters.items(ModeId::Transit);
        assert_eq!(transit[2].label, "Less walking");
        assert!(transit[2].value);

        filters.set_time_vs_distance(200);
        assert_eq!(filters.time_vs_distance(), 100);

        assert!(!filters.is_expanded());
        filters.toggle_expanded();
        assert!(filters.is_expanded());
    }

    #[test]
    fn test_selectors() {
        let store = FixtureStore::shared();
        let modes = mode_options(store.list_modes(), ModeId::Cycling);
        assert_eq!(modes.len(), 4);
        assert!(modes[1].selected);
        assert_eq!(modes[1].color, "#FF9800");

        let profiles = profile_options(&store.mode(ModeId::Car).profiles, "eco");
        assert!(profiles[1].selected);
        assert_eq!(profiles[3].id, "no-tolls");
    }
}
