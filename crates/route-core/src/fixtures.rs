//! Static fixture dataset
//!
//! [`FixtureStore`] stands in for every backend service the app would talk
//! to. It is built once and only read afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{FixtureError, Result};
use crate::icons::IconDescriptor;
use crate::map::{Coordinate, MapGeometry};
use crate::modes::{ModeId, Profile, TransportMode};
use crate::places::{FavoriteLocation, HistoryEntry, HistoryFilter};
use crate::routes::{Route, Step};

/// Destination shortcut offered on the search screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentDestination {
    /// Place name, copied into the destination field
    pub label: String,
    /// Secondary line
    pub locality: String,
}

/// Read-only store of all fixture data
#[derive(Debug, Clone)]
pub struct FixtureStore {
    modes: Vec<TransportMode>,
    routes: HashMap<ModeId, Vec<Route>>,
    favorites: Vec<FavoriteLocation>,
    history: Vec<HistoryEntry>,
    map: MapGeometry,
    recent: Vec<RecentDestination>,
}

static SHARED: OnceLock<FixtureStore> = OnceLock::new();

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureStore {
    /// Build the dataset
    pub fn new() -> Self {
        Self {
            modes: build_modes(),
            routes: build_routes(),
            favorites: build_favorites(),
            history: build_history(),
            map: build_map(),
            recent: vec![
                RecentDestination {
                    label: "CY Tech".to_string(),
                    locality: "Cergy, 95000".to_string(),
                },
                RecentDestination {
                    label: "Brooklyn Bridge".to_string(),
                    locality: "Brooklyn, NY".to_string(),
                },
            ],
        }
    }

    /// Process-wide instance, built on first use
    pub fn shared() -> &'static FixtureStore {
        SHARED.get_or_init(FixtureStore::new)
    }

    /// All transport modes in display order
    pub fn list_modes(&self) -> &[TransportMode] {
        &self.modes
    }

    /// Mode record for an id
    pub fn mode(&self, id: ModeId) -> &TransportMode {
        // build_modes covers ModeId::all(), and the order matches the enum
        &self.modes[id as usize]
    }

    /// First profile of a mode, selected whenever the user switches to it
    pub fn first_profile(&self, id: ModeId) -> Option<&Profile> {
        self.mode(id).default_profile()
    }

    /// Routes of a mode, in declaration order
    pub fn routes_for_mode(&self, mode: ModeId) -> &[Route] {
        self.routes.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Routes for a raw mode key; unknown keys yield an empty slice
    pub fn routes_for_mode_key(&self, mode: &str) -> &[Route] {
        match mode.parse::<ModeId>() {
            Ok(mode) => self.routes_for_mode(mode),
            Err(_) => {
                tracing::debug!(mode, "no routes for unknown mode");
                &[]
            }
        }
    }

    /// Resolve a route by its `(mode, id)` key
    pub fn get_route(&self, mode: &str, route_id: &str) -> Result<&Route> {
        self.routes_for_mode_key(mode)
            .iter()
            .find(|route| route.id == route_id)
            .ok_or_else(|| FixtureError::RouteNotFound {
                mode: mode.to_string(),
                route_id: route_id.to_string(),
            })
    }

    /// Resolve a mode key
    pub fn resolve_mode(&self, mode: &str) -> Result<ModeId> {
        mode.parse()
            .map_err(|_| FixtureError::UnknownMode(mode.to_string()))
    }

    /// Saved places
    pub fn list_favorites(&self) -> &[FavoriteLocation] {
        &self.favorites
    }

    /// Trip history, optionally narrowed to one mode
    pub fn list_history(&self, filter: HistoryFilter) -> Vec<&HistoryEntry> {
        self.history.iter().filter(|entry| filter.matches(entry)).collect()
    }

    /// Demo map geometry
    pub fn map_geometry(&self) -> &MapGeometry {
        &self.map
    }

    /// Destination shortcuts for the search screen
    pub fn recent_destinations(&self) -> &[RecentDestination] {
        &self.recent
    }
}

// =============================================================================
// Dataset
// =============================================================================

fn build_modes() -> Vec<TransportMode> {
    ModeId::all()
        .into_iter()
        .map(|id| {
            let profiles = match id {
                ModeId::Walking => vec![
                    Profile::new("safe", "Safe", "Well-lit paths with less traffic"),
                    Profile::new("scenic", "Scenic", "Beautiful routes through parks and landmarks"),
                    Profile::new("fast", "Fast", "Shortest paths to destination"),
                    Profile::new("accessible", "Accessible", "Routes with ramps and elevators"),
                ],
                ModeId::Cycling => vec![
                    Profile::new("safe", "Safe", "Dedicated bike lanes and less traffic"),
                    Profile::new("sport", "Sport", "Routes with more elevation for training"),
                    Profile::new("fast", "Fast", "Direct routes to destination"),
                    Profile::new("scenic", "Scenic", "Beautiful cycling paths and trails"),
                ],
                ModeId::Car => vec![
                    Profile::new("fast", "Fast", "Fastest route with highways"),
                    Profile::new("eco", "Eco", "Fuel-efficient routes"),
                    Profile::new("scenic", "Scenic", "Scenic drives with viewpoints"),
                    Profile::new("no-tolls", "No Tolls", "Avoid toll roads and bridges"),
                ],
                ModeId::Transit => vec![
                    Profile::new("fast", "Fast", "Routes with fewer transfers"),
                    Profile::new("cheap", "Cheap", "Most economical routes"),
                    Profile::new("accessible", "Accessible", "Routes with accessible stations"),
                    Profile::new("less-walking", "Less Walking", "Minimize walking distance"),
                ],
            };

            TransportMode {
                id,
                name: id.display_name().to_string(),
                icon: id.icon(),
                profiles,
            }
        })
        .collect()
}

/// Totals of a route: duration (min), distance (km), elevation gain (m), conformity
type Summary = (u32, f64, u32, f64);

fn route(
    id: &str,
    mode: ModeId,
    profile: &str,
    (duration, distance, elevation, conformity): Summary,
    steps: &[(&str, f64, u32)],
    elevation_profile: &[i32],
) -> Route {
    Route {
        id: id.to_string(),
        mode,
        profile: profile.to_string(),
        duration,
        distance,
        elevation,
        conformity,
        steps: steps
            .iter()
            .enumerate()
            .map(|(i, (instruction, distance, duration))| Step {
                id: format!("s{}", i + 1),
                instruction: instruction.to_string(),
                distance: *distance,
                duration: *duration,
            })
            .collect(),
        elevation_profile: elevation_profile.to_vec(),
    }
}

const START: &str = "Start at Main Street";
const ARRIVE: &str = "Arrive at destination";

fn build_routes() -> HashMap<ModeId, Vec<Route>> {
    let mut routes = HashMap::new();

    routes.insert(
        ModeId::Walking,
        vec![
            route(
                "w1",
                ModeId::Walking,
                "safe",
                (35, 2.3, 12, 4.8),
                &[
                    (START, 0.0, 0),
                    ("Turn right onto Oak Avenue", 0.5, 8),
                    ("Walk through Central Park", 1.2, 20),
                    ("Turn left onto Maple Street", 0.4, 5),
                    (ARRIVE, 0.2, 2),
                ],
                &[0, 2, 5, 10, 12, 8, 5, 2, 0],
            ),
            route(
                "w2",
                ModeId::Walking,
                "fast",
                (28, 1.9, 18, 4.2),
                &[
                    (START, 0.0, 0),
                    ("Turn right onto Pine Avenue", 0.4, 6),
                    ("Cross Highway Bridge", 0.8, 12),
                    ("Turn left onto Cedar Street", 0.5, 8),
                    (ARRIVE, 0.2, 2),
                ],
                &[0, 5, 10, 18, 15, 12, 5, 0],
            ),
            route(
                "w3",
                ModeId::Walking,
                "scenic",
                (42, 2.7, 8, 4.9),
                &[
                    (START, 0.0, 0),
                    ("Enter Riverside Path", 0.6, 10),
                    ("Follow path along river", 1.4, 22),
                    ("Turn right onto Garden Street", 0.5, 8),
                    (ARRIVE, 0.2, 2),
                ],
                &[0, 1, 3, 5, 8, 6, 4, 2, 0],
            ),
        ],
    );

    routes.insert(
        ModeId::Cycling,
        vec![
            route(
                "c1",
                ModeId::Cycling,
                "sport",
                (25, 5.2, 65, 4.6),
                &[
                    (START, 0.0, 0),
                    ("Turn right onto Hill Road", 1.2, 6),
                    ("Climb Sunset Hill", 2.8, 14),
                    ("Descend via Ridge Path", 1.0, 4),
                    (ARRIVE, 0.2, 1),
                ],
                &[10, 25, 45, 65, 60, 40, 20, 10],
            ),
            route(
                "c2",
                ModeId::Cycling,
                "safe",
                (28, 4.8, 20, 4.9),
                &[
                    (START, 0.0, 0),
                    ("Join Bike Lane on Oak Avenue", 1.0, 5),
                    ("Follow Dedicated Bike Path", 2.5, 12),
                    ("Turn left onto Maple Street Bike Lane", 1.1, 6),
                    (ARRIVE, 0.2, 1),
                ],
                &[5, 10, 15, 20, 18, 12, 8, 5],
            ),
            route(
                "c3",
                ModeId::Cycling,
                "fast",
                (18, 4.5, 30, 4.1),
                &[
                    (START, 0.0, 0),
                    ("Take Main Boulevard", 2.2, 8),
                    ("Turn right onto Highway Shoulder", 1.8, 7),
                    ("Exit onto Park Street", 0.3, 2),
                    (ARRIVE, 0.2, 1),
                ],
                &[5, 15, 30, 25, 20, 10, 5],
            ),
        ],
    );

    routes.insert(
        ModeId::Car,
        vec![
            route(
                "v1",
                ModeId::Car,
                "fast",
                (15, 12.5, 0, 4.7),
                &[
                    (START, 0.0, 0),
                    ("Turn right onto Highway Entrance", 1.5, 2),
                    ("Continue on Highway 101", 9.0, 8),
                    ("Take Exit 24 toward Downtown", 1.5, 3),
                    (ARRIVE, 0.5, 2),
                ],
                &[10, 15, 20, 25, 20, 15, 10],
            ),
            route(
                "v2",
                ModeId::Car,
                "eco",
                (22, 10.2, 0, 4.8),
                &[
                    (START, 0.0, 0),
                    ("Turn right onto Oak Avenue", 2.0, 5),
                    ("Continue on City Boulevard", 6.5, 12),
                    ("Turn left onto Park Street", 1.2, 3),
                    (ARRIVE, 0.5, 2),
                ],
                &[5, 10, 15, 20, 15, 10, 5],
            ),
            route(
                "v3",
                ModeId::Car,
                "scenic",
                (35, 18.5, 0, 4.9),
                &[
                    (START, 0.0, 0),
                    ("Turn onto Coastal Highway", 3.5, 5),
                    ("Continue along Scenic Route 1", 12.0, 25),
                    ("Turn left onto Ocean View Drive", 2.5, 4),
                    (ARRIVE, 0.5, 1),
                ],
                &[5, 15, 30, 45, 35, 20, 10, 5],
            ),
        ],
    );

    routes.insert(
        ModeId::Transit,
        vec![
            route(
                "t1",
                ModeId::Transit,
                "fast",
                (28, 8.5, 0, 4.5),
                &[
                    (START, 0.0, 0),
                    ("Walk to Central Station", 0.5, 7),
                    ("Take Blue Line to Downtown", 7.0, 15),
                    ("Walk to destination", 1.0, 6),
                    (ARRIVE, 0.0, 0),
                ],
                &[5, 10, 5, 10, 5],
            ),
            route(
                "t2",
                ModeId::Transit,
                "less-walking",
                (38, 9.2, 0, 4.6),
                &[
                    (START, 0.0, 0),
                    ("Walk to Local Bus Stop", 0.2, 3),
                    ("Take Bus 42 to Central Station", 2.0, 8),
                    ("Take Blue Line to Downtown", 7.0, 15),
                    ("Take Bus 15 to destination", 0.8, 10),
                    ("Walk to destination", 0.2, 2),
                ],
                &[5, 5, 10, 5, 5, 5],
            ),
            route(
                "t3",
                ModeId::Transit,
                "cheap",
                (45, 8.5, 0, 4.3),
                &[
                    (START, 0.0, 0),
                    ("Walk to Local Bus Stop", 0.5, 7),
                    ("Take Bus 10 to Downtown", 8.0, 35),
                    ("Walk to destination", 0.3, 3),
                    (ARRIVE, 0.0, 0),
                ],
                &[5, 10, 5, 5],
            ),
        ],
    );

    routes
}

fn build_favorites() -> Vec<FavoriteLocation> {
    [
        ("fav1", "Home", "123 Maple Street", "home"),
        ("fav2", "Work", "456 Business Plaza", "briefcase"),
        ("fav3", "Gym", "789 Fitness Avenue", "dumbbell"),
        ("fav4", "Parents", "321 Family Road", "heart"),
    ]
    .into_iter()
    .map(|(id, name, address, icon)| FavoriteLocation {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        icon: IconDescriptor::for_place(icon),
    })
    .collect()
}

fn build_history() -> Vec<HistoryEntry> {
    [
        ("his1", "Home", "Work", (2025, 4, 10), ModeId::Cycling, "fast", 22),
        ("his2", "Work", "Gym", (2025, 4, 9), ModeId::Walking, "safe", 15),
        ("his3", "Gym", "Home", (2025, 4, 9), ModeId::Transit, "fast", 28),
        ("his4", "Home", "Parents", (2025, 4, 8), ModeId::Car, "scenic", 45),
    ]
    .into_iter()
    .filter_map(|(id, from, to, (y, m, d), mode, profile, duration)| {
        Some(HistoryEntry {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            mode,
            profile: profile.to_string(),
            duration,
        })
    })
    .collect()
}

fn build_map() -> MapGeometry {
    MapGeometry {
        user_location: Coordinate::new(48.8584, 2.2945),
        destination: Coordinate::new(48.8606, 2.3376),
        route: vec![
            Coordinate::new(48.8584, 2.2945),
            Coordinate::new(48.8580, 2.3000),
            Coordinate::new(48.8575, 2.3050),
            Coordinate::new(48.8582, 2.3100),
            Coordinate::new(48.8590, 2.3150),
            Coordinate::new(48.8587, 2.3200),
            Coordinate::new(48.8595, 2.3250),
            Coordinate::new(48.8600, 2.3300),
            Coordinate::new(48.8606, 2.3376),
        ],
    }
}
