//! Parameter contracts between screens
//!
//! Every navigation target that takes input has a typed parameter struct.
//! Parameters travel as string key/value pairs (the query part of a screen
//! path). Parsing never fails: missing keys take their documented default.
//! The mode is carried as the raw string so that an unknown mode reaches the
//! target screen, which then renders its empty or not-found state.

use route_core::ModeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw screen parameters
pub type RouteParams = HashMap<String, String>;

/// Default mode for every target
pub const DEFAULT_MODE: &str = "walking";

/// Default profile for the results list
pub const DEFAULT_PROFILE: &str = "safe";

/// Origin used when the origin is missing or was left empty
pub const DEFAULT_ORIGIN: &str = "Current Location";

/// Destination used when the results list is opened without one
pub const DEFAULT_DESTINATION: &str = "Destination";

/// Destination the search screen substitutes for an empty field
pub const UNKNOWN_DESTINATION: &str = "Unknown Destination";

fn param_or(params: &RouteParams, key: &str, default: &str) -> String {
    params
        .get(key)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Parse a raw mode string, if it names a known mode
pub fn parse_mode(mode: &str) -> Option<ModeId> {
    mode.parse().ok()
}

// =============================================================================
// Entry references
// =============================================================================

/// Where an opaque entry reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// Favorites tab
    Favorites,
    /// History tab
    History,
}

impl EntrySource {
    /// Parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySource::Favorites => "favorites",
            EntrySource::History => "history",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "favorites" => Some(EntrySource::Favorites),
            "history" => Some(EntrySource::History),
            _ => None,
        }
    }
}

/// Favorite or history entry that opened the results list
///
/// The id is never resolved against the route fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryRef {
    /// Origin tab
    pub source: EntrySource,
    /// Opaque id
    pub id: String,
}

impl EntryRef {
    /// Reference a favorite
    pub fn favorite(id: impl Into<String>) -> Self {
        Self {
            source: EntrySource::Favorites,
            id: id.into(),
        }
    }

    /// Reference a history entry
    pub fn history(id: impl Into<String>) -> Self {
        Self {
            source: EntrySource::History,
            id: id.into(),
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// Input of the results list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsParams {
    /// Mode key
    pub mode: String,
    /// Profile id; shown, not used for filtering
    pub profile: String,
    /// Origin label
    pub origin: String,
    /// Destination label
    pub destination: String,
    /// Entry that opened the list, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryRef>,
}

impl Default for ResultsParams {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            entry: None,
        }
    }
}

impl ResultsParams {
    /// Defaults plus an entry reference
    pub fn for_entry(entry: EntryRef) -> Self {
        Self {
            entry: Some(entry),
            ..Self::default()
        }
    }

    /// Parse, substituting defaults
    pub fn from_params(params: &RouteParams) -> Self {
        let entry = params
            .get("from")
            .and_then(|from| EntrySource::parse(from))
            .zip(params.get("id"))
            .map(|(source, id)| EntryRef {
                source,
                id: id.clone(),
            });

        Self {
            mode: param_or(params, "mode", DEFAULT_MODE),
            profile: param_or(params, "profile", DEFAULT_PROFILE),
            origin: param_or(params, "origin", DEFAULT_ORIGIN),
            destination: param_or(params, "destination", DEFAULT_DESTINATION),
            entry,
        }
    }

    /// Key/value pairs in path order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("mode", self.mode.clone()),
            ("profile", self.profile.clone()),
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
        ];
        if let Some(entry) = &self.entry {
            query.push(("from", entry.source.as_str().to_string()));
            query.push(("id", entry.id.clone()));
        }
        query
    }

    /// Parsed mode, if known
    pub fn mode_id(&self) -> Option<ModeId> {
        parse_mode(&self.mode)
    }
}

// =============================================================================
// Details
// =============================================================================

/// Input of the route detail viewer
///
/// A missing route id parses to an empty id, which resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsParams {
    /// Mode key
    pub mode: String,
    /// Route id within the mode
    pub route_id: String,
}

impl DetailsParams {
    /// Create parameters
    pub fn new(mode: impl Into<String>, route_id: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            route_id: route_id.into(),
        }
    }

    /// Parse, substituting defaults
    pub fn from_params(params: &RouteParams) -> Self {
        Self {
            mode: param_or(params, "mode", DEFAULT_MODE),
            route_id: param_or(params, "routeId", ""),
        }
    }

    /// Key/value pairs in path order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![("mode", self.mode.clone()), ("routeId", self.route_id.clone())]
    }
}

// =============================================================================
// Map
// =============================================================================

/// Input of the live navigation view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapParams {
    /// Mode key
    pub mode: String,
    /// Route to follow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
    /// Opened via "Start Navigation"
    pub navigate: bool,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            route_id: None,
            navigate: false,
        }
    }
}

impl MapParams {
    /// Parameters for turn-by-turn navigation along a route
    pub fn navigate_route(mode: impl Into<String>, route_id: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            route_id: Some(route_id.into()),
            navigate: true,
        }
    }

    /// Parse, substituting defaults. Only the exact string `"true"` enables navigation.
    pub fn from_params(params: &RouteParams) -> Self {
        Self {
            mode: param_or(params, "mode", DEFAULT_MODE),
            route_id: params.get("routeId").cloned(),
            navigate: params.get("navigate").map(String::as_str) == Some("true"),
        }
    }

    /// Key/value pairs in path order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("mode", self.mode.clone())];
        if let Some(route_id) = &self.route_id {
            query.push(("routeId", route_id.clone()));
        }
        query.push(("navigate", self.navigate.to_string()));
        query
    }
}

// =============================================================================
// Filters
// =============================================================================

/// Input of the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiltersParams {
    /// Mode key
    pub mode: String,
}

impl Default for FiltersParams {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

impl FiltersParams {
    /// Create parameters
    pub fn new(mode: impl Into<String>) -> Self {
        Self { mode: mode.into() }
    }

    /// Parse, substituting defaults
    pub fn from_params(params: &RouteParams) -> Self {
        Self {
            mode: param_or(params, "mode", DEFAULT_MODE),
        }
    }

    /// Key/value pairs in path order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![("mode", self.mode.clone())]
    }
}
