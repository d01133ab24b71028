//! Transport modes and their route profiles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::icons::IconDescriptor;

/// Identifier of a transport mode
///
/// The set is closed: every screen that switches on a mode handles all four.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ModeId {
    /// On foot
    #[default]
    Walking,
    /// Bicycle
    Cycling,
    /// Private car
    Car,
    /// Public transit
    Transit,
}

impl ModeId {
    /// All modes in display order
    pub fn all() -> [ModeId; 4] {
        [ModeId::Walking, ModeId::Cycling, ModeId::Car, ModeId::Transit]
    }

    /// Lowercase key used in navigation parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeId::Walking => "walking",
            ModeId::Cycling => "cycling",
            ModeId::Car => "car",
            ModeId::Transit => "transit",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ModeId::Walking => "Walking",
            ModeId::Cycling => "Cycling",
            ModeId::Car => "Car",
            ModeId::Transit => "Transit",
        }
    }

    /// Glyph for this mode
    pub fn icon(&self) -> IconDescriptor {
        match self {
            ModeId::Walking => IconDescriptor::Footprints,
            ModeId::Cycling => IconDescriptor::Bike,
            ModeId::Car => IconDescriptor::Car,
            ModeId::Transit => IconDescriptor::Train,
        }
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a mode key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transport mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for ModeId {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walking" => Ok(ModeId::Walking),
            "cycling" => Ok(ModeId::Cycling),
            "car" => Ok(ModeId::Car),
            "transit" => Ok(ModeId::Transit),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// A named route-selection strategy
///
/// Profile ids are unique only within their mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Mode-scoped identifier, e.g. `safe`
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Glyph
    pub icon: IconDescriptor,
}

impl Profile {
    /// Create a profile, resolving its glyph from the id
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: IconDescriptor::for_profile(id),
        }
    }
}

/// A transport mode with its ordered profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportMode {
    /// Mode identifier
    pub id: ModeId,
    /// Display name
    pub name: String,
    /// Glyph
    pub icon: IconDescriptor,
    /// Profiles, first one is the mode's default
    pub profiles: Vec<Profile>,
}

impl TransportMode {
    /// Look up a profile of this mode
    pub fn profile(&self, profile_id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == profile_id)
    }

    /// The profile selected when the user switches to this mode
    pub fn default_profile(&self) -> Option<&Profile> {
        self.profiles.first()
    }
}
