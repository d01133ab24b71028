//! User preferences and route filter settings
//!
//! These structures are what the profile and filter screens edit. They are
//! held by the app session and go through a
//! [`PreferencesBackend`](crate::backend::PreferencesBackend) to load and save.

use route_core::{default_filters, FilterSetting, ModeId, RouteFilter, TIME_VS_DISTANCE_DEFAULT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const KM_PER_MILE: f64 = 1.609_344;

/// Unit used to display distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometres
    #[default]
    Km,
    /// Statute miles
    Miles,
}

impl DistanceUnit {
    /// Settings label
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "Kilometers",
            DistanceUnit::Miles => "Miles",
        }
    }

    /// Suffix appended to formatted values
    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// Convert a fixture distance (always kilometres) into this unit
    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Km => km,
            DistanceUnit::Miles => km / KM_PER_MILE,
        }
    }

    /// The other unit
    pub fn toggled(&self) -> Self {
        match self {
            DistanceUnit::Km => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Km,
        }
    }
}

/// App appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ThemePreference {
    /// Whether this is the dark appearance
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// The other appearance
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// Accessibility flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPreferences {
    /// Prefer wheelchair-accessible routes
    #[serde(default)]
    pub wheelchair_access: bool,

    /// Avoid stairs
    #[serde(default)]
    pub avoid_stairs: bool,

    /// Visual impairment support
    #[serde(default)]
    pub visual_impairment: bool,

    /// Spoken guidance
    #[serde(default)]
    pub audio_guidance: bool,
}

impl Default for AccessibilityPreferences {
    fn default() -> Self {
        Self {
            wheelchair_access: true,
            avoid_stairs: true,
            visual_impairment: false,
            audio_guidance: true,
        }
    }
}

/// Profile screen settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Mode shown as the user's default
    pub default_mode: ModeId,

    /// Preferred profile per mode
    pub default_profiles: BTreeMap<ModeId, String>,

    /// Distance display unit
    #[serde(default)]
    pub units: DistanceUnit,

    /// Appearance
    #[serde(default)]
    pub theme: ThemePreference,

    /// Accessibility flags
    #[serde(default)]
    pub accessibility: AccessibilityPreferences,
}

impl Default for UserPreferences {
    fn default() -> Self {
        let default_profiles = [
            (ModeId::Walking, "safe"),
            (ModeId::Cycling, "sport"),
            (ModeId::Car, "eco"),
            (ModeId::Transit, "fast"),
        ]
        .into_iter()
        .map(|(mode, profile)| (mode, profile.to_string()))
        .collect();

        Self {
            default_mode: ModeId::Cycling,
            default_profiles,
            units: DistanceUnit::default(),
            theme: ThemePreference::default(),
            accessibility: AccessibilityPreferences::default(),
        }
    }
}

impl UserPreferences {
    /// Preferred profile for a mode, if one is configured
    pub fn default_profile(&self, mode: ModeId) -> Option<&str> {
        self.default_profiles.get(&mode).map(String::as_str)
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Flip between kilometres and miles
    pub fn toggle_units(&mut self) {
        self.units = self.units.toggled();
    }
}

/// Filter panel settings for every mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreferences {
    /// Toggles per mode
    pub modes: BTreeMap<ModeId, Vec<FilterSetting>>,

    /// Time-versus-distance slider, 0 to 100
    pub time_vs_distance: u8,
}

impl Default for FilterPreferences {
    fn default() -> Self {
        Self {
            modes: ModeId::all()
                .into_iter()
                .map(|mode| (mode, default_filters(mode)))
                .collect(),
            time_vs_distance: TIME_VS_DISTANCE_DEFAULT,
        }
    }
}

impl FilterPreferences {
    /// Toggles for a mode
    pub fn for_mode(&self, mode: ModeId) -> &[FilterSetting] {
        self.modes.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Flip one toggle of a mode. Returns false when the index is out of range.
    pub fn toggle(&mut self, mode: ModeId, index: usize) -> bool {
        match self.modes.get_mut(&mode).and_then(|filters| filters.get_mut(index)) {
            Some(setting) => {
                setting.value = !setting.value;
                true
            }
            None => false,
        }
    }

    /// Move the slider, clamped to 0..=100
    pub fn set_time_vs_distance(&mut self, value: u8) {
        self.time_vs_distance = value.min(route_core::filters::TIME_VS_DISTANCE_MAX);
    }

    /// Restore every mode's defaults and centre the slider
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Results-list filter input for a mode
    pub fn route_filter(&self, mode: ModeId) -> RouteFilter {
        RouteFilter {
            mode,
            toggles: self.for_mode(mode).to_vec(),
            time_vs_distance: self.time_vs_distance,
        }
    }
}

/// Everything a backend loads and saves in one piece
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    /// Profile settings
    #[serde(default)]
    pub user: UserPreferences,

    /// Filter settings
    #[serde(default)]
    pub filters: FilterPreferences,
}
