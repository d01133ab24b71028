//! Route filter settings
//!
//! Filters are mode-scoped boolean preferences plus a time-versus-distance
//! weighting. [`RouteFilter`] is the input the results list accepts; no
//! current caller supplies non-default values and the list does not apply
//! them.

use serde::{Deserialize, Serialize};

use crate::modes::ModeId;

/// Slider position the filter panel starts at and resets to
pub const TIME_VS_DISTANCE_DEFAULT: u8 = 50;

/// Upper bound of the time-versus-distance slider
pub const TIME_VS_DISTANCE_MAX: u8 = 100;

/// A labelled boolean preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSetting {
    /// Label shown next to the toggle
    pub label: String,
    /// Current value
    pub value: bool,
}

impl FilterSetting {
    fn new(label: &str, value: bool) -> Self {
        Self { label: label.to_string(), value }
    }
}

/// Default toggles for a mode
pub fn default_filters(mode: ModeId) -> Vec<FilterSetting> {
    let defaults: &[(&str, bool)] = match mode {
        ModeId::Walking => &[
            ("Avoid hills", false),
            ("Prefer well-lit paths", true),
            ("Prefer quieter streets", true),
            ("Avoid stairs", false),
            ("Accessible routes", false),
        ],
        ModeId::Cycling => &[
            ("Prefer bike lanes", true),
            ("Avoid traffic", true),
            ("Prefer paved roads", true),
            ("Include elevation training", false),
            ("Avoid hills", false),
        ],
        ModeId::Car => &[
            ("Avoid tolls", false),
            ("Avoid highways", false),
            ("Prefer scenic routes", false),
            ("Eco-friendly route", true),
            ("Avoid traffic", true),
        ],
        ModeId::Transit => &[
            ("Fewer transfers", true),
            ("Less walking", false),
            ("Prefer trains over buses", false),
            ("Wheelchair accessible", false),
            ("Real-time departures", true),
        ],
    };

    defaults
        .iter()
        .map(|(label, value)| FilterSetting::new(label, *value))
        .collect()
}

/// Filter input for a results query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFilter {
    /// Mode the toggles belong to
    pub mode: ModeId,
    /// Boolean predicates
    pub toggles: Vec<FilterSetting>,
    /// 0 favours time, 100 favours distance
    pub time_vs_distance: u8,
}

impl RouteFilter {
    /// The default filter for a mode
    pub fn defaults(mode: ModeId) -> Self {
        Self {
            mode,
            toggles: default_filters(mode),
            time_vs_distance: TIME_VS_DISTANCE_DEFAULT,
        }
    }

    /// Whether every value equals the mode default
    pub fn is_default(&self) -> bool {
        *self == Self::defaults(self.mode)
    }
}
