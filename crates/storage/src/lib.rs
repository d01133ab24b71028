//! Preference storage for the route planner
//!
//! This crate defines the shapes of user-editable state (profile settings and
//! route filters) and the [`backend::PreferencesBackend`] hook through which
//! that state is loaded and saved. The shipped backend keeps everything in
//! memory for the lifetime of the process.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod preferences;

pub use backend::{MemoryBackend, PreferencesBackend, PreferencesError, Result};
pub use preferences::{
    AccessibilityPreferences, DistanceUnit, FilterPreferences, PreferenceSnapshot,
    ThemePreference, UserPreferences,
};
