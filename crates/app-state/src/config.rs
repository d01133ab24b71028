//! App configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`AppConfig`]
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed delays used by screens, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimingConfig {
    /// Splash screen auto-advance to login
    pub splash_delay_ms: u64,
    /// Simulated authentication on login and register
    pub auth_delay_ms: u64,
    /// Selection highlight before opening route details
    pub selection_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: 2500,
            auth_delay_ms: 1500,
            selection_delay_ms: 300,
        }
    }
}

impl TimingConfig {
    /// Splash delay
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Authentication delay
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// Selection delay
    pub fn selection_delay(&self) -> Duration {
        Duration::from_millis(self.selection_delay_ms)
    }
}

/// Top-level app configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Screen delays
    pub timing: TimingConfig,
    /// `tracing` filter directive used when no `RUST_LOG` is set
    pub log_filter: String,
    /// Tab key shown when the app is entered (`search`, `favorites`, `history`, `profile`)
    pub initial_tab: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            log_filter: "info".to_string(),
            initial_tab: "search".to_string(),
        }
    }
}

impl AppConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the splash delay
    pub fn splash_delay(mut self, delay: Duration) -> Self {
        self.timing.splash_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the simulated authentication delay
    pub fn auth_delay(mut self, delay: Duration) -> Self {
        self.timing.auth_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the selection highlight delay
    pub fn selection_delay(mut self, delay: Duration) -> Self {
        self.timing.selection_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the tab shown when the app is entered
    pub fn initial_tab(mut self, tab: impl Into<String>) -> Self {
        self.initial_tab = tab.into();
        self
    }

    /// Set the log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
