//! Profile and settings tab

use storage::{DistanceUnit, UserPreferences};

use super::auth::APP_NAME;
use super::ScreenContext;
use crate::navigation::NavigationAction;
use crate::theme::{theme_colors, ThemeColors};

/// Static rows of the "Account" section: title and subtitle
pub const ACCOUNT_ITEMS: [(&str, &str); 3] = [
    ("Privacy Settings", "Manage your data and privacy"),
    ("Notifications", "Configure app notifications"),
    ("Help & Support", "FAQs and contact information"),
];

/// Settings backed by the shared session
#[derive(Debug)]
pub struct ProfileViewer {
    ctx: ScreenContext,
}

impl ProfileViewer {
    /// Account holder shown in the header
    pub const ACCOUNT_NAME: &'static str = "Sarah Johnson";

    /// Account email shown in the header
    pub const ACCOUNT_EMAIL: &'static str = "sarah.johnson@example.com";

    /// Mount
    pub fn new(ctx: ScreenContext) -> Self {
        Self { ctx }
    }

    /// Current preferences
    pub fn preferences(&self) -> UserPreferences {
        self.ctx.session.preferences()
    }

    /// "Default Transport Mode" subtitle
    pub fn default_mode_name(&self) -> &'static str {
        let mode = self.preferences().default_mode;
        self.ctx.store.mode(mode).name.as_str()
    }

    /// Dark mode switch
    pub fn dark_mode(&self) -> bool {
        self.preferences().theme.is_dark()
    }

    /// Flip dark mode
    pub fn toggle_dark_mode(&self) {
        self.ctx.session.update_preferences(UserPreferences::toggle_theme);
    }

    /// Colors for the current appearance
    pub fn theme(&self) -> ThemeColors {
        theme_colors(self.preferences().theme.into())
    }

    /// Distance units switch; on means miles
    pub fn uses_miles(&self) -> bool {
        self.preferences().units == DistanceUnit::Miles
    }

    /// "Distance Units" subtitle
    pub fn units_label(&self) -> &'static str {
        self.preferences().units.label()
    }

    /// Flip distance units
    pub fn toggle_units(&self) {
        self.ctx.session.update_preferences(UserPreferences::toggle_units);
    }

    /// Footer
    pub fn version_label(&self) -> String {
        format!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// "Sign Out"
    pub fn sign_out(&self) {
        tracing::info!("signing out");
        self.ctx.navigator.dispatch(NavigationAction::SignOut);
    }
}
