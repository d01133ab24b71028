//! Route planner application
//!
//! [`App`] wires the pieces together: the navigation controller, the screen
//! host, the shared preference session and the configured timings. A
//! rendering shell (or a test) drives it by calling operations on the
//! current screen and then pumping.
//!
//! ```no_run
//! use app_state::AppConfig;
//! use route_planner::App;
//!
//! # async fn run() -> Result<(), route_planner::AppError> {
//! let mut app = App::new(AppConfig::default())?;
//! app.settle().await; // splash hands over to login
//! assert!(app.current().and_then(|screen| screen.as_login()).is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;
use std::time::Duration;

use app_state::{AppConfig, AppSession, ConfigError, SessionError};
use app_ui::{
    ActiveScreen, NavigationAction, NavigationController, NavigationState, NavigationTab,
    Screen, ScreenContext, ScreenHost, TabBarButton,
};
use storage::PreferencesBackend;
use thiserror::Error;

pub mod telemetry;

/// Startup errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Preferences could not be loaded or saved
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// `initial_tab` names no tab
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

/// Result type for the app facade
pub type Result<T> = std::result::Result<T, AppError>;

/// A running app
///
/// Screens schedule their timers on the tokio runtime, so an `App` must be
/// created and driven from inside one.
pub struct App {
    config: AppConfig,
    controller: NavigationController,
    host: ScreenHost,
    ctx: ScreenContext,
}

impl App {
    /// Start on the splash screen with in-memory preferences
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_session(config, AppSession::in_memory())
    }

    /// Start on the splash screen with preferences read from `backend`
    pub async fn load(config: AppConfig, backend: Arc<dyn PreferencesBackend>) -> Result<Self> {
        let session = AppSession::load(backend).await?;
        Self::with_session(config, session)
    }

    /// Start on the splash screen with an existing session
    pub fn with_session(config: AppConfig, session: AppSession) -> Result<Self> {
        let initial_tab = NavigationTab::from_key(&config.initial_tab)
            .ok_or_else(|| AppError::UnknownTab(config.initial_tab.clone()))?;

        let controller = NavigationController::new(initial_tab);
        let ctx = ScreenContext::new(session, controller.navigator())
            .with_timing(config.timing);

        let mut app = Self {
            config,
            controller,
            host: ScreenHost::new(),
            ctx,
        };
        app.host.sync(app.controller.state(), &app.ctx);
        tracing::info!(initial_tab = initial_tab.key(), "app started");
        Ok(app)
    }

    /// Configuration the app was started with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared preferences
    pub fn session(&self) -> &AppSession {
        &self.ctx.session
    }

    /// Navigation state
    pub fn state(&self) -> &NavigationState {
        self.controller.state()
    }

    /// Visible screen descriptor
    pub fn current_screen(&self) -> &Screen {
        self.controller.current_screen()
    }

    /// Visible screen state
    pub fn current(&self) -> Option<&ActiveScreen> {
        self.host.current(self.controller.state())
    }

    /// Visible screen state, mutably
    pub fn current_mut(&mut self) -> Option<&mut ActiveScreen> {
        self.host.current_mut(self.controller.state())
    }

    /// Apply queued navigation and remount; returns how many actions ran
    pub fn pump(&mut self) -> usize {
        let applied = self.controller.pump();
        self.host.sync(self.controller.state(), &self.ctx);
        applied
    }

    /// Wait for the next navigation (a timer or a queued action) and apply it
    ///
    /// This waits until an action arrives. Use [`App::settle_within`] when
    /// no timer may be running.
    pub async fn settle(&mut self) -> usize {
        let applied = self.controller.wait_and_pump().await;
        self.host.sync(self.controller.state(), &self.ctx);
        applied
    }

    /// Like [`App::settle`], but give up after `limit`; returns 0 if nothing arrived
    pub async fn settle_within(&mut self, limit: Duration) -> usize {
        match tokio::time::timeout(limit, self.controller.wait_and_pump()).await {
            Ok(applied) => {
                self.host.sync(self.controller.state(), &self.ctx);
                applied
            }
            Err(_) => {
                tracing::debug!(?limit, "nothing to settle");
                0
            }
        }
    }

    /// Apply an action now
    pub fn dispatch(&mut self, action: NavigationAction) {
        self.controller.apply(action);
        self.pump();
    }

    /// Press a tab bar button
    pub fn press(&mut self, button: TabBarButton) {
        tracing::debug!(button = button.label(), "tab bar pressed");
        self.dispatch(button.action());
    }

    /// Open a deep link
    pub fn open_path(&mut self, path: &str) -> Screen {
        let screen = self.controller.open_path(path);
        self.pump();
        screen
    }

    /// Write preferences to the session's backend
    pub async fn save(&self) -> Result<()> {
        self.ctx.session.save().await?;
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.controller.current_screen().to_path())
            .field("mounted", &self.host.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_initial_tab_is_rejected() {
        let err = App::new(AppConfig::new().initial_tab("garage")).unwrap_err();
        assert!(matches!(err, AppError::UnknownTab(tab) if tab == "garage"));
    }

    #[tokio::test]
    async fn test_starts_on_splash() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.current_screen(), &Screen::Splash);
        assert!(app.current().unwrap().as_splash().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_press_map_shortcut() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.dispatch(NavigationAction::EnterApp);
        app.press(TabBarButton::MapShortcut);
        assert!(app.current().unwrap().as_map().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_within_gives_up_when_idle() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.dispatch(NavigationAction::EnterApp);

        assert_eq!(app.settle_within(Duration::from_secs(3600)).await, 0);
        assert!(app.current().unwrap().as_search().is_some());
    }
}
