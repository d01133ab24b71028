//! Screen state machines and the host that mounts them
//!
//! Each screen is a plain struct built from its parameters and a
//! [`ScreenContext`]. The [`ScreenHost`] keeps one mounted screen per live
//! navigation entry. Screens below the top of a stack stay mounted, so going
//! back shows them as they were left. Popped or replaced entries are
//! dropped, which also drops any timer the screen had scheduled.

use std::collections::{HashMap, HashSet};

use app_state::{AppSession, SimulatedAuth, TimingConfig};
use route_core::FixtureStore;

use crate::controller::Navigator;
use crate::navigation::{NavigationAction, NavigationState, Screen};

pub mod auth;
pub mod details;
pub mod favorites;
pub mod filters;
pub mod history;
pub mod live_navigation;
pub mod profile;
pub mod results;
pub mod search;

pub use auth::{LoginScreen, NotFoundScreen, RegisterScreen, SplashScreen};
pub use details::{DetailTab, RouteDetailViewer, RouteSummary};
pub use favorites::FavoritesViewer;
pub use filters::FilterPanel;
pub use history::{HistoryRow, HistoryViewer};
pub use live_navigation::{LiveNavigation, MapMarker};
pub use profile::ProfileViewer;
pub use results::ResultsLister;
pub use search::SearchComposer;

/// Everything a screen needs from outside
#[derive(Debug, Clone)]
pub struct ScreenContext {
    /// Fixture data
    pub store: &'static FixtureStore,
    /// Shared preferences
    pub session: AppSession,
    /// Navigation handle
    pub navigator: Navigator,
    /// Screen delays
    pub timing: TimingConfig,
    /// Sign-in simulator
    pub auth: SimulatedAuth,
    /// Key of the navigation entry the screen is mounted for
    pub entry_key: Option<String>,
}

impl ScreenContext {
    /// Context over the shared fixtures with default timing
    pub fn new(session: AppSession, navigator: Navigator) -> Self {
        Self {
            store: FixtureStore::shared(),
            session,
            navigator,
            timing: TimingConfig::default(),
            auth: SimulatedAuth::new(),
            entry_key: None,
        }
    }

    /// Replace the timing
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Copy of this context bound to a navigation entry
    pub fn for_entry(&self, key: &str) -> Self {
        Self {
            entry_key: Some(key.to_string()),
            ..self.clone()
        }
    }

    /// Navigation to `screen` that only applies while this screen is visible
    ///
    /// Unbound contexts fall back to a plain navigate.
    pub fn navigation_from_here(&self, screen: Screen) -> NavigationAction {
        match &self.entry_key {
            Some(key) => NavigationAction::NavigateFrom {
                from: key.clone(),
                screen,
            },
            None => NavigationAction::Navigate(screen),
        }
    }
}

/// A mounted screen
#[derive(Debug)]
pub enum ActiveScreen {
    /// Splash
    Splash(SplashScreen),
    /// Login
    Login(LoginScreen),
    /// Register
    Register(RegisterScreen),
    /// Search tab
    Search(SearchComposer),
    /// Favorites tab
    Favorites(FavoritesViewer),
    /// History tab
    History(HistoryViewer),
    /// Profile tab
    Profile(ProfileViewer),
    /// Results list
    Results(ResultsLister),
    /// Route details
    Details(RouteDetailViewer),
    /// Live navigation
    Map(LiveNavigation),
    /// Filter panel
    Filters(FilterPanel),
    /// Unknown path
    NotFound(NotFoundScreen),
}

impl ActiveScreen {
    /// Build the state for a screen; this is where mount-time timers start
    pub fn mount(screen: &Screen, ctx: &ScreenContext) -> Self {
        let ctx = ctx.clone();
        match screen {
            Screen::Splash => ActiveScreen::Splash(SplashScreen::new(ctx)),
            Screen::Login => ActiveScreen::Login(LoginScreen::new(ctx)),
            Screen::Register => ActiveScreen::Register(RegisterScreen::new(ctx)),
            Screen::Search => ActiveScreen::Search(SearchComposer::new(ctx)),
            Screen::Favorites => ActiveScreen::Favorites(FavoritesViewer::new(ctx)),
            Screen::History => ActiveScreen::History(HistoryViewer::new(ctx)),
            Screen::Profile => ActiveScreen::Profile(ProfileViewer::new(ctx)),
            Screen::RouteResults(params) => {
                ActiveScreen::Results(ResultsLister::new(ctx, params.clone()))
            }
            Screen::RouteDetails(params) => {
                ActiveScreen::Details(RouteDetailViewer::new(ctx, params.clone()))
            }
            Screen::Map(params) => ActiveScreen::Map(LiveNavigation::new(ctx, params.clone())),
            Screen::Filters(params) => ActiveScreen::Filters(FilterPanel::new(ctx, params.clone())),
            Screen::NotFound => ActiveScreen::NotFound(NotFoundScreen::new(ctx)),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ActiveScreen::Splash(_) => "splash",
            ActiveScreen::Login(_) => "login",
            ActiveScreen::Register(_) => "register",
            ActiveScreen::Search(_) => "search",
            ActiveScreen::Favorites(_) => "favorites",
            ActiveScreen::History(_) => "history",
            ActiveScreen::Profile(_) => "profile",
            ActiveScreen::Results(_) => "route-results",
            ActiveScreen::Details(_) => "route-details",
            ActiveScreen::Map(_) => "map",
            ActiveScreen::Filters(_) => "filters",
            ActiveScreen::NotFound(_) => "not-found",
        }
    }
}

macro_rules! screen_accessors {
    ($($variant:ident => $ty:ty, $as_ref:ident, $as_mut:ident;)*) => {
        impl ActiveScreen {
            $(
                #[doc = concat!("The `", stringify!($ty), "`, if this is one")]
                pub fn $as_ref(&self) -> Option<&$ty> {
                    match self {
                        ActiveScreen::$variant(screen) => Some(screen),
                        _ => None,
                    }
                }

                #[doc = concat!("The `", stringify!($ty), "`, mutably, if this is one")]
                pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        ActiveScreen::$variant(screen) => Some(screen),
                        _ => None,
                    }
                }
            )*
        }
    };
}

screen_accessors! {
    Splash => SplashScreen, as_splash, as_splash_mut;
    Login => LoginScreen, as_login, as_login_mut;
    Register => RegisterScreen, as_register, as_register_mut;
    Search => SearchComposer, as_search, as_search_mut;
    Favorites => FavoritesViewer, as_favorites, as_favorites_mut;
    History => HistoryViewer, as_history, as_history_mut;
    Profile => ProfileViewer, as_profile, as_profile_mut;
    Results => ResultsLister, as_results, as_results_mut;
    Details => RouteDetailViewer, as_details, as_details_mut;
    Map => LiveNavigation, as_map, as_map_mut;
    Filters => FilterPanel, as_filters, as_filters_mut;
    NotFound => NotFoundScreen, as_not_found, as_not_found_mut;
}

/// Mounted screens keyed by navigation entry
#[derive(Debug, Default)]
pub struct ScreenHost {
    mounted: HashMap<String, ActiveScreen>,
}

impl ScreenHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount screens for new entries and drop screens whose entries are gone
    pub fn sync(&mut self, state: &NavigationState, ctx: &ScreenContext) {
        let live = state.live_entries();
        let keys: HashSet<&str> = live.iter().map(|entry| entry.key.as_str()).collect();

        self.mounted.retain(|key, screen| {
            let keep = keys.contains(key.as_str());
            if !keep {
                tracing::debug!(screen = screen.name(), "screen unmounted");
            }
            keep
        });

        for entry in live {
            if !self.mounted.contains_key(&entry.key) {
                let screen = ActiveScreen::mount(&entry.screen, &ctx.for_entry(&entry.key));
                tracing::debug!(screen = screen.name(), "screen mounted");
                self.mounted.insert(entry.key.clone(), screen);
            }
        }
    }

    /// Screen for an entry key
    pub fn get(&self, key: &str) -> Option<&ActiveScreen> {
        self.mounted.get(key)
    }

    /// Screen for an entry key, mutably
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ActiveScreen> {
        self.mounted.get_mut(key)
    }

    /// Visible screen
    pub fn current(&self, state: &NavigationState) -> Option<&ActiveScreen> {
        self.get(&state.current_entry().key)
    }

    /// Visible screen, mutably
    pub fn current_mut(&mut self, state: &NavigationState) -> Option<&mut ActiveScreen> {
        self.get_mut(&state.current_entry().key)
    }

    /// Number of mounted screens
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    /// Whether nothing is mounted
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::NavigationController;
    use crate::params::ResultsParams;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_host_tracks_live_entries() {
        let mut controller = NavigationController::default();
        let ctx = ScreenContext::new(AppSession::in_memory(), controller.navigator());
        let mut host = ScreenHost::new();

        host.sync(controller.state(), &ctx);
        assert_eq!(host.len(), 1);
        assert!(host.current(controller.state()).unwrap().as_splash().is_some());

        controller.apply(NavigationAction::EnterApp);
        host.sync(controller.state(), &ctx);
        assert_eq!(host.len(), 4);
        assert!(host.current(controller.state()).unwrap().as_search().is_some());

        // splash was unmounted, so its timer never fires
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(controller.pump(), 0);
    }

    #[tokio::test]
    async fn test_back_restores_screen_state() {
        let mut controller = NavigationController::default();
        let ctx = ScreenContext::new(AppSession::in_memory(), controller.navigator());
        let mut host = ScreenHost::new();

        controller.apply(NavigationAction::EnterApp);
        host.sync(controller.state(), &ctx);
        host.current_mut(controller.state())
            .and_then(ActiveScreen::as_search_mut)
            .unwrap()
            .set_destination("CY Tech");

        controller.apply(NavigationAction::Navigate(Screen::RouteResults(
            ResultsParams::default(),
        )));
        host.sync(controller.state(), &ctx);
        assert_eq!(host.len(), 5);

        controller.apply(NavigationAction::Back);
        host.sync(controller.state(), &ctx);
        assert_eq!(host.len(), 4);

        let search = host
            .current(controller.state())
            .and_then(ActiveScreen::as_search)
            .unwrap();
        assert_eq!(search.destination(), "CY Tech");
    }
}
