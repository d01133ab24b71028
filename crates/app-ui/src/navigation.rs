//! Navigation model for the route planner
//!
//! This module provides:
//! - Screen definitions with path round-tripping
//! - Tab navigation and the tab bar
//! - Per-tab navigation stacks plus a modal stack
//! - The pre-app (splash and auth) stack and app stages
//! - A router that parses paths back into screens

use serde::{Deserialize, Serialize};

use crate::params::{DetailsParams, FiltersParams, MapParams, ResultsParams, RouteParams};

// =============================================================================
// Screen Definitions
// =============================================================================

/// Every navigation target in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "screen", content = "params")]
pub enum Screen {
    // Launch and auth
    /// Animated splash
    #[default]
    Splash,
    /// Sign in
    Login,
    /// Create account
    Register,

    // Tab roots
    /// Search composer
    Search,
    /// Saved places
    Favorites,
    /// Past trips
    History,
    /// Profile and settings
    Profile,

    // Detail screens
    /// Results list for a search
    RouteResults(ResultsParams),
    /// One route in detail
    RouteDetails(DetailsParams),
    /// Live navigation map (modal)
    Map(MapParams),
    /// Filter panel (modal)
    Filters(FiltersParams),

    /// Unknown path
    NotFound,
}

fn with_query(base: &str, query: Vec<(&'static str, String)>) -> String {
    if query.is_empty() {
        return base.to_string();
    }
    let pairs: Vec<String> = query
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect();
    format!("{}?{}", base, pairs.join("&"))
}

impl Screen {
    /// Get the URL path for this screen
    pub fn to_path(&self) -> String {
        match self {
            Screen::Splash => "/splash".to_string(),
            Screen::Login => "/login".to_string(),
            Screen::Register => "/register".to_string(),
            Screen::Search => "/".to_string(),
            Screen::Favorites => "/favorites".to_string(),
            Screen::History => "/history".to_string(),
            Screen::Profile => "/profile".to_string(),
            Screen::RouteResults(params) => with_query("/route-results", params.to_query()),
            Screen::RouteDetails(params) => with_query("/route-details", params.to_query()),
            Screen::Map(params) => with_query("/map", params.to_query()),
            Screen::Filters(params) => with_query("/filters", params.to_query()),
            Screen::NotFound => "/404".to_string(),
        }
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "RouteQuest",
            Screen::Login => "Welcome Back",
            Screen::Register => "Create Account",
            Screen::Search => "Plan Your Route",
            Screen::Favorites => "Saved Places",
            Screen::History => "Route History",
            Screen::Profile => "Profile",
            Screen::RouteResults(_) => "Route Options",
            Screen::RouteDetails(_) => "Route Details",
            Screen::Map(_) => "Navigation",
            Screen::Filters(_) => "Route Filters",
            Screen::NotFound => "Not Found",
        }
    }

    /// Stage of the app this screen belongs to
    pub fn stage(&self) -> AppStage {
        match self {
            Screen::Splash => AppStage::Launch,
            Screen::Login | Screen::Register => AppStage::Auth,
            _ => AppStage::Main,
        }
    }

    /// Whether this screen is presented over the tabs
    pub fn is_modal(&self) -> bool {
        matches!(self, Screen::Map(_) | Screen::Filters(_))
    }

    /// Tab whose root this screen is
    pub fn tab(&self) -> Option<NavigationTab> {
        match self {
            Screen::Search => Some(NavigationTab::Search),
            Screen::Favorites => Some(NavigationTab::Favorites),
            Screen::History => Some(NavigationTab::History),
            Screen::Profile => Some(NavigationTab::Profile),
            _ => None,
        }
    }
}

/// Coarse phase of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppStage {
    /// Splash is showing
    #[default]
    Launch,
    /// Login or register is showing
    Auth,
    /// Tabs are showing
    Main,
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Search tab
    #[default]
    Search,
    /// Saved places tab
    Favorites,
    /// History tab
    History,
    /// Profile tab
    Profile,
}

impl NavigationTab {
    /// Get the root screen for this tab
    pub fn root_screen(&self) -> Screen {
        match self {
            NavigationTab::Search => Screen::Search,
            NavigationTab::Favorites => Screen::Favorites,
            NavigationTab::History => Screen::History,
            NavigationTab::Profile => Screen::Profile,
        }
    }

    /// Get the icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Search => "search",
            NavigationTab::Favorites => "heart",
            NavigationTab::History => "clock",
            NavigationTab::Profile => "user",
        }
    }

    /// Get the label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Search => "Search",
            NavigationTab::Favorites => "Saved",
            NavigationTab::History => "History",
            NavigationTab::Profile => "Profile",
        }
    }

    /// Configuration key
    pub fn key(&self) -> &'static str {
        match self {
            NavigationTab::Search => "search",
            NavigationTab::Favorites => "favorites",
            NavigationTab::History => "history",
            NavigationTab::Profile => "profile",
        }
    }

    /// Parse a configuration key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.key() == key)
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 4] {
        [
            NavigationTab::Search,
            NavigationTab::Favorites,
            NavigationTab::History,
            NavigationTab::Profile,
        ]
    }

    fn index(&self) -> usize {
        match self {
            NavigationTab::Search => 0,
            NavigationTab::Favorites => 1,
            NavigationTab::History => 2,
            NavigationTab::Profile => 3,
        }
    }
}

/// A button in the bottom tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabBarButton {
    /// Switches to a tab
    Tab(NavigationTab),
    /// Centre button that opens the map
    MapShortcut,
}

impl TabBarButton {
    /// Buttons from left to right
    pub fn all() -> [TabBarButton; 5] {
        [
            TabBarButton::Tab(NavigationTab::Search),
            TabBarButton::Tab(NavigationTab::Favorites),
            TabBarButton::MapShortcut,
            TabBarButton::Tab(NavigationTab::History),
            TabBarButton::Tab(NavigationTab::Profile),
        ]
    }

    /// Label under the icon
    pub fn label(&self) -> &'static str {
        match self {
            TabBarButton::Tab(tab) => tab.label(),
            TabBarButton::MapShortcut => "Map",
        }
    }

    /// What pressing the button does
    pub fn action(&self) -> NavigationAction {
        match self {
            TabBarButton::Tab(tab) => NavigationAction::SwitchTab(*tab),
            TabBarButton::MapShortcut => NavigationAction::Navigate(Screen::Map(MapParams::default())),
        }
    }
}

// =============================================================================
// Navigation Actions
// =============================================================================

/// A request to change the navigation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "target")]
pub enum NavigationAction {
    /// Push a screen (modals are presented)
    Navigate(Screen),
    /// Push a screen only if the entry keyed `from` is still the visible one
    ///
    /// Delayed actions use this so that a timer firing after the user moved
    /// to another tab or opened a modal is dropped.
    NavigateFrom {
        /// Key of the entry that scheduled the action
        from: String,
        /// Screen to show
        screen: Screen,
    },
    /// Replace the top screen
    Replace(Screen),
    /// Dismiss the top modal or pop the stack
    Back,
    /// Switch the active tab
    SwitchTab(NavigationTab),
    /// Leave the auth flow and show the tabs
    EnterApp,
    /// Drop all app state and show the login screen
    SignOut,
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The screen
    pub screen: Screen,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack with a fixed bottom entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    root: StackEntry,
    pushed: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root screen
    pub fn new(root: Screen) -> Self {
        Self {
            root: StackEntry::new(root),
            pushed: Vec::new(),
        }
    }

    /// Push a screen onto the stack
    pub fn push(&mut self, screen: Screen) {
        self.pushed.push(StackEntry::new(screen));
    }

    /// Pop the top screen (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.pushed.clear();
    }

    /// Replace the top screen, which may be the root
    pub fn replace(&mut self, screen: Screen) {
        match self.pushed.last_mut() {
            Some(last) => *last = StackEntry::new(screen),
            None => self.root = StackEntry::new(screen),
        }
    }

    /// Get the current (top) screen
    pub fn current(&self) -> &Screen {
        &self.current_entry().screen
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Get all entries, bottom to top
    pub fn entries(&self) -> impl Iterator<Item = &StackEntry> {
        std::iter::once(&self.root).chain(self.pushed.iter())
    }

    /// Reset to a new root
    pub fn reset(&mut self, screen: Screen) {
        self.root = StackEntry::new(screen);
        self.pushed.clear();
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    stage: AppStage,
    /// Splash, login and register
    auth_stack: NavigationStack,
    active_tab: NavigationTab,
    initial_tab: NavigationTab,
    /// One stack per tab, indexed in [`NavigationTab::all`] order
    tab_stacks: [NavigationStack; 4],
    /// Overlays on top of tab content
    modal_stack: Vec<StackEntry>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavigationTab::default())
    }
}

impl NavigationState {
    /// Create a state showing the splash screen
    pub fn new(initial_tab: NavigationTab) -> Self {
        Self {
            stage: AppStage::Launch,
            auth_stack: NavigationStack::new(Screen::Splash),
            active_tab: initial_tab,
            initial_tab,
            tab_stacks: NavigationTab::all().map(|tab| NavigationStack::new(tab.root_screen())),
            modal_stack: Vec::new(),
        }
    }

    /// Current stage
    pub fn stage(&self) -> AppStage {
        self.stage
    }

    /// Current active tab
    pub fn active_tab(&self) -> NavigationTab {
        self.active_tab
    }

    /// Stack of a tab
    pub fn tab_stack(&self, tab: NavigationTab) -> &NavigationStack {
        &self.tab_stacks[tab.index()]
    }

    /// Splash and auth stack
    pub fn auth_stack(&self) -> &NavigationStack {
        &self.auth_stack
    }

    /// Presented modals, bottom to top
    pub fn modal_stack(&self) -> &[StackEntry] {
        &self.modal_stack
    }

    /// Get the stack that receives pushes
    pub fn current_stack(&self) -> &NavigationStack {
        match self.stage {
            AppStage::Main => &self.tab_stacks[self.active_tab.index()],
            AppStage::Launch | AppStage::Auth => &self.auth_stack,
        }
    }

    fn current_stack_mut(&mut self) -> &mut NavigationStack {
        match self.stage {
            AppStage::Main => &mut self.tab_stacks[self.active_tab.index()],
            AppStage::Launch | AppStage::Auth => &mut self.auth_stack,
        }
    }

    /// Get the visible entry (considering modals)
    pub fn current_entry(&self) -> &StackEntry {
        match self.modal_stack.last() {
            Some(modal) => modal,
            None => self.current_stack().current_entry(),
        }
    }

    /// Get the visible screen (considering modals)
    pub fn current_screen(&self) -> &Screen {
        &self.current_entry().screen
    }

    /// Every entry that should have a mounted screen
    ///
    /// Before the app is entered that is the auth stack. Afterwards it is
    /// every tab stack plus the modals.
    pub fn live_entries(&self) -> Vec<&StackEntry> {
        match self.stage {
            AppStage::Launch | AppStage::Auth => self.auth_stack.entries().collect(),
            AppStage::Main => self
                .tab_stacks
                .iter()
                .flat_map(NavigationStack::entries)
                .chain(self.modal_stack.iter())
                .collect(),
        }
    }

    /// Apply an action
    pub fn apply(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Navigate(screen) => self.navigate(screen),
            NavigationAction::NavigateFrom { from, screen } => {
                if self.current_entry().key == from {
                    self.navigate(screen);
                } else {
                    tracing::debug!(to = %screen.to_path(), "stale navigation discarded");
                }
            }
            NavigationAction::Replace(screen) => self.replace(screen),
            NavigationAction::Back => {
                if !self.go_back() {
                    tracing::debug!("back ignored at stack root");
                }
            }
            NavigationAction::SwitchTab(tab) => self.switch_tab(tab),
            NavigationAction::EnterApp => self.enter_app(),
            NavigationAction::SignOut => self.sign_out(),
        }
    }

    /// Navigate to a screen
    ///
    /// Modal screens are presented, tab roots switch tabs, auth screens go to
    /// the auth stack, everything else is pushed onto the active tab.
    pub fn navigate(&mut self, screen: Screen) {
        if screen == Screen::NotFound {
            self.current_stack_mut().push(screen);
            return;
        }

        match screen.stage() {
            AppStage::Launch | AppStage::Auth => {
                if self.stage == AppStage::Main {
                    self.leave_app(screen);
                } else {
                    self.stage = screen.stage();
                    self.auth_stack.push(screen);
                }
            }
            AppStage::Main => {
                if self.stage != AppStage::Main {
                    self.enter_app();
                }
                if let Some(tab) = screen.tab() {
                    self.reset_to_tab(tab);
                } else if screen.is_modal() {
                    self.present_modal(screen);
                } else {
                    self.modal_stack.clear();
                    self.current_stack_mut().push(screen);
                }
            }
        }
    }

    /// Replace the visible screen
    pub fn replace(&mut self, screen: Screen) {
        if screen == Screen::NotFound {
            match self.modal_stack.last_mut() {
                Some(last) => *last = StackEntry::new(screen),
                None => self.current_stack_mut().replace(screen),
            }
            return;
        }

        match screen.stage() {
            AppStage::Launch | AppStage::Auth => {
                if self.stage == AppStage::Main {
                    self.leave_app(screen);
                } else {
                    self.stage = screen.stage();
                    self.auth_stack.replace(screen);
                }
            }
            AppStage::Main => {
                if self.stage != AppStage::Main {
                    self.enter_app();
                }
                if let Some(tab) = screen.tab() {
                    self.reset_to_tab(tab);
                } else if screen.is_modal() {
                    match self.modal_stack.last_mut() {
                        Some(last) => *last = StackEntry::new(screen),
                        None => self.present_modal(screen),
                    }
                } else {
                    self.modal_stack.clear();
                    self.current_stack_mut().replace(screen);
                }
            }
        }
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        // First try to dismiss a modal
        if self.dismiss_modal() {
            return true;
        }

        // Then try to pop from current stack
        self.current_stack_mut().pop()
    }

    /// Switch to a tab
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        if self.stage != AppStage::Main {
            tracing::debug!(tab = tab.key(), "tab switch ignored outside the app");
            return;
        }
        self.modal_stack.clear();
        self.active_tab = tab;
    }

    /// Reset to tab root
    pub fn reset_to_tab(&mut self, tab: NavigationTab) {
        self.tab_stacks[tab.index()].pop_to_root();
        self.switch_tab(tab);
    }

    /// Present a modal
    pub fn present_modal(&mut self, screen: Screen) {
        self.modal_stack.push(StackEntry::new(screen));
    }

    /// Dismiss the top modal
    pub fn dismiss_modal(&mut self) -> bool {
        self.modal_stack.pop().is_some()
    }

    /// Check if any modals are presented
    pub fn has_modals(&self) -> bool {
        !self.modal_stack.is_empty()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.modal_stack.is_empty() || self.current_stack().can_go_back()
    }

    /// Show the tabs with fresh stacks
    pub fn enter_app(&mut self) {
        self.stage = AppStage::Main;
        self.tab_stacks = NavigationTab::all().map(|tab| NavigationStack::new(tab.root_screen()));
        self.modal_stack.clear();
        self.active_tab = self.initial_tab;
    }

    /// Drop the app and show login
    pub fn sign_out(&mut self) {
        self.leave_app(Screen::Login);
    }

    fn leave_app(&mut self, root: Screen) {
        self.stage = root.stage();
        self.auth_stack.reset(root);
        self.tab_stacks = NavigationTab::all().map(|tab| NavigationStack::new(tab.root_screen()));
        self.modal_stack.clear();
        self.active_tab = self.initial_tab;
    }
}

// =============================================================================
// Router
// =============================================================================

/// Path pattern for matching
struct ScreenPattern {
    /// Literal path segments
    segments: Vec<String>,
    /// Screen builder
    builder: fn(RouteParams) -> Option<Screen>,
}

/// URL Router for parsing paths to screens
pub struct Router {
    /// Screen patterns
    patterns: Vec<ScreenPattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all screens
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        // Launch and auth
        router.add_route("/splash", |_| Some(Screen::Splash));
        router.add_route("/login", |_| Some(Screen::Login));
        router.add_route("/register", |_| Some(Screen::Register));

        // Tabs
        router.add_route("/", |_| Some(Screen::Search));
        router.add_route("/favorites", |_| Some(Screen::Favorites));
        router.add_route("/history", |_| Some(Screen::History));
        router.add_route("/profile", |_| Some(Screen::Profile));

        // Detail screens
        router.add_route("/route-results", |params| {
            Some(Screen::RouteResults(ResultsParams::from_params(&params)))
        });
        router.add_route("/route-details", |params| {
            Some(Screen::RouteDetails(DetailsParams::from_params(&params)))
        });
        router.add_route("/map", |params| Some(Screen::Map(MapParams::from_params(&params))));
        router.add_route("/filters", |params| {
            Some(Screen::Filters(FiltersParams::from_params(&params)))
        });

        router
    }

    /// Add a path pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Screen>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        self.patterns.push(ScreenPattern { segments, builder });
    }

    /// Match a path to a screen
    pub fn match_path(&self, path: &str) -> Screen {
        // Parse the path
        let (pathname, query) = match path.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (path, None),
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if pattern.segments.iter().map(String::as_str).eq(path_segments.iter().copied()) {
                let mut params = RouteParams::new();
                Self::parse_query(query, &mut params);
                if let Some(screen) = (pattern.builder)(params) {
                    return screen;
                }
            }
        }

        tracing::debug!(path, "no screen matches path");
        Screen::NotFound
    }

    /// Parse query string into params
    fn parse_query(query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::EntryRef;

    fn results(mode: &str) -> Screen {
        Screen::RouteResults(ResultsParams {
            mode: mode.to_string(),
            ..ResultsParams::default()
        })
    }

    fn in_app() -> NavigationState {
        let mut state = NavigationState::default();
        state.enter_app();
        state
    }

    #[test]
    fn test_screen_to_path() {
        assert_eq!(Screen::Search.to_path(), "/");
        assert_eq!(Screen::Login.to_path(), "/login");
        assert_eq!(
            Screen::RouteDetails(DetailsParams::new("walking", "w2")).to_path(),
            "/route-details?mode=walking&routeId=w2"
        );
        assert_eq!(
            Screen::Map(MapParams::default()).to_path(),
            "/map?mode=walking&navigate=false"
        );
    }

    #[test]
    fn test_path_encodes_values() {
        let screen = Screen::RouteResults(ResultsParams {
            destination: "Brooklyn Bridge".to_string(),
            ..ResultsParams::default()
        });
        let path = screen.to_path();
        assert!(path.contains("destination=Brooklyn%20Bridge"));
        assert!(path.contains("origin=Current%20Location"));
    }

    #[test]
    fn test_router_round_trip() {
        let router = Router::new();
        let screens = vec![
            Screen::Splash,
            Screen::Login,
            Screen::Register,
            Screen::Search,
            Screen::Favorites,
            Screen::History,
            Screen::Profile,
            Screen::RouteResults(ResultsParams {
                origin: "Gare du Nord & Co".to_string(),
                destination: "CY Tech".to_string(),
                ..ResultsParams::for_entry(EntryRef::favorite("fav2"))
            }),
            Screen::RouteDetails(DetailsParams::new("transit", "t2")),
            Screen::Map(MapParams::navigate_route("car", "v1")),
            Screen::Filters(FiltersParams::new("cycling")),
        ];
        for screen in screens {
            assert_eq!(router.match_path(&screen.to_path()), screen);
        }
    }

    #[test]
    fn test_router_defaults_and_not_found() {
        let router = Router::new();
        assert_eq!(router.match_path("/route-results"), results("walking"));
        assert_eq!(
            router.match_path("/route-details?mode=car"),
            Screen::RouteDetails(DetailsParams::new("car", ""))
        );
        assert_eq!(router.match_path("/nowhere"), Screen::NotFound);
        assert_eq!(router.match_path("/map/extra"), Screen::NotFound);
    }

    #[test]
    fn test_navigation_stack() {
        let mut stack = NavigationStack::new(Screen::Search);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(results("car"));
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(stack.current(), &results("car"));

        assert!(stack.pop());
        assert!(!stack.pop());
        assert_eq!(stack.current(), &Screen::Search);
    }

    #[test]
    fn test_stack_replace_root() {
        let mut stack = NavigationStack::new(Screen::Splash);
        let before = stack.current_entry().key.clone();
        stack.replace(Screen::Login);
        assert_eq!(stack.current(), &Screen::Login);
        assert_ne!(stack.current_entry().key, before);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_launch_to_app() {
        let mut state = NavigationState::default();
        assert_eq!(state.stage(), AppStage::Launch);
        assert_eq!(state.current_screen(), &Screen::Splash);

        state.replace(Screen::Login);
        assert_eq!(state.stage(), AppStage::Auth);

        state.navigate(Screen::Register);
        assert!(state.can_go_back());
        assert!(state.go_back());
        assert_eq!(state.current_screen(), &Screen::Login);

        state.apply(NavigationAction::EnterApp);
        assert_eq!(state.stage(), AppStage::Main);
        assert_eq!(state.current_screen(), &Screen::Search);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_modal_dismissed_before_stack_pop() {
        let mut state = in_app();
        state.navigate(results("walking"));
        state.navigate(Screen::RouteDetails(DetailsParams::new("walking", "w1")));
        state.navigate(Screen::Map(MapParams::navigate_route("walking", "w1")));

        assert!(state.has_modals());
        assert_eq!(state.current_stack().depth(), 3);

        state.apply(NavigationAction::Back);
        assert!(!state.has_modals());
        assert_eq!(
            state.current_screen(),
            &Screen::RouteDetails(DetailsParams::new("walking", "w1"))
        );
    }

    #[test]
    fn test_tabs_keep_their_stacks() {
        let mut state = in_app();
        state.navigate(results("car"));

        state.apply(NavigationAction::SwitchTab(NavigationTab::History));
        assert_eq!(state.current_screen(), &Screen::History);

        state.apply(NavigationAction::SwitchTab(NavigationTab::Search));
        assert_eq!(state.current_screen(), &results("car"));
    }

    #[test]
    fn test_switch_tab_ignored_before_app() {
        let mut state = NavigationState::default();
        state.switch_tab(NavigationTab::Profile);
        assert_eq!(state.current_screen(), &Screen::Splash);
    }

    #[test]
    fn test_sign_out_resets() {
        let mut state = in_app();
        state.navigate(results("walking"));
        state.apply(NavigationAction::SwitchTab(NavigationTab::Profile));

        state.apply(NavigationAction::SignOut);
        assert_eq!(state.stage(), AppStage::Auth);
        assert_eq!(state.current_screen(), &Screen::Login);
        assert_eq!(state.live_entries().len(), 1);
        assert_eq!(state.tab_stack(NavigationTab::Search).depth(), 1);
    }

    #[test]
    fn test_live_entries_in_app() {
        let mut state = in_app();
        state.navigate(results("walking"));
        state.navigate(Screen::Filters(FiltersParams::default()));
        // four tab roots, one pushed screen, one modal
        assert_eq!(state.live_entries().len(), 6);
    }

    #[test]
    fn test_tab_bar() {
        let labels: Vec<_> = TabBarButton::all().iter().map(TabBarButton::label).collect();
        assert_eq!(labels, vec!["Search", "Saved", "Map", "History", "Profile"]);
        assert_eq!(
            TabBarButton::MapShortcut.action(),
            NavigationAction::Navigate(Screen::Map(MapParams::default()))
        );
        assert_eq!(NavigationTab::from_key("history"), Some(NavigationTab::History));
        assert_eq!(NavigationTab::from_key("map"), None);
    }

    #[test]
    fn test_initial_tab() {
        let mut state = NavigationState::new(NavigationTab::Favorites);
        state.enter_app();
        assert_eq!(state.current_screen(), &Screen::Favorites);
    }

    #[test]
    fn test_navigate_from_requires_visible_origin() {
        let mut state = in_app();
        state.navigate(results("walking"));
        let origin = state.current_entry().key.clone();
        let details = Screen::RouteDetails(DetailsParams::new("walking", "w2"));

        state.switch_tab(NavigationTab::Favorites);
        state.apply(NavigationAction::NavigateFrom {
            from: origin.clone(),
            screen: details.clone(),
        });
        assert_eq!(state.current_stack().depth(), 1);
        assert_eq!(state.current_screen(), &Screen::Favorites);

        state.switch_tab(NavigationTab::Search);
        state.navigate(Screen::Filters(FiltersParams::default()));
        state.apply(NavigationAction::NavigateFrom {
            from: origin.clone(),
            screen: details.clone(),
        });
        assert!(state.has_modals());

        state.go_back();
        state.apply(NavigationAction::NavigateFrom { from: origin, screen: details.clone() });
        assert_eq!(state.current_screen(), &details);
    }
}
