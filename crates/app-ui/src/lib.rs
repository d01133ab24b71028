//! User interface core for the route planner
//!
//! This crate provides the headless UI layer: navigation, parameter
//! contracts, display components, colors, and the state of every screen.
//! A rendering host drives it by calling screen operations and pumping the
//! [`controller::NavigationController`].
//!
//! # Modules
//!
//! - [`navigation`] - Screens, tabs, stacks and the path router
//! - [`controller`] - Navigation actions, the navigator handle and the controller
//! - [`params`] - Typed screen parameters with default substitution
//! - [`components`] - Display models (route cards, steps, elevation chart, quick filters)
//! - [`theme`] - Mode, profile and UI colors
//! - [`screens`] - Screen state machines and the screen host
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{Router, Screen};
//! use app_ui::params::DetailsParams;
//!
//! let router = Router::new();
//! let screen = router.match_path("/route-details?mode=walking&routeId=w2");
//! assert_eq!(screen, Screen::RouteDetails(DetailsParams::new("walking", "w2")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod controller;
pub mod navigation;
pub mod params;
pub mod screens;
pub mod theme;

// Re-export commonly used types
pub use controller::{NavigationController, Navigator};
pub use navigation::{
    AppStage, NavigationAction, NavigationStack, NavigationState, NavigationTab, Router, Screen,
    StackEntry, TabBarButton,
};
pub use params::{
    DetailsParams, EntryRef, EntrySource, FiltersParams, MapParams, ResultsParams, RouteParams,
};
pub use screens::{ActiveScreen, ScreenContext, ScreenHost};
pub use theme::{mode_color, mode_palette, profile_color, ModePalette, ThemeName};
