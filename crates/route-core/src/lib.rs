//! Core data for the route planner
//!
//! This crate holds the fixture dataset every screen renders from: transport
//! modes and their profiles, mock routes with steps and elevation samples,
//! saved places, trip history, filter defaults and demo map geometry.
//!
//! Nothing here mutates after construction. Screens read through
//! [`fixtures::FixtureStore`] and never write back.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod filters;
pub mod fixtures;
pub mod icons;
pub mod map;
pub mod modes;
pub mod places;
pub mod routes;

pub use error::{FixtureError, Result};
pub use filters::{default_filters, FilterSetting, RouteFilter, TIME_VS_DISTANCE_DEFAULT};
pub use fixtures::{FixtureStore, RecentDestination};
pub use icons::IconDescriptor;
pub use map::{Coordinate, MapGeometry, Region};
pub use modes::{ModeId, ParseModeError, Profile, TransportMode};
pub use places::{FavoriteLocation, HistoryEntry, HistoryFilter};
pub use routes::{Route, Step};
