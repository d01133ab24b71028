//! Lookup errors for the fixture store

use thiserror::Error;

/// Errors returned when an identifier fails to resolve against the fixtures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The mode key is not one of the four supported modes
    #[error("Unknown transport mode: {0}")]
    UnknownMode(String),

    /// No route with this id exists under the given mode
    #[error("Route not found: {mode}/{route_id}")]
    RouteNotFound {
        /// Mode key the lookup was scoped to
        mode: String,
        /// Route id that failed to resolve
        route_id: String,
    },
}

/// Result type for fixture lookups
pub type Result<T> = std::result::Result<T, FixtureError>;
