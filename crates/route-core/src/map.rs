//! Demo map geometry

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Visible map region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Centre latitude
    pub latitude: f64,
    /// Centre longitude
    pub longitude: f64,
    /// Latitude span
    pub latitude_delta: f64,
    /// Longitude span
    pub longitude_delta: f64,
}

/// Markers and polyline drawn by the live navigation view
///
/// This is fixed demo geometry. It does not follow the selected route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapGeometry {
    /// "Your Location" marker
    pub user_location: Coordinate,
    /// "Destination" marker
    pub destination: Coordinate,
    /// Polyline from user location to destination
    pub route: Vec<Coordinate>,
}

impl MapGeometry {
    /// Region shown when the map first opens
    pub fn initial_region(&self) -> Region {
        Region {
            latitude: self.user_location.latitude,
            longitude: self.user_location.longitude,
            latitude_delta: 0.015,
            longitude_delta: 0.0121,
        }
    }

    /// Region the recenter button animates to
    pub fn recenter_region(&self) -> Region {
        Region {
            latitude: self.user_location.latitude,
            longitude: self.user_location.longitude,
            latitude_delta: 0.01,
            longitude_delta: 0.01,
        }
    }
}
