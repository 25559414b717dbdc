//! OSRM API response types for the Trip and Route services.
//!
//! Both services share a response envelope: a status `code`, an optional
//! error `message`, a list of routes (named `trips` by the Trip service) and
//! the snapped input `waypoints`.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#trip-service>

use serde::Deserialize;

/// OSRM Trip or Route API response.
#[derive(Debug, Deserialize)]
pub struct DirectionsServiceResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"NoTrips"` - No trip visiting all coordinates was found
    /// - `"NoRoute"` - No route between the coordinates was found
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Computed routes; the Trip service names this field `trips`.
    #[serde(alias = "trips", default)]
    pub routes: Vec<OsrmRoute>,

    /// Input coordinates snapped to the road network.
    #[serde(default)]
    pub waypoints: Vec<OsrmWaypoint>,
}

impl DirectionsServiceResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Check if the service answered but found nothing to route.
    #[must_use]
    pub fn is_unroutable(&self) -> bool {
        matches!(self.code.as_str(), "NoTrips" | "NoRoute")
    }
}

/// A single route or trip.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Legs between consecutive visited coordinates.
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

/// One leg of a route.
#[derive(Debug, Deserialize)]
pub struct OsrmLeg {
    /// Leg distance in metres.
    pub distance: Option<f64>,
    /// Leg duration in seconds.
    pub duration: Option<f64>,
}

/// A snapped input coordinate.
#[derive(Debug, Deserialize)]
pub struct OsrmWaypoint {
    /// `[longitude, latitude]` of the snapped location.
    pub location: [f64; 2],
    /// Position of this waypoint within its trip (Trip service only).
    pub waypoint_index: Option<usize>,
    /// Index of the trip visiting this waypoint (Trip service only).
    pub trips_index: Option<usize>,
}
