//! Request sent to a directions provider.

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LatLng, TransportMode, Waypoint};

/// Traffic model hint for traffic-aware routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TrafficModel {
    /// Best estimate from historical and live traffic.
    #[default]
    BestGuess,
}

/// Departure settings attached when traffic should be considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DrivingOptions {
    /// When the traveller leaves the origin.
    pub departure_time: DateTime<Utc>,
    /// Traffic model to apply.
    pub traffic_model: TrafficModel,
}

/// A multi-stop directions request.
///
/// `waypoints` are intermediate stops between `origin` and `destination`.
/// When `optimize_waypoints` is set the provider may visit them in any order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DirectionsRequest {
    /// Start of the route.
    pub origin: LatLng,
    /// End of the route.
    pub destination: LatLng,
    /// Intermediate stops in suggested visiting order.
    pub waypoints: Vec<Waypoint>,
    /// Allow the provider to reorder `waypoints`.
    pub optimize_waypoints: bool,
    /// Travel mode.
    pub travel_mode: TransportMode,
    /// Avoid motorways.
    pub avoid_highways: bool,
    /// Avoid toll roads.
    pub avoid_tolls: bool,
    /// Traffic-aware departure settings.
    pub driving_options: Option<DrivingOptions>,
}

impl DirectionsRequest {
    /// Whether the route ends where it started.
    #[must_use]
    pub fn is_closed_loop(&self) -> bool {
        self.origin == self.destination
    }
}
