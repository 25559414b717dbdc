//! Optimized routes returned to callers.
//!
//! Every value here is created fresh by one optimization call and owned by the
//! caller afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LatLng, Priority};

/// A point the route passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    /// Where the waypoint is.
    pub location: LatLng,
    /// Whether the traveller stops here rather than passing through.
    pub stopover: bool,
}

impl Waypoint {
    /// Construct a stopover waypoint.
    #[must_use]
    pub const fn stopover(location: LatLng) -> Self {
        Self {
            location,
            stopover: true,
        }
    }
}

/// One leg of a computed route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteSegment {
    /// Where the leg starts.
    pub start_location: LatLng,
    /// Where the leg ends.
    pub end_location: LatLng,
    /// Human-readable distance from the provider.
    pub distance_text: String,
    /// Human-readable duration from the provider.
    pub duration_text: String,
    /// Priority of the stop associated with this leg.
    pub priority: Priority,
}

/// A multi-stop route with aggregate totals.
///
/// `total_distance_meters` and `total_duration_seconds` are the sums of the
/// provider's per-leg values, saturating at `u64::MAX` rather than
/// overflowing. `segments` holds one entry per leg.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizedRoute {
    /// Requested intermediate stops, in request order.
    pub waypoints: Vec<Waypoint>,
    /// Sum of leg distances in metres, saturating at `u64::MAX`.
    pub total_distance_meters: u64,
    /// Sum of leg durations in seconds, saturating at `u64::MAX`.
    pub total_duration_seconds: u64,
    /// One segment per provider leg.
    pub segments: Vec<RouteSegment>,
    /// Other routes the provider offered, when the primary route has several
    /// legs.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub alternative_routes: Option<Vec<OptimizedRoute>>,
}
