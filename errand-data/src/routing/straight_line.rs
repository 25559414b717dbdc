//! Offline directions provider estimating legs from great-circle distance.
//!
//! Useful when no routing service is reachable. Legs follow the requested
//! order (no waypoint optimisation), distances ignore the road network and
//! durations assume a constant average speed per travel mode.

use async_trait::async_trait;
use errand_core::{
    DirectionsError, DirectionsProvider, DirectionsRequest, DirectionsResponse, LatLng,
    ProviderRoute, RouteLeg, TextValue, TransportMode,
};
use geo::{Distance, Haversine, Point};

use super::format::{format_distance, format_duration};

/// Average speeds, in km/h, assumed for each travel mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLineSpeeds {
    /// Driving speed.
    pub driving_kmh: f64,
    /// Walking speed.
    pub walking_kmh: f64,
    /// Cycling speed.
    pub bicycling_kmh: f64,
    /// Public transport speed.
    pub transit_kmh: f64,
}

impl Default for StraightLineSpeeds {
    fn default() -> Self {
        Self {
            driving_kmh: 40.0,
            walking_kmh: 5.0,
            bicycling_kmh: 15.0,
            transit_kmh: 25.0,
        }
    }
}

impl StraightLineSpeeds {
    /// Speed assumed for `mode`.
    #[must_use]
    pub const fn for_mode(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Driving => self.driving_kmh,
            TransportMode::Walking => self.walking_kmh,
            TransportMode::Bicycling => self.bicycling_kmh,
            TransportMode::Transit => self.transit_kmh,
        }
    }

    /// Set the driving speed.
    #[must_use]
    pub const fn with_driving_kmh(mut self, kmh: f64) -> Self {
        self.driving_kmh = kmh;
        self
    }

    /// Set the walking speed.
    #[must_use]
    pub const fn with_walking_kmh(mut self, kmh: f64) -> Self {
        self.walking_kmh = kmh;
        self
    }

    /// Set the bicycling speed.
    #[must_use]
    pub const fn with_bicycling_kmh(mut self, kmh: f64) -> Self {
        self.bicycling_kmh = kmh;
        self
    }

    /// Set the transit speed.
    #[must_use]
    pub const fn with_transit_kmh(mut self, kmh: f64) -> Self {
        self.transit_kmh = kmh;
        self
    }
}

/// Haversine-based directions provider.
///
/// # Examples
///
/// ```
/// use errand_core::{LatLng, RouteOptimizer, RoutePreferences, StopTimeWindow, Priority};
/// use errand_data::routing::StraightLineDirectionsProvider;
///
/// let optimizer = RouteOptimizer::new(StraightLineDirectionsProvider::default());
/// let stops = vec![StopTimeWindow::new(LatLng::new(40.0, -83.0), Priority::High)];
/// let preferences = RoutePreferences { return_to_start: true, ..RoutePreferences::default() };
///
/// let route = tokio::runtime::Builder::new_current_thread()
///     .build()?
///     .block_on(optimizer.optimize_route(LatLng::new(39.9789, -82.8677), stops, &preferences))?;
/// assert_eq!(route.segments.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLineDirectionsProvider {
    speeds: StraightLineSpeeds,
}

impl StraightLineDirectionsProvider {
    /// Create a provider with explicit speeds.
    #[must_use]
    pub const fn new(speeds: StraightLineSpeeds) -> Self {
        Self { speeds }
    }

    /// Speeds used for duration estimates.
    #[must_use]
    pub const fn speeds(&self) -> &StraightLineSpeeds {
        &self.speeds
    }

    fn leg(&self, start: LatLng, end: LatLng, mode: TransportMode) -> RouteLeg {
        let meters = haversine_meters(start, end);
        RouteLeg {
            start_location: start,
            end_location: end,
            distance: Some(TextValue::new(format_distance(meters), meters)),
            duration: travel_seconds(meters, self.speeds.for_mode(mode))
                .map(|seconds| TextValue::new(format_duration(seconds), seconds)),
        }
    }
}

#[async_trait]
impl DirectionsProvider for StraightLineDirectionsProvider {
    async fn route(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let points: Vec<LatLng> = std::iter::once(request.origin)
            .chain(request.waypoints.iter().map(|waypoint| waypoint.location))
            .chain(std::iter::once(request.destination))
            .collect();
        let legs = points
            .iter()
            .zip(points.iter().skip(1))
            .map(|(start, end)| self.leg(*start, *end, request.travel_mode))
            .collect();
        Ok(DirectionsResponse {
            routes: vec![ProviderRoute { legs }],
        })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "haversine distances are finite, non-negative and far below u64::MAX"
)]
fn haversine_meters(start: LatLng, end: LatLng) -> u64 {
    let from = Point::new(start.lng, start.lat);
    let to = Point::new(end.lng, end.lat);
    Haversine.distance(from, to).round() as u64
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "durations are estimated from a positive speed and rounded to seconds"
)]
fn travel_seconds(meters: u64, speed_kmh: f64) -> Option<u64> {
    if !(speed_kmh.is_finite() && speed_kmh > 0.0) {
        log::warn!("ignoring non-positive average speed {speed_kmh} km/h");
        return None;
    }
    // 1 km/h is 1 / 3.6 m/s.
    let seconds = meters as f64 * 3.6 / speed_kmh;
    Some(seconds.round() as u64)
}
