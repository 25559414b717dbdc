//! Translate selected stops and preferences into a [`DirectionsRequest`].

use chrono::{DateTime, Utc};

use crate::{
    DirectionsRequest, DrivingOptions, LatLng, OptimizeError, RoutePreferences, StopTimeWindow,
    TrafficModel, Waypoint,
};

/// Build the provider request for `selected` stops.
///
/// Waypoints follow the selector's order as a hint; the provider is always
/// asked to optimise them further. With
/// [`RoutePreferences::return_to_start`] the route closes at `origin` and
/// every stop is an intermediate waypoint. Otherwise the last selected stop
/// becomes the destination and is removed from the waypoint list.
///
/// Traffic settings are attached only when
/// [`RoutePreferences::consider_traffic`] is set, departing at `now`.
///
/// # Errors
///
/// Returns [`OptimizeError::EmptyStopSet`] when `selected` is empty.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use errand_core::{LatLng, Priority, RoutePreferences, StopTimeWindow, build_request};
///
/// let origin = LatLng::new(0.0, 0.0);
/// let stops = vec![
///     StopTimeWindow::new(LatLng::new(1.0, 1.0), Priority::High),
///     StopTimeWindow::new(LatLng::new(2.0, 2.0), Priority::Low),
/// ];
///
/// let request = build_request(origin, &stops, &RoutePreferences::default(), Utc::now())?;
/// assert_eq!(request.destination, LatLng::new(2.0, 2.0));
/// assert_eq!(request.waypoints.len(), 1);
/// # Ok::<(), errand_core::OptimizeError>(())
/// ```
pub fn build_request(
    origin: LatLng,
    selected: &[StopTimeWindow],
    preferences: &RoutePreferences,
    now: DateTime<Utc>,
) -> Result<DirectionsRequest, OptimizeError> {
    let Some((last, leading)) = selected.split_last() else {
        return Err(OptimizeError::EmptyStopSet);
    };

    let (destination, intermediate) = if preferences.return_to_start {
        (origin, selected)
    } else {
        (last.location, leading)
    };

    let waypoints = intermediate
        .iter()
        .map(|stop| Waypoint::stopover(stop.location))
        .collect();

    let driving_options = preferences.consider_traffic.then_some(DrivingOptions {
        departure_time: now,
        traffic_model: TrafficModel::BestGuess,
    });

    Ok(DirectionsRequest {
        origin,
        destination,
        waypoints,
        optimize_waypoints: true,
        travel_mode: preferences.transport_mode,
        avoid_highways: preferences.avoid_highways,
        avoid_tolls: preferences.avoid_tolls,
        driving_options,
    })
}
