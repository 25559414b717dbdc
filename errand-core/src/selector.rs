//! Rank candidate stops by urgency and apply the caller's stop limit.

use chrono::{DateTime, Utc};

use crate::{RoutePreferences, StopTimeWindow, urgency_score};

/// Rank `stops` by urgency at the current time and truncate to
/// [`RoutePreferences::max_stops`].
///
/// See [`select_stops_at`].
#[must_use]
pub fn select_stops(
    stops: Vec<StopTimeWindow>,
    preferences: &RoutePreferences,
) -> Vec<StopTimeWindow> {
    select_stops_at(stops, preferences, Utc::now())
}

/// Rank `stops` by urgency relative to `now` and truncate to
/// [`RoutePreferences::max_stops`].
///
/// The sort is stable and descending, so stops with equal scores keep their
/// input order. Stops beyond the limit are discarded; the caller decides
/// whether that needs surfacing.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use errand_core::{LatLng, Priority, RoutePreferences, StopTimeWindow, select_stops_at};
///
/// let stops = vec![
///     StopTimeWindow::new(LatLng::new(0.0, 0.0), Priority::Low),
///     StopTimeWindow::new(LatLng::new(1.0, 1.0), Priority::High),
/// ];
/// let preferences = RoutePreferences {
///     max_stops: Some(1),
///     ..RoutePreferences::default()
/// };
///
/// let selected = select_stops_at(stops, &preferences, Utc::now());
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].priority, Priority::High);
/// ```
#[must_use]
pub fn select_stops_at(
    stops: Vec<StopTimeWindow>,
    preferences: &RoutePreferences,
    now: DateTime<Utc>,
) -> Vec<StopTimeWindow> {
    let mut scored: Vec<(StopTimeWindow, f64)> = stops
        .into_iter()
        .map(|stop| {
            let score = urgency_score(&stop, now);
            (stop, score)
        })
        .collect();

    // `sort_by` is stable; ties keep input order.
    scored.sort_by(|(_, lhs), (_, rhs)| rhs.total_cmp(lhs));

    if let Some(max_stops) = preferences.max_stops {
        let limit = usize::from(max_stops);
        if scored.len() > limit {
            log::debug!(
                "dropping {} lower-urgency stops beyond max_stops={limit}",
                scored.len() - limit
            );
            scored.truncate(limit);
        }
    }

    scored.into_iter().map(|(stop, _)| stop).collect()
}
