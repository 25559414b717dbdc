//! Arrival window checks for stops.
//!
//! The predicate is a standalone building block: route legs are computed by
//! the directions provider before per-stop arrival times are known, so
//! [`crate::RouteOptimizer`] does not filter or reorder stops with it.

use chrono::{DateTime, Utc};

use crate::StopTimeWindow;

/// Return whether `estimated_arrival` satisfies the stop's window.
///
/// A stop with either bound unset accepts any arrival. Both bounds are
/// inclusive.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use errand_core::{LatLng, Priority, StopTimeWindow, is_within_window};
///
/// let opens = Utc::now();
/// let closes = opens + TimeDelta::hours(2);
/// let stop = StopTimeWindow::new(LatLng::new(0.0, 0.0), Priority::Medium)
///     .with_window(Some(opens), Some(closes));
///
/// assert!(is_within_window(&stop, opens + TimeDelta::minutes(30)));
/// assert!(!is_within_window(&stop, closes + TimeDelta::minutes(1)));
/// ```
#[must_use]
pub fn is_within_window(stop: &StopTimeWindow, estimated_arrival: DateTime<Utc>) -> bool {
    let (Some(earliest), Some(latest)) = (stop.earliest_arrival, stop.latest_arrival) else {
        return true;
    };
    (earliest..=latest).contains(&estimated_arrival)
}
