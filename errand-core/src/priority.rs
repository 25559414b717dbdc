//! Urgency scoring for candidate stops.
//!
//! A stop's score combines its priority tier with how soon it is due:
//!
//! ```text
//! score = weight * (1 + 1 / days_until_due)
//! ```
//!
//! `days_until_due` is clamped to at least one day, and a stop without a due
//! date is treated as due in [`DEFAULT_DUE_HORIZON_DAYS`] days. Scores are
//! therefore always finite, strictly positive and bounded below by the tier
//! weight.

use chrono::{DateTime, TimeDelta, Utc};

use crate::StopTimeWindow;

/// Horizon assumed for stops without a due date.
pub const DEFAULT_DUE_HORIZON_DAYS: i64 = 7;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Score a stop's urgency relative to `now`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use errand_core::{LatLng, Priority, StopTimeWindow, urgency_score};
///
/// let now = Utc::now();
/// let stop = StopTimeWindow::new(LatLng::new(0.0, 0.0), Priority::High)
///     .with_due_date(now + TimeDelta::days(1));
/// assert_eq!(urgency_score(&stop, now), 6.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "urgency is a floating-point blend of tier weight and due-date proximity"
)]
pub fn urgency_score(stop: &StopTimeWindow, now: DateTime<Utc>) -> f64 {
    let due_date = stop
        .due_date
        .unwrap_or_else(|| now + TimeDelta::days(DEFAULT_DUE_HORIZON_DAYS));
    let days_until_due = days_between(now, due_date).max(1.0);
    stop.priority.weight() * (1.0 + 1.0 / days_until_due)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "millisecond offsets are far below the f64 mantissa limit"
)]
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}
