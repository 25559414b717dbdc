//! Candidate stops supplied by callers for a single optimization.
//!
//! Stops are built fresh from task and shopping-trip records for every call;
//! nothing here is persisted.

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::LatLng;

/// Priority tier of a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Regular errand.
    #[default]
    Medium,
    /// Should happen on this trip.
    High,
}

impl Priority {
    /// Base weight used by the urgency scorer.
    ///
    /// # Examples
    ///
    /// ```
    /// use errand_core::Priority;
    ///
    /// assert_eq!(Priority::High.weight(), 3.0);
    /// assert_eq!(Priority::Low.weight(), 1.0);
    /// ```
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 2.0,
            Self::High => 3.0,
        }
    }
}

/// A candidate destination with optional arrival constraints.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use errand_core::{LatLng, Priority, StopTimeWindow};
///
/// let now = Utc::now();
/// let stop = StopTimeWindow::new(LatLng::new(40.0, -83.0), Priority::High)
///     .with_due_date(now + TimeDelta::days(2))
///     .with_window(Some(now), Some(now + TimeDelta::hours(3)))
///     .with_duration_minutes(15);
/// assert_eq!(stop.duration_minutes, Some(15));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StopTimeWindow {
    /// Where the stop is.
    pub location: LatLng,
    /// Earliest acceptable arrival.
    #[cfg_attr(feature = "serde", serde(default))]
    pub earliest_arrival: Option<DateTime<Utc>>,
    /// Latest acceptable arrival.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latest_arrival: Option<DateTime<Utc>>,
    /// Expected time spent at the stop.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration_minutes: Option<u32>,
    /// Priority tier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: Priority,
    /// When the underlying task or trip is due.
    #[cfg_attr(feature = "serde", serde(default))]
    pub due_date: Option<DateTime<Utc>>,
}

impl StopTimeWindow {
    /// Construct a stop with no window, duration or due date.
    #[must_use]
    pub const fn new(location: LatLng, priority: Priority) -> Self {
        Self {
            location,
            earliest_arrival: None,
            latest_arrival: None,
            duration_minutes: None,
            priority,
            due_date: None,
        }
    }

    /// Set the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the arrival window bounds.
    #[must_use]
    pub const fn with_window(
        mut self,
        earliest_arrival: Option<DateTime<Utc>>,
        latest_arrival: Option<DateTime<Utc>>,
    ) -> Self {
        self.earliest_arrival = earliest_arrival;
        self.latest_arrival = latest_arrival;
        self
    }

    /// Set the expected dwell time.
    #[must_use]
    pub const fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }
}
