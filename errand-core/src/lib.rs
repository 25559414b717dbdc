//! Core domain types and routing logic for the errand router.
//!
//! The crate turns a starting location and a set of candidate stops (tasks and
//! shopping trips) into an [`OptimizedRoute`]. Stops are ranked by urgency,
//! truncated to the caller's limit and handed to an injected
//! [`DirectionsProvider`], which solves the waypoint ordering. The provider's
//! legs are then normalised into [`RouteSegment`] values with aggregated
//! totals.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeDelta, Utc};
//! use errand_core::test_support::EchoDirectionsProvider;
//! use errand_core::{LatLng, Priority, RouteOptimizer, RoutePreferences, StopTimeWindow};
//!
//! # tokio_test_block_on(async {
//! let now = Utc::now();
//! let optimizer = RouteOptimizer::new(EchoDirectionsProvider::default());
//! let stop = StopTimeWindow::new(LatLng::new(40.0, -83.0), Priority::High)
//!     .with_due_date(now + TimeDelta::days(1));
//! let preferences = RoutePreferences {
//!     return_to_start: true,
//!     ..RoutePreferences::default()
//! };
//!
//! let route = optimizer
//!     .optimize_route_at(LatLng::new(39.9789, -82.8677), vec![stop], &preferences, now)
//!     .await?;
//! assert_eq!(route.segments.len(), 2);
//! # Ok::<(), errand_core::OptimizeError>(())
//! # }).unwrap();
//! # fn tokio_test_block_on<F: std::future::Future>(future: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(future)
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assembler;
pub mod directions;
mod error;
mod location;
mod optimizer;
mod preferences;
pub mod priority;
pub mod request;
mod route;
pub mod selector;
mod stop;
pub mod time_window;

#[doc(hidden)]
pub mod test_support;

pub use assembler::assemble;
pub use directions::{
    DirectionsError, DirectionsProvider, DirectionsRequest, DirectionsResponse, DrivingOptions,
    ProviderRoute, RouteLeg, TextValue, TrafficModel,
};
pub use error::OptimizeError;
pub use location::LatLng;
pub use optimizer::RouteOptimizer;
pub use preferences::{RoutePreferences, TransportMode};
pub use priority::urgency_score;
pub use request::build_request;
pub use route::{OptimizedRoute, RouteSegment, Waypoint};
pub use selector::{select_stops, select_stops_at};
pub use stop::{Priority, StopTimeWindow};
pub use time_window::is_within_window;
