//! Port to an external directions provider.
//!
//! The [`DirectionsProvider`] trait abstracts a routing service able to
//! compute a multi-stop route and, when asked, reorder intermediate waypoints
//! for efficiency. Callers send a [`DirectionsRequest`] and receive a
//! [`DirectionsResponse`] made of one or more routes, each a sequence of legs.
//!
//! The optimizer only ever reads the first route for segments and totals.

mod error;
mod provider;
mod request;
mod response;

pub use error::DirectionsError;
pub use provider::DirectionsProvider;
pub use request::{DirectionsRequest, DrivingOptions, TrafficModel};
pub use response::{DirectionsResponse, ProviderRoute, RouteLeg, TextValue};
