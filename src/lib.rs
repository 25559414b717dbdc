//! Facade crate for the errand router.
//!
//! This crate re-exports the core routing types and exposes the bundled
//! directions providers behind the `osrm` feature flag.

#![forbid(unsafe_code)]

pub use errand_core::{
    DirectionsError, DirectionsProvider, DirectionsRequest, DirectionsResponse, DrivingOptions,
    LatLng, OptimizeError, OptimizedRoute, Priority, RouteOptimizer, RoutePreferences,
    RouteSegment, StopTimeWindow, TrafficModel, TransportMode, Waypoint, is_within_window,
    select_stops, urgency_score,
};

#[cfg(feature = "osrm")]
pub use errand_data::routing::{
    OsrmDirectionsProvider, OsrmDirectionsProviderConfig, ProviderBuildError,
    StraightLineDirectionsProvider, StraightLineSpeeds,
};
