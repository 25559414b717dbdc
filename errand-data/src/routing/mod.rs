//! Directions providers backed by routing services.
//!
//! This module provides two implementations of
//! [`errand_core::DirectionsProvider`]:
//!
//! - [`OsrmDirectionsProvider`] calls an OSRM server's Trip service (or the
//!   Route service when waypoint optimisation is off).
//! - [`StraightLineDirectionsProvider`] estimates legs offline from
//!   great-circle distances.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use errand_data::routing::{OsrmDirectionsProvider, OsrmDirectionsProviderConfig};
//!
//! let config = OsrmDirectionsProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_user_agent("my-app/1.0");
//! let provider = OsrmDirectionsProvider::with_config(config)?;
//! # Ok::<(), errand_data::routing::ProviderBuildError>(())
//! ```

mod format;
mod osrm;
mod provider;
mod straight_line;

pub use format::{format_distance, format_duration};
pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, OsrmDirectionsProvider, OsrmDirectionsProviderConfig,
    ProviderBuildError,
};
pub use straight_line::{StraightLineDirectionsProvider, StraightLineSpeeds};
