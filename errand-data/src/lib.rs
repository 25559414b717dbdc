//! Directions Provider adapters for the errand router.
//!
//! Responsibilities:
//! - Implement [`errand_core::DirectionsProvider`] against real routing
//!   backends.
//! - Translate wire formats and transport failures into
//!   [`errand_core::DirectionsError`].
//!
//! Boundaries:
//! - Do not encode stop selection or route assembly rules (live in
//!   `errand-core`).
//! - Keep blocking I/O off async executors; prefer async-capable clients.
//!
//! Invariants:
//! - Providers are `Send + Sync` and hold no per-request state.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod routing;
