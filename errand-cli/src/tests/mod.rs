//! Shared test harness modules for the errand CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::route::{
    DefaultRouteProviderBuilder, ProviderKind, RouteConfig, RouteProviderBuilder, RouteRequest,
    config_from_layers_for_test, load_route_request, run_route_with,
};

mod helpers;
