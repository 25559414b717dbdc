//! Behavioural tests for [`RouteOptimizer`].
//!
//! Scenarios run against [`StubDirectionsProvider`], so no routing service is
//! required.

use std::cell::RefCell;

use chrono::{DateTime, TimeDelta, Utc};
use errand_core::test_support::{EchoDirectionsProvider, StubDirectionsProvider};
use errand_core::{
    DirectionsError, LatLng, OptimizeError, OptimizedRoute, Priority, RouteOptimizer,
    RoutePreferences, StopTimeWindow,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const DEPOT: LatLng = LatLng::new(39.9789, -82.8677);
const STOP: LatLng = LatLng::new(40.0, -83.0);

/// World state shared by the optimizer scenarios.
#[derive(Debug)]
struct RouteWorld {
    now: DateTime<Utc>,
    origin: RefCell<LatLng>,
    stops: RefCell<Vec<StopTimeWindow>>,
    preferences: RefCell<RoutePreferences>,
    failure: RefCell<Option<DirectionsError>>,
    optimizer: RefCell<Option<RouteOptimizer<StubDirectionsProvider>>>,
    outcome: RefCell<Option<Result<OptimizedRoute, OptimizeError>>>,
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld {
        now: DateTime::from_timestamp(1_790_000_000, 0).expect("valid timestamp"),
        origin: RefCell::new(LatLng::new(0.0, 0.0)),
        stops: RefCell::new(Vec::new()),
        preferences: RefCell::new(RoutePreferences::default()),
        failure: RefCell::new(None),
        optimizer: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build test runtime")
        .block_on(future)
}

fn with_route<T>(world: &RouteWorld, check: impl FnOnce(&OptimizedRoute) -> T) -> T {
    let outcome = world.outcome.borrow();
    match outcome.as_ref() {
        Some(Ok(route)) => check(route),
        other => panic!("expected a route, got {other:?}"),
    }
}

// --- Given steps ---

#[given("an origin at the depot")]
fn origin_at_depot(world: &RouteWorld) {
    world.origin.replace(DEPOT);
}

#[given("one high priority stop due tomorrow")]
fn one_urgent_stop(world: &RouteWorld) {
    let stop = StopTimeWindow::new(STOP, Priority::High).with_due_date(world.now + TimeDelta::days(1));
    world.stops.borrow_mut().push(stop);
}

#[given("no candidate stops")]
fn no_stops(world: &RouteWorld) {
    world.stops.borrow_mut().clear();
}

#[given("two stops at the origin")]
fn stops_at_origin(world: &RouteWorld) {
    let origin = *world.origin.borrow();
    world.stops.borrow_mut().extend([
        StopTimeWindow::new(origin, Priority::Medium),
        StopTimeWindow::new(origin, Priority::Low),
    ]);
}

#[given("three stops of mixed priority")]
fn mixed_stops(world: &RouteWorld) {
    world.stops.borrow_mut().extend([
        StopTimeWindow::new(LatLng::new(40.1, -83.1), Priority::Low),
        StopTimeWindow::new(LatLng::new(40.2, -83.2), Priority::High),
        StopTimeWindow::new(LatLng::new(40.3, -83.3), Priority::Medium),
    ]);
}

#[given("preferences that return to the start")]
fn return_to_start(world: &RouteWorld) {
    world.preferences.borrow_mut().return_to_start = true;
}

#[given("preferences limited to {limit} stops")]
fn limited_preferences(world: &RouteWorld, limit: u16) {
    world.preferences.borrow_mut().max_stops = Some(limit);
}

#[given("a provider that fails with a timeout")]
fn failing_provider(world: &RouteWorld) {
    world.failure.replace(Some(DirectionsError::Timeout {
        url: "http://localhost:5000/trip/v1/driving".to_owned(),
        timeout_secs: 30,
    }));
}

// --- When steps ---

#[when("I optimize the route")]
fn optimize(world: &RouteWorld) {
    let provider = world.failure.borrow().clone().map_or_else(
        || StubDirectionsProvider::echoing(EchoDirectionsProvider::default()),
        StubDirectionsProvider::with_error,
    );
    let optimizer = RouteOptimizer::new(provider);
    let origin = *world.origin.borrow();
    let stops = world.stops.borrow().clone();
    let preferences = *world.preferences.borrow();

    let outcome = block_on(optimizer.optimize_route_at(origin, stops, &preferences, world.now));

    world.outcome.replace(Some(outcome));
    world.optimizer.replace(Some(optimizer));
}

// --- Then steps ---

#[then("the route has one stopover at the stop")]
fn one_stopover(world: &RouteWorld) {
    with_route(world, |route| {
        assert_eq!(route.waypoints.len(), 1);
        let waypoint = route.waypoints.first().expect("one waypoint");
        assert!(waypoint.stopover);
        assert_eq!(waypoint.location, STOP);
    });
}

#[then("the route has {count} segments")]
fn segment_count(world: &RouteWorld, count: usize) {
    with_route(world, |route| assert_eq!(route.segments.len(), count));
}

#[then("the total distance is positive")]
fn positive_distance(world: &RouteWorld) {
    with_route(world, |route| assert!(route.total_distance_meters > 0));
}

#[then("a route is returned")]
fn route_returned(world: &RouteWorld) {
    with_route(world, |_| ());
}

#[then("an empty stop set error is returned")]
fn empty_stop_set(world: &RouteWorld) {
    let outcome = world.outcome.borrow();
    assert!(
        matches!(&*outcome, Some(Err(OptimizeError::EmptyStopSet))),
        "expected EmptyStopSet, got {outcome:?}"
    );
}

#[then("a provider request error is returned")]
fn provider_request_error(world: &RouteWorld) {
    let outcome = world.outcome.borrow();
    assert!(
        matches!(
            &*outcome,
            Some(Err(OptimizeError::ProviderRequest {
                source: DirectionsError::Timeout { .. }
            }))
        ),
        "expected ProviderRequest, got {outcome:?}"
    );
}

#[then("the provider was not called")]
fn provider_not_called(world: &RouteWorld) {
    let optimizer = world.optimizer.borrow();
    let calls = optimizer
        .as_ref()
        .map(|optimizer| optimizer.provider().calls());
    assert_eq!(calls, Some(0));
}

#[then("the provider destination is the medium priority stop location")]
fn destination_is_medium_stop(world: &RouteWorld) {
    let optimizer = world.optimizer.borrow();
    let request = optimizer
        .as_ref()
        .and_then(|optimizer| optimizer.provider().last_request())
        .expect("a request was sent");
    assert_eq!(request.destination, LatLng::new(40.3, -83.3));
    assert_eq!(request.waypoints.len(), 1);
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/route_optimizer.feature", name = $title)]
        fn $fn_name(world: RouteWorld) {
            let _ = world;
        }
    };
}

register_scenario!(
    routing_single_urgent_stop,
    "routing a single urgent stop out and back"
);
register_scenario!(rejecting_empty_stop_set, "rejecting an empty stop set");
register_scenario!(routing_to_origin, "routing to the origin itself");
register_scenario!(
    ending_open_route_at_last_stop,
    "ending an open route at the last selected stop"
);
register_scenario!(surfacing_provider_failures, "surfacing provider failures");
