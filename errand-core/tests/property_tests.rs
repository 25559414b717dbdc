//! Property-based tests for urgency scoring, stop selection and route
//! assembly.
//!
//! # Invariants tested
//!
//! - **Tier ordering:** for a fixed due date, high > medium > low.
//! - **Due-date monotonicity:** later due dates never score higher and never
//!   fall below the tier weight.
//! - **Stable truncation:** `max_stops = k` keeps the `k` best stops and ties
//!   keep their input order.
//! - **Aggregation:** route totals equal the sum of leg values, saturating
//!   at `u64::MAX`.

use chrono::{DateTime, TimeDelta, Utc};
use errand_core::{
    DirectionsRequest, DirectionsResponse, LatLng, Priority, ProviderRoute, RouteLeg,
    RoutePreferences, StopTimeWindow, TextValue, TransportMode, assemble, select_stops_at,
    urgency_score,
};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_790_000_000, 0).expect("valid timestamp")
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High)
    ]
}

/// Stops tagged with their input position through the longitude field.
fn stops_strategy() -> impl Strategy<Value = Vec<StopTimeWindow>> {
    prop::collection::vec((priority_strategy(), prop::option::of(0_i64..30)), 0..12).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(index, (priority, due_in_days))| {
                    let position = f64::from(u32::try_from(index).expect("small index"));
                    let stop = StopTimeWindow::new(LatLng::new(0.0, position), priority);
                    match due_in_days {
                        Some(days) => stop.with_due_date(now() + TimeDelta::days(days)),
                        None => stop,
                    }
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: higher tiers always outscore lower tiers at the same due date.
    #[test]
    fn tiers_are_strictly_ordered(due_in_hours in -240_i64..2_400) {
        let due = now() + TimeDelta::hours(due_in_hours);
        let score = |priority| {
            urgency_score(
                &StopTimeWindow::new(LatLng::new(0.0, 0.0), priority).with_due_date(due),
                now(),
            )
        };
        prop_assert!(score(Priority::High) > score(Priority::Medium));
        prop_assert!(score(Priority::Medium) > score(Priority::Low));
    }

    /// Property: pushing the due date out (past the one-day clamp) lowers the
    /// score, which stays above the tier weight.
    #[test]
    fn later_due_dates_score_lower(
        priority in priority_strategy(),
        first_hours in 25_i64..1_000,
        extra_hours in 1_i64..1_000,
    ) {
        let stop = StopTimeWindow::new(LatLng::new(0.0, 0.0), priority);
        let sooner = urgency_score(
            &stop.clone().with_due_date(now() + TimeDelta::hours(first_hours)),
            now(),
        );
        let later = urgency_score(
            &stop.with_due_date(now() + TimeDelta::hours(first_hours + extra_hours)),
            now(),
        );
        prop_assert!(sooner > later);
        prop_assert!(later > priority.weight());
    }

    /// Property: selection equals a stable sort by descending score cut to
    /// the first `k` stops.
    #[test]
    fn selection_is_a_stable_top_k(stops in stops_strategy(), limit in 0_u16..15) {
        let preferences = RoutePreferences {
            max_stops: Some(limit),
            ..RoutePreferences::default()
        };
        let mut ranked: Vec<(f64, f64)> = stops
            .iter()
            .map(|stop| (urgency_score(stop, now()), stop.location.lng))
            .collect();
        ranked.sort_by(|(lhs, lhs_position), (rhs, rhs_position)| {
            rhs.total_cmp(lhs).then(lhs_position.total_cmp(rhs_position))
        });
        let expected: Vec<f64> = ranked
            .into_iter()
            .take(usize::from(limit))
            .map(|(_, position)| position)
            .collect();

        let selected = select_stops_at(stops, &preferences, now());

        let positions: Vec<f64> = selected.iter().map(|stop| stop.location.lng).collect();
        prop_assert_eq!(positions, expected);
    }

    /// Property: route totals are the saturating sums of leg values.
    #[test]
    fn totals_match_leg_sums(
        legs in prop::collection::vec(
            (prop::option::of(any::<u64>()), prop::option::of(any::<u64>())),
            1..10,
        )
    ) {
        let saturating_sum = |values: Vec<u64>| {
            values.into_iter().fold(0_u64, u64::saturating_add)
        };
        let expected_distance =
            saturating_sum(legs.iter().filter_map(|(metres, _)| *metres).collect());
        let expected_duration =
            saturating_sum(legs.iter().filter_map(|(_, seconds)| *seconds).collect());
        let response = DirectionsResponse {
            routes: vec![ProviderRoute {
                legs: legs
                    .iter()
                    .map(|(metres, seconds)| RouteLeg {
                        start_location: LatLng::new(0.0, 0.0),
                        end_location: LatLng::new(1.0, 1.0),
                        distance: metres.map(|value| TextValue::new(format!("{value} m"), value)),
                        duration: seconds.map(|value| TextValue::new(format!("{value} s"), value)),
                    })
                    .collect(),
            }],
        };
        let request = DirectionsRequest {
            origin: LatLng::new(0.0, 0.0),
            destination: LatLng::new(0.0, 0.0),
            waypoints: Vec::new(),
            optimize_waypoints: true,
            travel_mode: TransportMode::Driving,
            avoid_highways: false,
            avoid_tolls: false,
            driving_options: None,
        };

        let route = assemble(response, &request, &[]).expect("one route");

        prop_assert_eq!(route.total_distance_meters, expected_distance);
        prop_assert_eq!(route.total_duration_seconds, expected_duration);
        prop_assert_eq!(route.segments.len(), legs.len());
    }
}
