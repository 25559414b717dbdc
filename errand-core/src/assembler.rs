//! Normalise a provider response into an [`OptimizedRoute`].
//!
//! Only the first provider route feeds segments and totals. Totals are summed
//! from the per-leg numeric values so they always agree with the segments,
//! whatever the provider reports at route level. Sums saturate at `u64::MAX`
//! with a warning rather than overflowing.

use crate::{
    DirectionsRequest, DirectionsResponse, OptimizeError, OptimizedRoute, Priority, ProviderRoute,
    RouteLeg, RouteSegment, StopTimeWindow,
};

/// Build an [`OptimizedRoute`] from the provider's `response`.
///
/// Segment `i` takes its priority from `selected[i]`, falling back to
/// [`Priority::Medium`] when the provider returned more legs than stops. The
/// output waypoints echo `request.waypoints` in request order rather than the
/// provider's internal reordering.
///
/// When the first route has more than one leg, the provider's remaining
/// routes are attached as shallow alternatives (their own alternatives are
/// left unset).
///
/// # Errors
///
/// Returns [`OptimizeError::NoRouteFound`] when `response` holds no routes.
pub fn assemble(
    response: DirectionsResponse,
    request: &DirectionsRequest,
    selected: &[StopTimeWindow],
) -> Result<OptimizedRoute, OptimizeError> {
    let mut routes = response.routes.into_iter();
    let primary = routes.next().ok_or(OptimizeError::NoRouteFound)?;

    let mut route = assemble_route(&primary, request, selected);
    if primary.legs.len() > 1 {
        route.alternative_routes = Some(
            routes
                .map(|alternative| assemble_route(&alternative, request, selected))
                .collect(),
        );
    }
    Ok(route)
}

fn assemble_route(
    provider_route: &ProviderRoute,
    request: &DirectionsRequest,
    selected: &[StopTimeWindow],
) -> OptimizedRoute {
    let segments = provider_route
        .legs
        .iter()
        .enumerate()
        .map(|(index, leg)| segment_for(leg, selected.get(index)))
        .collect();

    let total_distance_meters = saturating_total(
        provider_route.legs.iter().map(leg_distance),
        "distance",
    );
    let total_duration_seconds = saturating_total(
        provider_route.legs.iter().map(leg_duration),
        "duration",
    );

    OptimizedRoute {
        waypoints: request.waypoints.clone(),
        total_distance_meters,
        total_duration_seconds,
        segments,
        alternative_routes: None,
    }
}

fn segment_for(leg: &RouteLeg, stop: Option<&StopTimeWindow>) -> RouteSegment {
    RouteSegment {
        start_location: leg.start_location,
        end_location: leg.end_location,
        distance_text: leg
            .distance
            .as_ref()
            .map(|distance| distance.text.clone())
            .unwrap_or_default(),
        duration_text: leg
            .duration
            .as_ref()
            .map(|duration| duration.text.clone())
            .unwrap_or_default(),
        priority: stop.map_or(Priority::Medium, |selected| selected.priority),
    }
}

/// Sum leg values, clamping at `u64::MAX` instead of overflowing.
fn saturating_total(values: impl Iterator<Item = u64>, measure: &str) -> u64 {
    let mut saturated = false;
    let total = values.fold(0_u64, |total, value| {
        total.checked_add(value).unwrap_or_else(|| {
            saturated = true;
            u64::MAX
        })
    });
    if saturated {
        log::warn!("route {measure} total overflowed; clamping to u64::MAX");
    }
    total
}

fn leg_distance(leg: &RouteLeg) -> u64 {
    leg.distance.as_ref().map_or_else(
        || {
            log::warn!("route leg is missing a distance; counting it as zero");
            0
        },
        |distance| distance.value,
    )
}

fn leg_duration(leg: &RouteLeg) -> u64 {
    leg.duration.as_ref().map_or_else(
        || {
            log::warn!("route leg is missing a duration; counting it as zero");
            0
        },
        |duration| duration.value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LatLng, TextValue, TransportMode, Waypoint};
    use rstest::{fixture, rstest};

    const ORIGIN: LatLng = LatLng::new(0.0, 0.0);
    const FIRST: LatLng = LatLng::new(1.0, 1.0);
    const SECOND: LatLng = LatLng::new(2.0, 2.0);

    fn leg(start: LatLng, end: LatLng, metres: u64, seconds: u64) -> RouteLeg {
        RouteLeg {
            start_location: start,
            end_location: end,
            distance: Some(TextValue::new(format!("{metres} m"), metres)),
            duration: Some(TextValue::new(format!("{seconds} s"), seconds)),
        }
    }

    #[fixture]
    fn request() -> DirectionsRequest {
        DirectionsRequest {
            origin: ORIGIN,
            destination: ORIGIN,
            waypoints: vec![Waypoint::stopover(FIRST), Waypoint::stopover(SECOND)],
            optimize_waypoints: true,
            travel_mode: TransportMode::Driving,
            avoid_highways: false,
            avoid_tolls: false,
            driving_options: None,
        }
    }

    #[fixture]
    fn selected() -> Vec<StopTimeWindow> {
        vec![
            StopTimeWindow::new(FIRST, Priority::High),
            StopTimeWindow::new(SECOND, Priority::Low),
        ]
    }

    fn loop_route() -> ProviderRoute {
        ProviderRoute {
            legs: vec![
                leg(ORIGIN, FIRST, 1_200, 180),
                leg(FIRST, SECOND, 800, 95),
                leg(SECOND, ORIGIN, 2_000, 240),
            ],
        }
    }

    #[rstest]
    fn zero_routes_is_an_error(request: DirectionsRequest, selected: Vec<StopTimeWindow>) {
        let err = assemble(DirectionsResponse::default(), &request, &selected)
            .expect_err("no routes");
        assert_eq!(err, OptimizeError::NoRouteFound);
    }

    #[rstest]
    fn totals_are_sums_of_leg_values(request: DirectionsRequest, selected: Vec<StopTimeWindow>) {
        let response = DirectionsResponse {
            routes: vec![loop_route()],
        };

        let route = assemble(response, &request, &selected).expect("route");

        assert_eq!(route.total_distance_meters, 4_000);
        assert_eq!(route.total_duration_seconds, 515);
        assert_eq!(route.segments.len(), 3);
        assert_eq!(route.segments[1].distance_text, "800 m");
        assert_eq!(route.segments[1].start_location, FIRST);
        assert_eq!(route.segments[1].end_location, SECOND);
    }

    #[rstest]
    fn oversized_leg_values_saturate_the_totals(
        request: DirectionsRequest,
        selected: Vec<StopTimeWindow>,
    ) {
        let half = (1_u64 << 63) + 1;
        let response = DirectionsResponse {
            routes: vec![ProviderRoute {
                legs: vec![
                    leg(ORIGIN, FIRST, half, u64::MAX),
                    leg(FIRST, ORIGIN, half, 1),
                ],
            }],
        };

        let route = assemble(response, &request, &selected).expect("route");

        assert_eq!(route.total_distance_meters, u64::MAX);
        assert_eq!(route.total_duration_seconds, u64::MAX);
        assert_eq!(route.segments.len(), 2);
    }

    #[rstest]
    fn priorities_follow_selection_with_medium_fallback(
        request: DirectionsRequest,
        selected: Vec<StopTimeWindow>,
    ) {
        let response = DirectionsResponse {
            routes: vec![loop_route()],
        };

        let route = assemble(response, &request, &selected).expect("route");

        let priorities: Vec<Priority> = route.segments.iter().map(|s| s.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Low, Priority::Medium]
        );
    }

    #[rstest]
    fn missing_leg_values_count_as_zero(
        request: DirectionsRequest,
        selected: Vec<StopTimeWindow>,
    ) {
        let mut partial = leg(FIRST, SECOND, 0, 0);
        partial.distance = None;
        partial.duration = None;
        let response = DirectionsResponse {
            routes: vec![ProviderRoute {
                legs: vec![leg(ORIGIN, FIRST, 500, 60), partial],
            }],
        };

        let route = assemble(response, &request, &selected).expect("route");

        assert_eq!(route.total_distance_meters, 500);
        assert_eq!(route.total_duration_seconds, 60);
        assert_eq!(route.segments[1].distance_text, "");
        assert_eq!(route.segments[1].duration_text, "");
    }

    #[rstest]
    fn waypoints_echo_the_request(request: DirectionsRequest, selected: Vec<StopTimeWindow>) {
        let response = DirectionsResponse {
            routes: vec![loop_route()],
        };

        let route = assemble(response, &request, &selected).expect("route");

        assert_eq!(route.waypoints, request.waypoints);
    }

    #[rstest]
    fn multi_leg_routes_carry_alternatives(
        request: DirectionsRequest,
        selected: Vec<StopTimeWindow>,
    ) {
        let alternative = ProviderRoute {
            legs: vec![leg(ORIGIN, SECOND, 3_000, 300), leg(SECOND, FIRST, 900, 90)],
        };
        let response = DirectionsResponse {
            routes: vec![loop_route(), alternative],
        };

        let route = assemble(response, &request, &selected).expect("route");

        let alternatives = route.alternative_routes.expect("alternatives");
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].total_distance_meters, 3_900);
        assert!(alternatives[0].alternative_routes.is_none());
    }

    #[rstest]
    fn single_leg_routes_have_no_alternatives(
        request: DirectionsRequest,
        selected: Vec<StopTimeWindow>,
    ) {
        let response = DirectionsResponse {
            routes: vec![
                ProviderRoute {
                    legs: vec![leg(ORIGIN, FIRST, 100, 10)],
                },
                loop_route(),
            ],
        };

        let route = assemble(response, &request, &selected).expect("route");

        assert!(route.alternative_routes.is_none());
    }
}
