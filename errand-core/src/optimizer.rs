//! Route optimization entry point.

use chrono::{DateTime, Utc};

use crate::{
    DirectionsProvider, LatLng, OptimizeError, OptimizedRoute, RoutePreferences, StopTimeWindow,
    assemble, build_request, select_stops_at,
};

/// Optimise multi-stop routes through an injected [`DirectionsProvider`].
///
/// Each call ranks and truncates the candidate stops, builds one request,
/// awaits the provider once and assembles the result. Calls share nothing but
/// the provider, so concurrent optimizations are independent. Provider
/// failures are returned as-is without retrying.
#[derive(Debug, Clone)]
pub struct RouteOptimizer<P> {
    provider: P,
}

impl<P> RouteOptimizer<P>
where
    P: DirectionsProvider,
{
    /// Construct an optimizer around `provider`.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Borrow the underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Optimise a route scoring urgency at the current time.
    ///
    /// # Errors
    ///
    /// See [`RouteOptimizer::optimize_route_at`].
    pub async fn optimize_route(
        &self,
        origin: LatLng,
        candidate_stops: Vec<StopTimeWindow>,
        preferences: &RoutePreferences,
    ) -> Result<OptimizedRoute, OptimizeError> {
        self.optimize_route_at(origin, candidate_stops, preferences, Utc::now())
            .await
    }

    /// Optimise a route scoring urgency (and departing) at `now`.
    ///
    /// # Errors
    ///
    /// - [`OptimizeError::EmptyStopSet`] when no stops survive selection; the
    ///   provider is not called.
    /// - [`OptimizeError::ProviderRequest`] when the provider call fails.
    /// - [`OptimizeError::NoRouteFound`] when the provider returns no routes.
    pub async fn optimize_route_at(
        &self,
        origin: LatLng,
        candidate_stops: Vec<StopTimeWindow>,
        preferences: &RoutePreferences,
        now: DateTime<Utc>,
    ) -> Result<OptimizedRoute, OptimizeError> {
        let candidates = candidate_stops.len();
        let selected = select_stops_at(candidate_stops, preferences, now);
        if selected.is_empty() {
            return Err(OptimizeError::EmptyStopSet);
        }
        log::debug!(
            "routing {} of {candidates} candidate stops by {:?}",
            selected.len(),
            preferences.transport_mode
        );

        let request = build_request(origin, &selected, preferences, now)?;
        let response = self.provider.route(&request).await?;
        let route = assemble(response, &request, &selected)?;

        log::info!(
            "optimized route: {} segments, {} m, {} s",
            route.segments.len(),
            route.total_distance_meters,
            route.total_duration_seconds
        );
        Ok(route)
    }
}
