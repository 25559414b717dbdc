//! Deterministic `DirectionsProvider` doubles used by unit and behaviour
//! tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    DirectionsError, DirectionsProvider, DirectionsRequest, DirectionsResponse, LatLng,
    ProviderRoute, RouteLeg, TextValue,
};

/// Stub provider returning a pre-configured response or error.
///
/// Every call is counted and the most recent request is retained so tests can
/// assert on what the optimizer sent.
///
/// # Examples
///
/// ```
/// use errand_core::DirectionsResponse;
/// use errand_core::test_support::StubDirectionsProvider;
///
/// let provider = StubDirectionsProvider::with_response(DirectionsResponse::default());
/// assert_eq!(provider.calls(), 0);
/// assert!(provider.last_request().is_none());
/// ```
#[derive(Debug, Default)]
pub struct StubDirectionsProvider {
    response: StubResponse,
    calls: AtomicUsize,
    last_request: Mutex<Option<DirectionsRequest>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Routes(DirectionsResponse),
    Echo(EchoDirectionsProvider),
    Error(DirectionsError),
}

impl Default for StubResponse {
    fn default() -> Self {
        Self::Routes(DirectionsResponse::default())
    }
}

impl StubDirectionsProvider {
    /// Create a provider returning `response` for every request.
    #[must_use]
    pub fn with_response(response: DirectionsResponse) -> Self {
        Self {
            response: StubResponse::Routes(response),
            ..Self::default()
        }
    }

    /// Create a provider answering every request through `echo`.
    #[must_use]
    pub fn echoing(echo: EchoDirectionsProvider) -> Self {
        Self {
            response: StubResponse::Echo(echo),
            ..Self::default()
        }
    }

    /// Create a provider failing every request with `error`.
    #[must_use]
    pub fn with_error(error: DirectionsError) -> Self {
        Self {
            response: StubResponse::Error(error),
            ..Self::default()
        }
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<DirectionsRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|request| request.clone())
    }
}

#[async_trait]
impl DirectionsProvider for StubDirectionsProvider {
    async fn route(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }
        match &self.response {
            StubResponse::Routes(response) => Ok(response.clone()),
            StubResponse::Echo(echo) => echo.route(request).await,
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Provider that visits waypoints in request order with fixed-cost legs.
///
/// The route runs origin, waypoints, destination; each hop becomes one leg of
/// `leg_meters` metres and `leg_seconds` seconds.
#[derive(Debug, Clone, Copy)]
pub struct EchoDirectionsProvider {
    /// Distance reported for every leg.
    pub leg_meters: u64,
    /// Duration reported for every leg.
    pub leg_seconds: u64,
}

impl Default for EchoDirectionsProvider {
    fn default() -> Self {
        Self {
            leg_meters: 1_000,
            leg_seconds: 120,
        }
    }
}

#[async_trait]
impl DirectionsProvider for EchoDirectionsProvider {
    async fn route(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let points: Vec<LatLng> = std::iter::once(request.origin)
            .chain(request.waypoints.iter().map(|waypoint| waypoint.location))
            .chain(std::iter::once(request.destination))
            .collect();
        let legs = points
            .windows(2)
            .filter_map(|pair| match pair {
                [start, end] => Some(RouteLeg {
                    start_location: *start,
                    end_location: *end,
                    distance: Some(TextValue::new(
                        format!("{} m", self.leg_meters),
                        self.leg_meters,
                    )),
                    duration: Some(TextValue::new(
                        format!("{} s", self.leg_seconds),
                        self.leg_seconds,
                    )),
                }),
                _ => None,
            })
            .collect();
        Ok(DirectionsResponse {
            routes: vec![ProviderRoute { legs }],
        })
    }
}
