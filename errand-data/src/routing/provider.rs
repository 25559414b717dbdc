//! HTTP-based `DirectionsProvider` using OSRM's Trip and Route APIs.
//!
//! Requests asking for waypoint optimisation go to the Trip service, which
//! solves the visiting order with the origin pinned as the first stop. Other
//! requests go to the Route service and keep the caller's order.
//!
//! # Example
//!
//! ```no_run
//! use errand_core::{LatLng, RouteOptimizer, RoutePreferences, StopTimeWindow, Priority};
//! use errand_data::routing::OsrmDirectionsProvider;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OsrmDirectionsProvider::new("http://localhost:5000")?;
//! let optimizer = RouteOptimizer::new(provider);
//! let stops = vec![StopTimeWindow::new(LatLng::new(40.0, -83.0), Priority::High)];
//!
//! let route = optimizer
//!     .optimize_route(LatLng::new(39.9789, -82.8677), stops, &RoutePreferences::default())
//!     .await?;
//! println!("{} m", route.total_distance_meters);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use errand_core::{
    DirectionsError, DirectionsProvider, DirectionsRequest, DirectionsResponse, LatLng,
    ProviderRoute, RouteLeg, TextValue, TransportMode,
};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::format::{format_distance, format_duration};
use super::osrm::{DirectionsServiceResponse, OsrmLeg, OsrmRoute, OsrmWaypoint};

/// Error type for [`OsrmDirectionsProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid OSRM base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// The configured base URL cannot carry a path (e.g. `mailto:`).
    #[error("OSRM base URL {url:?} cannot be used as a base")]
    NotABaseUrl {
        /// The rejected URL.
        url: String,
    },
}

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "errand-routing/0.1";

/// Default OSRM base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`OsrmDirectionsProvider`].
#[derive(Debug, Clone)]
pub struct OsrmDirectionsProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OsrmDirectionsProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OsrmDirectionsProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Service {
    Trip,
    Route,
}

impl Service {
    const fn for_request(request: &DirectionsRequest) -> Self {
        if request.optimize_waypoints {
            Self::Trip
        } else {
            Self::Route
        }
    }

    const fn path(self) -> &'static str {
        match self {
            Self::Trip => "trip",
            Self::Route => "route",
        }
    }
}

/// Shape of one OSRM call derived from a [`DirectionsRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CallShape {
    service: Service,
    round_trip: bool,
}

impl CallShape {
    fn for_request(request: &DirectionsRequest) -> Self {
        let service = Service::for_request(request);
        Self {
            service,
            round_trip: service == Service::Trip && request.is_closed_loop(),
        }
    }

    /// Coordinates sent to OSRM, in request order.
    fn coordinates(self, request: &DirectionsRequest) -> Vec<LatLng> {
        let mut coordinates = Vec::with_capacity(request.waypoints.len().saturating_add(2));
        coordinates.push(request.origin);
        coordinates.extend(request.waypoints.iter().map(|waypoint| waypoint.location));
        if !self.round_trip {
            coordinates.push(request.destination);
        }
        coordinates
    }
}

/// HTTP-based directions provider using the OSRM Trip and Route APIs.
///
/// The provider is cheap to share: it holds a pooled [`reqwest::Client`] and
/// an immutable configuration, and keeps no per-request state.
///
/// # Mapping
///
/// - Travel modes map to the `driving`, `foot` and `bike` profiles; transit
///   is rejected with [`DirectionsError::UnsupportedTravelMode`].
/// - Highway and toll avoidance become `exclude=motorway,toll` for driving.
/// - Driving options (departure time, traffic model) are ignored.
/// - `NoTrips` and `NoRoute` answers become an empty route list.
#[derive(Debug, Clone)]
pub struct OsrmDirectionsProvider {
    client: Client,
    base_url: Url,
    config: OsrmDirectionsProviderConfig,
}

impl OsrmDirectionsProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails to
    /// build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OsrmDirectionsProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails to
    /// build.
    pub fn with_config(config: OsrmDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|source| ProviderBuildError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            })?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderBuildError::NotABaseUrl {
                url: config.base_url,
            });
        }
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub const fn config(&self) -> &OsrmDirectionsProviderConfig {
        &self.config
    }

    /// Build the OSRM URL for `request`.
    ///
    /// The path is `{base_url}/{service}/v1/{profile}/{coordinates}` where
    /// coordinates are semicolon-separated `lon,lat` pairs.
    fn build_url(&self, request: &DirectionsRequest) -> Result<Url, DirectionsError> {
        let profile = profile_for(request.travel_mode)?;
        let shape = CallShape::for_request(request);
        let coordinates = shape
            .coordinates(request)
            .iter()
            .map(|point| format!("{},{}", point.lng, point.lat))
            .collect::<Vec<_>>()
            .join(";");

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DirectionsError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "base URL cannot carry a path".to_owned(),
            })?
            .pop_if_empty()
            .extend([shape.service.path(), "v1", profile, coordinates.as_str()]);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("overview", "false");
            if shape.service == Service::Trip {
                query.append_pair("source", "first");
                if shape.round_trip {
                    query.append_pair("roundtrip", "true");
                } else {
                    query
                        .append_pair("destination", "last")
                        .append_pair("roundtrip", "false");
                }
            }
            if let Some(classes) = exclusions(request) {
                query.append_pair("exclude", &classes);
            }
        }

        if request.driving_options.is_some() {
            log::debug!("OSRM has no traffic model; ignoring driving options");
        }
        Ok(url)
    }

    /// Fetch and decode an OSRM response.
    ///
    /// OSRM reports service failures (including `NoRoute`) with an HTTP error
    /// status and a JSON body, so the body is decoded before the status is
    /// considered.
    async fn fetch(&self, url: &Url) -> Result<DirectionsServiceResponse, DirectionsError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        match serde_json::from_str::<DirectionsServiceResponse>(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => Err(DirectionsError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_owned(),
            }),
            Err(err) => Err(DirectionsError::ParseError {
                message: err.to_string(),
            }),
        }
    }

    /// Convert a reqwest error to a `DirectionsError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return DirectionsError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        DirectionsError::NetworkError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl DirectionsProvider for OsrmDirectionsProvider {
    async fn route(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = self.build_url(request)?;
        log::debug!("requesting OSRM directions from {url}");
        let response = self.fetch(&url).await?;
        convert_response(response, request)
    }
}

fn profile_for(mode: TransportMode) -> Result<&'static str, DirectionsError> {
    match mode {
        TransportMode::Driving => Ok("driving"),
        TransportMode::Walking => Ok("foot"),
        TransportMode::Bicycling => Ok("bike"),
        TransportMode::Transit => Err(DirectionsError::UnsupportedTravelMode { mode }),
    }
}

/// Road classes to exclude, as a comma-separated OSRM `exclude` value.
fn exclusions(request: &DirectionsRequest) -> Option<String> {
    let classes: Vec<&str> = [
        (request.avoid_highways, "motorway"),
        (request.avoid_tolls, "toll"),
    ]
    .into_iter()
    .filter_map(|(avoid, class)| avoid.then_some(class))
    .collect();
    if classes.is_empty() {
        return None;
    }
    if request.travel_mode != TransportMode::Driving {
        log::debug!(
            "OSRM only excludes road classes when driving; ignoring avoidance for {:?}",
            request.travel_mode
        );
        return None;
    }
    Some(classes.join(","))
}

/// Convert an OSRM response to a `DirectionsResponse`.
fn convert_response(
    response: DirectionsServiceResponse,
    request: &DirectionsRequest,
) -> Result<DirectionsResponse, DirectionsError> {
    if response.is_unroutable() {
        log::debug!(
            "OSRM found no route: {}",
            response.message.as_deref().unwrap_or(&response.code)
        );
        return Ok(DirectionsResponse::default());
    }
    if !response.is_ok() {
        return Err(DirectionsError::ServiceError {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let shape = CallShape::for_request(request);
    let DirectionsServiceResponse {
        routes, waypoints, ..
    } = response;
    let routes = routes
        .into_iter()
        .enumerate()
        .map(|(index, route)| {
            let visited = visiting_order(&waypoints, index);
            convert_route(route, &visited, shape, request)
        })
        .collect();
    Ok(DirectionsResponse { routes })
}

/// Snapped locations visited by route `route_index`, in visiting order.
fn visiting_order(waypoints: &[OsrmWaypoint], route_index: usize) -> Vec<LatLng> {
    let mut visited: Vec<(usize, LatLng)> = waypoints
        .iter()
        .enumerate()
        .filter(|(_, waypoint)| waypoint.trips_index.is_none_or(|trip| trip == route_index))
        .map(|(input_index, waypoint)| {
            let [lng, lat] = waypoint.location;
            (
                waypoint.waypoint_index.unwrap_or(input_index),
                LatLng::new(lat, lng),
            )
        })
        .collect();
    visited.sort_by_key(|(position, _)| *position);
    visited.into_iter().map(|(_, location)| location).collect()
}

fn convert_route(
    route: OsrmRoute,
    visited: &[LatLng],
    shape: CallShape,
    request: &DirectionsRequest,
) -> ProviderRoute {
    let expected_stops = if shape.round_trip {
        route.legs.len()
    } else {
        route.legs.len().saturating_add(1)
    };
    if visited.len() != expected_stops {
        log::warn!(
            "OSRM returned {} legs for {} waypoints; falling back to requested endpoints",
            route.legs.len(),
            visited.len()
        );
    }

    let legs = route
        .legs
        .into_iter()
        .enumerate()
        .map(|(index, leg)| {
            let start = visited.get(index).copied().unwrap_or(request.origin);
            let end = visited
                .get(index.saturating_add(1))
                .or_else(|| visited.first().filter(|_| shape.round_trip))
                .copied()
                .unwrap_or(request.destination);
            convert_leg(&leg, start, end)
        })
        .collect();
    ProviderRoute { legs }
}

fn convert_leg(leg: &OsrmLeg, start: LatLng, end: LatLng) -> RouteLeg {
    RouteLeg {
        start_location: start,
        end_location: end,
        distance: whole_units(leg.distance)
            .map(|meters| TextValue::new(format_distance(meters), meters)),
        duration: whole_units(leg.duration)
            .map(|seconds| TextValue::new(format_duration(seconds), seconds)),
    }
}

/// Round a non-negative finite measurement to whole units.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite, non-negative and rounded before the cast"
)]
fn whole_units(value: Option<f64>) -> Option<u64> {
    let measure = value?;
    if !measure.is_finite() || measure < 0.0 {
        log::warn!("discarding invalid OSRM leg value {measure}");
        return None;
    }
    Some(measure.round() as u64)
}
