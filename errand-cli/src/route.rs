//! Route command implementation for the errand CLI.

use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use errand_core::{
    DirectionsProvider, LatLng, OptimizedRoute, RouteOptimizer, RoutePreferences, StopTimeWindow,
};
use errand_data::routing::{
    OsrmDirectionsProvider, OsrmDirectionsProviderConfig, StraightLineDirectionsProvider,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_ROUTE_OSRM_BASE_URL, ARG_ROUTE_PROVIDER, ARG_ROUTE_REQUEST, ARG_ROUTE_TIMEOUT_SECS,
    CliError, ENV_ROUTE_REQUEST,
};

/// Directions backend used by the `route` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ProviderKind {
    /// An OSRM server's Trip service.
    #[default]
    Osrm,
    /// Offline great-circle estimates.
    StraightLine,
}

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Optimise a multi-stop errand route. The request file holds \
                 the origin, the candidate stops and the routing preferences \
                 as JSON; the optimized route is printed to stdout as JSON.",
    about = "Optimise an errand route"
)]
#[ortho_config(prefix = "ERRAND")]
pub(crate) struct RouteArgs {
    /// Path to a JSON file containing a route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Directions backend.
    #[arg(long = ARG_ROUTE_PROVIDER, value_enum, value_name = "kind")]
    #[serde(default)]
    pub(crate) provider: Option<ProviderKind>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_ROUTE_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Routing request timeout in seconds.
    #[arg(long = ARG_ROUTE_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Directions backend.
    pub(crate) provider: ProviderKind,
    /// Base URL for the OSRM service.
    pub(crate) osrm_base_url: String,
    /// Routing request timeout.
    pub(crate) timeout: Duration,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match file_is_file(&self.request_path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_ROUTE_REQUEST,
                path: self.request_path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_ROUTE_REQUEST,
                    path: self.request_path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_ROUTE_REQUEST,
                path: self.request_path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_REQUEST,
            env: ENV_ROUTE_REQUEST,
        })?;

        let defaults = OsrmDirectionsProviderConfig::default();
        let timeout = match args.timeout_secs {
            Some(0) => {
                return Err(CliError::InvalidArgument {
                    field: ARG_ROUTE_TIMEOUT_SECS,
                    reason: "must be at least one second",
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.timeout,
        };

        Ok(Self {
            request_path,
            provider: args.provider.unwrap_or_default(),
            osrm_base_url: args.osrm_base_url.unwrap_or(defaults.base_url),
            timeout,
        })
    }
}

/// JSON payload accepted by the `route` subcommand.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RouteRequest {
    /// Starting location.
    pub(crate) origin: LatLng,
    /// Candidate stops.
    pub(crate) stops: Vec<StopTimeWindow>,
    /// Routing preferences; defaults apply when omitted.
    #[serde(default)]
    pub(crate) preferences: RoutePreferences,
}

/// Builds a directions provider for the current route invocation.
pub(super) trait RouteProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn DirectionsProvider>, CliError>;
}

pub(super) struct DefaultRouteProviderBuilder;

impl RouteProviderBuilder for DefaultRouteProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        match config.provider {
            ProviderKind::Osrm => {
                let provider_config = OsrmDirectionsProviderConfig::new(config.osrm_base_url.clone())
                    .with_timeout(config.timeout);
                let provider =
                    OsrmDirectionsProvider::with_config(provider_config).map_err(|source| {
                        CliError::BuildDirectionsProvider {
                            base_url: config.osrm_base_url.clone(),
                            source,
                        }
                    })?;
                Ok(Box::new(provider))
            }
            ProviderKind::StraightLine => Ok(Box::new(StraightLineDirectionsProvider::default())),
        }
    }
}

pub(super) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRouteProviderBuilder;
    run_route_with(args, &builder, &mut stdout)
}

pub(super) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RouteProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let route = execute_route(args, builder)?;
    write_route(writer, &route)
}

fn execute_route(
    args: RouteArgs,
    builder: &dyn RouteProviderBuilder,
) -> Result<OptimizedRoute, CliError> {
    let config = resolve_route_config(args)?;
    let request = load_route_request(&config.request_path)?;
    let optimizer = RouteOptimizer::new(builder.build(&config)?);
    log::debug!(
        "routing {} candidate stops with the {:?} provider",
        request.stops.len(),
        config.provider
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime
        .block_on(optimizer.optimize_route(request.origin, request.stops, &request.preferences))
        .map_err(|source| CliError::Optimize { source })
}

fn resolve_route_config(args: RouteArgs) -> Result<RouteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
pub(super) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRouteRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRouteRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route(writer: &mut dyn Write, route: &OptimizedRoute) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerializeRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRouteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRouteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
