//! Error types emitted by the errand CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use errand_core::OptimizeError;
use errand_data::routing::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the errand CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Argument name.
        field: &'static str,
        /// Environment variable that can supply the argument.
        env: &'static str,
    },
    /// An option was supplied with an unusable value.
    #[error("invalid --{field}: {reason}")]
    InvalidArgument {
        /// Argument name.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument name.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument name.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument name.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the route request file failed.
    #[error("failed to open route request at {path:?}: {source}")]
    OpenRouteRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Route request JSON could not be decoded.
    #[error("failed to parse route request JSON at {path:?}: {source}")]
    ParseRouteRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the directions provider failed.
    #[error("failed to build directions provider for {base_url:?}: {source}")]
    BuildDirectionsProvider {
        /// Configured OSRM base URL.
        base_url: String,
        /// Construction error.
        #[source]
        source: ProviderBuildError,
    },
    /// The async runtime driving the optimizer could not start.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Route optimization failed.
    #[error("route optimization failed: {source}")]
    Optimize {
        /// Optimizer error.
        #[source]
        source: OptimizeError,
    },
    /// Serializing the optimized route failed.
    #[error("failed to serialize optimized route: {0}")]
    SerializeRoute(#[source] serde_json::Error),
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteRouteOutput(#[source] std::io::Error),
}
