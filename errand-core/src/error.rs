use thiserror::Error;

use crate::DirectionsError;

/// Errors returned by [`crate::RouteOptimizer::optimize_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// No candidate stops remained after selection.
    ///
    /// The provider is never called in this case.
    #[error("no stops to route")]
    EmptyStopSet,
    /// The provider returned no routes for a well-formed request.
    #[error("directions provider found no route")]
    NoRouteFound,
    /// The provider call failed.
    #[error("directions request failed: {source}")]
    ProviderRequest {
        /// Underlying provider error.
        #[from]
        source: DirectionsError,
    },
}
