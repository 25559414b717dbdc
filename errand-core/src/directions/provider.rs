//! Directions provider trait.

use async_trait::async_trait;

use super::{DirectionsError, DirectionsRequest, DirectionsResponse};

/// Compute routes through a set of waypoints.
///
/// Implementations perform exactly one round trip per call and never retry.
/// They must be `Send + Sync` so a single provider can serve concurrent
/// optimizations.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use errand_core::{
///     DirectionsError, DirectionsProvider, DirectionsRequest, DirectionsResponse,
/// };
///
/// struct NoRoutes;
///
/// #[async_trait]
/// impl DirectionsProvider for NoRoutes {
///     async fn route(
///         &self,
///         _request: &DirectionsRequest,
///     ) -> Result<DirectionsResponse, DirectionsError> {
///         Ok(DirectionsResponse::default())
///     }
/// }
/// ```
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Compute routes for `request`.
    async fn route(&self, request: &DirectionsRequest)
    -> Result<DirectionsResponse, DirectionsError>;
}

#[async_trait]
impl<P> DirectionsProvider for Box<P>
where
    P: DirectionsProvider + ?Sized,
{
    async fn route(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        (**self).route(request).await
    }
}
