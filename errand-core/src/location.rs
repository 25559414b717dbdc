//! Geographic coordinates exchanged with callers and directions providers.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use errand_core::LatLng;
///
/// let origin = LatLng::new(39.9789, -82.8677);
/// let coord: Coord<f64> = origin.into();
/// assert_eq!(coord.x, -82.8677);
/// assert_eq!(coord.y, 39.9789);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Construct a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(value: Coord<f64>) -> Self {
        Self {
            lat: value.y,
            lng: value.x,
        }
    }
}
