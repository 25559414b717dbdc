//! Response returned by a directions provider.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::LatLng;

/// A measured quantity with its human-readable rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextValue {
    /// Display text, e.g. `"12.3 km"`.
    pub text: String,
    /// Raw value in metres or seconds.
    pub value: u64,
}

impl TextValue {
    /// Construct a text/value pair.
    #[must_use]
    pub fn new(text: impl Into<String>, value: u64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Travel between two consecutive points of a provider route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteLeg {
    /// Where the leg starts.
    pub start_location: LatLng,
    /// Where the leg ends.
    pub end_location: LatLng,
    /// Leg distance in metres, when reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance: Option<TextValue>,
    /// Leg duration in seconds, when reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<TextValue>,
}

/// One candidate route made of consecutive legs.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProviderRoute {
    /// Legs in travel order.
    pub legs: Vec<RouteLeg>,
}

/// All routes a provider returned for a request, best first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectionsResponse {
    /// Candidate routes.
    pub routes: Vec<ProviderRoute>,
}
