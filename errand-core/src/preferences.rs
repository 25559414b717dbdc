//! User routing preferences applied to a single optimization call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the traveller moves between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TransportMode {
    /// Car travel.
    #[default]
    Driving,
    /// On foot.
    Walking,
    /// By bicycle.
    Bicycling,
    /// Public transport.
    Transit,
}

/// Preferences shaping the directions request.
///
/// # Examples
///
/// ```
/// use errand_core::{RoutePreferences, TransportMode};
///
/// let preferences = RoutePreferences {
///     transport_mode: TransportMode::Walking,
///     max_stops: Some(5),
///     ..RoutePreferences::default()
/// };
/// assert!(!preferences.return_to_start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RoutePreferences {
    /// Ask the provider to avoid motorways.
    pub avoid_highways: bool,
    /// Ask the provider to avoid toll roads.
    pub avoid_tolls: bool,
    /// Travel mode passed through to the provider.
    pub transport_mode: TransportMode,
    /// Finish the route back at the origin.
    pub return_to_start: bool,
    /// Request a traffic-aware departure time.
    pub consider_traffic: bool,
    /// Upper bound on the number of stops routed.
    pub max_stops: Option<u16>,
}
