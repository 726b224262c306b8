//! Optimiser tuning knobs with their documented defaults.

use crate::{EARTH_RADIUS_KM, OptimiseError};

/// How an optimiser treats coordinates outside WGS84 degree ranges.
///
/// Parsing ignores case, both through [`FromStr`](std::str::FromStr) and
/// when deserialising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoordinatePolicy {
    /// Reject non-finite or out-of-range coordinates with
    /// [`OptimiseError::InvalidCoordinate`].
    #[default]
    Strict,
    /// Accept any value and let NaN propagate through distances.
    Permissive,
}

impl CoordinatePolicy {
    /// Return the policy as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for CoordinatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CoordinatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            _ => Err(format!("unknown coordinate policy '{s}'")),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CoordinatePolicy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parameters shared by [`RouteOptimiser`](crate::RouteOptimiser)
/// implementations.
///
/// # Examples
/// ```
/// use courier_core::{CoordinatePolicy, OptimiserConfig};
///
/// let config = OptimiserConfig::default();
/// assert_eq!(config.average_speed_kmh, 30.0);
/// assert_eq!(config.earth_radius_km, 6371.0);
/// assert_eq!(config.coordinate_policy, CoordinatePolicy::Strict);
/// assert_eq!(config.minutes_per_km(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimiserConfig {
    /// Assumed average travel speed used to derive leg times.
    pub average_speed_kmh: f64,
    /// Sphere radius used for Haversine distances.
    pub earth_radius_km: f64,
    /// Coordinate validation behaviour.
    pub coordinate_policy: CoordinatePolicy,
}

impl Default for OptimiserConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 30.0,
            earth_radius_km: EARTH_RADIUS_KM,
            coordinate_policy: CoordinatePolicy::Strict,
        }
    }
}

impl OptimiserConfig {
    /// Minutes needed to travel one kilometre at the configured speed.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "speed conversion is a floating-point ratio"
    )]
    pub fn minutes_per_km(&self) -> f64 {
        60.0 / self.average_speed_kmh
    }

    /// Check that speed and radius are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`OptimiseError::InvalidConfig`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), OptimiseError> {
        Self::require_positive("average_speed_kmh", self.average_speed_kmh)?;
        Self::require_positive("earth_radius_km", self.earth_radius_km)?;
        Ok(())
    }

    fn require_positive(field: &'static str, value: f64) -> Result<(), OptimiseError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(OptimiseError::InvalidConfig { field, value })
        }
    }
}
