//! WGS84 coordinates and range validation.

use geo::Coord;
use thiserror::Error;

/// A position in decimal degrees with `x = longitude` and `y = latitude`.
///
/// No datum conversion is performed.
pub type Coordinate = Coord<f64>;

/// Build a [`Coordinate`] from `(latitude, longitude)` degrees.
///
/// # Examples
/// ```
/// use courier_core::coordinate;
///
/// let depot = coordinate(51.5, -0.12);
/// assert_eq!(depot.y, 51.5);
/// assert_eq!(depot.x, -0.12);
/// ```
#[must_use]
pub const fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Reasons a coordinate fails [`validate_coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate ({latitude}, {longitude}) is not finite")]
    NonFinite {
        /// Offending latitude.
        latitude: f64,
        /// Offending longitude.
        longitude: f64,
    },
    /// Latitude fell outside `-90..=90`.
    #[error("latitude {latitude} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Offending latitude.
        latitude: f64,
    },
    /// Longitude fell outside `-180..=180`.
    #[error("longitude {longitude} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Offending longitude.
        longitude: f64,
    },
}

/// Check that a coordinate is finite and within WGS84 degree ranges.
///
/// Boundary values (`±90` latitude, `±180` longitude) are accepted.
///
/// # Errors
///
/// Returns the first [`CoordinateError`] found, checking finiteness before
/// latitude and latitude before longitude.
///
/// # Examples
/// ```
/// use courier_core::{CoordinateError, coordinate, validate_coordinate};
///
/// assert!(validate_coordinate(coordinate(90.0, -180.0)).is_ok());
/// assert_eq!(
///     validate_coordinate(coordinate(91.0, 0.0)),
///     Err(CoordinateError::LatitudeOutOfRange { latitude: 91.0 }),
/// );
/// ```
pub fn validate_coordinate(coord: Coordinate) -> Result<(), CoordinateError> {
    let Coord {
        x: longitude,
        y: latitude,
    } = coord;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(CoordinateError::NonFinite {
            latitude,
            longitude,
        });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CoordinateError::LatitudeOutOfRange { latitude });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CoordinateError::LongitudeOutOfRange { longitude });
    }
    Ok(())
}
