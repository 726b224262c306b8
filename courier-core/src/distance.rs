//! Great-circle distances using the Haversine formula.
//!
//! The optimiser's notion of "nearest" is this distance. It treats the Earth
//! as a sphere of radius [`EARTH_RADIUS_KM`] and performs no range
//! validation: out-of-range or NaN input propagates through the arithmetic.

use crate::Coordinate;

/// Mean Earth radius used by [`distance`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two coordinates.
///
/// Symmetric, and zero for identical coordinates.
///
/// # Examples
/// ```
/// use courier_core::{coordinate, distance};
///
/// let a = coordinate(0.0, 0.0);
/// let b = coordinate(0.0, 0.1);
/// let km = distance(a, b);
/// assert!((km - 11.119_5).abs() < 1e-3);
/// assert_eq!(distance(a, a), 0.0);
/// ```
#[must_use]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    distance_with_radius(a, b, EARTH_RADIUS_KM)
}

/// Great-circle distance on a sphere of `radius_km`.
///
/// Degrees are converted with `deg * π / 180`, then
/// `h = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)` and
/// `d = R · 2·atan2(√h, √(1−h))`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
pub fn distance_with_radius(a: Coordinate, b: Coordinate, radius_km: f64) -> f64 {
    let to_radians = |degrees: f64| degrees * std::f64::consts::PI / 180.0;
    let d_lat = to_radians(b.y - a.y);
    let d_lon = to_radians(b.x - a.x);
    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let raw = half_lat * half_lat
        + to_radians(a.y).cos() * to_radians(b.y).cos() * half_lon * half_lon;
    // Rounding can push near-antipodal `h` past 1; NaN must still pass through.
    let h = if raw > 1.0 { 1.0 } else { raw };
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    radius_km * c
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "distance checks compare against tolerances and scaled radii"
)]
mod tests {
    use super::*;
    use crate::coordinate;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    #[case(coordinate(0.0, 0.0), coordinate(0.0, 0.05), 5.559_746)]
    #[case(coordinate(0.0, 0.0), coordinate(0.0, 0.1), 11.119_493)]
    #[case(coordinate(0.0, 0.0), coordinate(1.0, 0.0), 111.194_927)]
    fn matches_known_distances(
        #[case] a: Coordinate,
        #[case] b: Coordinate,
        #[case] expected_km: f64,
    ) {
        let km = distance(a, b);
        assert!((km - expected_km).abs() < 1e-5, "got {km}, expected {expected_km}");
    }

    #[rstest]
    fn london_to_paris_is_about_344_km() {
        let london = coordinate(51.5074, -0.1278);
        let paris = coordinate(48.8566, 2.3522);
        let km = distance(london, paris);
        assert!((km - 343.56).abs() < 0.5, "got {km}");
    }

    #[rstest]
    fn is_symmetric() {
        let a = coordinate(-33.8688, 151.2093);
        let b = coordinate(35.6762, 139.6503);
        assert!((distance(a, b) - distance(b, a)).abs() < TOLERANCE);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "identical inputs must give exactly zero")]
    fn identical_points_are_zero_apart() {
        let a = coordinate(10.0, 20.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[rstest]
    fn half_circumference_between_antipodes() {
        let km = distance(coordinate(0.0, 0.0), coordinate(0.0, 180.0));
        assert!((km - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[rstest]
    #[case(coordinate(-87.5, 0.0), coordinate(87.5, 180.0))]
    #[case(coordinate(-87.5, -90.0), coordinate(87.5, 90.0))]
    #[case(coordinate(30.0, 10.0), coordinate(-30.0, -170.0))]
    fn near_antipodal_rounding_stays_finite(#[case] a: Coordinate, #[case] b: Coordinate) {
        let km = distance(a, b);
        assert!(km.is_finite(), "got {km}");
        assert!((km - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6, "got {km}");
    }

    #[rstest]
    fn radius_scales_linearly() {
        let a = coordinate(0.0, 0.0);
        let b = coordinate(0.0, 1.0);
        let doubled = distance_with_radius(a, b, EARTH_RADIUS_KM * 2.0);
        assert!((doubled - distance(a, b) * 2.0).abs() < 1e-9);
    }

    #[rstest]
    fn nan_input_propagates() {
        assert!(distance(coordinate(f64::NAN, 0.0), coordinate(0.0, 0.0)).is_nan());
    }
}
