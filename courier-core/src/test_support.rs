//! Test-only fixtures shared by unit, property and behaviour tests.

use crate::{DeliveryStop, coordinate};

/// Construct a payload-free stop at `(latitude, longitude)`.
///
/// # Examples
/// ```rust
/// use courier_core::test_support::stop;
///
/// let stop = stop("a", 0.0, 0.1);
/// assert_eq!(stop.order_id, "a");
/// assert_eq!(stop.location.x, 0.1);
/// ```
#[must_use]
pub fn stop(order_id: &str, latitude: f64, longitude: f64) -> DeliveryStop {
    DeliveryStop::new(order_id, coordinate(latitude, longitude))
}

/// Stops along the equator at the given longitudes, named `s0`, `s1`, ...
#[must_use]
pub fn equator_stops(longitudes: &[f64]) -> Vec<DeliveryStop> {
    longitudes
        .iter()
        .enumerate()
        .map(|(idx, &longitude)| stop(&format!("s{idx}"), 0.0, longitude))
        .collect()
}
