//! Nearest-neighbour construction over a working pool of stops.
//!
//! The pool is a function-local vector of borrowed stops. Removal keeps the
//! remaining stops in input order so the lowest original index wins ties.

use courier_core::{Coordinate, DeliveryStop, RouteStop, distance_with_radius};

/// Conversion factors for one construction run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LegModel {
    pub(crate) earth_radius_km: f64,
    pub(crate) minutes_per_km: f64,
}

impl LegModel {
    /// Whole minutes for a leg, rounded up.
    ///
    /// A non-finite leg (only reachable with permissive coordinates) counts as
    /// zero minutes.
    #[expect(
        clippy::float_arithmetic,
        reason = "leg time is derived from a floating-point distance"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the value is a finite, non-negative whole number of minutes"
    )]
    pub(crate) fn leg_minutes(self, distance_km: f64) -> u64 {
        let minutes = (distance_km * self.minutes_per_km).ceil();
        if minutes.is_finite() && minutes >= 0.0 {
            minutes as u64
        } else {
            0
        }
    }
}

/// Index into `pool` of the stop closest to `from`, with that distance.
///
/// Uses a strict `<` so the first of equally distant stops is kept. A NaN
/// distance never replaces the current best.
pub(crate) fn nearest<P>(
    from: Coordinate,
    pool: &[&DeliveryStop<P>],
    earth_radius_km: f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, stop) in pool.iter().enumerate() {
        let candidate_km = distance_with_radius(from, stop.location, earth_radius_km);
        if best.is_none_or(|(_, best_km)| candidate_km < best_km) {
            best = Some((idx, candidate_km));
        }
    }
    best
}

/// Build the visiting sequence for `stops` starting at `start`.
pub(crate) fn construct<P: Clone>(
    start: Coordinate,
    stops: &[DeliveryStop<P>],
    model: LegModel,
) -> Vec<RouteStop<P>> {
    let mut pool: Vec<&DeliveryStop<P>> = stops.iter().collect();
    let mut route = Vec::with_capacity(stops.len());
    let mut position = start;
    let mut eta_minutes = 0_u64;

    while let Some((idx, leg_km)) = nearest(position, &pool, model.earth_radius_km) {
        let chosen = pool.remove(idx);
        if !leg_km.is_finite() {
            log::warn!(
                "leg to stop {} has non-finite distance {leg_km}; counting zero minutes",
                chosen.order_id
            );
        }
        eta_minutes = eta_minutes.saturating_add(model.leg_minutes(leg_km));
        log::debug!(
            "stop {} (#{}) at {leg_km:.3} km, eta {eta_minutes} min",
            chosen.order_id,
            route.len() + 1
        );
        route.push(RouteStop::scheduled(chosen, leg_km, eta_minutes));
        position = chosen.location;
    }

    route
}
