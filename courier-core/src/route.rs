//! Ordered routes and their aggregate summaries.

use crate::{Coordinate, DeliveryStop};

/// One scheduled visit in an ordered route.
///
/// Carries the originating stop's fields unchanged, plus the distance of the
/// leg that reaches it and the running ETA through this stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop<P = ()> {
    /// Order identifier copied from the input stop.
    pub order_id: String,
    /// Drop-off position copied from the input stop.
    pub location: Coordinate,
    /// Address label copied from the input stop.
    pub address: Option<String>,
    /// Caller data copied from the input stop.
    pub payload: Option<P>,
    /// Great-circle distance from the previous position, in kilometres.
    pub leg_distance_km: f64,
    /// Minutes elapsed from route start through this stop.
    pub cumulative_eta_minutes: u64,
}

impl<P: Clone> RouteStop<P> {
    /// Schedule `stop` with the given leg distance and cumulative ETA.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{DeliveryStop, RouteStop, coordinate};
    ///
    /// let stop: DeliveryStop = DeliveryStop::new("a", coordinate(0.0, 0.1));
    /// let scheduled = RouteStop::scheduled(&stop, 11.1, 23);
    /// assert_eq!(scheduled.order_id, "a");
    /// assert_eq!(scheduled.cumulative_eta_minutes, 23);
    /// ```
    #[must_use]
    pub fn scheduled(
        stop: &DeliveryStop<P>,
        leg_distance_km: f64,
        cumulative_eta_minutes: u64,
    ) -> Self {
        Self {
            order_id: stop.order_id.clone(),
            location: stop.location,
            address: stop.address.clone(),
            payload: stop.payload.clone(),
            leg_distance_km,
            cumulative_eta_minutes,
        }
    }
}

/// Totals over an ordered route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Sum of leg distances rounded to one decimal place.
    pub total_distance_km: f64,
    /// ETA of the final stop, or zero for an empty route.
    pub total_time_minutes: u64,
}

/// Summarise an ordered route.
///
/// The distance total is rounded by multiplying by ten, rounding half away
/// from zero and dividing by ten. Leg distances are never negative, so this
/// equals round-half-up.
///
/// # Examples
/// ```
/// use courier_core::{RouteSummary, route_summary};
///
/// let empty: Vec<courier_core::RouteStop> = Vec::new();
/// assert_eq!(route_summary(&empty), RouteSummary::default());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance totals are floating-point sums"
)]
pub fn route_summary<P>(route: &[RouteStop<P>]) -> RouteSummary {
    let total: f64 = route.iter().map(|stop| stop.leg_distance_km).sum();
    RouteSummary {
        total_distance_km: (total * 10.0).round() / 10.0,
        total_time_minutes: route.last().map_or(0, |stop| stop.cumulative_eta_minutes),
    }
}

/// An ordered route bundled with its summary, as reported to callers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimisedRoute<P = ()> {
    /// Stops in visiting order.
    pub stops: Vec<RouteStop<P>>,
    /// Totals over `stops`.
    pub summary: RouteSummary,
}

impl<P> OptimisedRoute<P> {
    /// Bundle `stops` with their computed summary.
    #[must_use]
    pub fn new(stops: Vec<RouteStop<P>>) -> Self {
        let summary = route_summary(&stops);
        Self { stops, summary }
    }

    /// Return the totals for this route.
    #[must_use]
    pub const fn summary(&self) -> RouteSummary {
        self.summary
    }

    /// Order identifiers in visiting order.
    pub fn order_ids(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|stop| stop.order_id.as_str())
    }
}
