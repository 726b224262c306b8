//! `NearestNeighbourOptimiser` implementation of `RouteOptimiser`.

use courier_core::{
    Coordinate, DeliveryStop, OptimiseError, OptimiserConfig, RouteOptimiser, RouteStop,
    check_coordinates,
};

use crate::greedy::{LegModel, construct};

/// Greedy optimiser visiting the closest remaining stop at each step.
///
/// Leg times are `ceil(leg_km * 60 / average_speed_kmh)` minutes; with the
/// default 30 km/h that is `ceil(leg_km * 2)`.
///
/// # Examples
/// ```
/// use courier_core::{DeliveryStop, RouteOptimiser, coordinate};
/// use courier_optimiser_nn::NearestNeighbourOptimiser;
///
/// let stops: Vec<DeliveryStop> = vec![
///     DeliveryStop::new("A", coordinate(0.0, 0.1)),
///     DeliveryStop::new("B", coordinate(0.0, 0.05)),
///     DeliveryStop::new("C", coordinate(0.0, 0.2)),
/// ];
/// let route = NearestNeighbourOptimiser::new().optimise(coordinate(0.0, 0.0), &stops)?;
/// let order: Vec<_> = route.iter().map(|stop| stop.order_id.as_str()).collect();
/// assert_eq!(order, ["B", "A", "C"]);
/// # Ok::<(), courier_core::OptimiseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestNeighbourOptimiser {
    config: OptimiserConfig,
}

impl NearestNeighbourOptimiser {
    /// Construct an optimiser using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(OptimiserConfig::default())
    }

    /// Construct an optimiser with explicit configuration.
    ///
    /// The configuration is validated on each call to
    /// [`optimise`](RouteOptimiser::optimise).
    #[must_use]
    pub const fn with_config(config: OptimiserConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &OptimiserConfig {
        &self.config
    }
}

impl RouteOptimiser for NearestNeighbourOptimiser {
    fn optimise<P: Clone>(
        &self,
        start: Coordinate,
        stops: &[DeliveryStop<P>],
    ) -> Result<Vec<RouteStop<P>>, OptimiseError> {
        self.config.validate()?;
        check_coordinates(self.config.coordinate_policy, start, stops)?;
        let model = LegModel {
            earth_radius_km: self.config.earth_radius_km,
            minutes_per_km: self.config.minutes_per_km(),
        };
        Ok(construct(start, stops, model))
    }
}

/// Order `stops` from `start` with the default configuration.
///
/// # Errors
///
/// Returns [`OptimiseError::InvalidCoordinate`] when the start or a stop lies
/// outside WGS84 degree ranges or is not finite.
pub fn optimise_route<P: Clone>(
    start: Coordinate,
    stops: &[DeliveryStop<P>],
) -> Result<Vec<RouteStop<P>>, OptimiseError> {
    NearestNeighbourOptimiser::new().optimise(start, stops)
}
