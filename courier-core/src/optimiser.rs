//! The optimiser seam and its error type.

use thiserror::Error;

use crate::{
    CoordinateError, CoordinatePolicy, Coordinate, DeliveryStop, RouteStop, validate_coordinate,
};

/// Errors returned by [`RouteOptimiser::optimise`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimiseError {
    /// A coordinate failed validation under [`CoordinatePolicy::Strict`].
    #[error("{} has an invalid coordinate: {source}", describe_origin(.order_id.as_deref()))]
    InvalidCoordinate {
        /// Offending stop, or `None` for the start position.
        order_id: Option<String>,
        /// Validation failure.
        #[source]
        source: CoordinateError,
    },
    /// A configuration value was unusable.
    #[error("{field} must be finite and positive, got {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

fn describe_origin(order_id: Option<&str>) -> String {
    order_id.map_or_else(|| "start position".to_owned(), |id| format!("stop {id}"))
}

/// Order a batch of delivery stops into a visiting sequence.
///
/// Implementations must:
/// - return every input stop exactly once,
/// - leave inputs untouched and retain no references to them,
/// - produce identical output for identical input.
///
/// Optimisers must be `Send + Sync` so callers can share them across threads.
pub trait RouteOptimiser: Send + Sync {
    /// Order `stops` starting from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`OptimiseError`] when the configuration or a coordinate is
    /// rejected. An empty `stops` slice is not an error.
    fn optimise<P: Clone>(
        &self,
        start: Coordinate,
        stops: &[DeliveryStop<P>],
    ) -> Result<Vec<RouteStop<P>>, OptimiseError>;
}

/// Validate the start and every stop according to `policy`.
///
/// # Errors
///
/// Under [`CoordinatePolicy::Strict`], returns
/// [`OptimiseError::InvalidCoordinate`] for the start first, then for the
/// first offending stop in input order.
pub fn check_coordinates<P>(
    policy: CoordinatePolicy,
    start: Coordinate,
    stops: &[DeliveryStop<P>],
) -> Result<(), OptimiseError> {
    if policy == CoordinatePolicy::Permissive {
        return Ok(());
    }
    validate_coordinate(start).map_err(|source| OptimiseError::InvalidCoordinate {
        order_id: None,
        source,
    })?;
    for stop in stops {
        validate_coordinate(stop.location).map_err(|source| OptimiseError::InvalidCoordinate {
            order_id: Some(stop.order_id.clone()),
            source,
        })?;
    }
    Ok(())
}
