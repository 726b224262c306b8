//! Facade crate for the courier route engine.
//!
//! This crate re-exports the core domain types and exposes the optimiser
//! implementations behind feature flags.

#![forbid(unsafe_code)]

pub use courier_core::{
    Coordinate, CoordinateError, CoordinatePolicy, DeliveryStop, EARTH_RADIUS_KM, OptimiseError,
    OptimisedRoute, OptimiserConfig, RouteOptimiser, RouteStop, RouteSummary, coordinate,
    distance, distance_with_radius, route_summary, validate_coordinate,
};

#[cfg(feature = "optimiser-nn")]
pub use courier_optimiser_nn::{NearestNeighbourOptimiser, optimise_route};
