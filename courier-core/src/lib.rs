//! Core domain types for the courier route engine.
//!
//! A rider's pending drop-offs arrive as [`DeliveryStop`] values. A
//! [`RouteOptimiser`] orders them into [`RouteStop`] values carrying leg
//! distances and cumulative ETAs, and [`route_summary`] aggregates the result.
//!
//! Coordinates follow the `geo` convention: `x = longitude`, `y = latitude`,
//! both in decimal degrees.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod coordinate;
pub mod distance;
pub mod optimiser;
pub mod route;
pub mod stop;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{CoordinatePolicy, OptimiserConfig};
pub use coordinate::{Coordinate, CoordinateError, coordinate, validate_coordinate};
pub use distance::{EARTH_RADIUS_KM, distance, distance_with_radius};
pub use optimiser::{OptimiseError, RouteOptimiser, check_coordinates};
pub use route::{OptimisedRoute, RouteStop, RouteSummary, route_summary};
pub use stop::DeliveryStop;
