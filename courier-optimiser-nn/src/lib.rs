//! Greedy nearest-neighbour route optimiser for courier deliveries.
//!
//! This crate provides [`NearestNeighbourOptimiser`], the default
//! implementation of the [`RouteOptimiser`](courier_core::RouteOptimiser)
//! trait. Starting from the rider's position it repeatedly visits the closest
//! unvisited stop by Haversine distance, breaking ties by input order.
//!
//! Nearest-neighbour is a heuristic for the travelling salesman problem and
//! does not guarantee the shortest route. Each step scans the remaining pool,
//! so a batch of `n` stops costs `O(n²)` distance evaluations, which suits
//! per-rider batches of tens of stops.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod greedy;
mod optimiser;

pub use optimiser::{NearestNeighbourOptimiser, optimise_route};
