//! Behavioural tests for `NearestNeighbourOptimiser` using rstest-bdd.

use std::cell::RefCell;

use courier_core::test_support::stop;
use courier_core::{
    Coordinate, CoordinatePolicy, DeliveryStop, OptimiseError, OptimiserConfig, RouteOptimiser,
    RouteStop, RouteSummary, coordinate, route_summary,
};
use courier_optimiser_nn::NearestNeighbourOptimiser;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct RouteWorld {
    start: RefCell<Coordinate>,
    stops: RefCell<Vec<DeliveryStop>>,
    config: RefCell<OptimiserConfig>,
    outcome: RefCell<Option<Result<Vec<RouteStop>, OptimiseError>>>,
}

impl RouteWorld {
    fn new() -> Self {
        Self {
            start: RefCell::new(coordinate(0.0, 0.0)),
            stops: RefCell::new(Vec::new()),
            config: RefCell::new(OptimiserConfig::default()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<Vec<RouteStop>, OptimiseError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_route(&self) -> Vec<RouteStop> {
        self.expect_outcome().expect("expected optimisation success")
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::new()
}

#[given("a rider at the origin")]
fn given_rider_at_origin(world: &RouteWorld) {
    world.start.replace(coordinate(0.0, 0.0));
}

#[given("stops A at 0.1, B at 0.05 and C at 0.2 degrees east")]
fn given_equator_stops(world: &RouteWorld) {
    world.stops.replace(vec![
        stop("A", 0.0, 0.1),
        stop("B", 0.0, 0.05),
        stop("C", 0.0, 0.2),
    ]);
}

#[given("no pending stops")]
fn given_no_stops(world: &RouteWorld) {
    world.stops.replace(Vec::new());
}

#[given("a stop at latitude 95")]
fn given_out_of_range_stop(world: &RouteWorld) {
    world.stops.replace(vec![stop("polar", 95.0, 0.0)]);
}

#[given("a permissive coordinate policy")]
fn given_permissive_policy(world: &RouteWorld) {
    world.config.replace(OptimiserConfig {
        coordinate_policy: CoordinatePolicy::Permissive,
        ..OptimiserConfig::default()
    });
}

#[when("the nearest-neighbour optimiser runs")]
fn when_optimiser_runs(world: &RouteWorld) {
    let optimiser = NearestNeighbourOptimiser::with_config(*world.config.borrow());
    let start = *world.start.borrow();
    let outcome = {
        let stops = world.stops.borrow();
        optimiser.optimise(start, stops.as_slice())
    };
    world.outcome.replace(Some(outcome));
}

#[then("the visiting order is B, A, C")]
fn then_order_is_b_a_c(world: &RouteWorld) {
    let route = world.expect_route();
    let order: Vec<_> = route.iter().map(|stop| stop.order_id.as_str()).collect();
    assert_eq!(order, ["B", "A", "C"]);
}

#[then("the route summary is 22.2 km over 47 minutes")]
#[expect(clippy::float_arithmetic, reason = "distance totals are compared within a tolerance")]
fn then_summary_matches(world: &RouteWorld) {
    let summary = route_summary(&world.expect_route());
    assert!((summary.total_distance_km - 22.2).abs() < 1e-9);
    assert_eq!(summary.total_time_minutes, 47);
}

#[then("the route is empty")]
fn then_route_empty(world: &RouteWorld) {
    assert!(world.expect_route().is_empty());
}

#[then("the route summary is zero")]
fn then_summary_zero(world: &RouteWorld) {
    assert_eq!(route_summary(&world.expect_route()), RouteSummary::default());
}

#[then("the optimisation fails naming the stop")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_fails_naming_stop(world: &RouteWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected InvalidCoordinate error");
    assert!(matches!(
        err,
        OptimiseError::InvalidCoordinate { order_id: Some(ref id), .. } if id == "polar"
    ));
}

#[then("the route contains the out-of-range stop")]
fn then_route_contains_polar(world: &RouteWorld) {
    let route = world.expect_route();
    assert_eq!(route.len(), 1);
    assert!(route.iter().any(|stop| stop.order_id == "polar"));
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 0)]
fn equator_ordering(world: RouteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 1)]
fn empty_batch(world: RouteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 2)]
fn strict_rejects_polar_stop(world: RouteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 3)]
fn permissive_keeps_polar_stop(world: RouteWorld) {
    let _ = world;
}
