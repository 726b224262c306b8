//! Property-based tests for the nearest-neighbour optimiser.
//!
//! # Invariants tested
//!
//! - **Permutation:** the output order ids are exactly the input order ids.
//! - **Monotonic ETA:** cumulative ETA never decreases along the route.
//! - **Greediness:** every step picks a closest remaining stop, with ties
//!   going to the earliest input.
//! - **Determinism:** repeated runs produce identical routes.
//! - **ETA accounting:** each ETA step is `ceil(leg_km * 2)` minutes.


use courier_core::{RouteOptimiser, route_summary};
use courier_optimiser_nn::NearestNeighbourOptimiser;
use proptest::prelude::*;

use proptest_support::{
    assert_greedy_choices, grid_stop_set_strategy, start_strategy, stop_set_strategy,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the route is a permutation of the input stops.
    #[test]
    fn route_is_a_permutation(start in start_strategy(), stops in stop_set_strategy(20)) {
        let route = NearestNeighbourOptimiser::new()
            .optimise(start, &stops)
            .expect("in-range input should optimise");

        let mut expected: Vec<_> = stops.iter().map(|stop| stop.order_id.clone()).collect();
        let mut actual: Vec<_> = route.iter().map(|stop| stop.order_id.clone()).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    /// Property: cumulative ETA never decreases and each step adds the
    /// rounded-up leg time.
    #[test]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "ETA steps are compared with the rounded-up leg time in minutes"
    )]
    fn eta_is_monotonic_and_accumulates_legs(
        start in start_strategy(),
        stops in stop_set_strategy(20),
    ) {
        let route = NearestNeighbourOptimiser::new()
            .optimise(start, &stops)
            .expect("in-range input should optimise");

        let mut previous = 0_u64;
        for visit in &route {
            prop_assert!(visit.cumulative_eta_minutes >= previous);
            let step = visit.cumulative_eta_minutes - previous;
            let expected = (visit.leg_distance_km * 2.0).ceil();
            prop_assert_eq!(step as f64, expected);
            previous = visit.cumulative_eta_minutes;
        }
        prop_assert_eq!(route_summary(&route).total_time_minutes, previous);
    }

    /// Property: each choice is nearest among free-form stops.
    #[test]
    fn choices_are_greedy(start in start_strategy(), stops in stop_set_strategy(15)) {
        let route = NearestNeighbourOptimiser::new()
            .optimise(start, &stops)
            .expect("in-range input should optimise");
        assert_greedy_choices(start, &stops, &route)?;
    }

    /// Property: grid-snapped stops, full of exact ties, still follow the
    /// greedy rule with input-order tie-breaking.
    #[test]
    fn grid_ties_break_by_input_order(stops in grid_stop_set_strategy(15)) {
        let start = courier_core::coordinate(0.0, 0.0);
        let route = NearestNeighbourOptimiser::new()
            .optimise(start, &stops)
            .expect("in-range input should optimise");
        assert_greedy_choices(start, &stops, &route)?;
    }

    /// Property: identical input yields identical output.
    #[test]
    fn optimisation_is_deterministic(start in start_strategy(), stops in stop_set_strategy(20)) {
        let optimiser = NearestNeighbourOptimiser::new();
        let first = optimiser.optimise(start, &stops).expect("first run");
        let second = optimiser.optimise(start, &stops).expect("second run");
        prop_assert_eq!(first, second);
    }
}
