//! Behavioural tests for feasibility checks and transport recommendations.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tripwise_core::test_support::sample_catalogue;
use tripwise_core::{DestinationId, TransportMode};
use tripwise_planner::{
    DistanceMatrix, FeasibilityResult, TransportRecommendation, check_feasibility,
    recommend_transport,
};

#[derive(Debug, Default)]
struct TransportWorld {
    destinations: RefCell<Vec<DestinationId>>,
    days: RefCell<u32>,
    recommendation: RefCell<Option<TransportRecommendation>>,
    feasibility: RefCell<Option<FeasibilityResult>>,
}

impl TransportWorld {
    fn matrix(&self) -> DistanceMatrix {
        DistanceMatrix::build(&sample_catalogue(), &self.destinations.borrow())
    }

    fn recommendation(&self) -> TransportRecommendation {
        self.recommendation
            .borrow()
            .clone()
            .expect("recommendation should be recorded before assertions")
    }

    fn feasibility(&self) -> FeasibilityResult {
        self.feasibility
            .borrow()
            .clone()
            .expect("feasibility should be recorded before assertions")
    }
}

#[fixture]
fn world() -> TransportWorld {
    TransportWorld::default()
}

fn strip_quotes(raw: &str) -> &str {
    raw.trim_matches('"')
}

fn parse_mode(raw: &str) -> TransportMode {
    strip_quotes(raw)
        .parse()
        .unwrap_or_else(|err| panic!("unknown mode {raw}: {err}"))
}

#[given("a trip to {ids}")]
fn given_trip(world: &TransportWorld, ids: String) {
    let parsed = strip_quotes(&ids)
        .split(',')
        .map(|id| DestinationId::from(id.trim()))
        .collect();
    world.destinations.replace(parsed);
}

#[given("the trip lasts {days} days")]
fn given_length(world: &TransportWorld, days: u32) {
    world.days.replace(days);
}

#[when("transport is recommended")]
fn when_recommended(world: &TransportWorld) {
    let recommendation = recommend_transport(&world.matrix(), *world.days.borrow(), false);
    world.recommendation.replace(Some(recommendation));
}

#[when("feasibility is checked by {mode}")]
fn when_checked(world: &TransportWorld, mode: String) {
    let result = check_feasibility(&world.matrix(), parse_mode(&mode), *world.days.borrow());
    world.feasibility.replace(Some(result));
}

#[then("{mode} is recommended with {alternative} as the alternative")]
fn then_recommended(world: &TransportWorld, mode: String, alternative: String) {
    let recommendation = world.recommendation();
    assert_eq!(recommendation.recommended, parse_mode(&mode));
    assert_eq!(recommendation.alternative, parse_mode(&alternative));
}

#[then("the recommendation is realistic")]
fn then_realistic(world: &TransportWorld) {
    assert!(world.recommendation().is_realistic);
}

#[then("the trip is not feasible")]
fn then_infeasible(world: &TransportWorld) {
    assert!(!world.feasibility().feasible);
}

#[then("the trip is feasible")]
fn then_feasible(world: &TransportWorld) {
    let result = world.feasibility();
    assert!(result.feasible);
    assert_eq!(result.days_short, None);
}

#[then("it is {days} days short")]
fn then_days_short(world: &TransportWorld, days: u32) {
    assert_eq!(world.feasibility().days_short, Some(days));
}

#[scenario(path = "tests/features/transport.feature", index = 0)]
fn long_haul_flight(world: TransportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/transport.feature", index = 1)]
fn road_trip(world: TransportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/transport.feature", index = 2)]
fn too_few_days(world: TransportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/transport.feature", index = 3)]
fn enough_days(world: TransportWorld) {
    let _ = world;
}
