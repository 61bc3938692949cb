//! Trip planning computations for Tripwise.
//!
//! The pipeline runs over an ordered list of destinations:
//!
//! 1. [`DistanceMatrix::build`] resolves destinations and measures each
//!    consecutive leg for every transport mode.
//! 2. [`check_feasibility`] compares the days needed with the days
//!    available, and [`recommend_transport`] picks a default mode.
//! 3. [`Schedule::build`] allocates days to stays and transit legs.
//! 4. [`ItineraryGenerator`] expands the schedule into dated days.
//!
//! [`plan_trip`] runs every step for a validated
//! [`TripRequest`](tripwise_core::TripRequest).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compare;
mod feasibility;
mod itinerary;
mod matrix;
mod plan;
mod recommend;
mod schedule;

pub use compare::{TransportOption, compare_transport};
pub use feasibility::{FeasibilityResult, SegmentBreakdown, TRAVEL_HOURS_PER_DAY, check_feasibility};
pub use itinerary::{
    Activity, ActivitySlot, FixedVisitHint, ItineraryDay, ItineraryGenerator, ItineraryOptions,
    RandomVisitHints, RestStop, TransitDetails, VisitHint, VisitHintSource,
};
pub use matrix::{DistanceMatrix, DistanceSegment};
pub use plan::{TripPlan, plan_trip};
pub use recommend::{
    TransportRecommendation, premium_advantages, recommend_mode, recommend_transport,
};
pub use schedule::{ItineraryConfig, Schedule, ScheduleEntry};
