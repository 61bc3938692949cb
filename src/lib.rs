//! Facade crate for the Tripwise trip planning engine.
//!
//! This crate re-exports the domain types from `tripwise-core` and the
//! planning pipeline from `tripwise-planner`.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use geo::Coord;
//! use tripwise::{
//!     Destination, ItineraryConfig, MemoryCatalogue, RandomVisitHints, TransportMode,
//!     TripRequest, plan_trip,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalogue = MemoryCatalogue::new(vec![
//!     Destination::new("london", "London", Coord { x: -0.1278, y: 51.5074 }, Vec::new()),
//!     Destination::new("rome", "Rome", Coord { x: 12.4964, y: 41.9028 }, Vec::new()),
//! ])?;
//! let request = TripRequest {
//!     destinations: vec!["london".into(), "rome".into()],
//!     mode: None,
//!     days: 5,
//!     start_date: NaiveDate::from_ymd_opt(2026, 10, 3).ok_or("bad date")?,
//!     premium: false,
//!     seed: Some(1),
//! };
//! let plan = plan_trip(
//!     &catalogue,
//!     &request,
//!     &ItineraryConfig::default(),
//!     &mut RandomVisitHints::seeded(1),
//! )?;
//! assert_eq!(plan.mode, TransportMode::Flight);
//! assert_eq!(plan.itinerary.len(), 5);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use tripwise_core::{
    CatalogueError, Destination, DestinationCatalogue, DestinationId, EARTH_RADIUS_KM,
    MAX_TRIP_DAYS, MemoryCatalogue, ModeProfile, Resolution, TransportMode, TripRequest,
    TripRequestValidationError, haversine_km,
};
pub use tripwise_planner::{
    Activity, ActivitySlot, DistanceMatrix, DistanceSegment, FeasibilityResult, FixedVisitHint,
    ItineraryConfig, ItineraryDay, ItineraryGenerator, ItineraryOptions, RandomVisitHints,
    RestStop, Schedule, ScheduleEntry, SegmentBreakdown, TRAVEL_HOURS_PER_DAY, TransitDetails,
    TransportOption, TransportRecommendation, TripPlan, VisitHint, VisitHintSource,
    check_feasibility, compare_transport, plan_trip, premium_advantages, recommend_mode,
    recommend_transport,
};

#[cfg(feature = "test-support")]
pub use tripwise_core::test_support;
