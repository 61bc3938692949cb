//! Day-by-day itineraries.
//!
//! [`ItineraryGenerator`] turns a [`Schedule`](crate::Schedule) into dated
//! [`ItineraryDay`] records. Sightseeing days follow a fixed five-slot
//! plan; transit days carry departure and arrival times with two rest
//! stops. Premium itineraries annotate sightseeing slots with hints drawn
//! from a [`VisitHintSource`].

mod day;
mod generator;
mod hints;

pub use day::{Activity, ActivitySlot, ItineraryDay, RestStop, TransitDetails};
pub use generator::{ItineraryGenerator, ItineraryOptions};
pub use hints::{FixedVisitHint, RandomVisitHints, VisitHint, VisitHintSource};
