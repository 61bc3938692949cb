//! Core domain types for the Tripwise planning engine.
//!
//! The crate holds the reference data the planner works over: destinations
//! and the catalogue that resolves them, transport modes with their
//! canonical speed and cost constants, the Haversine distance calculator and
//! the validated [`TripRequest`] handed in by callers.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
mod destination;
mod distance;
mod request;
mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalogue::{CatalogueError, DestinationCatalogue, MemoryCatalogue, Resolution};
pub use destination::{Destination, DestinationId};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use request::{MAX_TRIP_DAYS, TripRequest, TripRequestValidationError};
pub use transport::{ModeProfile, TransportMode};
