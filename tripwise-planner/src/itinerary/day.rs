//! Day records produced by the itinerary generator.

use chrono::{NaiveDate, NaiveTime};
use tripwise_core::{DestinationId, TransportMode};

use super::VisitHint;

/// Position of an activity within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ActivitySlot {
    /// Breakfast at the hotel.
    Breakfast,
    /// Morning sightseeing.
    Morning,
    /// Lunch break.
    Lunch,
    /// Afternoon sightseeing.
    Afternoon,
    /// Evening meal.
    Dinner,
    /// Leaving on a transit day.
    Departure,
    /// Break during a transit day.
    RestStop,
    /// Reaching the next destination.
    Arrival,
}

/// A single scheduled item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Slot the activity fills.
    pub slot: ActivitySlot,
    /// Start time.
    pub time: NaiveTime,
    /// Free-text description.
    pub description: String,
    /// Premium visiting hint, if requested.
    pub hint: Option<VisitHint>,
}

/// A break on a transit day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestStop {
    /// Time the break starts.
    pub time: NaiveTime,
    /// Length of the break in minutes.
    pub duration_minutes: u32,
    /// Short label.
    pub label: String,
}

/// Travel details of a transit day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitDetails {
    /// Departure destination.
    pub from_id: DestinationId,
    /// Departure display name.
    pub from_name: String,
    /// Mode used for the leg.
    pub mode: TransportMode,
    /// Leg distance in kilometres.
    pub distance_km: f64,
    /// Estimated hours on the move.
    pub travel_hours: f64,
    /// Departure time.
    pub departure: NaiveTime,
    /// Arrival time, possibly on the following calendar day.
    pub arrival: NaiveTime,
    /// Whether the arrival time falls after midnight.
    pub arrives_next_day: bool,
    /// The two breaks taken during the journey.
    pub rest_stops: [RestStop; 2],
}

/// One calendar day of the trip.
///
/// On transit days `destination_id` names the arrival destination and
/// [`ItineraryDay::transit`] describes the journey.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryDay {
    /// One-based position in the trip.
    pub day_number: u32,
    /// Calendar date.
    pub date: NaiveDate,
    /// Destination for the day.
    pub destination_id: DestinationId,
    /// Display name of the destination.
    pub destination_name: String,
    /// Activities in time order.
    pub activities: Vec<Activity>,
    /// Journey details on transit days.
    pub transit: Option<TransitDetails>,
}

impl ItineraryDay {
    /// Whether the day is spent travelling.
    #[must_use]
    pub const fn is_transit_day(&self) -> bool {
        self.transit.is_some()
    }
}
