//! Check whether a trip fits in the days available.
//!
//! A trip needs one sightseeing day per destination plus enough travel days
//! to cover the total travel time, where one travel day holds
//! [`TRAVEL_HOURS_PER_DAY`] hours.

use tripwise_core::{DestinationId, TransportMode};

use crate::DistanceMatrix;

/// Hours of travel that fit in one day.
pub const TRAVEL_HOURS_PER_DAY: f64 = 8.0;

/// Display breakdown of a single leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentBreakdown {
    /// Departure destination.
    pub from_id: DestinationId,
    /// Arrival destination.
    pub to_id: DestinationId,
    /// Departure display name.
    pub from_name: String,
    /// Arrival display name.
    pub to_name: String,
    /// Leg distance in kilometres.
    pub distance_km: f64,
    /// Leg travel hours for the checked mode.
    pub travel_hours: f64,
}

/// Outcome of [`check_feasibility`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeasibilityResult {
    /// Whether the available days cover the days needed.
    pub feasible: bool,
    /// Travel days plus one day per destination.
    pub days_needed: u32,
    /// Missing days, present only when the trip is infeasible.
    pub days_short: Option<u32>,
    /// Total distance over every leg.
    pub total_distance_km: f64,
    /// Total travel hours for the checked mode.
    pub total_travel_hours: f64,
    /// Per-leg figures in visiting order.
    pub segments: Vec<SegmentBreakdown>,
}

/// Compare the days needed for `matrix` by `mode` against `days`.
///
/// `days_needed = ceil(total_travel_hours / 8) + destination_count`. With
/// fewer than two destinations there are no legs and the trip needs one
/// day per destination.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{Destination, TransportMode};
/// use tripwise_planner::{DistanceMatrix, check_feasibility};
///
/// let matrix = DistanceMatrix::from_destinations(vec![
///     Destination::new("a", "A", Coord { x: 0.0, y: 0.0 }, Vec::new()),
///     Destination::new("b", "B", Coord { x: 4.5, y: 0.0 }, Vec::new()),
/// ]);
/// let result = check_feasibility(&matrix, TransportMode::Car, 3);
/// assert_eq!(result.days_needed, 4);
/// assert!(!result.feasible);
/// assert_eq!(result.days_short, Some(1));
/// ```
#[must_use]
pub fn check_feasibility(
    matrix: &DistanceMatrix,
    mode: TransportMode,
    days: u32,
) -> FeasibilityResult {
    let total_travel_hours = matrix.total_travel_hours(mode);
    let destination_count = u32::try_from(matrix.destination_count()).unwrap_or(u32::MAX);
    let days_needed = travel_days(total_travel_hours).saturating_add(destination_count);
    let feasible = days >= days_needed;
    let days_short = (!feasible).then(|| days_needed - days);

    let segments = matrix
        .segments
        .iter()
        .map(|segment| SegmentBreakdown {
            from_id: segment.from_id.clone(),
            to_id: segment.to_id.clone(),
            from_name: segment.from_name.clone(),
            to_name: segment.to_name.clone(),
            distance_km: segment.distance_km,
            travel_hours: segment.travel_hours(mode),
        })
        .collect();

    FeasibilityResult {
        feasible,
        days_needed,
        days_short,
        total_distance_km: matrix.total_distance_km(),
        total_travel_hours,
        segments,
    }
}

/// Whole days of travel for `hours`, rounding up.
///
/// Non-finite and negative inputs count as zero days.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the day count is a ceiling over a bounded floating-point estimate"
)]
fn travel_days(hours: f64) -> u32 {
    if !hours.is_finite() || hours <= 0.0 {
        return 0;
    }
    (hours / TRAVEL_HOURS_PER_DAY).ceil() as u32
}
