//! Side-by-side figures for every transport mode.

use tripwise_core::TransportMode;

use crate::DistanceMatrix;

/// Time and cost of doing the whole trip with one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportOption {
    /// Mode being described.
    pub mode: TransportMode,
    /// Total travel hours over every leg.
    pub total_travel_hours: f64,
    /// Estimated cost in euros over every leg.
    pub estimated_cost: f64,
}

/// Describe every mode for `matrix`, fastest first.
///
/// Ties on travel time keep the order of [`TransportMode::ALL`].
///
/// # Examples
/// ```
/// use tripwise_core::TransportMode;
/// use tripwise_planner::{DistanceMatrix, compare_transport};
///
/// let options = compare_transport(&DistanceMatrix::default());
/// assert_eq!(options.len(), TransportMode::ALL.len());
/// assert!(options.iter().all(|o| o.total_travel_hours == 0.0));
/// ```
#[must_use]
pub fn compare_transport(matrix: &DistanceMatrix) -> Vec<TransportOption> {
    let total_distance_km = matrix.total_distance_km();
    let mut options: Vec<TransportOption> = TransportMode::ALL
        .into_iter()
        .map(|mode| TransportOption {
            mode,
            total_travel_hours: matrix.total_travel_hours(mode),
            estimated_cost: mode.estimated_cost(total_distance_km),
        })
        .collect();
    options.sort_by(|lhs, rhs| lhs.total_travel_hours.total_cmp(&rhs.total_travel_hours));
    options
}
