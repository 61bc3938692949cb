//! Up-front allocation of trip days to destinations and transit legs.
//!
//! [`Schedule::build`] decides how many days each destination gets and
//! where transit days fall before any itinerary day is generated, so the
//! mapping can be inspected and tested on its own.

use tripwise_core::{DestinationId, TransportMode};

use crate::DistanceMatrix;

/// Tunables for schedule building.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryConfig {
    /// Legs at or below this many travel hours are done without a
    /// dedicated transit day.
    pub same_day_travel_hours: f64,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            same_day_travel_hours: 0.0,
        }
    }
}

/// One block of consecutive days.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ScheduleEntry {
    /// Sightseeing days spent at one destination.
    Stay {
        /// Destination visited.
        destination: DestinationId,
        /// Number of days, always at least one.
        days: u32,
    },
    /// A single day travelling between two destinations.
    Transit {
        /// Departure destination.
        from: DestinationId,
        /// Arrival destination.
        to: DestinationId,
    },
}

impl ScheduleEntry {
    /// Days consumed by this entry.
    #[must_use]
    pub const fn days(&self) -> u32 {
        match self {
            Self::Stay { days, .. } => *days,
            Self::Transit { .. } => 1,
        }
    }
}

/// Ordered day allocation for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Stays and transit days in travel order.
    pub entries: Vec<ScheduleEntry>,
    /// Destinations left out because the trip is too short to reach them.
    pub unscheduled: Vec<DestinationId>,
}

impl Schedule {
    /// Allocate `days` over the destinations of `matrix`.
    ///
    /// Destinations are visited in order. A transit day separates two stays
    /// when the leg takes longer than
    /// [`ItineraryConfig::same_day_travel_hours`] by `mode`. The remaining
    /// days are shared evenly between stays, earlier stays taking any
    /// remainder. Destinations are admitted while each can still get a day
    /// (plus its transit day); the rest are listed in
    /// [`Schedule::unscheduled`].
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripwise_core::{Destination, TransportMode};
    /// use tripwise_planner::{DistanceMatrix, ItineraryConfig, Schedule, ScheduleEntry};
    ///
    /// let matrix = DistanceMatrix::from_destinations(vec![
    ///     Destination::new("a", "A", Coord { x: 0.0, y: 0.0 }, Vec::new()),
    ///     Destination::new("b", "B", Coord { x: 3.0, y: 0.0 }, Vec::new()),
    /// ]);
    /// let schedule = Schedule::build(&matrix, TransportMode::Train, 5, &ItineraryConfig::default());
    /// assert_eq!(schedule.entries.len(), 3);
    /// assert!(matches!(schedule.entries[1], ScheduleEntry::Transit { .. }));
    /// assert_eq!(schedule.total_days(), 5);
    /// ```
    #[must_use]
    pub fn build(
        matrix: &DistanceMatrix,
        mode: TransportMode,
        days: u32,
        config: &ItineraryConfig,
    ) -> Self {
        let ids: Vec<&DestinationId> = matrix.destinations.iter().map(|d| &d.id).collect();
        let Some((first, rest)) = ids.split_first() else {
            return Self::default();
        };
        if days == 0 {
            return Self {
                entries: Vec::new(),
                unscheduled: ids.iter().map(|id| (*id).clone()).collect(),
            };
        }

        let needs_transit: Vec<bool> = matrix
            .segments
            .iter()
            .map(|segment| segment.travel_hours(mode) > config.same_day_travel_hours)
            .collect();

        // Admit destinations in order while each still fits.
        let mut used: u32 = 1;
        let mut admitted: Vec<(&DestinationId, bool)> = vec![(first, false)];
        for (id, transit) in rest.iter().zip(needs_transit.iter().copied()) {
            let cost = 1 + u32::from(transit);
            if used + cost > days {
                break;
            }
            used += cost;
            admitted.push((id, transit));
        }

        let stays = u32::try_from(admitted.len()).unwrap_or(u32::MAX);
        let transit_days: u32 = admitted.iter().map(|(_, transit)| u32::from(*transit)).sum();
        let sightseeing = days - transit_days;
        let base = sightseeing.checked_div(stays).unwrap_or(0);
        let extra = sightseeing.checked_rem(stays).unwrap_or(0);

        let mut entries = Vec::with_capacity(admitted.len() * 2);
        let mut previous: Option<&DestinationId> = None;
        for (index, (id, transit)) in (0_u32..).zip(admitted.iter().copied()) {
            if transit && let Some(from) = previous {
                entries.push(ScheduleEntry::Transit {
                    from: from.clone(),
                    to: id.clone(),
                });
            }
            entries.push(ScheduleEntry::Stay {
                destination: id.clone(),
                days: base + u32::from(index < extra),
            });
            previous = Some(id);
        }

        let unscheduled: Vec<DestinationId> = ids
            .iter()
            .skip(admitted.len())
            .map(|id| (*id).clone())
            .collect();
        if !unscheduled.is_empty() {
            log::warn!(
                "{} of {} destinations do not fit in {days} days",
                unscheduled.len(),
                ids.len()
            );
        }
        log::debug!(
            "scheduled {stays} stays and {transit_days} transit days over {days} days by {mode}"
        );

        Self {
            entries,
            unscheduled,
        }
    }

    /// Total days covered by the entries.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.entries.iter().map(ScheduleEntry::days).sum()
    }

    /// Number of transit entries.
    #[must_use]
    pub fn transit_days(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ScheduleEntry::Transit { .. }))
            .count()
    }
}
