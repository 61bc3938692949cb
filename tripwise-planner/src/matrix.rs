//! Distance matrix over an ordered list of destinations.
//!
//! Only consecutive legs are measured: a trip visits destinations in the
//! order given, so `N` destinations produce `N - 1` segments.

use std::collections::BTreeMap;

use tripwise_core::{
    Destination, DestinationCatalogue, DestinationId, TransportMode, haversine_km,
};

/// One leg between two consecutive destinations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceSegment {
    /// Departure destination.
    pub from_id: DestinationId,
    /// Arrival destination.
    pub to_id: DestinationId,
    /// Departure display name.
    pub from_name: String,
    /// Arrival display name.
    pub to_name: String,
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// Estimated hours for every transport mode.
    pub travel_times: BTreeMap<TransportMode, f64>,
}

impl DistanceSegment {
    /// Measure the leg from `from` to `to`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripwise_core::{Destination, TransportMode};
    /// use tripwise_planner::DistanceSegment;
    ///
    /// let a = Destination::new("a", "A", Coord { x: 0.0, y: 0.0 }, Vec::new());
    /// let b = Destination::new("b", "B", Coord { x: 1.0, y: 0.0 }, Vec::new());
    /// let segment = DistanceSegment::between(&a, &b);
    /// assert!((segment.distance_km - 111.19).abs() < 0.01);
    /// assert!(segment.travel_hours(TransportMode::Flight) < segment.travel_hours(TransportMode::Bus));
    /// ```
    #[must_use]
    pub fn between(from: &Destination, to: &Destination) -> Self {
        let distance_km = haversine_km(from.location, to.location);
        let travel_times = TransportMode::ALL
            .into_iter()
            .map(|mode| (mode, mode.travel_hours(distance_km)))
            .collect();
        Self {
            from_id: from.id.clone(),
            to_id: to.id.clone(),
            from_name: from.name.clone(),
            to_name: to.name.clone(),
            distance_km,
            travel_times,
        }
    }

    /// Travel hours for `mode`.
    ///
    /// Falls back to the mode formula if the map was built without the mode,
    /// which only happens for hand-assembled segments.
    #[must_use]
    pub fn travel_hours(&self, mode: TransportMode) -> f64 {
        self.travel_times
            .get(&mode)
            .copied()
            .unwrap_or_else(|| mode.travel_hours(self.distance_km))
    }
}

/// Resolved destinations together with the legs between them.
///
/// Identifiers the catalogue could not resolve are kept in `skipped` so
/// callers can surface them rather than lose them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    /// Resolved destinations in visiting order.
    pub destinations: Vec<Destination>,
    /// Consecutive legs, one fewer than `destinations`.
    pub segments: Vec<DistanceSegment>,
    /// Requested identifiers with no catalogue entry.
    pub skipped: Vec<DestinationId>,
}

impl DistanceMatrix {
    /// Resolve `ids` through `catalogue` and measure every consecutive leg.
    ///
    /// Unknown identifiers are filtered out with a warning and listed in
    /// [`DistanceMatrix::skipped`]; the legs join the remaining
    /// destinations.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripwise_core::{Destination, DestinationId, MemoryCatalogue};
    /// use tripwise_planner::DistanceMatrix;
    ///
    /// # fn main() -> Result<(), tripwise_core::CatalogueError> {
    /// let catalogue = MemoryCatalogue::new(vec![
    ///     Destination::new("a", "A", Coord { x: 0.0, y: 0.0 }, Vec::new()),
    ///     Destination::new("b", "B", Coord { x: 1.0, y: 1.0 }, Vec::new()),
    /// ])?;
    /// let ids = ["a", "missing", "b"].map(DestinationId::from);
    /// let matrix = DistanceMatrix::build(&catalogue, &ids);
    /// assert_eq!(matrix.segments.len(), 1);
    /// assert_eq!(matrix.skipped, vec![DestinationId::from("missing")]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn build<C>(catalogue: &C, ids: &[DestinationId]) -> Self
    where
        C: DestinationCatalogue + ?Sized,
    {
        let resolution = catalogue.resolve(ids);
        for id in &resolution.missing {
            log::warn!("skipping unknown destination '{id}' while building distance matrix");
        }
        let mut matrix = Self::from_destinations(resolution.found);
        matrix.skipped = resolution.missing;
        matrix
    }

    /// Measure legs between already resolved destinations.
    #[must_use]
    pub fn from_destinations(destinations: Vec<Destination>) -> Self {
        let segments = destinations
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(DistanceSegment::between(from, to)),
                _ => None,
            })
            .collect();
        Self {
            destinations,
            segments,
            skipped: Vec::new(),
        }
    }

    /// Number of resolved destinations.
    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// Sum of all leg distances.
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.segments.iter().map(|s| s.distance_km).sum()
    }

    /// Sum of all leg travel hours for `mode`.
    #[must_use]
    pub fn total_travel_hours(&self, mode: TransportMode) -> f64 {
        self.segments.iter().map(|s| s.travel_hours(mode)).sum()
    }

    /// Look up a resolved destination by identifier.
    #[must_use]
    pub fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == *id)
    }

    /// Look up the leg from `from` to `to`.
    #[must_use]
    pub fn segment_between(
        &self,
        from: &DestinationId,
        to: &DestinationId,
    ) -> Option<&DistanceSegment> {
        self.segments
            .iter()
            .find(|s| s.from_id == *from && s.to_id == *to)
    }
}
