//! Property-based tests for schedules and itineraries.
//!
//! # Invariants tested
//!
//! - **Segment count:** `N` destinations give `N - 1` legs.
//! - **Day budget:** schedules cover exactly the requested days and the
//!   itinerary has exactly that many entries.
//! - **Contiguity:** day numbers and dates have no gaps.
//! - **Transit shape:** a transit day is always followed by a stay day and
//!   every destination gets at least one day or is reported unscheduled.
//! - **Determinism:** equal seeds give equal premium itineraries.

use chrono::{Days, NaiveDate};
use geo::Coord;
use proptest::prelude::*;
use tripwise_core::{Destination, TransportMode};
use tripwise_planner::{
    DistanceMatrix, ItineraryConfig, ItineraryGenerator, ItineraryOptions, RandomVisitHints,
    Schedule, ScheduleEntry,
};

fn destinations() -> impl Strategy<Value = Vec<Destination>> {
    prop::collection::vec((-60.0_f64..=60.0, -120.0_f64..=120.0), 1..6).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(index, (y, x))| {
                Destination::new(
                    format!("stop-{index}"),
                    format!("Stop {index}"),
                    Coord { x, y },
                    vec![format!("Sight {index}")],
                )
            })
            .collect()
    })
}

fn mode() -> impl Strategy<Value = TransportMode> {
    prop::sample::select(TransportMode::ALL.to_vec())
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn one_segment_per_consecutive_pair(stops in destinations()) {
        let count = stops.len();
        let matrix = DistanceMatrix::from_destinations(stops);
        prop_assert_eq!(matrix.segments.len(), count - 1);
    }

    #[test]
    fn schedules_cover_the_requested_days(
        stops in destinations(),
        mode in mode(),
        days in 1_u32..=40,
        threshold in 0.0_f64..12.0,
    ) {
        let count = stops.len();
        let matrix = DistanceMatrix::from_destinations(stops);
        let config = ItineraryConfig { same_day_travel_hours: threshold };
        let schedule = Schedule::build(&matrix, mode, days, &config);

        prop_assert_eq!(schedule.total_days(), days);
        let stays = schedule
            .entries
            .iter()
            .filter(|entry| matches!(entry, ScheduleEntry::Stay { .. }))
            .count();
        prop_assert_eq!(stays + schedule.unscheduled.len(), count);
        for entry in &schedule.entries {
            prop_assert!(entry.days() >= 1);
        }
    }

    #[test]
    fn itineraries_are_contiguous_and_exact(
        stops in destinations(),
        mode in mode(),
        days in 1_u32..=40,
        seed in any::<u64>(),
    ) {
        let matrix = DistanceMatrix::from_destinations(stops);
        let options = ItineraryOptions { mode, days, start_date: start_date(), premium: true };
        let itinerary = ItineraryGenerator::default().generate(
            &matrix,
            &options,
            &mut RandomVisitHints::seeded(seed),
        );

        prop_assert_eq!(itinerary.len(), usize::try_from(days).expect("small day count"));
        for (offset, day) in (0_u32..).zip(&itinerary) {
            prop_assert_eq!(day.day_number, offset + 1);
            let expected = start_date()
                .checked_add_days(Days::new(u64::from(offset)))
                .expect("date in range");
            prop_assert_eq!(day.date, expected);
        }
        for pair in itinerary.windows(2) {
            if let [current, next] = pair {
                prop_assert!(!(current.is_transit_day() && next.is_transit_day()));
            }
        }
        if let Some(last) = itinerary.last() {
            prop_assert!(!last.is_transit_day());
        }
    }

    #[test]
    fn equal_seeds_give_equal_itineraries(
        stops in destinations(),
        mode in mode(),
        days in 1_u32..=20,
        seed in any::<u64>(),
    ) {
        let matrix = DistanceMatrix::from_destinations(stops);
        let options = ItineraryOptions { mode, days, start_date: start_date(), premium: true };
        let generator = ItineraryGenerator::default();
        let first = generator.generate(&matrix, &options, &mut RandomVisitHints::seeded(seed));
        let second = generator.generate(&matrix, &options, &mut RandomVisitHints::seeded(seed));
        prop_assert_eq!(first, second);
    }
}
