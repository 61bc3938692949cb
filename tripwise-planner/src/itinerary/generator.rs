//! Walks a schedule and expands it into dated days.

use chrono::{Days, NaiveDate, NaiveTime, TimeDelta};
use tripwise_core::{Destination, DestinationId, TransportMode};

use super::{Activity, ActivitySlot, ItineraryDay, RestStop, TransitDetails, VisitHintSource};
use crate::{DistanceMatrix, ItineraryConfig, Schedule, ScheduleEntry};

const SECONDS_PER_HOUR: f64 = 3600.0;
const REST_STOP_MINUTES: u32 = 30;

/// Per-trip inputs of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryOptions {
    /// Mode used on transit days.
    pub mode: TransportMode,
    /// Number of days to produce.
    pub days: u32,
    /// Date of day one.
    pub start_date: NaiveDate,
    /// Whether to annotate sightseeing slots with visit hints.
    pub premium: bool,
}

/// Builds itineraries from a distance matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItineraryGenerator {
    config: ItineraryConfig,
}

impl ItineraryGenerator {
    /// Create a generator with `config`.
    #[must_use]
    pub const fn new(config: ItineraryConfig) -> Self {
        Self { config }
    }

    /// Configuration used for schedule building.
    #[must_use]
    pub const fn config(&self) -> &ItineraryConfig {
        &self.config
    }

    /// Build the schedule for `matrix` and expand it into days.
    ///
    /// The result has exactly `options.days` entries unless the matrix is
    /// empty, in which case it is empty.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use geo::Coord;
    /// use tripwise_core::{Destination, TransportMode};
    /// use tripwise_planner::{
    ///     DistanceMatrix, ItineraryGenerator, ItineraryOptions, RandomVisitHints,
    /// };
    ///
    /// let matrix = DistanceMatrix::from_destinations(vec![
    ///     Destination::new("a", "A", Coord { x: 0.0, y: 0.0 }, Vec::new()),
    ///     Destination::new("b", "B", Coord { x: 2.0, y: 0.0 }, Vec::new()),
    /// ]);
    /// let options = ItineraryOptions {
    ///     mode: TransportMode::Car,
    ///     days: 4,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
    ///     premium: false,
    /// };
    /// let days = ItineraryGenerator::default().generate(
    ///     &matrix,
    ///     &options,
    ///     &mut RandomVisitHints::seeded(1),
    /// );
    /// assert_eq!(days.len(), 4);
    /// assert_eq!(days.iter().filter(|d| d.is_transit_day()).count(), 1);
    /// ```
    #[must_use]
    pub fn generate<H>(
        &self,
        matrix: &DistanceMatrix,
        options: &ItineraryOptions,
        hints: &mut H,
    ) -> Vec<ItineraryDay>
    where
        H: VisitHintSource + ?Sized,
    {
        let schedule = Schedule::build(matrix, options.mode, options.days, &self.config);
        Self::generate_from_schedule(matrix, &schedule, options, hints)
    }

    /// Expand an existing `schedule` into days.
    ///
    /// Destination names and attractions are looked up in `matrix`; ids it
    /// does not know are shown by identifier with free time only. Output
    /// stops after `options.days` days.
    #[must_use]
    pub fn generate_from_schedule<H>(
        matrix: &DistanceMatrix,
        schedule: &Schedule,
        options: &ItineraryOptions,
        hints: &mut H,
    ) -> Vec<ItineraryDay>
    where
        H: VisitHintSource + ?Sized,
    {
        let mut walk = Walk {
            matrix,
            options,
            days: Vec::with_capacity(
                usize::try_from(schedule.total_days().min(options.days)).unwrap_or(0),
            ),
        };
        for entry in &schedule.entries {
            let more = match entry {
                ScheduleEntry::Stay { destination, days } => {
                    walk.stay(destination, *days, &mut *hints)
                }
                ScheduleEntry::Transit { from, to } => walk.transit(from, to),
            };
            if !more {
                break;
            }
        }
        walk.days
    }
}

/// Generator state while walking a schedule.
struct Walk<'a> {
    matrix: &'a DistanceMatrix,
    options: &'a ItineraryOptions,
    days: Vec<ItineraryDay>,
}

impl Walk<'_> {
    /// Next day number and date, or `None` once the trip is over.
    fn next_slot(&self) -> Option<(u32, NaiveDate)> {
        let offset = u32::try_from(self.days.len()).ok()?;
        if offset >= self.options.days {
            return None;
        }
        let Some(date) = self
            .options
            .start_date
            .checked_add_days(Days::new(u64::from(offset)))
        else {
            log::warn!("itinerary stopped at day {offset}: date out of range");
            return None;
        };
        Some((offset + 1, date))
    }

    fn stay<H>(&mut self, id: &DestinationId, count: u32, hints: &mut H) -> bool
    where
        H: VisitHintSource + ?Sized,
    {
        let destination = self.matrix.destination(id);
        let name = destination.map_or_else(|| id.as_str().to_owned(), |d| d.name.clone());
        for visit in 0..count {
            let Some((day_number, date)) = self.next_slot() else {
                return false;
            };
            let activities = sightseeing(destination, &name, visit, self.options.premium, hints);
            self.days.push(ItineraryDay {
                day_number,
                date,
                destination_id: id.clone(),
                destination_name: name.clone(),
                activities,
                transit: None,
            });
        }
        true
    }

    fn transit(&mut self, from: &DestinationId, to: &DestinationId) -> bool {
        let Some((day_number, date)) = self.next_slot() else {
            return false;
        };
        let mode = self.options.mode;
        let segment = self.matrix.segment_between(from, to);
        let (distance_km, travel_hours) =
            segment.map_or((0.0, 0.0), |s| (s.distance_km, s.travel_hours(mode)));
        let from_name = self.display_name(from);
        let to_name = self.display_name(to);

        let departure = clock(8, 0);
        let (arrival, wrapped) = departure.overflowing_add_signed(hours_to_delta(travel_hours));
        let rest_stops = [1, 2].map(|third| RestStop {
            time: departure
                .overflowing_add_signed(hours_to_delta(fraction_of(travel_hours, third)))
                .0,
            duration_minutes: REST_STOP_MINUTES,
            label: format!("Rest stop {third}"),
        });

        let mut activities = vec![Activity {
            slot: ActivitySlot::Departure,
            time: departure,
            description: format!("Depart {from_name} by {mode}"),
            hint: None,
        }];
        activities.extend(rest_stops.iter().map(|stop| Activity {
            slot: ActivitySlot::RestStop,
            time: stop.time,
            description: format!("{} ({} min)", stop.label, stop.duration_minutes),
            hint: None,
        }));
        activities.push(Activity {
            slot: ActivitySlot::Arrival,
            time: arrival,
            description: format!("Arrive in {to_name} and check in"),
            hint: None,
        });

        self.days.push(ItineraryDay {
            day_number,
            date,
            destination_id: to.clone(),
            destination_name: to_name,
            activities,
            transit: Some(TransitDetails {
                from_id: from.clone(),
                from_name,
                mode,
                distance_km,
                travel_hours,
                departure,
                arrival,
                arrives_next_day: wrapped != 0,
                rest_stops,
            }),
        });
        true
    }

    fn display_name(&self, id: &DestinationId) -> String {
        self.matrix
            .destination(id)
            .map_or_else(|| id.as_str().to_owned(), |d| d.name.clone())
    }
}

/// The five-slot plan for one sightseeing day.
///
/// Attractions rotate so that consecutive days at the same destination see
/// different sights.
fn sightseeing<H>(
    destination: Option<&Destination>,
    name: &str,
    visit: u32,
    premium: bool,
    hints: &mut H,
) -> Vec<Activity>
where
    H: VisitHintSource + ?Sized,
{
    let first = usize::try_from(visit).unwrap_or(0).saturating_mul(2);
    let mut sight = |slot: ActivitySlot, hour: u32, index: usize| {
        let description = attraction(destination, index)
            .map_or_else(|| format!("Free time to explore {name}"), |a| format!("Visit {a}"));
        let hint = premium.then(|| hints.hint(name, &description));
        Activity {
            slot,
            time: clock(hour, 0),
            description,
            hint,
        }
    };
    let morning = sight(ActivitySlot::Morning, 10, first);
    let afternoon = sight(ActivitySlot::Afternoon, 15, first.saturating_add(1));

    vec![
        meal(ActivitySlot::Breakfast, 8, format!("Breakfast in {name}")),
        morning,
        meal(ActivitySlot::Lunch, 13, "Lunch at a local restaurant".to_owned()),
        afternoon,
        meal(ActivitySlot::Dinner, 19, format!("Dinner in {name}")),
    ]
}

fn meal(slot: ActivitySlot, hour: u32, description: String) -> Activity {
    Activity {
        slot,
        time: clock(hour, 0),
        description,
        hint: None,
    }
}

fn attraction(destination: Option<&Destination>, index: usize) -> Option<&str> {
    let attractions = &destination?.attractions;
    let wrapped = index.checked_rem(attractions.len())?;
    attractions.get(wrapped).map(String::as_str)
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

#[expect(
    clippy::float_arithmetic,
    reason = "rest stops sit at thirds of the journey"
)]
fn fraction_of(hours: f64, thirds: u8) -> f64 {
    hours * f64::from(thirds) / 3.0
}

/// Convert travel hours into a whole-second offset.
///
/// Non-finite and negative inputs give a zero offset.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "travel estimates are rounded to whole seconds"
)]
fn hours_to_delta(hours: f64) -> TimeDelta {
    if !hours.is_finite() || hours <= 0.0 {
        return TimeDelta::zero();
    }
    let seconds = (hours * SECONDS_PER_HOUR).round() as i64;
    TimeDelta::try_seconds(seconds).unwrap_or_else(TimeDelta::zero)
}
