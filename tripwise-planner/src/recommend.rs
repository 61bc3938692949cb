//! Default transport mode for a trip.
//!
//! The decision is a short rule table over total distance and trip length;
//! the first matching rule wins:
//!
//! | Rule                   | Mode   |
//! |------------------------|--------|
//! | distance > 1000 km     | flight |
//! | distance > 300 km      | train  |
//! | days > 7               | car    |
//! | otherwise              | bus    |

use tripwise_core::TransportMode;

use crate::DistanceMatrix;
use crate::feasibility::TRAVEL_HOURS_PER_DAY;

const FLIGHT_THRESHOLD_KM: f64 = 1000.0;
const TRAIN_THRESHOLD_KM: f64 = 300.0;
const ROAD_TRIP_MIN_DAYS: u32 = 7;

/// Recommended transport with the figures behind it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportRecommendation {
    /// Mode picked by the rule table.
    pub recommended: TransportMode,
    /// Fallback suggestion shown next to the recommendation.
    pub alternative: TransportMode,
    /// Human-readable explanation of the winning rule.
    pub reasoning: String,
    /// Total distance over every leg.
    pub total_distance_km: f64,
    /// Total travel hours for the recommended mode.
    pub total_travel_hours: f64,
    /// Daytime hours left for sightseeing, `days * 8 - travel hours`.
    pub time_for_sightseeing_hours: f64,
    /// Whether any sightseeing time is left.
    pub is_realistic: bool,
    /// Premium-only perks of the recommended mode.
    pub premium_advantages: Option<Vec<String>>,
}

/// Apply the rule table to a total distance and trip length.
///
/// # Examples
/// ```
/// use tripwise_core::TransportMode;
/// use tripwise_planner::recommend_mode;
///
/// assert_eq!(recommend_mode(1200.0, 5), TransportMode::Flight);
/// assert_eq!(recommend_mode(1000.0, 5), TransportMode::Train);
/// assert_eq!(recommend_mode(150.0, 9), TransportMode::Car);
/// assert_eq!(recommend_mode(150.0, 7), TransportMode::Bus);
/// ```
#[must_use]
pub fn recommend_mode(total_distance_km: f64, days: u32) -> TransportMode {
    if total_distance_km > FLIGHT_THRESHOLD_KM {
        TransportMode::Flight
    } else if total_distance_km > TRAIN_THRESHOLD_KM {
        TransportMode::Train
    } else if days > ROAD_TRIP_MIN_DAYS {
        TransportMode::Car
    } else {
        TransportMode::Bus
    }
}

/// Recommend a transport mode for the trip described by `matrix`.
///
/// `premium` only controls whether [`TransportRecommendation::premium_advantages`]
/// is filled in; the choice of mode is the same for every traveller.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "sightseeing time is derived from floating-point travel hours"
)]
pub fn recommend_transport(
    matrix: &DistanceMatrix,
    days: u32,
    premium: bool,
) -> TransportRecommendation {
    let total_distance_km = matrix.total_distance_km();
    let recommended = recommend_mode(total_distance_km, days);
    let total_travel_hours = matrix.total_travel_hours(recommended);
    let time_for_sightseeing_hours = f64::from(days) * TRAVEL_HOURS_PER_DAY - total_travel_hours;

    TransportRecommendation {
        recommended,
        alternative: alternative_for(recommended),
        reasoning: reasoning(recommended, total_distance_km, days),
        total_distance_km,
        total_travel_hours,
        time_for_sightseeing_hours,
        is_realistic: time_for_sightseeing_hours > 0.0,
        premium_advantages: premium.then(|| premium_advantages(recommended)),
    }
}

const fn alternative_for(mode: TransportMode) -> TransportMode {
    match mode {
        TransportMode::Flight => TransportMode::Train,
        TransportMode::Bus | TransportMode::Train | TransportMode::Car => TransportMode::Car,
    }
}

fn reasoning(mode: TransportMode, total_distance_km: f64, days: u32) -> String {
    match mode {
        TransportMode::Flight => format!(
            "The trip covers {total_distance_km:.0} km, more than {FLIGHT_THRESHOLD_KM:.0} km, \
             so flying saves the most time."
        ),
        TransportMode::Train => format!(
            "The trip covers {total_distance_km:.0} km; trains are quick and comfortable \
             between {TRAIN_THRESHOLD_KM:.0} and {FLIGHT_THRESHOLD_KM:.0} km."
        ),
        TransportMode::Car => format!(
            "The destinations are close together and {days} days leave time for a road trip \
             with flexible stops."
        ),
        TransportMode::Bus => format!(
            "The destinations are only {total_distance_km:.0} km apart in total, so the bus \
             is the cheapest way to get around."
        ),
    }
}

/// Premium perks for `mode`.
#[must_use]
pub fn premium_advantages(mode: TransportMode) -> Vec<String> {
    let perks: &[&str] = match mode {
        TransportMode::Flight => &[
            "Priority boarding and lounge access",
            "Free rebooking up to 24 hours before departure",
            "Extra checked baggage allowance",
        ],
        TransportMode::Train => &[
            "First-class seat reservations",
            "Flexible tickets valid on any train that day",
            "Onboard meal included",
        ],
        TransportMode::Car => &[
            "Free vehicle upgrade on availability",
            "Full insurance cover with no excess",
            "Curated scenic route suggestions",
        ],
        TransportMode::Bus => &[
            "Reserved seats with extra legroom",
            "Free cancellation up to departure",
            "Wi-Fi and power sockets on board",
        ],
    };
    perks.iter().map(|perk| (*perk).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tripwise_core::test_support::{equator_pair, sample_catalogue};
    use tripwise_core::DestinationId;

    #[rstest]
    #[case(1200.0, 5, TransportMode::Flight)]
    #[case(400.0, 5, TransportMode::Train)]
    #[case(150.0, 9, TransportMode::Car)]
    #[case(150.0, 5, TransportMode::Bus)]
    fn follows_the_rule_table(
        #[case] km: f64,
        #[case] days: u32,
        #[case] expected: TransportMode,
    ) {
        assert_eq!(recommend_mode(km, days), expected);
    }

    #[rstest]
    #[case::flight_threshold_is_exclusive(1000.0, 5, TransportMode::Train)]
    #[case::just_over_flight_threshold(1000.001, 5, TransportMode::Flight)]
    #[case::train_threshold_is_exclusive(300.0, 5, TransportMode::Bus)]
    #[case::train_threshold_with_long_trip(300.0, 8, TransportMode::Car)]
    #[case::seven_days_is_not_a_road_trip(150.0, 7, TransportMode::Bus)]
    #[case::eight_days_is_a_road_trip(150.0, 8, TransportMode::Car)]
    #[case::distance_beats_days(301.0, 30, TransportMode::Train)]
    fn boundaries(#[case] km: f64, #[case] days: u32, #[case] expected: TransportMode) {
        assert_eq!(recommend_mode(km, days), expected);
    }

    #[rstest]
    fn alternative_is_train_for_flights_and_car_otherwise() {
        assert_eq!(alternative_for(TransportMode::Flight), TransportMode::Train);
        assert_eq!(alternative_for(TransportMode::Train), TransportMode::Car);
        assert_eq!(alternative_for(TransportMode::Bus), TransportMode::Car);
        assert_eq!(alternative_for(TransportMode::Car), TransportMode::Car);
    }

    #[rstest]
    fn long_haul_trip_recommends_flight() {
        let ids = ["london", "rome"].map(DestinationId::from);
        let matrix = DistanceMatrix::build(&sample_catalogue(), &ids);
        let recommendation = recommend_transport(&matrix, 5, false);
        assert_eq!(recommendation.recommended, TransportMode::Flight);
        assert_eq!(recommendation.alternative, TransportMode::Train);
        assert!(
            (recommendation.total_travel_hours - matrix.total_travel_hours(TransportMode::Flight))
                .abs()
                < 1e-12
        );
        assert!(recommendation.is_realistic);
        assert!(recommendation.premium_advantages.is_none());
    }

    #[rstest]
    fn sightseeing_time_subtracts_travel() {
        let (west, east) = equator_pair(400.0);
        let matrix = DistanceMatrix::from_destinations(vec![west, east]);
        let recommendation = recommend_transport(&matrix, 2, false);
        assert_eq!(recommendation.recommended, TransportMode::Train);
        let expected = 16.0 - 400.0 / 80.0 * 1.1;
        assert!((recommendation.time_for_sightseeing_hours - expected).abs() < 1e-6);
        assert!(recommendation.is_realistic);
    }

    #[rstest]
    fn trip_with_no_time_left_is_unrealistic() {
        let (west, east) = equator_pair(900.0);
        let matrix = DistanceMatrix::from_destinations(vec![west, east]);
        let recommendation = recommend_transport(&matrix, 1, false);
        assert_eq!(recommendation.recommended, TransportMode::Train);
        assert!(recommendation.time_for_sightseeing_hours < 0.0);
        assert!(!recommendation.is_realistic);
    }

    #[rstest]
    fn premium_travellers_get_mode_specific_perks() {
        let matrix = DistanceMatrix::build(&sample_catalogue(), &["paris".into()]);
        let recommendation = recommend_transport(&matrix, 3, true);
        assert_eq!(recommendation.recommended, TransportMode::Bus);
        assert_eq!(
            recommendation.premium_advantages,
            Some(premium_advantages(TransportMode::Bus))
        );
    }

    #[rstest]
    fn reasoning_mentions_the_distance() {
        let text = reasoning(TransportMode::Flight, 1433.8, 4);
        assert!(text.contains("1434 km"), "unexpected reasoning: {text}");
    }
}
