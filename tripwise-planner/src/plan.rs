//! End-to-end planning for a single trip request.

use tripwise_core::{DestinationCatalogue, TransportMode, TripRequest, TripRequestValidationError};

use crate::{
    DistanceMatrix, FeasibilityResult, ItineraryConfig, ItineraryDay, ItineraryGenerator,
    ItineraryOptions, Schedule, TransportOption, TransportRecommendation, VisitHintSource,
    check_feasibility, compare_transport, recommend_transport,
};

/// Everything computed for one trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    /// Resolved destinations, legs and skipped ids.
    pub matrix: DistanceMatrix,
    /// Mode the itinerary and feasibility check use.
    pub mode: TransportMode,
    /// Recommended mode with its reasoning.
    pub recommendation: TransportRecommendation,
    /// Feasibility for [`TripPlan::mode`].
    pub feasibility: FeasibilityResult,
    /// Time and cost for every mode, fastest first.
    pub transport_options: Vec<TransportOption>,
    /// Day allocation behind the itinerary.
    pub schedule: Schedule,
    /// Dated days of the trip.
    pub itinerary: Vec<ItineraryDay>,
}

/// Validate `request` and run the whole planning pipeline.
///
/// The request's mode is used when present; otherwise the recommended mode
/// is. Unknown destination ids do not fail the plan; they are reported in
/// the matrix's `skipped` list.
///
/// # Errors
///
/// Returns [`TripRequestValidationError`] when the request is malformed.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use tripwise_core::{Destination, MemoryCatalogue, TransportMode, TripRequest};
/// use tripwise_planner::{ItineraryConfig, RandomVisitHints, plan_trip};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalogue = MemoryCatalogue::new(vec![
///     Destination::new("a", "A", Coord { x: 0.0, y: 0.0 }, Vec::new()),
///     Destination::new("b", "B", Coord { x: 1.0, y: 0.0 }, Vec::new()),
/// ])?;
/// let request = TripRequest {
///     destinations: vec!["a".into(), "b".into()],
///     mode: None,
///     days: 3,
///     start_date: NaiveDate::from_ymd_opt(2026, 4, 1).ok_or("bad date")?,
///     premium: false,
///     seed: None,
/// };
/// let plan = plan_trip(
///     &catalogue,
///     &request,
///     &ItineraryConfig::default(),
///     &mut RandomVisitHints::seeded(0),
/// )?;
/// assert_eq!(plan.mode, TransportMode::Bus);
/// assert_eq!(plan.itinerary.len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn plan_trip<C, H>(
    catalogue: &C,
    request: &TripRequest,
    config: &ItineraryConfig,
    hints: &mut H,
) -> Result<TripPlan, TripRequestValidationError>
where
    C: DestinationCatalogue + ?Sized,
    H: VisitHintSource + ?Sized,
{
    request.validate()?;

    let matrix = DistanceMatrix::build(catalogue, &request.destinations);
    let recommendation = recommend_transport(&matrix, request.days, request.premium);
    let mode = request.mode.unwrap_or(recommendation.recommended);
    let feasibility = check_feasibility(&matrix, mode, request.days);
    if !feasibility.feasible {
        log::info!(
            "trip needs {} days but only {} were requested",
            feasibility.days_needed,
            request.days
        );
    }

    let schedule = Schedule::build(&matrix, mode, request.days, config);
    let options = ItineraryOptions {
        mode,
        days: request.days,
        start_date: request.start_date,
        premium: request.premium,
    };
    let itinerary = ItineraryGenerator::generate_from_schedule(&matrix, &schedule, &options, hints);

    Ok(TripPlan {
        transport_options: compare_transport(&matrix),
        matrix,
        mode,
        recommendation,
        feasibility,
        schedule,
        itinerary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomVisitHints;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use tripwise_core::MemoryCatalogue;
    use tripwise_core::test_support::sample_catalogue;

    #[fixture]
    fn request() -> TripRequest {
        TripRequest {
            destinations: vec!["london".into(), "rome".into()],
            mode: None,
            days: 6,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 14).expect("valid date"),
            premium: true,
            seed: Some(3),
        }
    }

    fn plan(request: &TripRequest) -> Result<TripPlan, TripRequestValidationError> {
        plan_trip(
            &sample_catalogue(),
            request,
            &ItineraryConfig::default(),
            &mut RandomVisitHints::seeded(3),
        )
    }

    #[rstest]
    fn uses_the_recommended_mode_when_none_is_given(request: TripRequest) {
        let plan = plan(&request).expect("valid request");
        assert_eq!(plan.mode, TransportMode::Flight);
        assert_eq!(plan.recommendation.recommended, TransportMode::Flight);
        assert_eq!(plan.itinerary.len(), 6);
        assert_eq!(plan.transport_options.len(), TransportMode::ALL.len());
        assert!(plan.feasibility.feasible);
    }

    #[rstest]
    fn honours_an_explicit_mode(mut request: TripRequest) {
        request.mode = Some(TransportMode::Bus);
        let plan = plan(&request).expect("valid request");
        assert_eq!(plan.mode, TransportMode::Bus);
        assert_eq!(plan.recommendation.recommended, TransportMode::Flight);
        let transit = plan
            .itinerary
            .iter()
            .find_map(|d| d.transit.as_ref())
            .expect("transit day");
        assert_eq!(transit.mode, TransportMode::Bus);
    }

    #[rstest]
    fn rejects_invalid_requests(mut request: TripRequest) {
        request.days = 0;
        assert_eq!(plan(&request), Err(TripRequestValidationError::ZeroDays));
    }

    #[rstest]
    fn unknown_destinations_are_reported(mut request: TripRequest) {
        request.destinations = vec!["rome".into(), "atlantis".into()];
        let plan = plan(&request).expect("valid request");
        assert_eq!(plan.matrix.skipped, vec!["atlantis".into()]);
        assert_eq!(plan.itinerary.len(), 6);
        assert!(plan.itinerary.iter().all(|d| !d.is_transit_day()));
    }

    #[rstest]
    fn fully_unknown_trips_have_no_itinerary(mut request: TripRequest) {
        request.destinations = vec!["atlantis".into()];
        let plan = plan_trip(
            &MemoryCatalogue::default(),
            &request,
            &ItineraryConfig::default(),
            &mut RandomVisitHints::seeded(3),
        )
        .expect("valid request");
        assert!(plan.itinerary.is_empty());
        assert!(plan.schedule.entries.is_empty());
    }

    #[rstest]
    fn equal_seeds_plan_identical_trips(request: TripRequest) {
        assert_eq!(plan(&request), plan(&request));
    }
}
