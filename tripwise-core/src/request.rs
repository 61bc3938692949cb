//! Trip requests handed to the planner.
//!
//! The planning computations never fail on their own; the request is where
//! caller input is checked. [`TripRequest::validate`] returns the first
//! problem found.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{DestinationId, TransportMode};

/// Longest trip accepted by [`TripRequest::validate`], in days.
pub const MAX_TRIP_DAYS: u32 = 366;

/// Parameters of a trip to plan.
///
/// `mode` is optional: when absent the planner uses its recommended mode.
/// `seed` pins the random source used for premium visit hints.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use tripwise_core::{DestinationId, TransportMode, TripRequest};
///
/// let request = TripRequest {
///     destinations: vec![DestinationId::from("paris"), DestinationId::from("lyon")],
///     mode: Some(TransportMode::Train),
///     days: 5,
///     start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap_or_default(),
///     premium: false,
///     seed: None,
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRequest {
    /// Destinations to visit, in order.
    pub destinations: Vec<DestinationId>,
    /// Chosen transport mode, or `None` to use the recommendation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: Option<TransportMode>,
    /// Total trip length in days.
    pub days: u32,
    /// Calendar date of day one.
    pub start_date: NaiveDate,
    /// Whether the traveller has a premium subscription.
    #[cfg_attr(feature = "serde", serde(default))]
    pub premium: bool,
    /// Seed for reproducible visit hints.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

/// Reasons a [`TripRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripRequestValidationError {
    /// No destinations were listed.
    #[error("trip must include at least one destination")]
    NoDestinations,
    /// The trip has no days.
    #[error("trip must last at least one day")]
    ZeroDays,
    /// The trip is longer than [`MAX_TRIP_DAYS`].
    #[error("trip of {days} days exceeds the {max} day limit")]
    TooManyDays {
        /// Requested length.
        days: u32,
        /// Accepted maximum.
        max: u32,
    },
    /// The same destination is listed twice in a row.
    #[error("destination '{id}' is listed twice in a row")]
    RepeatedDestination {
        /// Repeated identifier.
        id: DestinationId,
    },
}

impl TripRequest {
    /// Check the request and return the first problem found.
    ///
    /// # Examples
    /// ```rust
    /// use chrono::NaiveDate;
    /// use tripwise_core::{TripRequest, TripRequestValidationError};
    ///
    /// let request = TripRequest {
    ///     destinations: Vec::new(),
    ///     mode: None,
    ///     days: 3,
    ///     start_date: NaiveDate::default(),
    ///     premium: false,
    ///     seed: None,
    /// };
    /// assert_eq!(request.validate(), Err(TripRequestValidationError::NoDestinations));
    /// ```
    pub fn validate(&self) -> Result<(), TripRequestValidationError> {
        if self.destinations.is_empty() {
            return Err(TripRequestValidationError::NoDestinations);
        }
        if self.days == 0 {
            return Err(TripRequestValidationError::ZeroDays);
        }
        if self.days > MAX_TRIP_DAYS {
            return Err(TripRequestValidationError::TooManyDays {
                days: self.days,
                max: MAX_TRIP_DAYS,
            });
        }
        for pair in self.destinations.windows(2) {
            if let [current, next] = pair
                && current == next
            {
                return Err(TripRequestValidationError::RepeatedDestination {
                    id: current.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> TripRequest {
        TripRequest {
            destinations: vec!["paris".into(), "lyon".into()],
            mode: Some(TransportMode::Train),
            days: 5,
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
            premium: false,
            seed: Some(7),
        }
    }

    #[rstest]
    fn accepts_a_well_formed_request(request: TripRequest) {
        assert_eq!(request.validate(), Ok(()));
    }

    #[rstest]
    fn rejects_zero_days(mut request: TripRequest) {
        request.days = 0;
        assert_eq!(request.validate(), Err(TripRequestValidationError::ZeroDays));
    }

    #[rstest]
    #[case(MAX_TRIP_DAYS, true)]
    #[case(MAX_TRIP_DAYS + 1, false)]
    fn enforces_the_day_limit(mut request: TripRequest, #[case] days: u32, #[case] ok: bool) {
        request.days = days;
        assert_eq!(request.validate().is_ok(), ok);
    }

    #[rstest]
    fn rejects_consecutive_repeats(mut request: TripRequest) {
        request.destinations = vec!["paris".into(), "lyon".into(), "lyon".into()];
        assert_eq!(
            request.validate(),
            Err(TripRequestValidationError::RepeatedDestination { id: "lyon".into() })
        );
    }

    #[rstest]
    fn allows_returning_to_an_earlier_destination(mut request: TripRequest) {
        request.destinations = vec!["paris".into(), "lyon".into(), "paris".into()];
        assert!(request.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn optional_fields_default_when_absent() {
        let json = r#"{"destinations":["rome"],"days":3,"start_date":"2026-06-01"}"#;
        let decoded: TripRequest = serde_json::from_str(json).expect("request should decode");
        assert_eq!(decoded.mode, None);
        assert!(!decoded.premium);
        assert_eq!(decoded.seed, None);
    }
}
