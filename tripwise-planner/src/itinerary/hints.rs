//! "Best time to visit" annotations for premium itineraries.

use chrono::NaiveTime;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Suggested visiting time and the crowd level expected then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitHint {
    /// Suggested arrival time.
    pub best_time: NaiveTime,
    /// Expected crowd level, 0 to 100.
    pub crowd_level_percent: u8,
}

/// Produces [`VisitHint`] values for activities.
///
/// Implementations may be random or deterministic; the generator only asks
/// for one hint per annotated activity, in itinerary order.
pub trait VisitHintSource {
    /// Hint for `activity` at `destination`.
    fn hint(&mut self, destination: &str, activity: &str) -> VisitHint;
}

impl<S: VisitHintSource + ?Sized> VisitHintSource for &mut S {
    fn hint(&mut self, destination: &str, activity: &str) -> VisitHint {
        (**self).hint(destination, activity)
    }
}

const CROWD_MIN: u8 = 10;
const CROWD_MAX: u8 = 95;
const EARLIEST_HOUR: u32 = 7;
const LATEST_HOUR: u32 = 17;

/// Random hints drawn from an injected generator.
///
/// Crowd levels fall between 10 and 95 percent and suggested times between
/// 07:00 and 17:30 on the half hour.
///
/// # Examples
/// ```
/// use tripwise_planner::{RandomVisitHints, VisitHintSource};
///
/// let mut first = RandomVisitHints::seeded(7);
/// let mut second = RandomVisitHints::seeded(7);
/// assert_eq!(first.hint("Rome", "Colosseum"), second.hint("Rome", "Colosseum"));
/// ```
#[derive(Debug, Clone)]
pub struct RandomVisitHints<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomVisitHints<R> {
    /// Wrap `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomVisitHints<ChaCha8Rng> {
    /// Deterministic hints for `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Hints seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> VisitHintSource for RandomVisitHints<R> {
    fn hint(&mut self, _destination: &str, _activity: &str) -> VisitHint {
        let crowd_level_percent = self.rng.gen_range(CROWD_MIN..=CROWD_MAX);
        let hour = self.rng.gen_range(EARLIEST_HOUR..=LATEST_HOUR);
        let minute = if self.rng.gen_bool(0.5) { 30 } else { 0 };
        VisitHint {
            best_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
            crowd_level_percent,
        }
    }
}

/// Returns the same hint every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedVisitHint(
    /// Hint handed out on every call.
    pub VisitHint,
);

impl VisitHintSource for FixedVisitHint {
    fn hint(&mut self, _destination: &str, _activity: &str) -> VisitHint {
        self.0
    }
}
