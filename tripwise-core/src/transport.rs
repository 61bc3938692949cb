//! Transport modes and their planning constants.
//!
//! [`TransportMode::profile`] is the only table of per-mode speed, buffer
//! and cost figures in the workspace. Every travel-time or cost estimate
//! goes through it.
//!
//! # Examples
//! ```
//! use tripwise_core::TransportMode;
//!
//! assert_eq!(TransportMode::Train.as_str(), "train");
//! assert_eq!("flight".parse::<TransportMode>(), Ok(TransportMode::Flight));
//! ```

/// Means of travelling between two destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TransportMode {
    /// Long-distance coach.
    Bus,
    /// Intercity rail.
    Train,
    /// Scheduled flight.
    Flight,
    /// Private or rental car.
    Car,
}

/// Speed, delay and cost figures for one [`TransportMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeProfile {
    /// Average door-to-door speed in km/h.
    pub speed_kmh: f64,
    /// Multiplier for boarding, traffic and other real-world delays.
    pub buffer_factor: f64,
    /// Estimated fare or running cost per kilometre, in euros.
    pub cost_per_km: f64,
}

impl TransportMode {
    /// Every mode, from slowest to fastest nominal speed.
    pub const ALL: [Self; 4] = [Self::Bus, Self::Car, Self::Train, Self::Flight];

    /// Return the canonical constants for this mode.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::TransportMode;
    ///
    /// let car = TransportMode::Car.profile();
    /// assert_eq!(car.speed_kmh, 60.0);
    /// assert_eq!(car.buffer_factor, 1.3);
    /// ```
    #[must_use]
    pub const fn profile(self) -> ModeProfile {
        match self {
            Self::Bus => ModeProfile {
                speed_kmh: 50.0,
                buffer_factor: 1.2,
                cost_per_km: 0.08,
            },
            Self::Train => ModeProfile {
                speed_kmh: 80.0,
                buffer_factor: 1.1,
                cost_per_km: 0.12,
            },
            Self::Flight => ModeProfile {
                speed_kmh: 500.0,
                buffer_factor: 1.5,
                cost_per_km: 0.2,
            },
            Self::Car => ModeProfile {
                speed_kmh: 60.0,
                buffer_factor: 1.3,
                cost_per_km: 0.15,
            },
        }
    }

    /// Estimated travel time in hours for `distance_km`.
    ///
    /// Computed as `distance_km / speed_kmh * buffer_factor`.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::TransportMode;
    ///
    /// let hours = TransportMode::Bus.travel_hours(100.0);
    /// assert!((hours - 2.4).abs() < 1e-12);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "travel time is a floating-point estimate"
    )]
    pub fn travel_hours(self, distance_km: f64) -> f64 {
        let profile = self.profile();
        distance_km / profile.speed_kmh * profile.buffer_factor
    }

    /// Estimated cost in euros for `distance_km`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "cost is a floating-point estimate")]
    pub fn estimated_cost(self, distance_km: f64) -> f64 {
        distance_km * self.profile().cost_per_km
    }

    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Flight => "flight",
            Self::Car => "car",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bus" => Ok(Self::Bus),
            "train" => Ok(Self::Train),
            "flight" | "plane" => Ok(Self::Flight),
            "car" => Ok(Self::Car),
            _ => Err(format!("unknown transport mode '{s}'")),
        }
    }
}
