//! Destinations and their identifiers.

use std::fmt;

use geo::Coord;

/// Stable identifier for a [`Destination`].
///
/// # Examples
/// ```
/// use tripwise_core::DestinationId;
///
/// let id = DestinationId::from("paris");
/// assert_eq!(id.as_str(), "paris");
/// assert_eq!(id.to_string(), "paris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DestinationId(String);

impl DestinationId {
    /// Wrap an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DestinationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A place a traveller can stay at.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Attractions are listed in the order they should be suggested.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::Destination;
///
/// let paris = Destination::new(
///     "paris",
///     "Paris",
///     Coord { x: 2.3522, y: 48.8566 },
///     vec!["Louvre".into(), "Eiffel Tower".into()],
/// );
///
/// assert_eq!(paris.id.as_str(), "paris");
/// assert_eq!(paris.latitude(), 48.8566);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Catalogue identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Attractions in suggestion order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attractions: Vec<String>,
}

impl Destination {
    /// Construct a destination.
    #[must_use]
    pub fn new(
        id: impl Into<DestinationId>,
        name: impl Into<String>,
        location: Coord<f64>,
        attractions: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            attractions,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}
