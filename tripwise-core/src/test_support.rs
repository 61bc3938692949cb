//! Test-only destination fixtures shared by unit and behaviour tests.

use geo::Coord;

use crate::{Destination, EARTH_RADIUS_KM, MemoryCatalogue};

/// Build a destination whose name is the capitalised id and whose
/// attractions are two generic sights.
#[must_use]
pub fn destination(id: &str, latitude: f64, longitude: f64) -> Destination {
    let mut name = String::with_capacity(id.len());
    let mut chars = id.chars();
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.extend(chars);
    }
    Destination::new(
        id,
        name.clone(),
        Coord {
            x: longitude,
            y: latitude,
        },
        vec![format!("{name} old town"), format!("{name} museum")],
    )
}

/// Two destinations on the equator exactly `km` apart along the great circle.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture converts an arc length to degrees"
)]
pub fn equator_pair(km: f64) -> (Destination, Destination) {
    let longitude = (km / EARTH_RADIUS_KM).to_degrees();
    (
        destination("west", 0.0, 0.0),
        destination("east", 0.0, longitude),
    )
}

/// A catalogue of six European cities.
///
/// Approximate great-circle distances: Paris to Lyon 391 km, Lyon to
/// Marseille 278 km, Paris to London 344 km and London to Rome 1434 km.
///
/// # Panics
///
/// Panics if two fixture destinations share an id.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture ids are unique so construction cannot fail"
)]
pub fn sample_catalogue() -> MemoryCatalogue {
    let paris = Destination::new(
        "paris",
        "Paris",
        Coord {
            x: 2.3522,
            y: 48.8566,
        },
        vec![
            "Louvre Museum".into(),
            "Eiffel Tower".into(),
            "Montmartre".into(),
            "Notre-Dame".into(),
        ],
    );
    MemoryCatalogue::new(vec![
        paris,
        destination("lyon", 45.764, 4.8357),
        destination("marseille", 43.2965, 5.3698),
        destination("london", 51.5074, -0.1278),
        destination("rome", 41.9028, 12.4964),
        destination("barcelona", 41.3851, 2.1734),
    ])
    .expect("sample catalogue ids are unique")
}
