//! Great-circle distance between two coordinates.

use geo::Coord;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two WGS84 coordinates.
///
/// Inputs are in degrees with `x = longitude` and `y = latitude`. Non-finite
/// input is not trapped; it propagates to the result as `NaN`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::haversine_km;
///
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let lyon = Coord { x: 4.8357, y: 45.764 };
/// let km = haversine_km(paris, lyon);
/// assert!((km - 391.5).abs() < 1.0);
/// assert_eq!(haversine_km(paris, paris), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let from_lat = from.y.to_radians();
    let to_lat = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lng = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
