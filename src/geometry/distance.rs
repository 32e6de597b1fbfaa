use super::Point2;

/// Pluggable distance function over 2-D points.
///
/// Must be symmetric, non-negative, and satisfy `d(a, a) = 0`.
pub type DistanceFn = fn(&Point2, &Point2) -> f64;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the Euclidean distance between two points on the Cartesian plane.
#[must_use]
pub fn euclidean_distance(a: &Point2, b: &Point2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Returns the great-circle (haversine) distance between two points on the
/// Earth's surface, in kilometers.
///
/// The x coordinate of each point is interpreted as longitude, the y
/// coordinate as latitude, both in decimal degrees.
#[must_use]
pub fn haversine_distance(a: &Point2, b: &Point2) -> f64 {
    let (lon1, lat1) = (a.x, a.y);
    let (lon2, lat2) = (b.x, b.y);

    let phi_1 = lat1.to_radians();
    let phi_2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
