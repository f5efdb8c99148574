use crate::location::Location;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle distance in meters between two points given in degrees.
/// See https://en.wikipedia.org/wiki/Haversine_formula.
pub fn haversine_distance(latitude1: f64, longitude1: f64, latitude2: f64, longitude2: f64) -> f64 {
    let lat1 = latitude1.to_radians();
    let lat2 = latitude2.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (longitude2 - longitude1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just above 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    c * EARTH_RADIUS_M
}

/// Returns the distance in meters between two optional locations, or 0 when either is missing.
pub fn distance(from: Option<&Location>, to: Option<&Location>) -> f64 {
    match (from, to) {
        (Some(from), Some(to)) => from.distance(to),
        _ => 0.0,
    }
}
