mod distance;
mod location;

pub use distance::{EARTH_RADIUS_M, distance, haversine_distance};
pub use location::Location;
