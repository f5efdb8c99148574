mod coordinates;
mod escape;
mod geo_uri;
mod geo_uri_serde;
mod parameters;
mod values;

pub use coordinates::{CoordinateError, Coordinates, format_coordinates, parse_coordinates};
pub use escape::{EscapeError, escape, unescape};
pub use geo_uri::{GEO_SCHEME, GeoUri, GeoUriError};
pub use parameters::{ParameterError, encode_parameters, parse_parameters};
pub use values::Values;
