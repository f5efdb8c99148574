//! Parsing and formatting of `geo:` URIs ([RFC 5870](https://datatracker.ietf.org/doc/html/rfc5870)),
//! a [`Location`] record derived from them, and remote lookups returning locations.

pub mod app_config;
pub mod geo_uri;
pub mod location;
pub mod lookup;

pub use geo_uri::{GeoUri, GeoUriError, Values};
pub use location::Location;
pub use lookup::{LookupError, Maze};
