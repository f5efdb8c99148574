use crate::geo_uri::Values;
use crate::geo_uri::coordinates::{CoordinateError, format_coordinates, parse_coordinates};
use crate::geo_uri::escape::escape;
use crate::geo_uri::parameters::{ParameterError, encode_parameters, parse_parameters};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use url::Url;

pub const GEO_SCHEME: &str = "geo";

/// A geo URI as described by [RFC 5870](https://datatracker.ietf.org/doc/html/rfc5870).
///
/// ```text
/// geo:<latitude>,<longitude>[,<altitude>][;<parameters>][?<query>]
/// ```
///
/// An absent altitude is stored as `0.0`, and an altitude of `0.0` is never written back out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoUri {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64, // In meters
    pub parameters: Values,
    pub query: Values,
}

impl GeoUri {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoUri {
            latitude,
            longitude,
            ..GeoUri::default()
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    /// Parses a geo URI.
    ///
    /// Control characters anywhere and whitespace around the URI are rejected rather than stripped.
    pub fn parse(uri: &str) -> Result<GeoUri, GeoUriError> {
        if uri.chars().any(|c| c.is_ascii_control()) {
            return Err(GeoUriError::InvalidUri("contains a control character".to_string()));
        }
        if uri.trim() != uri {
            return Err(GeoUriError::InvalidUri("surrounded by whitespace".to_string()));
        }

        let url = match Url::parse(uri) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => return Err(GeoUriError::InvalidScheme(String::new())),
            Err(err) => return Err(GeoUriError::InvalidUri(err.to_string())),
        };

        if url.scheme() != GEO_SCHEME {
            return Err(GeoUriError::InvalidScheme(url.scheme().to_string()));
        }

        // A geo URI is opaque, `geo:/1,2` or `geo://host` has no coordinates.
        if !url.cannot_be_a_base() {
            return Err(GeoUriError::EmptyPath);
        }

        let (coordinates, parameters) = url.path().split_once(';').unwrap_or((url.path(), ""));
        if coordinates.trim().is_empty() {
            return Err(GeoUriError::EmptyPath);
        }

        let coordinates = parse_coordinates(coordinates)?;
        let parameters = parse_parameters(parameters)?;
        let query = url.query_pairs().collect();

        Ok(GeoUri {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            altitude: coordinates.altitude,
            parameters,
            query,
        })
    }
}

impl FromStr for GeoUri {
    type Err = GeoUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoUri::parse(s)
    }
}

impl Display for GeoUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", GEO_SCHEME, format_coordinates(self.latitude, self.longitude, self.altitude))?;

        let parameters = encode_parameters(&self.parameters);
        if !parameters.is_empty() {
            write!(f, ";{}", parameters)?;
        }

        let query = encode_query(&self.query);
        if !query.is_empty() {
            write!(f, "?{}", query)?;
        }

        Ok(())
    }
}

fn encode_query(query: &Values) -> String {
    query
        .sorted()
        .flat_map(|(key, values)| values.iter().map(move |value| format!("{}={}", escape(key), escape(value))))
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoUriError {
    #[error("invalid URI: {0}")]
    InvalidUri(String),
    #[error("invalid geo URI scheme '{0}'")]
    InvalidScheme(String),
    #[error("empty path")]
    EmptyPath,
    #[error("cannot parse coordinates: {0}")]
    Coordinates(#[from] CoordinateError),
    #[error("cannot parse parameters: {0}")]
    Parameters(#[from] ParameterError),
}
