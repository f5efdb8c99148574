use crate::geo_uri::{GeoUri, GeoUriError, Values};
use crate::location::distance::haversine_distance;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const NAME: &str = "name";
const LOCALITY: &str = "locality";
const REGION: &str = "region";
const COUNTRY: &str = "country";
const ICAO: &str = "icao";
const IATA: &str = "iata";

/// A location described by a geo URI, with the descriptive fields taken from its query.
///
/// Converting from a [`GeoUri`] is lossy: only the first value of the `name`, `locality`, `region`,
/// `country`, `icao` and `iata` query keys is kept, every other query key and all parameters are
/// dropped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64, // In meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
            ..Location::default()
        }
    }

    pub fn parse(geo_uri: &str) -> Result<Location, GeoUriError> {
        GeoUri::parse(geo_uri).map(|geo| Location::from(&geo))
    }

    /// Returns a geo URI holding the coordinates and every non-empty descriptive field as a single valued query key.
    pub fn to_geo_uri(&self) -> GeoUri {
        let mut query = Values::new();
        let fields = [
            (NAME, &self.name),
            (LOCALITY, &self.locality),
            (REGION, &self.region),
            (COUNTRY, &self.country),
            (ICAO, &self.icao),
            (IATA, &self.iata),
        ];
        for (key, value) in fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                query.append(key, value);
            }
        }

        GeoUri {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            parameters: Values::new(),
            query,
        }
    }

    /// Returns the great-circle distance to `other` in meters.
    pub fn distance(&self, other: &Location) -> f64 {
        haversine_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl From<&GeoUri> for Location {
    fn from(geo: &GeoUri) -> Self {
        let first = |key: &str| geo.query.first(key).filter(|v| !v.is_empty()).map(String::from);

        Location {
            latitude: geo.latitude,
            longitude: geo.longitude,
            altitude: geo.altitude,
            name: first(NAME),
            locality: first(LOCALITY),
            region: first(REGION),
            country: first(COUNTRY),
            icao: first(ICAO),
            iata: first(IATA),
        }
    }
}

impl From<&Location> for GeoUri {
    fn from(location: &Location) -> Self {
        location.to_geo_uri()
    }
}

impl FromStr for Location {
    type Err = GeoUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::parse(s)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_geo_uri())
    }
}
