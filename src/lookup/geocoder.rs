use crate::location::Location;
use crate::lookup::LookupError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Looks up locations by coordinates or free text.
#[async_trait]
pub trait Geocoder: Debug + Send + Sync {
    /// Returns the location closest to the given coordinates. `lang` may be empty.
    async fn reverse(&self, lang: &str, longitude: f64, latitude: f64) -> Result<Location, LookupError>;

    /// Returns the best match for `query`. `lang` may be empty.
    async fn search(&self, lang: &str, query: &str) -> Result<Location, LookupError>;
}

/// Looks up airports by name or ICAO/IATA code.
#[async_trait]
pub trait AirportDirectory: Debug + Send + Sync {
    async fn airport(&self, query: &str) -> Result<Location, LookupError>;
}
