use crate::app_config::AppConfig;
use crate::geo_uri::GeoUri;
use crate::location::Location;
use crate::lookup::aviowiki::AviowikiClient;
use crate::lookup::client::{LookupError, new_client};
use crate::lookup::geocoder::{AirportDirectory, Geocoder};
use crate::lookup::photon::PhotonClient;
use std::sync::Arc;
use tracing::instrument;

/// Entry point for remote lookups, combining a [`Geocoder`] with an [`AirportDirectory`].
#[derive(Clone, Debug)]
pub struct Maze {
    geocoder: Arc<dyn Geocoder>,
    airports: Arc<dyn AirportDirectory>,
}

impl Maze {
    pub fn new(geocoder: Arc<dyn Geocoder>, airports: Arc<dyn AirportDirectory>) -> Self {
        Maze { geocoder, airports }
    }

    /// Builds a Maze using Photon and aviowiki as configured.
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        let client = new_client(config)?;
        let geocoder = PhotonClient::new(client.clone(), config.photon().url());
        let airports = AviowikiClient::new(client, config.aviowiki().url());

        Ok(Maze::new(Arc::new(geocoder), Arc::new(airports)))
    }

    pub async fn reverse(&self, lang: &str, longitude: f64, latitude: f64) -> Result<Location, LookupError> {
        self.geocoder.reverse(lang, longitude, latitude).await
    }

    #[instrument(skip(self))]
    pub async fn reverse_geo_uri(&self, lang: &str, geo_uri: &str) -> Result<Location, LookupError> {
        let geo = GeoUri::parse(geo_uri)?;
        self.reverse(lang, geo.longitude, geo.latitude).await
    }

    pub async fn search(&self, lang: &str, query: &str) -> Result<Location, LookupError> {
        self.geocoder.search(lang, query).await
    }

    pub async fn airport(&self, query: &str) -> Result<Location, LookupError> {
        self.airports.airport(query).await
    }
}
