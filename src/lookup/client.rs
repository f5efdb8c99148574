use crate::app_config::AppConfig;
use crate::geo_uri::GeoUriError;
use reqwest::Client;
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, LookupError> {
    let client = Client::builder()
        .user_agent(config.http().user_agent())
        .timeout(config.http().timeout())
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid geo URI: {0}")]
    GeoUri(#[from] GeoUriError),
    #[error("no location found for '{0}'")]
    NotFound(String),
}
