use crate::location::Location;
use crate::lookup::LookupError;
use crate::lookup::domain::photon_response::{Feature, FeatureCollection};
use crate::lookup::geocoder::Geocoder;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info, instrument};

/// Geocoder backed by a Photon server.
#[derive(Clone, Debug)]
pub struct PhotonClient {
    client: Client,
    url: String,
}

impl PhotonClient {
    pub fn new(client: Client, url: &str) -> Self {
        PhotonClient {
            client,
            url: url.trim_end_matches('/').to_string(),
        }
    }

    async fn first_location(&self, request: RequestBuilder, lang: &str, subject: String) -> Result<Location, LookupError> {
        let request = if lang.is_empty() { request } else { request.query(&[("lang", lang)]) };
        let response = request.query(&[("limit", "1")]).send().await?.error_for_status()?;

        let collection = response.json::<FeatureCollection>().await?;
        debug!("Received {} feature(s)", collection.features.len());

        collection
            .features
            .into_iter()
            .next()
            .map(to_location)
            .ok_or(LookupError::NotFound(subject))
    }
}

#[async_trait]
impl Geocoder for PhotonClient {
    #[instrument(skip(self))]
    async fn reverse(&self, lang: &str, longitude: f64, latitude: f64) -> Result<Location, LookupError> {
        info!("Reverse geocoding {},{}...", latitude, longitude);
        let request = self
            .client
            .get(format!("{}/reverse", self.url))
            .query(&[("lon", longitude.to_string()), ("lat", latitude.to_string())]);

        let location = self.first_location(request, lang, format!("{},{}", latitude, longitude)).await?;
        info!("Reverse geocoding {},{}... OK", latitude, longitude);
        Ok(location)
    }

    #[instrument(skip(self))]
    async fn search(&self, lang: &str, query: &str) -> Result<Location, LookupError> {
        info!("Searching '{}'...", query);
        let request = self.client.get(format!("{}/api", self.url)).query(&[("q", query)]);

        let location = self.first_location(request, lang, query.to_string()).await?;
        info!("Searching '{}'... OK", query);
        Ok(location)
    }
}

fn to_location(feature: Feature) -> Location {
    let [longitude, latitude] = feature.geometry.coordinates;
    let properties = feature.properties;

    Location {
        name: non_empty(properties.name),
        locality: non_empty(properties.city).or_else(|| non_empty(properties.locality)),
        region: non_empty(properties.state),
        country: non_empty(properties.country),
        ..Location::new(latitude, longitude)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn query(pairs: &[(&str, &str)]) -> Matcher {
        Matcher::AllOf(
            pairs
                .iter()
                .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test(tokio::test)]
    async fn reverse_returns_the_first_feature() -> Result<(), LookupError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/reverse")
            .match_query(query(&[("lon", "4.3580323"), ("lat", "51.8615899"), ("lang", "en"), ("limit", "1")]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/photon_reverse_response.json"))
            .create_async()
            .await;

        let photon = PhotonClient::new(Client::new(), &server.url());
        let location = photon.reverse("en", 4.3580323, 51.8615899).await?;

        mock.assert_async().await;
        assert_eq!(
            location,
            Location {
                name: Some("Oude Kerk".to_string()),
                locality: Some("Delft".to_string()),
                region: Some("South Holland".to_string()),
                country: Some("Netherlands".to_string()),
                ..Location::new(52.0127, 4.3556)
            }
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn search_omits_an_empty_language() -> Result<(), LookupError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api")
            .match_query(Matcher::Regex("^q=San\\+Francisco&limit=1$".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/photon_search_response.json"))
            .create_async()
            .await;

        let photon = PhotonClient::new(Client::new(), &format!("{}/", server.url()));
        let location = photon.search("", "San Francisco").await?;

        mock.assert_async().await;
        assert_eq!(
            location,
            Location {
                name: Some("San Francisco".to_string()),
                locality: None,
                region: Some("California".to_string()),
                country: Some("United States".to_string()),
                ..Location::new(37.7792588, -122.4193286)
            }
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn search_returns_not_found_without_features() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "type": "FeatureCollection", "features": [] }"#)
            .create_async()
            .await;

        let photon = PhotonClient::new(Client::new(), &server.url());
        let result = photon.search("en", "nowhere").await;

        assert!(matches!(result, Err(LookupError::NotFound(subject)) if subject == "nowhere"));
    }

    #[test(tokio::test)]
    async fn reverse_fails_for_an_error_status() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let photon = PhotonClient::new(Client::new(), &server.url());
        let result = photon.reverse("", 4.0, 52.0).await;

        assert!(matches!(result, Err(LookupError::Request(_))));
    }

    #[test]
    fn to_location_prefers_the_city_over_the_locality() {
        let feature: Feature = serde_json::from_str(
            r#"{ "geometry": { "coordinates": [4.5, 52.1] }, "properties": { "name": "", "city": "Leiden", "locality": "Centrum" } }"#,
        )
        .expect("valid feature");

        let location = to_location(feature);

        assert_eq!(location.name, None);
        assert_eq!(location.locality.as_deref(), Some("Leiden"));
        assert_eq!((location.latitude, location.longitude), (52.1, 4.5));
    }
}
