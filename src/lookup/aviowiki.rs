use crate::location::Location;
use crate::lookup::LookupError;
use crate::lookup::domain::aviowiki_response::{Airport, AirportPage};
use crate::lookup::geocoder::AirportDirectory;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};

/// Airport lookups against the aviowiki API.
#[derive(Clone, Debug)]
pub struct AviowikiClient {
    client: Client,
    url: String,
}

impl AviowikiClient {
    pub fn new(client: Client, url: &str) -> Self {
        AviowikiClient {
            client,
            url: url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AirportDirectory for AviowikiClient {
    #[instrument(skip(self))]
    async fn airport(&self, query: &str) -> Result<Location, LookupError> {
        info!("Searching airport '{}'...", query);
        let response = self
            .client
            .get(format!("{}/airports/search", self.url))
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<AirportPage>().await?;
        let location = page
            .content
            .into_iter()
            .next()
            .map(to_location)
            .ok_or_else(|| LookupError::NotFound(query.to_string()))?;

        info!("Searching airport '{}'... OK", query);
        Ok(location)
    }
}

fn to_location(airport: Airport) -> Location {
    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

    Location {
        name: non_empty(airport.name),
        locality: non_empty(airport.served_city),
        country: non_empty(airport.country.and_then(|c| c.name)),
        icao: non_empty(airport.icao),
        iata: non_empty(airport.iata),
        ..Location::new(airport.coordinates.latitude, airport.coordinates.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test(tokio::test)]
    async fn airport_returns_the_first_result() -> Result<(), LookupError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/airports/search")
            .match_query(Matcher::UrlEncoded("query".to_string(), "EHAM".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/aviowiki_search_response.json"))
            .create_async()
            .await;

        let aviowiki = AviowikiClient::new(Client::new(), &server.url());
        let location = aviowiki.airport("EHAM").await?;

        mock.assert_async().await;
        assert_eq!(
            location,
            Location {
                name: Some("Amsterdam Airport Schiphol".to_string()),
                locality: Some("Amsterdam".to_string()),
                country: Some("Netherlands".to_string()),
                icao: Some("EHAM".to_string()),
                iata: Some("AMS".to_string()),
                ..Location::new(52.308613, 4.763889)
            }
        );
        assert_eq!(
            location.to_string(),
            "geo:52.308613,4.763889?country=Netherlands&iata=AMS&icao=EHAM&locality=Amsterdam&name=Amsterdam+Airport+Schiphol"
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn airport_returns_not_found_for_an_empty_page() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/airports/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "content": [] }"#)
            .create_async()
            .await;

        let aviowiki = AviowikiClient::new(Client::new(), &server.url());
        let result = aviowiki.airport("XXXX").await;

        assert!(matches!(result, Err(LookupError::NotFound(subject)) if subject == "XXXX"));
    }

    #[test(tokio::test)]
    async fn airport_fails_for_a_malformed_body() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/airports/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let aviowiki = AviowikiClient::new(Client::new(), &server.url());
        let result = aviowiki.airport("EHAM").await;

        assert!(matches!(result, Err(LookupError::Request(_))));
    }
}
