use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AirportPage {
    pub content: Vec<Airport>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub name: Option<String>,
    pub icao: Option<String>,
    pub iata: Option<String>,
    pub served_city: Option<String>,
    pub country: Option<Country>,
    pub coordinates: Coordinates,
}

#[derive(Debug, Deserialize)]
pub struct Country {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
