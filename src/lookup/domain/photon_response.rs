use serde::Deserialize;

// API: https://github.com/komoot/photon#search-and-geocoding
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2], // [longitude, latitude]
}

#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    pub name: Option<String>,
    pub city: Option<String>,
    pub locality: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}
