use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64, // In meters, 0 when absent
}

/// Parses the `latitude,longitude[,altitude]` part of a geo URI. Ranges are not validated.
pub fn parse_coordinates(coordinates: &str) -> Result<Coordinates, CoordinateError> {
    let parts: Vec<&str> = coordinates.split(',').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(CoordinateError::MalformedCount(parts.len()));
    }

    let latitude = parts[0].parse::<f64>().map_err(CoordinateError::InvalidLatitude)?;
    let longitude = parts[1].parse::<f64>().map_err(CoordinateError::InvalidLongitude)?;
    let altitude = match parts.get(2) {
        Some(altitude) => altitude.parse::<f64>().map_err(CoordinateError::InvalidAltitude)?,
        None => 0.0,
    };

    Ok(Coordinates {
        latitude,
        longitude,
        altitude,
    })
}

/// Formats coordinates with the shortest representation that parses back to the same values.
/// An altitude of exactly zero is left out.
pub fn format_coordinates(latitude: f64, longitude: f64, altitude: f64) -> String {
    if altitude == 0.0 {
        format!("{},{}", latitude, longitude)
    } else {
        format!("{},{},{}", latitude, longitude, altitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("invalid number of coordinates: {0}, expected 2 or 3")]
    MalformedCount(usize),
    #[error("cannot parse latitude: {0}")]
    InvalidLatitude(ParseFloatError),
    #[error("cannot parse longitude: {0}")]
    InvalidLongitude(ParseFloatError),
    #[error("cannot parse altitude: {0}")]
    InvalidAltitude(ParseFloatError),
}
