mod aviowiki;
mod client;
mod domain;
mod geocoder;
mod maze;
mod photon;

pub use aviowiki::AviowikiClient;
pub use client::{LookupError, new_client};
pub use geocoder::{AirportDirectory, Geocoder};
pub use maze::Maze;
pub use photon::PhotonClient;
