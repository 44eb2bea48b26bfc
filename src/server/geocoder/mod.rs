//! Client for the external geocoding collaborator.
//!
//! The client is built once at startup and shared across requests. Tests point `base_url`
//! at a mock server instead of the real collaborator.

pub mod model;

use crate::server::error::geocode::GeocodeError;
use model::GeocoderResponse;

pub static DEFAULT_GEOCODER_URL: &str = "https://geocode-maps.yandex.ru";

/// A resolved coordinate pair in conventional (latitude, longitude) order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocoderClient {
    /// Creates a new instance of [`GeocoderClient`]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Resolve a single address against the collaborator.
    ///
    /// Returns `Ok(None)` when the collaborator has no match for the address; every other
    /// shortfall (transport failure, non-2xx status, malformed body) is an error.
    pub async fn fetch_coordinates(
        &self,
        address: &str,
    ) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/1.x", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("geocode", address),
                ("apikey", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }

        let body: GeocoderResponse = response.json().await?;

        let most_relevant = match body
            .response
            .geo_object_collection
            .feature_member
            .into_iter()
            .next()
        {
            Some(member) => member,
            None => return Ok(None),
        };

        parse_pos(&most_relevant.geo_object.point.pos).map(Some)
    }
}

/// The wire format encodes a point as "<longitude> <latitude>"; unpack and swap into
/// conventional (latitude, longitude) order.
fn parse_pos(pos: &str) -> Result<Coordinates, GeocodeError> {
    let malformed = || GeocodeError::MalformedResponse(format!("unexpected pos value {pos:?}"));

    let mut parts = pos.split_whitespace();
    let (lon, lat) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lon), Some(lat), None) => (lon, lat),
        _ => return Err(malformed()),
    };

    let longitude: f64 = lon.parse().map_err(|_| malformed())?;
    let latitude: f64 = lat.parse().map_err(|_| malformed())?;

    Ok(Coordinates {
        latitude,
        longitude,
    })
}
