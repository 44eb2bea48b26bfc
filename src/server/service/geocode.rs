//! Batch address resolution backed by the persisted geocode cache.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::place::PlaceRepository,
    error::Error,
    geocoder::{Coordinates, GeocoderClient},
};

pub struct GeocodeService<'a> {
    db: &'a DatabaseConnection,
    geocoder: &'a GeocoderClient,
}

impl<'a> GeocodeService<'a> {
    /// Creates a new instance of [`GeocodeService`]
    pub fn new(db: &'a DatabaseConnection, geocoder: &'a GeocoderClient) -> Self {
        Self { db, geocoder }
    }

    /// Resolve a batch of addresses to coordinates.
    ///
    /// Cached addresses are answered without any outbound call. Each remaining address
    /// is sent to the collaborator exactly once; a successful result is persisted
    /// (insert-or-update by address) before being merged into the response. An address
    /// that fails to resolve — transport error, bad status, no match, malformed body —
    /// is skipped with a warning and the rest of the batch is unaffected.
    pub async fn resolve(
        &self,
        addresses: Vec<String>,
    ) -> Result<HashMap<String, Coordinates>, Error> {
        let place_repo = PlaceRepository::new(self.db);

        // Dedup within the batch so one address never triggers two outbound calls
        let mut remaining: Vec<String> = {
            let mut seen = HashSet::new();
            addresses
                .into_iter()
                .filter(|address| seen.insert(address.clone()))
                .collect()
        };

        let mut resolved = HashMap::new();

        let cached = place_repo.get_by_addresses(remaining.clone()).await?;
        for place in cached {
            if let (Some(latitude), Some(longitude)) = (place.latitude, place.longitude) {
                remaining.retain(|address| address != &place.address);
                resolved.insert(
                    place.address,
                    Coordinates {
                        latitude,
                        longitude,
                    },
                );
            }
        }

        for address in remaining {
            let coordinates = match self.geocoder.fetch_coordinates(&address).await {
                Ok(Some(coordinates)) => coordinates,
                Ok(None) => {
                    tracing::warn!("geocoder found no match for address {address:?}");
                    continue;
                }
                Err(err) => {
                    tracing::warn!("failed to geocode address {address:?}: {err}");
                    continue;
                }
            };

            place_repo
                .upsert(&address, coordinates.latitude, coordinates.longitude)
                .await?;

            resolved.insert(address, coordinates);
        }

        Ok(resolved)
    }
}
