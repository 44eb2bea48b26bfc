use sea_orm::DatabaseConnection;

use crate::server::geocoder::GeocoderClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub geocoder: GeocoderClient,
}
