use crate::server::{config::Config, error::Error, geocoder::GeocoderClient};

/// Build the geocoder client with the configured endpoint and credentials
pub fn build_geocoder_client(config: &Config) -> GeocoderClient {
    GeocoderClient::new(&config.geocoder_url, &config.geocoder_api_key)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
