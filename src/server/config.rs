use crate::server::{error::config::ConfigError, geocoder::DEFAULT_GEOCODER_URL};

pub struct Config {
    pub database_url: String,
    pub geocoder_api_key: String,
    pub geocoder_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("expected a port number, got {value:?}"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            geocoder_api_key: require_env("GEOCODER_API_KEY")?,
            geocoder_url: std::env::var("GEOCODER_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
