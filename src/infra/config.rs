use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use crate::infra::error::InfraError;

pub struct AppConfig {
    pub database_url: SecretString,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// When set, structured JSON logs are also written to this file.
    pub log_file: Option<PathBuf>,
    /// Apply the embedded migrations on startup.
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let database_url = std::env::var("DATABASE_URL")
            .map(|url| SecretString::new(url.into()))
            .map_err(|_| InfraError::ConfigMissing {
                var: "DATABASE_URL",
            })?;
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, 3001)),
        );
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid { var: "CORS_ORIGIN" })?;

        let log_file: Option<PathBuf> = std::env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            cors_origin,
            log_file,
            run_migrations,
        })
    }
}
