use std::{env, net::SocketAddr};

use crate::utils::error::{AppError, AppResult};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub db_name: String,
    pub server_addr: SocketAddr,
    pub cors_origin: Option<String>,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mongo_uri = lookup("MONGO_URI")
            .ok_or_else(|| AppError::InternalError("MONGO_URI must be set in .env".to_string()))?;
        let db_name = lookup("DB_NAME")
            .ok_or_else(|| AppError::InternalError("DB_NAME must be set in .env".to_string()))?;

        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| {
            tracing::warn!(
                "SERVER_ADDR environment variable not set, using default {}",
                DEFAULT_SERVER_ADDR
            );
            DEFAULT_SERVER_ADDR.to_string()
        });
        let server_addr = server_addr.parse::<SocketAddr>().map_err(|_| {
            AppError::InternalError(format!("Failed to parse SERVER_ADDR: {}", server_addr))
        })?;

        let cors_origin = lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty());

        Ok(Self {
            mongo_uri,
            db_name,
            server_addr,
            cors_origin,
        })
    }
}
