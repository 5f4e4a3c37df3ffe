use std::env;

use crate::constants::{DEFAULT_TABLE_CAPACITY, DEFAULT_TOKEN_TTL_DAYS};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub table_capacity: u32,
    pub public_base_url: String,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/table-magic.db?mode=rwc".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set for token signing")?;

        let token_ttl_days = env::var("TOKEN_TTL_DAYS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_DAYS.to_string())
            .parse()
            .map_err(|_| "Invalid TOKEN_TTL_DAYS")?;

        let table_capacity = env::var("TABLE_CAPACITY")
            .unwrap_or_else(|_| DEFAULT_TABLE_CAPACITY.to_string())
            .parse()
            .map_err(|_| "Invalid TABLE_CAPACITY")?;

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            database_url,
            allowed_origins,
            jwt_secret,
            token_ttl_days,
            table_capacity,
            public_base_url,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Build the public summon URL for one table, as embedded in that
    /// table's printed QR code.
    pub fn summon_url(&self, magician_id: i64, table_number: u32) -> String {
        format!(
            "{}/summon?m={}&t={}",
            self.public_base_url, magician_id, table_number
        )
    }
}
