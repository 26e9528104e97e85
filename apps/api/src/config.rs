use anyhow::{Context, Result};

/// Default maximum resume upload size: 5 MiB.
const DEFAULT_MAX_RESUME_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Gateway configuration loaded from environment variables.
/// Every value has a sensible local-development default.
#[derive(Debug, Clone)]
pub struct Config {
    pub hostname: String,
    pub port: u16,
    pub max_resume_size_bytes: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hostname: std::env::var("SERVER_HOSTNAME").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("SERVER_PORT must be a valid port number")?,
            max_resume_size_bytes: std::env::var("MAX_RESUME_SIZE_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_RESUME_SIZE_BYTES.to_string())
                .parse::<u64>()
                .context("MAX_RESUME_SIZE_BYTES must be a byte count")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
