use anyhow::{Context, Result};

/// Default maximum resume upload size: 5 MiB. Must match the gateway's.
const DEFAULT_MAX_RESUME_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Client configuration. Consumed read-only.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote resume review API, including the versioned
    /// prefix (e.g. `http://localhost:8080/api/v1`).
    pub api_base_url: String,
    pub max_resume_size_bytes: u64,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, max_resume_size_bytes: u64) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            max_resume_size_bytes,
        }
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(ClientConfig {
            api_base_url: std::env::var("API_BASE_URL")
                .context("Required environment variable 'API_BASE_URL' is not set")?,
            max_resume_size_bytes: std::env::var("MAX_RESUME_SIZE_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_RESUME_SIZE_BYTES.to_string())
                .parse::<u64>()
                .context("MAX_RESUME_SIZE_BYTES must be a byte count")?,
        })
    }
}
