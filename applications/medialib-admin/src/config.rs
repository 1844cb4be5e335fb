/// Admin client configuration
use anyhow::{bail, Context, Result};
use medialib_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl AdminConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("medialib.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (MEDIALIB_API_URL, MEDIALIB_API_TIMEOUT)
        settings = settings.add_source(
            config::Environment::with_prefix("MEDIALIB")
                .separator("_")
                .try_parsing(true),
        );

        settings
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.url.trim().is_empty() {
            bail!("API URL is required (set MEDIALIB_API_URL or pass --url)");
        }
        if self.api.timeout == 0 {
            bail!("API timeout must be at least one second");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.url.clone()).with_timeout(Duration::from_secs(self.api.timeout))
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        url: default_url(),
        timeout: default_timeout(),
    }
}

fn default_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    5
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { api: default_api() }
    }
}
