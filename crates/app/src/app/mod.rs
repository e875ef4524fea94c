use std::path::PathBuf;

use crate::error::Result;
use crate::services::AppServices;

pub const DEFAULT_DB_NAME: &str = "costsdb";

/// Where the store lives and how the rate source is reached.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_name: String,
    pub schema_version: u32,
    pub rates_timeout_ms: u64,
    pub default_rates_url: String,
}

impl AppConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            db_name: DEFAULT_DB_NAME.to_string(),
            schema_version: cost_db::LATEST_SCHEMA_VERSION,
            rates_timeout_ms: rates::DEFAULT_TIMEOUT_MS,
            default_rates_url: rates::DEFAULT_RATES_URL.to_string(),
        }
    }
}

/// Application state shared by the HTTP surface and the CLI.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let services = AppServices::new(&config)?;
        Ok(Self { config, services })
    }

    /// Opens the configured store. Must complete before any cost operation.
    pub async fn initialize(&self) -> Result<()> {
        self.services
            .costs
            .open(&self.config.db_name, self.config.schema_version)
            .await
    }
}
