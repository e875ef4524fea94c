mod costs;
mod exchange;
mod settings;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::app::AppConfig;
use crate::error::{AppError, Result};

pub use costs::{CostStore, open_costs_db};
pub use exchange::RateProvider;
pub use settings::{SettingsService, SettingsSnapshot};

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub costs: CostStore,
    pub rates: RateProvider,
    pub settings: SettingsService,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = rates::RateClient::new(config.rates_timeout_ms)?;
        let costs = CostStore::new(
            config.data_dir.clone(),
            client,
            config.default_rates_url.clone(),
        );
        Ok(Self {
            rates: costs.rate_provider().clone(),
            settings: costs.settings(),
            costs,
        })
    }
}

/// The store a handle was opened against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedStore {
    pub name: String,
    pub version: u32,
    pub db_path: PathBuf,
}

/// Open state shared by every clone of a store handle. Empty until the
/// first successful open and never cleared afterwards.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreSession {
    opened: Arc<OnceLock<OpenedStore>>,
}

impl StoreSession {
    pub(crate) fn get(&self) -> Option<&OpenedStore> {
        self.opened.get()
    }

    pub(crate) fn require(&self) -> Result<&OpenedStore> {
        self.opened.get().ok_or(AppError::NotOpen)
    }

    /// Records the opened store, returning whichever store won if another
    /// open finished first.
    pub(crate) fn settle(&self, store: OpenedStore) -> &OpenedStore {
        self.opened.get_or_init(|| store)
    }
}

pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| AppError::Message(format!("background task failed: {err}")))?
}
