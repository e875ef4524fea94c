use std::path::PathBuf;
use std::sync::Arc;

use cost_db::Db;

use crate::error::{AppError, Result};
use crate::services::{StoreSession, run_blocking};

/// Snapshot of user-configurable settings stored in the DB.
#[derive(Debug, Clone)]
pub struct SettingsSnapshot {
    pub rates_url: String,
    pub default_rates_url: String,
    pub db_path: PathBuf,
    pub schema_version: u32,
}

#[derive(Clone)]
pub struct SettingsService {
    session: StoreSession,
    default_url: Arc<str>,
}

impl SettingsService {
    pub(crate) fn new(session: StoreSession, default_url: Arc<str>) -> Self {
        Self {
            session,
            default_url,
        }
    }

    pub async fn get(&self) -> Result<SettingsSnapshot> {
        let opened = self.session.require()?.clone();
        let db_path = opened.db_path.clone();
        let stored = run_blocking(move || Ok(Db::open(&db_path)?.get_rates_url()?)).await?;
        Ok(SettingsSnapshot {
            rates_url: stored.unwrap_or_else(|| self.default_url.to_string()),
            default_rates_url: self.default_url.to_string(),
            db_path: opened.db_path,
            schema_version: opened.version,
        })
    }

    /// Stores a custom rate source. `None` or a blank value restores the
    /// default.
    pub async fn update(&self, rates_url: Option<&str>) -> Result<()> {
        let db_path = self.session.require()?.db_path.clone();
        let rates_url = match rates_url.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => {
                let url = rates::validate_rates_url(value)
                    .map_err(|err| AppError::InvalidInput(err.to_string()))?;
                Some(url.to_string())
            }
            None => None,
        };
        run_blocking(move || {
            Db::open(&db_path)?.set_rates_url(rates_url.as_deref())?;
            Ok(())
        })
        .await
    }
}
