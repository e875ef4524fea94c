use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use cost_core::{CategoryTotal, CostInput, CostRecord, Currency, MonthReport, MonthTotal};
use cost_db::Db;
use rates::RateClient;

use crate::error::{AppError, Result};
use crate::services::{OpenedStore, RateProvider, SettingsService, StoreSession, run_blocking};

/// Handle to the cost store.
///
/// A new handle starts unopened; every operation except [`CostStore::open`]
/// fails with [`AppError::NotOpen`] until an open succeeds. Clones share
/// the same open state. Each operation opens its own connection on the
/// blocking pool, so calls never hold a connection across awaits.
#[derive(Clone)]
pub struct CostStore {
    data_dir: Arc<PathBuf>,
    session: StoreSession,
    rates: RateProvider,
}

/// Builds a store handle and opens it in one step.
pub async fn open_costs_db(
    data_dir: impl Into<PathBuf>,
    client: RateClient,
    default_rates_url: impl Into<String>,
    name: &str,
    version: u32,
) -> Result<CostStore> {
    let store = CostStore::new(data_dir, client, default_rates_url);
    store.open(name, version).await?;
    Ok(store)
}

impl CostStore {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        client: RateClient,
        default_rates_url: impl Into<String>,
    ) -> Self {
        let session = StoreSession::default();
        let default_url: Arc<str> = Arc::from(default_rates_url.into());
        Self {
            data_dir: Arc::new(data_dir.into()),
            rates: RateProvider::new(client, session.clone(), default_url),
            session,
        }
    }

    pub fn rate_provider(&self) -> &RateProvider {
        &self.rates
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.session.clone(), Arc::from(self.rates.default_url()))
    }

    pub fn opened(&self) -> Option<&OpenedStore> {
        self.session.get()
    }

    pub fn is_open(&self) -> bool {
        self.session.get().is_some()
    }

    /// Opens or creates `<data_dir>/<name>.sqlite` and upgrades its schema to
    /// `version`. Re-opening with the same name and version is a no-op.
    pub async fn open(&self, name: &str, version: u32) -> Result<()> {
        validate_store_name(name)?;
        if let Some(opened) = self.session.get() {
            return ensure_same_store(opened, name, version);
        }
        let data_dir = self.data_dir.as_ref().clone();
        let db_path = data_dir.join(format!("{name}.sqlite"));
        let path = db_path.clone();
        run_blocking(move || {
            std::fs::create_dir_all(&data_dir).map_err(|err| {
                AppError::StoreOpen(format!("create {}: {}", data_dir.display(), err))
            })?;
            let mut db = Db::open(&path).map_err(|err| AppError::StoreOpen(err.to_string()))?;
            db.migrate_to(version)
                .map_err(|err| AppError::StoreOpen(err.to_string()))
        })
        .await?;

        let opened = self.session.settle(OpenedStore {
            name: name.to_string(),
            version,
            db_path,
        });
        ensure_same_store(opened, name, version)?;
        tracing::info!(
            name,
            version,
            path = %opened.db_path.display(),
            "opened cost store"
        );
        Ok(())
    }

    /// Stamps the entry with the current time and stores it. Returns the
    /// caller's fields unchanged.
    pub async fn add_cost(&self, cost: CostInput) -> Result<CostInput> {
        let db_path = self.session.require()?.db_path.clone();
        let record = run_blocking(move || {
            let db = Db::open(&db_path).map_err(AppError::Insert)?;
            db.insert_cost(&cost, Local::now()).map_err(AppError::Insert)
        })
        .await?;
        Ok(record.summary())
    }

    pub async fn get_report(
        &self,
        year: i32,
        month: u32,
        currency: Currency,
    ) -> Result<MonthReport> {
        let records = self.month_records(year, month).await?;
        let rates = self.rates.fetch_exchange_rates().await;
        tracing::debug!(year, month, count = records.len(), "assembled month report");
        Ok(cost_core::month_report(year, month, currency, &records, &rates))
    }

    pub async fn get_costs_by_category(
        &self,
        year: i32,
        month: u32,
        currency: Currency,
    ) -> Result<Vec<CategoryTotal>> {
        let records = self.month_records(year, month).await?;
        let rates = self.rates.fetch_exchange_rates().await;
        Ok(cost_core::category_totals(&records, currency, &rates))
    }

    pub async fn get_yearly_report(&self, year: i32, currency: Currency) -> Result<Vec<MonthTotal>> {
        let db_path = self.session.require()?.db_path.clone();
        let records = run_blocking(move || {
            let db = Db::open(&db_path).map_err(AppError::Report)?;
            db.costs_for_year(year).map_err(AppError::Report)
        })
        .await?;
        let rates = self.rates.fetch_exchange_rates().await;
        tracing::debug!(year, count = records.len(), "assembled yearly report");
        Ok(cost_core::monthly_totals(&records, currency, &rates))
    }

    async fn month_records(&self, year: i32, month: u32) -> Result<Vec<CostRecord>> {
        let db_path = self.session.require()?.db_path.clone();
        run_blocking(move || {
            let db = Db::open(&db_path).map_err(AppError::Report)?;
            db.costs_for_month(year, month).map_err(AppError::Report)
        })
        .await
    }
}

fn validate_store_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
        && !name.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("invalid store name {name:?}")))
    }
}

fn ensure_same_store(opened: &OpenedStore, name: &str, version: u32) -> Result<()> {
    if opened.name == name && opened.version == version {
        Ok(())
    } else {
        Err(AppError::StoreOpen(format!(
            "store already opened as {} (version {})",
            opened.name, opened.version
        )))
    }
}
