use std::sync::Arc;

use cost_core::RateTable;
use cost_db::Db;
use rates::RateClient;

use crate::services::{StoreSession, run_blocking};

/// Resolves the configured rate source and fetches a fresh table on every
/// call. Never fails: any problem yields the fallback table.
#[derive(Clone)]
pub struct RateProvider {
    client: RateClient,
    session: StoreSession,
    default_url: Arc<str>,
}

impl RateProvider {
    pub(crate) fn new(client: RateClient, session: StoreSession, default_url: Arc<str>) -> Self {
        Self {
            client,
            session,
            default_url,
        }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    pub async fn configured_url(&self) -> String {
        let Some(opened) = self.session.get() else {
            return self.default_url.to_string();
        };
        let db_path = opened.db_path.clone();
        let stored = run_blocking(move || Ok(Db::open(&db_path)?.get_rates_url()?)).await;
        match stored {
            Ok(Some(url)) => url,
            Ok(None) => self.default_url.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read rates url, using default");
                self.default_url.to_string()
            }
        }
    }

    pub async fn fetch_exchange_rates(&self) -> RateTable {
        let url = self.configured_url().await;
        self.client.fetch_or_fallback(&url).await
    }
}
