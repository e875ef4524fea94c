pub mod app;
pub mod error;
pub mod services;
pub mod util;

pub use app::{AppConfig, AppState, DEFAULT_DB_NAME};
pub use error::{ApiError, AppError, Result};
pub use services::{
    AppServices, CostStore, OpenedStore, RateProvider, SettingsService, SettingsSnapshot,
    open_costs_db,
};
pub use util::time::current_period;

pub use cost_db::LATEST_SCHEMA_VERSION;
pub use rates::DEFAULT_TIMEOUT_MS as DEFAULT_RATES_TIMEOUT_MS;
