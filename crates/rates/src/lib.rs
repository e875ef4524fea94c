mod client;
mod types;

pub use client::{DEFAULT_RATES_URL, DEFAULT_TIMEOUT_MS, RateClient, validate_rates_url};
pub use types::{RatesError, Result};
