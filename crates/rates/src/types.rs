/// Reasons a live rate table could not be used. These never leave the
/// rate provider; callers get the fallback table instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatesError {
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("rate request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("rate source answered with status {0}")]
    Status(u16),
    #[error("invalid rate source url: {0}")]
    InvalidUrl(String),
    #[error("malformed rate table: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, RatesError>;
