#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored row has {0}")]
    InvalidCurrency(#[from] cost_core::UnknownCurrency),
    #[error("schema version must be at least 1, got {0}")]
    InvalidVersion(u32),
    #[error("requested schema version {requested} is older than stored version {current}")]
    VersionDowngrade { current: u32, requested: u32 },
}

pub type Result<T> = std::result::Result<T, DbError>;
