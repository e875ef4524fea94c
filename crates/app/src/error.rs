use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to open cost store: {0}")]
    StoreOpen(String),
    #[error("cost store is not open")]
    NotOpen,
    #[error("failed to insert cost: {0}")]
    Insert(#[source] cost_db::DbError),
    #[error("failed to read costs: {0}")]
    Report(#[source] cost_db::DbError),
    #[error("db error: {0}")]
    Db(#[from] cost_db::DbError),
    #[error("rates error: {0}")]
    Rates(#[from] rates::RatesError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match err {
            AppError::InvalidInput(_) => (400, Some("invalid_input")),
            AppError::NotOpen => (409, Some("not_open")),
            AppError::StoreOpen(_) => (500, Some("store_open")),
            AppError::Insert(_) => (500, Some("insert_failed")),
            AppError::Report(_) => (500, Some("report_failed")),
            AppError::Db(_) | AppError::Rates(_) | AppError::Io(_) | AppError::Message(_) => {
                (500, None)
            }
        };
        Self {
            status,
            message: err.to_string(),
            code: code.map(str::to_string),
        }
    }
}
