use serde::Deserialize;

use cost_core::Currency;

#[derive(Debug, Deserialize, Default)]
pub struct EmptyRequest {}

#[derive(Debug, Deserialize)]
pub struct AddCostRequest {
    pub sum: f64,
    pub currency: Currency,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Missing `year`/`month` fall back to the current local period.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub currency: Currency,
}

#[derive(Debug, Deserialize)]
pub struct YearlyReportRequest {
    pub year: Option<i32>,
    pub currency: Currency,
}

#[derive(Debug, Deserialize)]
pub struct SettingsPutRequest {
    #[serde(default)]
    pub rates_url: Option<String>,
}
