use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub rates_url: String,
    pub default_rates_url: String,
    pub db_path: String,
    pub app_data_dir: String,
    pub schema_version: u32,
}
