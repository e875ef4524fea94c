#![allow(dead_code)]

use chrono::{Local, TimeZone};
use cost_app::CostStore;
use cost_core::{CostInput, Currency};
use cost_db::Db;
use rates::RateClient;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const STORE_NAME: &str = "costsdb";

pub struct TestStore {
    pub _dir: TempDir,
    pub store: CostStore,
}

pub fn live_rates() -> serde_json::Value {
    json!({"USD": 1, "ILS": 4, "GBP": 0.5, "EURO": 0.8})
}

pub async fn rates_server(response: ResponseTemplate) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates.json"))
        .respond_with(response)
        .mount(&server)
        .await;
    let url = format!("{}/rates.json", server.uri());
    (server, url)
}

pub fn unopened_store(rates_url: &str) -> TestStore {
    let dir = tempfile::tempdir().expect("temp dir");
    let client = RateClient::new(2_000).expect("rate client");
    let store = CostStore::new(dir.path().join("data"), client, rates_url);
    TestStore { _dir: dir, store }
}

pub async fn open_store(rates_url: &str) -> TestStore {
    let test_store = unopened_store(rates_url);
    test_store
        .store
        .open(STORE_NAME, cost_db::LATEST_SCHEMA_VERSION)
        .await
        .expect("open store");
    test_store
}

pub fn cost(sum: f64, currency: Currency, category: &str) -> CostInput {
    CostInput {
        sum,
        currency,
        category: category.to_string(),
        description: None,
    }
}

/// Writes a cost with a fixed timestamp straight into the opened store.
pub fn insert_at(store: &CostStore, input: &CostInput, year: i32, month: u32, day: u32) {
    let opened = store.opened().expect("store opened");
    let db = Db::open(&opened.db_path).expect("open db");
    let added_at = Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("local time");
    db.insert_cost(input, added_at).expect("insert cost");
}

/// Drops the costs table behind the store's back so engine calls fail.
pub fn break_costs_table(store: &CostStore) {
    let opened = store.opened().expect("store opened");
    let conn = rusqlite::Connection::open(&opened.db_path).expect("open raw connection");
    conn.execute_batch("DROP TABLE costs").expect("drop costs");
}
