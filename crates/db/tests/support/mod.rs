#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use cost_core::{CostInput, Currency};
use cost_db::Db;
use tempfile::TempDir;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn make_cost(sum: f64, currency: Currency, category: &str) -> CostInput {
    CostInput {
        sum,
        currency,
        category: category.to_string(),
        description: None,
    }
}

pub fn local_time(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("local time")
}

pub fn index_names(path: &PathBuf) -> Vec<String> {
    let conn = rusqlite::Connection::open(path).expect("open conn");
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'costs' AND name LIKE 'idx_%' ORDER BY name",
        )
        .expect("prepare");
    stmt.query_map([], |row| row.get::<_, String>(0))
        .expect("query")
        .collect::<Result<Vec<_>, _>>()
        .expect("collect")
}
