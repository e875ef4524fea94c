use chrono::{DateTime, Datelike, Local, SecondsFormat, Utc};
use cost_core::{CostInput, CostRecord};
use rusqlite::params;

use crate::Db;
use crate::error::Result;
use crate::helpers::{COST_COLUMNS, row_to_cost_record};

impl Db {
    /// Stores a new cost stamped with `added_at`. The calendar fields are
    /// the local date of `added_at`; `date_added` is kept in UTC.
    pub fn insert_cost(&self, cost: &CostInput, added_at: DateTime<Local>) -> Result<CostRecord> {
        let date_added = added_at
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let year = added_at.year();
        let month = added_at.month();
        let day = added_at.day();
        self.conn.execute(
            r#"
            INSERT INTO costs (
              sum, currency, category, description, date_added, year, month, day
            ) VALUES (
              ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8
            )
            "#,
            params![
                cost.sum,
                cost.currency.as_str(),
                cost.category,
                cost.description,
                date_added,
                year,
                month,
                day,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, year, month, day, "inserted cost");
        Ok(CostRecord {
            id,
            sum: cost.sum,
            currency: cost.currency,
            category: cost.category.clone(),
            description: cost.description.clone(),
            date_added,
            year,
            month,
            day,
        })
    }

    pub fn costs_for_month(&self, year: i32, month: u32) -> Result<Vec<CostRecord>> {
        let sql = format!(
            "SELECT {COST_COLUMNS} FROM costs WHERE year = ?1 AND month = ?2 ORDER BY id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![year, month])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(row_to_cost_record(row)?);
        }
        Ok(records)
    }

    pub fn costs_for_year(&self, year: i32) -> Result<Vec<CostRecord>> {
        let sql = format!("SELECT {COST_COLUMNS} FROM costs WHERE year = ?1 ORDER BY id ASC");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![year])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(row_to_cost_record(row)?);
        }
        Ok(records)
    }
}
