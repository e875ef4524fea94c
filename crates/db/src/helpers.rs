use cost_core::{CostRecord, Currency};
use rusqlite::Row;

use crate::error::Result;

pub(crate) const COST_COLUMNS: &str =
    "id, sum, currency, category, description, date_added, year, month, day";

pub(crate) fn row_to_cost_record(row: &Row<'_>) -> Result<CostRecord> {
    let currency: String = row.get(2)?;
    Ok(CostRecord {
        id: row.get(0)?,
        sum: row.get(1)?,
        currency: currency.parse::<Currency>()?,
        category: row.get(3)?,
        description: row.get(4)?,
        date_added: row.get(5)?,
        year: row.get(6)?,
        month: row.get(7)?,
        day: row.get(8)?,
    })
}
