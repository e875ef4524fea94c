use rusqlite::params;

use crate::Db;
use crate::error::Result;

pub const RATES_URL_KEY: &str = "exchange_rates_url";

impl Db {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM app_setting WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get::<_, String>(0)?))
        } else {
            Ok(None)
        }
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO app_setting (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    pub fn clear_setting(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM app_setting WHERE key = ?1", [key])?;
        Ok(())
    }

    pub fn get_rates_url(&self) -> Result<Option<String>> {
        let url = self
            .get_setting(RATES_URL_KEY)?
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(url)
    }

    pub fn set_rates_url(&self, url: Option<&str>) -> Result<()> {
        match url {
            Some(url) => self.set_setting(RATES_URL_KEY, url),
            None => self.clear_setting(RATES_URL_KEY),
        }
    }
}
