use crate::Db;
use crate::error::{DbError, Result};

const MIGRATION_0001: &str = include_str!("../migrations/0001_init.sql");
const MIGRATION_0002: &str = include_str!("../migrations/0002_add_year_index.sql");

/// Schema revision, migration name, SQL. Every statement is written with
/// `IF NOT EXISTS` so replaying a revision is harmless.
const MIGRATIONS: &[(u32, &str, &str)] = &[
    (1, "0001_init", MIGRATION_0001),
    (2, "0002_add_year_index", MIGRATION_0002),
];

pub const LATEST_SCHEMA_VERSION: u32 = 2;

impl Db {
    pub fn schema_version(&self) -> Result<u32> {
        let version = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;
        Ok(version)
    }

    pub fn migrate(&mut self) -> Result<()> {
        self.migrate_to(LATEST_SCHEMA_VERSION)
    }

    /// Brings the schema up to `version`. Revisions above `version` are left
    /// out; asking for a version older than the stored one is refused.
    pub fn migrate_to(&mut self, version: u32) -> Result<()> {
        if version == 0 {
            return Err(DbError::InvalidVersion(version));
        }
        let current = self.schema_version()?;
        if version < current {
            return Err(DbError::VersionDowngrade {
                current,
                requested: version,
            });
        }
        let tx = self.conn.transaction()?;
        for (revision, name, sql) in MIGRATIONS {
            if *revision > version {
                break;
            }
            tracing::debug!(migration = name, "applying migration");
            tx.execute_batch(sql)?;
        }
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
        Ok(())
    }
}
