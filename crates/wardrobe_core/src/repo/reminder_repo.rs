//! Reminder ledger persistence.
//!
//! # Responsibility
//! - Record when each reminder kind last fired.
//! - Keep reminder policy pure by owning the only stateful part of it.
//!
//! # Invariants
//! - At most one row per reminder kind.

use crate::reminder::policy::ReminderKind;
use crate::repo::item_repo::RepoResult;
use rusqlite::{params, Connection};

/// Persistence contract for reminder fire times.
pub trait ReminderLogRepository {
    fn last_fired(&self, kind: ReminderKind) -> RepoResult<Option<i64>>;
    fn record_fired(&self, kind: ReminderKind, fired_at: i64) -> RepoResult<()>;
}

/// SQLite-backed reminder ledger.
pub struct SqliteReminderLogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderLogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReminderLogRepository for SqliteReminderLogRepository<'_> {
    fn last_fired(&self, kind: ReminderKind) -> RepoResult<Option<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT last_fired_at FROM reminder_log WHERE kind = ?1;")?;

        let mut rows = stmt.query([kind.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn record_fired(&self, kind: ReminderKind, fired_at: i64) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO reminder_log (kind, last_fired_at)
             VALUES (?1, ?2)
             ON CONFLICT (kind) DO UPDATE SET last_fired_at = excluded.last_fired_at;",
            params![kind.as_str(), fired_at],
        )?;

        Ok(())
    }
}
