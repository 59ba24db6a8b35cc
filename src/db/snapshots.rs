// src/db/snapshots.rs
use crate::db::disks::disk_exists;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFrequency {
    Manual,
    Hourly,
    Daily,
    Weekly,
}

impl SnapshotFrequency {
    pub const ALL: [SnapshotFrequency; 4] = [
        SnapshotFrequency::Manual,
        SnapshotFrequency::Hourly,
        SnapshotFrequency::Daily,
        SnapshotFrequency::Weekly,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SnapshotFrequency::Manual => "manual",
            SnapshotFrequency::Hourly => "hourly",
            SnapshotFrequency::Daily => "daily",
            SnapshotFrequency::Weekly => "weekly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SnapshotFrequency::Manual => "Manual",
            SnapshotFrequency::Hourly => "Every hour",
            SnapshotFrequency::Daily => "Daily at 00:00",
            SnapshotFrequency::Weekly => "Weekly",
        }
    }

    pub fn parse(code: &str) -> Result<Self, ServerError> {
        Self::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown frequency: {code}")))
    }
}

pub fn save_schedule(
    conn: &Connection,
    disk_id: &str,
    path: &str,
    frequency: SnapshotFrequency,
    now: i64,
) -> Result<i64, ServerError> {
    let path = path.trim();
    if !path.starts_with('/') {
        return Err(ServerError::BadRequest("folder path must be absolute".into()));
    }
    if !disk_exists(conn, disk_id)? {
        return Err(ServerError::BadRequest(format!("unknown disk: {disk_id}")));
    }

    conn.execute(
        "insert into snapshot_schedules (disk_id, path, frequency, created_at) values (?, ?, ?, ?)",
        params![disk_id, path, frequency.code(), now],
    )
    .map_err(|e| ServerError::DbError(format!("save snapshot schedule failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}
