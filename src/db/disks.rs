// src/db/disks.rs
use crate::domain::disk::{Disk, UsageCategory};
use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn list_disks(conn: &Connection) -> Result<Vec<Disk>, ServerError> {
    let mut stmt = conn
        .prepare("select id, name, kind, total_gb, used_gb, color from disks order by position, id")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Disk {
                id: row.get(0)?,
                name: row.get(1)?,
                kind: row.get(2)?,
                total_gb: row.get(3)?,
                used_gb: row.get(4)?,
                color: row.get(5)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut disks = Vec::new();
    for r in rows {
        disks.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(disks)
}

pub fn disk_exists(conn: &Connection, disk_id: &str) -> Result<bool, ServerError> {
    conn.query_row(
        "select exists(select 1 from disks where id = ?)",
        params![disk_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("disk lookup failed: {e}")))
}

pub fn list_usage_categories(conn: &Connection) -> Result<Vec<UsageCategory>, ServerError> {
    let mut stmt = conn
        .prepare("select name, gb, color from usage_categories order by position, id")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(UsageCategory {
                name: row.get(0)?,
                gb: row.get(1)?,
                color: row.get(2)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
