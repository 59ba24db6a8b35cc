// src/db/activity.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection};

#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub action: String,
    pub description: String,
    pub target: String,
    pub time_label: String,
    pub kind: String,
}

/// Appends an entry stamped "just now".
pub fn log_activity(
    conn: &Connection,
    action: &str,
    description: &str,
    target: &str,
    kind: &str,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into activity_log (action, description, target, time_label, kind, created_at)
         values (?, ?, ?, 'just now', ?, ?)",
        params![action, description, target, kind, now],
    )
    .map_err(|e| ServerError::DbError(format!("log activity failed: {e}")))?;
    Ok(())
}

/// Oldest first, at most `limit` of the newest entries.
pub fn recent_activity(conn: &Connection, limit: i64) -> Result<Vec<ActivityEntry>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select action, description, target, time_label, kind from (
                select * from activity_log order by id desc limit ?
             ) order by id",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![limit], |row| {
            Ok(ActivityEntry {
                action: row.get(0)?,
                description: row.get(1)?,
                target: row.get(2)?,
                time_label: row.get(3)?,
                kind: row.get(4)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order_within_limit() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(&std::fs::read_to_string("sql/schema.sql").unwrap())
            .unwrap();
        conn.execute_batch(&std::fs::read_to_string("sql/seed.sql").unwrap())
            .unwrap();

        log_activity(&conn, "Refresh", "Refreshed snapshot of fx", "fx", "system", 10).unwrap();

        let all = recent_activity(&conn, 50).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].action, "Grant access");
        assert_eq!(all[3].target, "fx");
        assert_eq!(all[3].time_label, "just now");

        let last_two = recent_activity(&conn, 2).unwrap();
        let actions: Vec<&str> = last_two.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["Switch user", "Refresh"]);
    }
}
