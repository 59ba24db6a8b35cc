// src/db/folders.rs
use crate::db::connection::Database;
use crate::domain::changes::{ChangeKind, ChangeRecord};
use crate::domain::folder::Folder;
use crate::domain::provider::FolderProvider;
use crate::errors::ServerError;
use rusqlite::{params, Connection};
use std::collections::HashMap;

/// Which folders a board shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderScope {
    /// Folders on the main board (not attached to a project).
    Unassigned,
    Board(String),
}

pub struct SqliteFolders<'a> {
    db: &'a Database,
    scope: FolderScope,
}

impl<'a> SqliteFolders<'a> {
    pub fn new(db: &'a Database, scope: FolderScope) -> Self {
        Self { db, scope }
    }
}

impl FolderProvider for SqliteFolders<'_> {
    fn list_folders(&self) -> Result<Vec<Folder>, ServerError> {
        self.db.with_conn(|conn| load_folders(conn, &self.scope))
    }
}

/// Looks a folder up regardless of which board it belongs to.
pub fn get_folder(db: &Database, id: i64) -> Result<Option<Folder>, ServerError> {
    db.with_conn(|conn| {
        let mut folders = query_folders(conn, "where f.id = ?", params![id])?;
        attach_changes(conn, &mut folders)?;
        Ok(folders.pop())
    })
}

pub fn total_files(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("select coalesce(sum(files), 0) from folders", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("count files failed: {e}")))
    })
}

fn load_folders(conn: &Connection, scope: &FolderScope) -> Result<Vec<Folder>, ServerError> {
    let mut folders = match scope {
        FolderScope::Unassigned => query_folders(conn, "where f.board_id is null", params![])?,
        FolderScope::Board(board_id) => query_folders(conn, "where f.board_id = ?", params![board_id])?,
    };
    attach_changes(conn, &mut folders)?;
    Ok(folders)
}

fn query_folders(
    conn: &Connection,
    where_clause: &str,
    args: &[&dyn rusqlite::ToSql],
) -> Result<Vec<Folder>, ServerError> {
    let sql = format!(
        "select f.id, f.name, f.path, f.files, f.size_bytes, f.updated_label
         from folders f {where_clause}
         order by f.position, f.id"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(args, |row| {
            Ok(Folder {
                id: row.get(0)?,
                name: row.get(1)?,
                path: row.get(2)?,
                files: row.get(3)?,
                size_bytes: row.get(4)?,
                time: row.get(5)?,
                recent_updates: Vec::new(),
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn attach_changes(conn: &Connection, folders: &mut [Folder]) -> Result<(), ServerError> {
    if folders.is_empty() {
        return Ok(());
    }

    let mut stmt = conn
        .prepare("select folder_id, seq, name, kind, time_label from changes order by folder_id, seq")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let index: HashMap<i64, usize> = folders.iter().enumerate().map(|(i, f)| (f.id, i)).collect();

    for r in rows {
        let (folder_id, seq, name, kind, time) = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        let Some(&slot) = index.get(&folder_id) else {
            continue;
        };
        folders[slot].recent_updates.push(ChangeRecord {
            id: seq,
            name,
            kind: ChangeKind::parse(&kind)?,
            time,
        });
    }
    Ok(())
}
