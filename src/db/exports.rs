// src/db/exports.rs
use crate::domain::date_range::DateSpan;
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct ExportFile {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub size_label: String,
    pub modified_on: NaiveDate,
}

pub fn list_export_files(conn: &Connection) -> Result<Vec<ExportFile>, ServerError> {
    let mut stmt = conn
        .prepare("select id, name, path, size_label, modified_on from export_files order by modified_on, id")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ExportFile {
                id: row.get(0)?,
                name: row.get(1)?,
                path: row.get(2)?,
                size_label: row.get(3)?,
                modified_on: row.get(4)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

pub fn files_in_span(conn: &Connection, span: DateSpan) -> Result<Vec<ExportFile>, ServerError> {
    Ok(list_export_files(conn)?
        .into_iter()
        .filter(|f| span.contains(f.modified_on))
        .collect())
}

/// Files in `span` whose id was selected. Selection order does not matter.
pub fn selected_files(
    conn: &Connection,
    span: DateSpan,
    ids: &[i64],
) -> Result<Vec<ExportFile>, ServerError> {
    if ids.is_empty() {
        return Err(ServerError::BadRequest("no files selected".into()));
    }
    Ok(files_in_span(conn, span)?
        .into_iter()
        .filter(|f| ids.contains(&f.id))
        .collect())
}
