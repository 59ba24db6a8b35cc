// src/db/boards.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Colours a board marker may use.
pub const BOARD_COLORS: [&str; 5] = ["violet", "blue", "emerald", "amber", "pink"];

#[derive(Debug, Clone)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub root_path: String,
    pub updated_label: String,
    pub updates: i64,
    pub color: String,
    pub notify: bool,
}

fn row_to_board(row: &rusqlite::Row<'_>) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        name: row.get(1)?,
        root_path: row.get(2)?,
        updated_label: row.get(3)?,
        updates: row.get(4)?,
        color: row.get(5)?,
        notify: row.get(6)?,
    })
}

const BOARD_COLUMNS: &str = "id, name, root_path, updated_label, updates, color, notify";

pub fn list_boards(conn: &Connection) -> Result<Vec<Board>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {BOARD_COLUMNS} from boards order by created_at, rowid"
        ))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_board)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut boards = Vec::new();
    for r in rows {
        boards.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(boards)
}

pub fn get_board(conn: &Connection, id: &str) -> Result<Option<Board>, ServerError> {
    conn.query_row(
        &format!("select {BOARD_COLUMNS} from boards where id = ?"),
        params![id],
        row_to_board,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("board lookup failed: {e}")))
}

/// Validates and inserts a new, empty board. Returns its id.
pub fn create_board(
    conn: &Connection,
    name: &str,
    color: &str,
    now_millis: i64,
) -> Result<String, ServerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServerError::BadRequest("Please enter a board name".into()));
    }
    if !BOARD_COLORS.contains(&color) {
        return Err(ServerError::BadRequest(format!("unknown board colour: {color}")));
    }

    let id = format!("proj-{now_millis}");
    conn.execute(
        "insert into boards (id, name, root_path, updated_label, updates, color, notify, created_at)
         values (?, ?, '', 'just now', 0, ?, 1, ?)",
        params![id, name, color, now_millis],
    )
    .map_err(|e| ServerError::DbError(format!("create board failed: {e}")))?;

    Ok(id)
}

/// Flips the notification flag and returns the new value.
pub fn toggle_notify(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let changed = conn
        .execute("update boards set notify = not notify where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("toggle notify failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }

    conn.query_row("select notify from boards where id = ?", params![id], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("read notify failed: {e}")))
}
