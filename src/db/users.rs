// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection};

#[derive(Debug, Clone)]
pub struct DirectoryUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub boards: i64,
    pub last_active: String,
    pub disabled: bool,
}

impl DirectoryUser {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty() || self.name.to_lowercase().contains(&q) || self.email.to_lowercase().contains(&q)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total: i64,
    pub active: i64,
}

pub fn list_users(conn: &Connection) -> Result<Vec<DirectoryUser>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, name, email, boards, last_active, status = 'disabled'
             from directory_users order by id",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(DirectoryUser {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                boards: row.get(3)?,
                last_active: row.get(4)?,
                disabled: row.get(5)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut users = Vec::new();
    for r in rows {
        users.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(users)
}

pub fn search_users(conn: &Connection, query: &str) -> Result<Vec<DirectoryUser>, ServerError> {
    Ok(list_users(conn)?
        .into_iter()
        .filter(|u| u.matches_query(query))
        .collect())
}

pub fn user_stats(conn: &Connection) -> Result<UserStats, ServerError> {
    conn.query_row(
        "select count(*), coalesce(sum(status = 'active'), 0) from directory_users",
        [],
        |r| {
            Ok(UserStats {
                total: r.get(0)?,
                active: r.get(1)?,
            })
        },
    )
    .map_err(|e| ServerError::DbError(format!("user stats failed: {e}")))
}

/// Adds a directory user. Email is trimmed and lowercased.
pub fn add_user(conn: &Connection, name: &str, email: &str) -> Result<i64, ServerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServerError::BadRequest("Please enter a name".into()));
    }
    let email = normalize_email(email)?;

    let inserted = conn
        .execute(
            "insert or ignore into directory_users (name, email) values (?, ?)",
            params![name, email],
        )
        .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;
    if inserted == 0 {
        return Err(ServerError::BadRequest(format!("{email} already exists")));
    }
    Ok(conn.last_insert_rowid())
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}
