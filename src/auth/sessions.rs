// src/auth/sessions.rs
use crate::auth::accounts::Role;
use crate::auth::token::{generate_session_token, hash_secret};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// The signed-in person as the pages see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// First two characters, upper-cased.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Stores the hash of a fresh token and returns the raw token for the cookie.
pub fn create_session(
    conn: &Connection,
    display_name: &str,
    role: Role,
    now: i64,
) -> Result<String, ServerError> {
    let raw_token = generate_session_token();
    let hash = hash_secret(&raw_token);

    conn.execute(
        r#"
        insert into sessions (token_hash, display_name, role, created_at, expires_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![hash.as_slice(), display_name, role.code(), now, now + SESSION_TTL_SECS],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

pub fn load_session_user(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let hash = hash_secret(raw_token);

    let row: Option<(String, String)> = conn
        .query_row(
            r#"
            select display_name, role
            from sessions
            where token_hash = ?
              and expires_at > ?
              and revoked_at is null
            "#,
            params![hash.as_slice(), now],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    match row {
        Some((name, role)) => Ok(Some(SessionUser {
            name,
            role: Role::parse(&role)?,
        })),
        None => Ok(None),
    }
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_secret(raw_token);
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}
