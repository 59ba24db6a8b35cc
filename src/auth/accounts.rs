// src/auth/accounts.rs
use crate::auth::token::{hash_secret, hashes_equal};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn code(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn parse(code: &str) -> Result<Self, ServerError> {
        match code {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(ServerError::BadRequest(format!("unknown role: {other}"))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::User => "User",
        }
    }
}

/// Sets (or replaces) the shared password for a role.
pub fn set_role_password(conn: &Connection, role: Role, password: &str) -> Result<(), ServerError> {
    let hash = hash_secret(password);
    conn.execute(
        "insert into accounts (role, password_hash) values (?, ?)
         on conflict(role) do update set password_hash = excluded.password_hash",
        params![role.code(), hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("set role password failed: {e}")))?;
    Ok(())
}

pub fn verify_role_password(conn: &Connection, role: Role, password: &str) -> Result<bool, ServerError> {
    let stored: Option<Vec<u8>> = conn
        .query_row(
            "select password_hash from accounts where role = ?",
            params![role.code()],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("account lookup failed: {e}")))?;

    Ok(stored
        .map(|hash| hashes_equal(&hash, &hash_secret(password)))
        .unwrap_or(false))
}
