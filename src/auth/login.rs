// src/auth/login.rs
use crate::auth::accounts::{verify_role_password, Role};
use crate::auth::sessions::{create_session, SessionUser};
use crate::errors::ServerError;
use rusqlite::Connection;
use std::collections::HashMap;
use tracing::{info, warn};

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let role = Role::parse(params.get("role").map(String::as_str).unwrap_or("user"))?;
        Ok(Self {
            username: params.get("username").cloned().unwrap_or_default(),
            password: params.get("password").cloned().unwrap_or_default(),
            role,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignedIn {
    /// Raw token for the cookie (never stored).
    pub token: String,
    pub user: SessionUser,
}

/// Checks the role password and opens a session named after the username.
pub fn sign_in(conn: &Connection, form: &LoginForm, now: i64) -> Result<SignedIn, ServerError> {
    let name = form.username.trim();
    if name.is_empty() {
        return Err(ServerError::BadRequest("Please enter a username".into()));
    }

    if !verify_role_password(conn, form.role, &form.password)? {
        warn!(role = form.role.code(), "failed sign-in");
        return Err(ServerError::Unauthorized("Wrong username or password".into()));
    }

    let token = create_session(conn, name, form.role, now)?;
    info!(user = name, role = form.role.code(), "signed in");

    Ok(SignedIn {
        token,
        user: SessionUser {
            name: name.to_string(),
            role: form.role,
        },
    })
}

/// `Set-Cookie` value for a fresh session.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Pulls one cookie out of a `Cookie` header value.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}
