use crate::auth::login::{cookie_value, SESSION_COOKIE};
use crate::auth::sessions::{load_session_user, SessionUser};
use crate::db::boards::list_boards;
use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, redirect, ResultResp};
use crate::routes;
use crate::templates::components::{toast, Toast};
use crate::templates::Chrome;
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Everything a handler needs from the request head, read once up front.
#[derive(Debug, Clone)]
pub struct RequestCtx {
    pub path: String,
    pub query: HashMap<String, String>,
    pub raw_query: String,
    /// Set when htmx made the request; such replies are fragments.
    pub htmx: bool,
    pub user: Option<SessionUser>,
    pub session_token: Option<String>,
    pub now: i64,
    pub today: NaiveDate,
}

impl RequestCtx {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }

    pub fn require_admin(&self) -> Result<&SessionUser, ServerError> {
        match &self.user {
            Some(user) if user.is_admin() => Ok(user),
            _ => Err(ServerError::Forbidden("Administrator access required".into())),
        }
    }

    /// Sidebar data for a full page render.
    pub fn chrome(&self, db: &Database) -> Result<Chrome, ServerError> {
        Ok(Chrome {
            user: self.user.clone(),
            boards: db.with_conn(|conn| list_boards(conn))?,
            active: self.path.clone(),
        })
    }
}

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let ctx = request_ctx(&req, db)?;
    debug!(%method, path = %ctx.path, htmx = ctx.htmx, "route");

    let path = ctx.path.clone();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => redirect("/dashboard", None),

        ("GET", ["dashboard"]) => routes::dashboard::page(db, &ctx),
        ("GET", ["dashboard", "export-files"]) => routes::dashboard::export_files(db, &ctx),
        ("GET", ["export"]) => routes::dashboard::export(db, &ctx),
        ("POST", ["actions", action]) => routes::dashboard::quick_action(&ctx, action),

        ("GET", ["folders"]) => routes::folders::board(db, &ctx),
        ("GET", ["folders", id, "card"]) => routes::folders::card(db, &ctx, id),
        ("POST", ["folders", id, action]) => routes::folders::action(db, &ctx, id, action),
        ("POST", ["snapshots"]) => routes::folders::save_snapshot(db, &ctx, &read_form(req)?),

        ("GET", ["project", board]) => routes::project::page(db, &ctx, board),
        ("POST", ["project", board, "notify"]) => routes::project::toggle_notify(db, &ctx, board),
        ("POST", ["project", board, "refresh"]) => routes::project::refresh_all(db, &ctx, board),
        ("POST", ["boards"]) => routes::project::create_board(db, &ctx, &read_form(req)?),

        ("GET", ["admin"]) => routes::admin::page(db, &ctx),
        ("POST", ["admin", "users"]) => routes::admin::add_user(db, &ctx, &read_form(req)?),

        ("GET", ["login"]) => routes::auth::login_page(db, &ctx),
        ("POST", ["login"]) => routes::auth::login(db, &ctx, &read_form(req)?),
        ("POST", ["logout"]) => routes::auth::logout(db, &ctx),

        ("GET", ["api", "folders"]) => routes::folders::api_folders(db),
        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),

        ("GET", _) => redirect("/dashboard", None),
        _ => Err(ServerError::NotFound),
    }
}

fn request_ctx(req: &Request, db: &Database) -> Result<RequestCtx, ServerError> {
    let now = chrono::Utc::now().timestamp();
    let session_token = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| cookie_value(header, SESSION_COOKIE))
        .map(str::to_string);

    let user = match &session_token {
        Some(token) => db.with_conn(|conn| load_session_user(conn, token, now))?,
        None => None,
    };

    let raw_query = req.uri().query().unwrap_or("").to_string();

    Ok(RequestCtx {
        path: req.uri().path().to_string(),
        query: parse_pairs(raw_query.as_bytes()),
        raw_query,
        htmx: req
            .headers()
            .get("HX-Request")
            .is_some_and(|v| v.as_bytes() == b"true"),
        user,
        session_token,
        now,
        today: chrono::Local::now().date_naive(),
    })
}

/// Last value wins for repeated keys.
fn parse_pairs(input: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(input).into_owned().collect()
}

/// Every value of `key`, in order. Used for repeated checkboxes.
pub fn all_values(raw: &str, key: &str) -> Vec<String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;
    Ok(parse_pairs(&body))
}

/// A form value, or "" when the field is missing.
pub fn form_field<'a>(form: &'a HashMap<String, String>, key: &str) -> &'a str {
    form.get(key).map(String::as_str).unwrap_or("")
}

/// Replies to a fire-and-forget action: toast fragments for htmx, otherwise
/// a redirect back to `back`.
pub fn notice_reply(ctx: &RequestCtx, toasts: &[Toast], back: &str) -> ResultResp {
    if ctx.htmx {
        html_response(crate::templates::components::toasts(toasts))
    } else {
        redirect(back, None)
    }
}

/// Under htmx a validation failure becomes an error toast.
pub fn toast_on_bad_request(ctx: &RequestCtx, result: ResultResp) -> ResultResp {
    match result {
        Err(ServerError::BadRequest(msg)) if ctx.htmx => html_response(toast(&Toast::error(msg))),
        other => other,
    }
}
