use crate::auth::accounts::{set_role_password, Role};
use crate::db::connection::{init_db, seed_db, Database};
use crate::errors::ServerError;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use tempfile::TempDir;

/// Fresh database with the production schema, the demo data and the default
/// role passwords. Keep the `TempDir` alive for the length of the test.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    seed_db(&db, "sql/seed.sql").unwrap_or_else(|e| panic!("Seeding failed: {e}"));
    db.with_conn(|conn| {
        set_role_password(conn, Role::Admin, "admin")?;
        set_role_password(conn, Role::User, "user")
    })
    .expect("role passwords");

    (dir, db)
}

pub struct TestRequest {
    method: Method,
    uri: String,
    cookie: Option<String>,
    htmx: bool,
    form: Option<String>,
}

impl TestRequest {
    pub fn get(uri: &str) -> Self {
        Self {
            method: Method::GET,
            uri: uri.to_string(),
            cookie: None,
            htmx: false,
            form: None,
        }
    }

    pub fn post(uri: &str, form: &str) -> Self {
        Self {
            method: Method::POST,
            uri: uri.to_string(),
            cookie: None,
            htmx: false,
            form: Some(form.to_string()),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn cookie(mut self, cookie: &str) -> Self {
        self.cookie = Some(cookie.to_string());
        self
    }

    pub fn htmx(mut self) -> Self {
        self.htmx = true;
        self
    }

    pub fn send(self, db: &Database) -> Result<Response, ServerError> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some(cookie) = self.cookie {
            builder = builder.header("Cookie", cookie);
        }
        if self.htmx {
            builder = builder.header("HX-Request", "true");
        }
        let body = match self.form {
            Some(form) => {
                builder = builder.header("Content-Type", "application/x-www-form-urlencoded");
                Body::from(form.into_bytes())
            }
            None => Body::empty(),
        };
        handle(builder.body(body).unwrap(), db)
    }

    /// Sends and expects the handler to fail.
    pub fn send_err(self, db: &Database) -> ServerError {
        match self.send(db) {
            Err(e) => e,
            Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        }
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Signs in through the login form and returns a `Cookie` header value.
pub fn sign_in(db: &Database, username: &str, role: &str) -> String {
    let password = role;
    let resp = TestRequest::post(
        "/login",
        &format!("username={username}&password={password}&role={role}"),
    )
    .send(db)
    .expect("login request");
    assert_eq!(resp.status(), 302);

    let set_cookie = header(&resp, "Set-Cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
