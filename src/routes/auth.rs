use crate::auth::accounts::Role;
use crate::auth::login::{clear_session_cookie, session_cookie, sign_in, LoginForm};
use crate::auth::sessions::revoke_session;
use crate::db::activity::log_activity;
use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::router::RequestCtx;
use crate::templates::pages;
use std::collections::HashMap;
use tracing::info;

pub fn login_page(db: &Database, ctx: &RequestCtx) -> ResultResp {
    html_response(pages::login_page(&ctx.chrome(db)?, "", Role::User, None))
}

pub fn login(db: &Database, ctx: &RequestCtx, form: &HashMap<String, String>) -> ResultResp {
    let form = LoginForm::from_params(form)?;

    let signed_in = db.with_conn(|conn| {
        let signed_in = sign_in(conn, &form, ctx.now)?;
        log_activity(
            conn,
            "Sign in",
            &format!("Signed in as {}", signed_in.user.role.label()),
            &signed_in.user.name,
            "system",
            ctx.now,
        )?;
        Ok(signed_in)
    });

    match signed_in {
        Ok(signed_in) => redirect("/dashboard", Some(session_cookie(&signed_in.token))),
        Err(ServerError::BadRequest(msg)) => login_failed(db, ctx, &form, 400, &msg),
        Err(ServerError::Unauthorized(msg)) => login_failed(db, ctx, &form, 401, &msg),
        Err(e) => Err(e),
    }
}

/// Re-renders the form with the message, keeping the typed name and role.
fn login_failed(db: &Database, ctx: &RequestCtx, form: &LoginForm, status: u16, msg: &str) -> ResultResp {
    let page = pages::login_page(&ctx.chrome(db)?, &form.username, form.role, Some(msg));
    html_response_with_status(status, page)
}

pub fn logout(db: &Database, ctx: &RequestCtx) -> ResultResp {
    if let Some(token) = &ctx.session_token {
        db.with_conn(|conn| revoke_session(conn, token, ctx.now))?;
        info!("signed out");
    }
    redirect("/login", Some(clear_session_cookie()))
}
