use crate::db::activity::{log_activity, recent_activity};
use crate::db::disks::list_disks;
use crate::db::users::{self, search_users, user_stats};
use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::router::{form_field, RequestCtx};
use crate::templates::pages::{self, AdminTab, AdminVm};
use std::collections::HashMap;
use tracing::{info, warn};

const ACTIVITY_LIMIT: i64 = 20;

fn admin_vm(db: &Database, ctx: &RequestCtx, form_error: Option<String>) -> Result<AdminVm, ServerError> {
    let query = ctx.param("q").unwrap_or("").trim().to_string();
    db.with_conn(|conn| {
        Ok(AdminVm {
            tab: AdminTab::parse(ctx.param("tab")),
            stats: user_stats(conn)?,
            users: search_users(conn, &query)?,
            activity: recent_activity(conn, ACTIVITY_LIMIT)?,
            disks: list_disks(conn)?,
            query,
            form_error,
        })
    })
}

pub fn page(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let chrome = ctx.chrome(db)?;
    if !ctx.is_admin() {
        warn!(path = %ctx.path, "admin panel refused");
        return html_response_with_status(403, pages::locked_page(&chrome));
    }
    html_response(pages::admin_page(&chrome, &admin_vm(db, ctx, None)?))
}

pub fn add_user(db: &Database, ctx: &RequestCtx, form: &HashMap<String, String>) -> ResultResp {
    let admin = ctx.require_admin()?;
    let name = form_field(form, "name");
    let email = form_field(form, "email");

    let added = db.with_conn(|conn| {
        let id = users::add_user(conn, name, email)?;
        log_activity(conn, "Add user", &format!("Added {} to the directory", name.trim()), &admin.name, "grant", ctx.now)?;
        Ok(id)
    });

    match added {
        Ok(id) => {
            info!(user_id = id, "directory user added");
            redirect("/admin?tab=users", None)
        }
        Err(ServerError::BadRequest(msg)) => {
            let vm = admin_vm(db, ctx, Some(msg))?;
            html_response_with_status(400, pages::admin_page(&ctx.chrome(db)?, &vm))
        }
        Err(e) => Err(e),
    }
}
