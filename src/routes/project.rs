use crate::db::activity::log_activity;
use crate::db::boards::{self, get_board, Board};
use crate::db::disks::list_disks;
use crate::db::folders::{FolderScope, SqliteFolders};
use crate::db::Database;
use crate::domain::date_range::{DateSpan, TimelineFilter};
use crate::domain::folder::{search_folders, BoardLayout};
use crate::domain::provider::FolderProvider;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::router::{form_field, notice_reply, RequestCtx};
use crate::templates::components::Toast;
use crate::templates::pages::{self, ProjectVm};
use std::collections::HashMap;
use tracing::info;

fn board_or_404(db: &Database, id: &str) -> Result<Board, ServerError> {
    db.with_conn(|conn| get_board(conn, id))?
        .ok_or(ServerError::NotFound)
}

pub fn page(db: &Database, ctx: &RequestCtx, id: &str) -> ResultResp {
    let board = board_or_404(db, id)?;
    let query = ctx.param("q").unwrap_or("").trim().to_string();
    let folders = SqliteFolders::new(db, FolderScope::Board(board.id.clone())).list_folders()?;

    let filter = TimelineFilter::parse(ctx.param("range"))?;
    let custom = DateSpan::from_params(&ctx.query)?;

    let vm = ProjectVm {
        folders: search_folders(folders, &query),
        query,
        layout: BoardLayout::parse(ctx.param("layout")),
        filter,
        custom,
        span: filter.span(ctx.today, custom),
        disks: db.with_conn(|conn| list_disks(conn))?,
        board,
    };

    html_response(pages::project_page(&ctx.chrome(db)?, &vm))
}

pub fn toggle_notify(db: &Database, ctx: &RequestCtx, id: &str) -> ResultResp {
    let on = db.with_conn(|conn| boards::toggle_notify(conn, id))?;
    info!(board = id, on, "board notifications toggled");

    let toast = if on {
        Toast::success("Notifications on")
    } else {
        Toast::info("Notifications off")
    };
    notice_reply(ctx, &[toast], &format!("/project/{id}"))
}

pub fn refresh_all(db: &Database, ctx: &RequestCtx, id: &str) -> ResultResp {
    let board = board_or_404(db, id)?;
    db.with_conn(|conn| {
        log_activity(conn, "Refresh snapshot", "Requested new snapshots of every folder", &board.name, "system", ctx.now)
    })?;
    info!(board = id, "refresh of all folders requested");

    let toast = Toast::info(format!("Refreshing snapshots of all folders in {}...", board.name));
    notice_reply(ctx, &[toast], &format!("/project/{id}"))
}

pub fn create_board(db: &Database, ctx: &RequestCtx, form: &HashMap<String, String>) -> ResultResp {
    let admin = ctx.require_admin()?;
    let name = form_field(form, "name");
    let color = match form_field(form, "color") {
        "" => boards::BOARD_COLORS[0],
        other => other,
    };

    let id = db.with_conn(|conn| {
        let id = boards::create_board(conn, name, color, chrono::Utc::now().timestamp_millis())?;
        log_activity(conn, "Create board", &format!("Created board {}", name.trim()), &admin.name, "grant", ctx.now)?;
        Ok(id)
    })?;
    info!(board = %id, "board created");

    redirect(&format!("/project/{id}"), None)
}
