use crate::db::disks::{list_disks, list_usage_categories};
use crate::db::exports::{files_in_span, selected_files};
use crate::db::folders::total_files;
use crate::db::Database;
use crate::domain::date_range::export_span;
use crate::domain::quick_action::find_action;
use crate::errors::ServerError;
use crate::responses::{html_response, xlsx_response, ResultResp};
use crate::router::{all_values, notice_reply, RequestCtx};
use crate::spreadsheets::export_files_xlsx;
use crate::templates::components::Toast;
use crate::templates::pages::{self, DashboardVm, ExportVm};
use tracing::info;

fn export_vm(db: &Database, ctx: &RequestCtx) -> Result<ExportVm, ServerError> {
    let (preset, span) = export_span(&ctx.query, ctx.today)?;
    let files = db.with_conn(|conn| files_in_span(conn, span))?;
    Ok(ExportVm { preset, span, files })
}

pub fn page(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let (disks, categories) =
        db.with_conn(|conn| Ok((list_disks(conn)?, list_usage_categories(conn)?)))?;

    let vm = DashboardVm {
        disks,
        categories,
        total_files: total_files(db)?,
        export: export_vm(db, ctx)?,
    };

    html_response(pages::dashboard_page(&ctx.chrome(db)?, &vm))
}

pub fn export_files(db: &Database, ctx: &RequestCtx) -> ResultResp {
    html_response(pages::export_files(&export_vm(db, ctx)?))
}

/// XLSX of the checked files that are still inside the chosen range.
pub fn export(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let (_, span) = export_span(&ctx.query, ctx.today)?;
    let ids = all_values(&ctx.raw_query, "file")
        .iter()
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| ServerError::BadRequest(format!("invalid file id: {v}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let files = db.with_conn(|conn| selected_files(conn, span, &ids))?;
    let buffer = export_files_xlsx(&files)?;
    info!(files = files.len(), "export built");

    xlsx_response(buffer, &format!("export_{}.xlsx", ctx.today.format("%Y%m%d")))
}

pub fn quick_action(ctx: &RequestCtx, slug: &str) -> ResultResp {
    let action = find_action(slug).ok_or(ServerError::NotFound)?;
    info!(action = action.slug, "quick action");
    notice_reply(ctx, &[Toast::info(action.notice())], "/dashboard")
}
