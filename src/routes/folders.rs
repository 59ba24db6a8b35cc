use crate::db::activity::log_activity;
use crate::db::disks::list_disks;
use crate::db::folders::{get_folder, FolderScope, SqliteFolders};
use crate::db::snapshots::{save_schedule, SnapshotFrequency};
use crate::db::Database;
use crate::domain::date_range::DateSpan;
use crate::domain::folder::{search_folders, BoardLayout, Folder};
use crate::domain::folder_card::{CardAction, FolderActions, FolderCardState};
use crate::domain::provider::FolderProvider;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::router::{form_field, notice_reply, toast_on_bad_request, RequestCtx};
use crate::templates::components::{folder_card, Toast};
use crate::templates::pages::{self, FolderBoardVm};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{info, warn};

/// Hosts the cards of one request. Collects the toasts to send back and
/// records each action in the activity log.
pub struct PageNotifier<'a> {
    db: &'a Database,
    now: i64,
    toasts: RefCell<Vec<Toast>>,
}

impl<'a> PageNotifier<'a> {
    pub fn new(db: &'a Database, now: i64) -> Self {
        Self {
            db,
            now,
            toasts: RefCell::new(Vec::new()),
        }
    }

    pub fn into_toasts(self) -> Vec<Toast> {
        self.toasts.into_inner()
    }

    fn folder_name(&self, folder_id: &str) -> String {
        let found = folder_id
            .parse::<i64>()
            .ok()
            .and_then(|id| get_folder(self.db, id).ok().flatten());
        match found {
            Some(folder) => folder.name,
            None => folder_id.to_string(),
        }
    }

    fn record(&self, action: &str, description: &str, target: &str) {
        let logged = self
            .db
            .with_conn(|conn| log_activity(conn, action, description, target, "system", self.now));
        if let Err(e) = logged {
            warn!(error = %e, action, "activity log write failed");
        }
    }
}

impl FolderActions for PageNotifier<'_> {
    fn refresh(&self, folder_id: &str) {
        let name = self.folder_name(folder_id);
        info!(folder = folder_id, "refresh requested");
        self.toasts
            .borrow_mut()
            .push(Toast::info(format!("Refreshing snapshot of {name}...")));
        self.record("Refresh snapshot", "Requested a new snapshot", &name);
    }

    fn open(&self, folder_id: &str) {
        let name = self.folder_name(folder_id);
        info!(folder = folder_id, "open requested");
        self.toasts
            .borrow_mut()
            .push(Toast::info(format!("Opening {name} in the file manager")));
        self.record("Open folder", "Opened in the file manager", &name);
    }
}

fn folder_by_segment(db: &Database, id: &str) -> Result<Folder, ServerError> {
    let id = id.parse::<i64>().map_err(|_| ServerError::NotFound)?;
    get_folder(db, id)?.ok_or(ServerError::NotFound)
}

pub fn board(db: &Database, ctx: &RequestCtx) -> ResultResp {
    let query = ctx.param("q").unwrap_or("").trim().to_string();
    let folders = SqliteFolders::new(db, FolderScope::Unassigned).list_folders()?;

    let vm = FolderBoardVm {
        folders: search_folders(folders, &query),
        query,
        layout: BoardLayout::parse(ctx.param("layout")),
        span: DateSpan::from_params(&ctx.query)?,
        disks: db.with_conn(|conn| list_disks(conn))?,
    };

    html_response(pages::folders_page(&ctx.chrome(db)?, &vm))
}

/// One card, re-rendered in the state carried by the query string.
pub fn card(db: &Database, ctx: &RequestCtx, id: &str) -> ResultResp {
    let folder = folder_by_segment(db, id)?;
    let state = FolderCardState::from_params(&ctx.query)?;
    let layout = BoardLayout::parse(ctx.param("layout"));
    html_response(folder_card(&folder, state, layout))
}

pub fn action(db: &Database, ctx: &RequestCtx, id: &str, segment: &str) -> ResultResp {
    let action = CardAction::parse(segment).ok_or(ServerError::NotFound)?;
    let folder = folder_by_segment(db, id)?;

    let notifier = PageNotifier::new(db, ctx.now);
    action.forward(&folder.identifier(), &notifier);

    notice_reply(ctx, &notifier.into_toasts(), "/folders")
}

pub fn save_snapshot(db: &Database, ctx: &RequestCtx, form: &HashMap<String, String>) -> ResultResp {
    toast_on_bad_request(ctx, store_snapshot(db, ctx, form))
}

fn store_snapshot(db: &Database, ctx: &RequestCtx, form: &HashMap<String, String>) -> ResultResp {
    let disk = form_field(form, "disk");
    let path = form_field(form, "path");
    let frequency = SnapshotFrequency::parse(form_field(form, "frequency"))?;

    db.with_conn(|conn| {
        save_schedule(conn, disk, path, frequency, ctx.now)?;
        log_activity(conn, "Snapshot settings", frequency.label(), path.trim(), "system", ctx.now)
    })?;
    info!(disk, frequency = frequency.code(), "snapshot schedule saved");

    notice_reply(ctx, &[Toast::success("Snapshot settings saved")], "/folders")
}

/// Folders of the main board as JSON.
pub fn api_folders(db: &Database) -> ResultResp {
    let folders = SqliteFolders::new(db, FolderScope::Unassigned).list_folders()?;
    json_response(&folders)
}
