use crate::db::boards::Board;
use crate::domain::date_range::{DateSpan, TimelineFilter};
use crate::domain::disk::Disk;
use crate::domain::folder::{BoardLayout, Folder};
use crate::templates::components::{folder_grid, snapshot_modal};
use crate::templates::layouts::desktop::{desktop_layout, Chrome};
use crate::templates::pages::folders::search_and_layout;
use maud::{html, Markup};

pub struct ProjectVm {
    pub board: Board,
    pub folders: Vec<Folder>,
    pub query: String,
    pub layout: BoardLayout,
    pub filter: TimelineFilter,
    /// Explicit dates, only meaningful for `TimelineFilter::Custom`.
    pub custom: DateSpan,
    pub span: DateSpan,
    pub disks: Vec<Disk>,
}

pub fn project_page(chrome: &Chrome, vm: &ProjectVm) -> Markup {
    let base = format!("/project/{}", vm.board.id);
    desktop_layout(
        &vm.board.name,
        chrome,
        html! {
            div class="container" {
                header class="page-head" {
                    div {
                        h1 { (vm.board.name) }
                        p class="muted mono small" { (vm.board.root_path) }
                    }
                    div class="head-actions" {
                        (notify_button(&vm.board))
                        button
                            type="button"
                            class="ghost"
                            title="Refresh all folders"
                            hx-post=(format!("{base}/refresh"))
                            hx-target="#toasts"
                            hx-swap="beforeend"
                        { "Refresh all" }
                        (snapshot_modal(&vm.disks, &vm.board.root_path))
                    }
                }

                form class="toolbar" method="get" action=(base) {
                    select name="range" onchange="this.form.submit()" {
                        @for choice in TimelineFilter::ALL {
                            option value=(choice.code()) selected[choice == vm.filter] { (choice.label()) }
                        }
                    }
                    @if vm.filter == TimelineFilter::Custom {
                        div class="date-inputs" {
                            input type="date" name="start" value=[vm.custom.start.map(|d| d.to_string())];
                            span class="muted" { "-" }
                            input type="date" name="end" value=[vm.custom.end.map(|d| d.to_string())];
                        }
                    }
                    (search_and_layout(&vm.query, vm.layout))
                }

                section class="timeline" {
                    div class="board-caption" {
                        span class="chip" { (vm.span.caption()) }
                        span class="muted small" { (vm.folders.len()) " folders" }
                    }
                    (folder_grid(&vm.folders, vm.layout))
                }
            }
        },
    )
}

/// Flips the persisted notification flag; the reply is a toast.
fn notify_button(board: &Board) -> Markup {
    html! {
        form method="post" action=(format!("/project/{}/notify", board.id)) class="inline" {
            button
                type="submit"
                class=(if board.notify { "toggle on" } else { "toggle" })
                hx-post=(format!("/project/{}/notify", board.id))
                hx-target="#toasts"
                hx-swap="beforeend"
            {
                @if board.notify { "Notifications on" } @else { "Notifications off" }
            }
        }
    }
}
