use crate::domain::date_range::DateSpan;
use crate::domain::disk::Disk;
use crate::domain::folder::{BoardLayout, Folder};
use crate::templates::components::{folder_grid, snapshot_modal};
use crate::templates::layouts::desktop::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct FolderBoardVm {
    /// Already narrowed by `query`.
    pub folders: Vec<Folder>,
    pub query: String,
    pub layout: BoardLayout,
    pub span: DateSpan,
    pub disks: Vec<Disk>,
}

impl FolderBoardVm {
    pub fn snapshot_count(&self) -> usize {
        self.folders.iter().map(|f| f.recent_updates.len()).sum()
    }
}

pub fn folders_page(chrome: &Chrome, vm: &FolderBoardVm) -> Markup {
    desktop_layout(
        "Folder board",
        chrome,
        html! {
            div class="container" {
                header class="page-head" {
                    div {
                        h1 { "Folder board" }
                        p class="muted" {
                            (vm.folders.len()) " monitored folders · " (vm.snapshot_count()) " snapshots"
                        }
                    }
                    (snapshot_modal(&vm.disks, "/Projects/"))
                }

                form class="toolbar" method="get" action="/folders" {
                    div class="date-inputs" {
                        input type="date" name="start" value=[vm.span.start.map(|d| d.to_string())];
                        span class="muted" { "-" }
                        input type="date" name="end" value=[vm.span.end.map(|d| d.to_string())];
                    }
                    (search_and_layout(&vm.query, vm.layout))
                }

                div class="board-caption" {
                    span class="chip" { (vm.span.caption()) }
                    span class="muted small" { (vm.folders.len()) " folders" }
                }

                (folder_grid(&vm.folders, vm.layout))
            }
        },
    )
}

/// Search box and grid/list switch shared by the board pages. Lives inside
/// the caller's GET form so the other filters survive a submit.
pub fn search_and_layout(query: &str, layout: BoardLayout) -> Markup {
    html! {
        input type="search" name="q" value=(query) placeholder="Search folders...";
        div class="segmented" role="group" aria-label="Layout" {
            @for option in [BoardLayout::Grid, BoardLayout::List] {
                button
                    type="submit"
                    name="layout"
                    value=(option.code())
                    class=(if option == layout { "segment active" } else { "segment" })
                { (option.code()) }
            }
        }
    }
}
