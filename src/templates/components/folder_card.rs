use crate::domain::changes::{ChangeKind, ChangeRecord, FilterSelection};
use crate::domain::folder::{format_bytes, BoardLayout, FileIcon, Folder};
use crate::domain::folder_card::FolderCardState;
use maud::{html, Markup};

fn card_dom_id(folder: &Folder) -> String {
    format!("folder-{}", folder.id)
}

/// URL that re-renders this card in `state`.
pub fn card_url(folder: &Folder, state: FolderCardState, layout: BoardLayout) -> String {
    format!(
        "/folders/{}/card?{}&layout={}",
        folder.identifier(),
        state.to_query(),
        layout.code()
    )
}

fn badge_text(kind: ChangeKind, count: usize) -> String {
    match kind {
        ChangeKind::Added => format!("+{count} added"),
        ChangeKind::Modified => format!("● {count} modified"),
        ChangeKind::Deleted => format!("-{count} deleted"),
    }
}

fn badge_class(kind: ChangeKind, filter: FilterSelection) -> String {
    let mut class = format!("badge-kind kind-{}", kind.code());
    match filter {
        FilterSelection::All => {}
        FilterSelection::Kind(active) if active == kind => class.push_str(" selected"),
        FilterSelection::Kind(_) => class.push_str(" dim"),
    }
    class
}

fn update_row(record: &ChangeRecord) -> Markup {
    let icon = FileIcon::for_name(&record.name);
    html! {
        li class="update" {
            span class=(format!("dot kind-{}", record.kind.code())) {}
            span class=(format!("file-icon {}", icon.css_class())) {}
            @if record.kind == ChangeKind::Deleted {
                s class="file-name muted" { (record.name) }
            } @else {
                span class="file-name" { (record.name) }
            }
            span class="muted mono small" { (record.time) }
        }
    }
}

/// One folder card. Every control re-requests the card with its next state,
/// so the state lives only in this card's own URLs.
pub fn folder_card(folder: &Folder, state: FolderCardState, layout: BoardLayout) -> Markup {
    let view = state.derive(folder);
    let dom_id = card_dom_id(folder);
    let target = format!("#{dom_id}");

    html! {
        article id=(dom_id) class=(format!("folder-card layout-{}", layout.code())) {
            header class="card-head" {
                div {
                    h3 class="truncate" { (folder.name) }
                    p class="muted small truncate" title=(folder.path) { (folder.path) }
                }
                span class="chip small" { (folder.time) }
            }

            p class="card-stats mono small" {
                (folder.files) " files · " (format_bytes(folder.size_bytes))
            }

            div class="badges" {
                @for kind in ChangeKind::ALL {
                    @let count = folder.count(kind);
                    @if count > 0 {
                        button
                            type="button"
                            class=(badge_class(kind, view.state.filter))
                            hx-get=(card_url(folder, state.after_select(kind), layout))
                            hx-target=(target)
                            hx-swap="outerHTML"
                        { (badge_text(kind, count)) }
                    }
                }
            }

            section class="updates" {
                div class="updates-head" {
                    span { "Recent files" }
                    @if let FilterSelection::Kind(kind) = view.state.filter {
                        span class="filter-label" { (kind.label()) " (" (view.matching) ")" }
                    }
                }

                @if view.is_empty() {
                    p class="zero-state muted small" { "No matching records" }
                } @else {
                    ul class="update-list" {
                        @for record in &view.visible {
                            (update_row(record))
                        }
                    }
                }

                @if view.has_more {
                    button
                        type="button"
                        class="disclosure"
                        hx-get=(card_url(folder, state.after_toggle(), layout))
                        hx-target=(target)
                        hx-swap="outerHTML"
                    {
                        @if state.expanded {
                            "Collapse"
                        } @else {
                            "Show " (view.remainder) " more files"
                        }
                    }
                }
            }

            footer class="card-foot" {
                span class="chip mono small" { "Latest version" }
                div class="card-actions" {
                    button
                        type="button"
                        class="ghost"
                        title="Refresh snapshot"
                        hx-post=(format!("/folders/{}/refresh", folder.identifier()))
                        hx-target="#toasts"
                        hx-swap="beforeend"
                    { "Refresh" }
                    button
                        type="button"
                        class="ghost"
                        title="Open folder"
                        hx-post=(format!("/folders/{}/open", folder.identifier()))
                        hx-target="#toasts"
                        hx-swap="beforeend"
                    { "Open" }
                }
            }
        }
    }
}

/// A whole board of cards, each starting collapsed with no filter.
pub fn folder_grid(folders: &[Folder], layout: BoardLayout) -> Markup {
    html! {
        @if folders.is_empty() {
            p class="zero-state muted" { "No matching folders" }
        } @else {
            div class=(format!("folder-grid {}", layout.code())) {
                @for folder in folders {
                    (folder_card(folder, FolderCardState::default(), layout))
                }
            }
        }
    }
}
