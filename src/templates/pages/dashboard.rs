use crate::db::exports::ExportFile;
use crate::domain::date_range::{DatePreset, DateSpan};
use crate::domain::disk::{format_gb, percent, Disk, DiskTotals, UsageCategory};
use crate::domain::quick_action::QUICK_ACTIONS;
use crate::templates::components::{card, meter};
use crate::templates::layouts::desktop::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct DashboardVm {
    pub disks: Vec<Disk>,
    pub categories: Vec<UsageCategory>,
    pub total_files: i64,
    pub export: ExportVm,
}

/// State of the export widget: the active preset and the files it lists.
pub struct ExportVm {
    pub preset: DatePreset,
    pub span: DateSpan,
    pub files: Vec<ExportFile>,
}

pub fn dashboard_page(chrome: &Chrome, vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        chrome,
        html! {
            div class="container" {
                header class="page-head" {
                    h1 { "Dashboard" }
                    p class="muted" { "Disk usage across all monitored volumes" }
                }

                div class="disk-grid" {
                    @for disk in &vm.disks {
                        (disk_card(disk))
                    }
                }

                div class="dashboard-columns" {
                    div class="stack" {
                        (overview(vm))
                        (distribution(&vm.categories))
                    }
                    div class="stack" {
                        (quick_actions())
                        (export_widget(&vm.export))
                    }
                }
            }
        },
    )
}

fn disk_card(disk: &Disk) -> Markup {
    html! {
        article class="disk-card" {
            div class="disk-head" {
                div {
                    h3 { (disk.name) }
                    p class="muted small" { (disk.kind) }
                }
                span class="mono" { (disk.percent_used()) "%" }
            }
            (meter(disk.percent_used(), &disk.color))
            div class="disk-foot mono small muted" {
                span { "Used " (format_gb(disk.used_gb)) }
                span { "Free " (format_gb(disk.free_gb())) }
            }
        }
    }
}

fn overview(vm: &DashboardVm) -> Markup {
    let totals = DiskTotals::of(&vm.disks);
    html! {
        div class="stat-grid" {
            div class="stat" {
                p class="muted small" { "Total capacity" }
                p class="stat-value mono" { (format_gb(totals.total_gb)) }
            }
            div class="stat" {
                p class="muted small" { "Used space" }
                p class="stat-value mono" { (format_gb(totals.used_gb)) }
                span class="muted small mono" { "Share " (totals.percent_used()) "%" }
            }
            div class="stat" {
                p class="muted small" { "Files" }
                p class="stat-value mono" { (vm.total_files) }
            }
        }
    }
}

fn distribution(categories: &[UsageCategory]) -> Markup {
    let total = crate::domain::disk::category_total(categories);
    card(
        "Folder distribution",
        html! {
            p class="muted small" { (categories.len()) " categories · " (format_gb(total)) " total" }
            ul class="distribution" {
                @for cat in categories {
                    @let share = percent(cat.gb, total);
                    li {
                        div class="dist-label" {
                            span class="dot" style=(format!("background-color: {}", cat.color)) {}
                            span { (cat.name) }
                            span class="muted small" { "/" (cat.name) }
                        }
                        div class="meter" {
                            div class="meter-fill" style=(format!("width: {share}%; background-color: {}", cat.color)) {}
                        }
                        div class="mono small" {
                            span { (cat.gb) " GB" }
                            " "
                            span class="muted" { (share) "%" }
                        }
                    }
                }
            }
        },
    )
}

fn quick_actions() -> Markup {
    card(
        "Quick actions",
        html! {
            div class="action-grid" {
                @for action in QUICK_ACTIONS {
                    button
                        type="button"
                        class="action"
                        hx-post=(format!("/actions/{}", action.slug))
                        hx-target="#toasts"
                        hx-swap="beforeend"
                    {
                        span class="action-label" { (action.label) }
                        span class="muted small" { (action.hint) }
                    }
                }
            }
        },
    )
}

fn export_widget(export: &ExportVm) -> Markup {
    card(
        "Filter & export files",
        html! {
            p class="muted small" { "Filter by date and export in bulk" }

            form
                class="export-range"
                method="get"
                action="/dashboard"
                hx-get="/dashboard/export-files"
                hx-target="#export-files"
                hx-swap="outerHTML"
                hx-trigger="change"
            {
                div class="date-inputs" {
                    label {
                        span class="muted small" { "Start date" }
                        input type="date" name="start" value=[export.span.start.map(|d| d.to_string())];
                    }
                    label {
                        span class="muted small" { "End date" }
                        input type="date" name="end" value=[export.span.end.map(|d| d.to_string())];
                    }
                }
                div class="presets" {
                    @for preset in DatePreset::ALL {
                        a
                            class=(if preset == export.preset { "preset active" } else { "preset" })
                            href=(format!("/dashboard?range={}", preset.code()))
                            hx-get=(format!("/dashboard/export-files?range={}", preset.code()))
                            hx-target="#export-files"
                            hx-swap="outerHTML"
                        { (preset.label()) }
                    }
                }
            }

            (export_files(export))
        },
    )
}

/// File list and export button. Swapped on its own when the range changes.
pub fn export_files(export: &ExportVm) -> Markup {
    html! {
        form id="export-files" method="get" action="/export" class="export-files" {
            input type="hidden" name="range" value=(export.preset.code());
            @if let Some(start) = export.span.start {
                input type="hidden" name="start" value=(start.to_string());
            }
            @if let Some(end) = export.span.end {
                input type="hidden" name="end" value=(end.to_string());
            }

            p class="muted small" { (export.span.caption()) }

            @if export.files.is_empty() {
                p class="zero-state muted small" { "No files in this range" }
            } @else {
                ul class="file-list" {
                    @for file in &export.files {
                        li {
                            label {
                                input type="checkbox" name="file" value=(file.id);
                                div class="file-meta" {
                                    p class="truncate" { (file.name) }
                                    p class="muted small truncate" { (file.path) }
                                }
                                div class="mono small" {
                                    p { (file.size_label) }
                                    p class="muted" { (file.modified_on.format("%Y/%m/%d").to_string()) }
                                }
                            }
                        }
                    }
                }
            }

            button type="submit" class="primary wide" disabled[export.files.is_empty()] {
                "Export selected files"
            }
        }
    }
}
