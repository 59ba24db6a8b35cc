use crate::db::activity::ActivityEntry;
use crate::db::users::{DirectoryUser, UserStats};
use crate::domain::disk::{format_gb, Disk};
use crate::templates::components::{card, meter};
use crate::templates::layouts::desktop::{desktop_layout, Chrome};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Users,
    Disks,
}

impl AdminTab {
    pub fn code(self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Disks => "disks",
        }
    }

    pub fn parse(code: Option<&str>) -> Self {
        match code {
            Some("disks") => AdminTab::Disks,
            _ => AdminTab::Users,
        }
    }
}

pub struct AdminVm {
    pub tab: AdminTab,
    pub query: String,
    pub stats: UserStats,
    pub users: Vec<DirectoryUser>,
    pub activity: Vec<ActivityEntry>,
    pub disks: Vec<Disk>,
    /// Shown above the add-user form after a rejected submit.
    pub form_error: Option<String>,
}

pub fn admin_page(chrome: &Chrome, vm: &AdminVm) -> Markup {
    desktop_layout(
        "Admin panel",
        chrome,
        html! {
            div class="container" {
                header class="page-head" {
                    h1 { "Admin panel" }
                    p class="muted" { "User access and system settings" }
                }

                div class="stat-grid" {
                    div class="stat" {
                        p class="muted small" { "Total users" }
                        p class="stat-value mono" { (vm.stats.total) }
                    }
                    div class="stat" {
                        p class="muted small" { "Active users" }
                        p class="stat-value mono" { (vm.stats.active) }
                    }
                    div class="stat" {
                        p class="muted small" { "Disks" }
                        p class="stat-value mono" { (vm.disks.len()) }
                    }
                }

                nav class="tabs" {
                    @for tab in [AdminTab::Users, AdminTab::Disks] {
                        a
                            href=(format!("/admin?tab={}", tab.code()))
                            class=(if tab == vm.tab { "tab active" } else { "tab" })
                        {
                            @match tab {
                                AdminTab::Users => "User management",
                                AdminTab::Disks => "Disk management",
                            }
                        }
                    }
                }

                @match vm.tab {
                    AdminTab::Users => (users_tab(vm)),
                    AdminTab::Disks => (disks_tab(&vm.disks)),
                }
            }
        },
    )
}

fn users_tab(vm: &AdminVm) -> Markup {
    html! {
        div class="admin-columns" {
            div class="stack" {
                form class="toolbar" method="get" action="/admin" {
                    input type="hidden" name="tab" value="users";
                    input type="search" name="q" value=(vm.query) placeholder="Search users...";
                    button type="submit" class="ghost" { "Search" }
                }

                @if vm.users.is_empty() {
                    p class="zero-state muted" { "No matching users" }
                } @else {
                    ul class="user-list" {
                        @for user in &vm.users {
                            li class="user-row" {
                                span class="avatar" { (user.initial()) }
                                div class="user-meta" {
                                    h3 class="truncate" {
                                        (user.name)
                                        @if user.disabled {
                                            " " span class="chip danger small" { "Disabled" }
                                        }
                                    }
                                    p class="muted mono small truncate" { (user.email) }
                                }
                                div class="user-side small" {
                                    p { (user.boards) " boards" }
                                    p class="muted mono" { (user.last_active) }
                                }
                            }
                        }
                    }
                }

                (card(
                    "Add user",
                    html! {
                        @if let Some(msg) = &vm.form_error {
                            p class="form-error" role="alert" { (msg) }
                        }
                        form method="post" action="/admin/users" class="stack" {
                            input type="text" name="name" placeholder="Name" required;
                            input type="email" name="email" placeholder="name@company.com" required;
                            button type="submit" class="primary" { "Add user" }
                        }
                    },
                ))
            }

            (card(
                "Activity log",
                html! {
                    ol class="activity" {
                        @for entry in &vm.activity {
                            li class=(format!("activity-entry kind-{}", entry.kind)) {
                                div class="activity-head" {
                                    strong { (entry.action) }
                                    span class="muted small" { (entry.time_label) }
                                }
                                p class="small" { (entry.description) }
                                p class="muted small" { "Target: " (entry.target) }
                            }
                        }
                    }
                },
            ))
        }
    }
}

fn disks_tab(disks: &[Disk]) -> Markup {
    html! {
        table class="table" {
            thead {
                tr {
                    th { "Name" }
                    th { "Type" }
                    th { "Total" }
                    th { "Used" }
                    th { "Usage" }
                }
            }
            tbody {
                @for disk in disks {
                    tr {
                        td { (disk.name) }
                        td { (disk.kind) }
                        td class="mono" { (format_gb(disk.total_gb)) }
                        td class="mono" { (format_gb(disk.used_gb)) }
                        td {
                            (meter(disk.percent_used(), &disk.color))
                            span class="mono small" { (disk.percent_used()) "%" }
                        }
                    }
                }
            }
        }
    }
}

/// Shown instead of the panel to anyone without the admin role.
pub fn locked_page(chrome: &Chrome) -> Markup {
    desktop_layout(
        "No access",
        chrome,
        html! {
            div class="container narrow locked" {
                h2 { "No access" }
                p class="muted" { "Sign in with an administrator account to open the admin panel." }
                a href="/login" class="button primary" { "Sign in" }
            }
        },
    )
}
