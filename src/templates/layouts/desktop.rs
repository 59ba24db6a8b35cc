use crate::auth::sessions::SessionUser;
use crate::db::boards::Board;
use maud::{html, Markup, DOCTYPE};

/// What the chrome around every page needs to know.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub user: Option<SessionUser>,
    pub boards: Vec<Board>,
    /// Path of the current page, for highlighting the nav.
    pub active: String,
}

impl Chrome {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }
}

fn nav_link(chrome: &Chrome, href: &str, label: &str) -> Markup {
    let class = if chrome.active == href { "nav-link active" } else { "nav-link" };
    html! {
        a href=(href) class=(class) { (label) }
    }
}

pub fn desktop_layout(title: &str, chrome: &Chrome, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · DiskViz" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                aside class="sidebar" {
                    div class="brand" {
                        h1 { "DiskViz" }
                        p class="muted" { "v3.0.1 PRO" }
                    }

                    nav class="nav" {
                        (nav_link(chrome, "/dashboard", "Dashboard"))
                        (nav_link(chrome, "/folders", "Folder board"))
                    }

                    @if chrome.is_admin() {
                        div class="nav-section" { "Manage" }
                        nav class="nav" {
                            (nav_link(chrome, "/admin", "Admin panel"))
                        }
                    }

                    div class="nav-section" { "My boards" }
                    nav class="nav boards" {
                        @for board in &chrome.boards {
                            @let href = format!("/project/{}", board.id);
                            a href=(href) class=(if chrome.active == href { "board-link active" } else { "board-link" }) {
                                span class=(format!("dot bg-{}", board.color)) {}
                                span class="board-name" { (board.name) }
                                span class="muted small" { (board.updated_label) }
                                @if board.updates > 0 {
                                    span class="badge" { (board.updates) }
                                }
                            }
                        }
                        @if chrome.is_admin() {
                            details class="add-board" {
                                summary { "+ Add board" }
                                form method="post" action="/boards" class="stack" {
                                    label for="board-name" { "Board name" }
                                    input id="board-name" name="name" type="text" placeholder="e.g. Project C - FX" required;
                                    fieldset class="swatches" {
                                        legend { "Colour" }
                                        @for (i, color) in crate::db::boards::BOARD_COLORS.iter().enumerate() {
                                            label class=(format!("swatch bg-{color}")) {
                                                input type="radio" name="color" value=(color) checked[i == 0];
                                            }
                                        }
                                    }
                                    button type="submit" class="primary" { "Create" }
                                }
                            }
                        }
                    }

                    div class="account" {
                        @if let Some(user) = &chrome.user {
                            span class="avatar" { (user.initials()) }
                            div {
                                p { strong { (user.name) } }
                                p class="muted small" { (user.role.label()) }
                            }
                            form method="post" action="/logout" {
                                button type="submit" class="ghost" title="Sign out" { "Sign out" }
                            }
                        } @else {
                            a href="/login" class="login-link" {
                                p { "Not signed in" }
                                p class="muted small" { "Click to sign in" }
                            }
                        }
                    }
                }

                main class="content" {
                    (content)
                }

                div id="toasts" class="toasts" aria-live="polite" {}
            }
        }
    }
}
