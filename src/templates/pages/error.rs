use maud::{html, Markup, DOCTYPE};

/// Standalone error page, no sidebar and no database access.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) " · DiskViz" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-body" {
                main class="container narrow" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/dashboard" { "← Back to dashboard" } }
                }
            }
        }
    }
}
