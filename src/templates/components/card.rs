use maud::{html, Markup};

/// Titled panel used across the dashboard and admin pages.
pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Horizontal usage bar, `percent` clamped to 0..=100.
pub fn meter(percent: i64, color: &str) -> Markup {
    let width = percent.clamp(0, 100);
    html! {
        div class="meter" {
            div class=(format!("meter-fill bg-{color}")) style=(format!("width: {width}%")) {}
        }
    }
}
