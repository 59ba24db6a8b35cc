use crate::auth::accounts::Role;
use crate::templates::components::login_form;
use crate::templates::layouts::desktop::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn login_page(chrome: &Chrome, username: &str, role: Role, error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        chrome,
        html! {
            div class="container narrow" {
                h1 { "Sign in" }
                p class="lead muted" { "Sign in to manage boards and view the admin panel." }

                @if let Some(msg) = error {
                    p class="form-error" role="alert" { (msg) }
                }

                (login_form(username, role))
            }
        },
    )
}
