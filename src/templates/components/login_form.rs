use crate::auth::accounts::Role;
use maud::{html, Markup};

pub fn login_form(username: &str, role: Role) -> Markup {
    html! {
        form method="post" action="/login" class="stack login-form" {
            label for="username" { "Username" }
            input
                id="username"
                name="username"
                type="text"
                value=(username)
                placeholder="Your name"
                autocomplete="username"
                required;

            label for="password" { "Password" }
            input
                id="password"
                name="password"
                type="password"
                autocomplete="current-password";

            label for="role" { "Role" }
            select id="role" name="role" {
                @for r in [Role::User, Role::Admin] {
                    option value=(r.code()) selected[r == role] { (r.label()) }
                }
            }

            button type="submit" class="primary" { "Sign in" }
        }
    }
}
