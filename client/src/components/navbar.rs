//! Top navigation bar with role-gated links and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared auth context: the analytics and users links only render
//! for admins, and the right side switches between a sign-in link and the
//! identity + logout pair.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

fn admin_links_visible(role: Option<&str>) -> bool {
    role == Some("admin")
}

/// Top navigation bar shown on every page except login.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let show_admin_links =
        move || admin_links_visible(auth.get().user.as_ref().map(|user| user.role.as_str()));
    let identity = move || auth.get().user.map(|user| user.email).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__link" href="/admin">
                "Dashboard"
            </a>
            <a class="navbar__link" href="/flagged-content">
                "Flagged"
            </a>
            <Show when=show_admin_links>
                <a class="navbar__link" href="/analytics">
                    "Analytics"
                </a>
                <a class="navbar__link" href="/admin/users">
                    "Users"
                </a>
            </Show>

            <span class="navbar__spacer"></span>

            <Show
                when=move || auth.get().user.is_some()
                fallback=|| {
                    view! {
                        <a class="navbar__link navbar__link--login" href="/login">
                            "Sign in"
                        </a>
                    }
                }
            >
                <span class="navbar__self">{identity}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
