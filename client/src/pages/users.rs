//! Admin users page backed by the `/api/admin/users` envelope.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::User;

/// User listing at `/admin/users`.
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(list) => {
                    users.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    view! {
        <div class="users-page">
            <Navbar/>
            <h1>"Users"</h1>
            <Show when=move || error.get().is_some()>
                <p class="users-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading users..."</p> }>
                <Show
                    when=move || !users.get().is_empty()
                    fallback=|| view! { <p class="users-page__empty">"No users."</p> }
                >
                    <ul class="users-page__list">
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    view! {
                                        <li class="users-page__item">
                                            <span class="users-page__email">{user.email}</span>
                                            <span class="users-page__role">{user.role}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
