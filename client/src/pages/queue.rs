//! Review queue page listing flagged content from `/api/admin/content`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the reviewer's landing route. Items load once on mount and again
//! on demand via the Refresh button; there is no polling.

use leptos::prelude::*;

use crate::components::content_card::ContentCard;
use crate::components::navbar::Navbar;
use crate::net::types::ContentItem;

/// Review queue page at `/admin`.
#[component]
pub fn QueuePage() -> impl IntoView {
    let items = RwSignal::new(Vec::<ContentItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = Callback::new(move |()| {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_queue().await {
                Ok(content) => {
                    items.set(content);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load.run(());
    });

    view! {
        <div class="queue-page">
            <Navbar/>
            <header class="queue-page__header">
                <h1>"Flagged Content"</h1>
                <button class="btn queue-page__refresh" on:click=move |_| load.run(()) disabled=move || loading.get()>
                    "Refresh"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="queue-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading content..."</p> }>
                <div class="queue-page__cards">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| view! { <ContentCard content=item/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
