//! Flagged-content page backed by the `/api/admin/flagged` envelope.

use leptos::prelude::*;

use crate::components::content_card::ContentCard;
use crate::components::navbar::Navbar;
use crate::net::types::ContentItem;

/// Flagged listing at `/flagged-content`. Same card presentation as the
/// review queue, different upstream endpoint.
#[component]
pub fn FlaggedPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<ContentItem>::new());
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
            match crate::net::api::fetch_flagged().await {
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

    view! {
        <div class="flagged-page">
            <Navbar/>
            <h1>"Flagged Content"</h1>
            <Show when=move || error.get().is_some()>
                <p class="flagged-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading content..."</p> }>
                <div class="flagged-page__cards">
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
