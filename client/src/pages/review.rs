//! Review page for a single content item.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route-scoped orchestration: resolves the `id` path parameter, fetches the
//! item, and hands the decision flow to `DecisionButtons`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::decision_buttons::DecisionButtons;
use crate::components::navbar::Navbar;
use crate::net::types::ContentItem;

/// Review page at `/admin/review/{id}`.
#[component]
pub fn ReviewPage() -> impl IntoView {
    let params = use_params_map();
    let content = RwSignal::new(None::<ContentItem>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Refetch when the id param changes across client-side navigations.
    let requested_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        if requested_id.get() == Some(id.clone()) {
            return;
        }
        requested_id.set(Some(id.clone()));
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_content(&id).await {
                Ok(item) => {
                    content.set(Some(item));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    view! {
        <div class="review-page">
            <Navbar/>
            <h1>"Review Content"</h1>
            <Show when=move || error.get().is_some()>
                <p class="review-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading content..."</p> }>
                {move || {
                    content
                        .get()
                        .map(|item| {
                            view! {
                                <div class="review-page__content">
                                    <p class="review-page__text">{item.text}</p>
                                    <DecisionButtons id=item.id/>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
