//! Raw analytics overview page: pretty-printed JSON from the backend.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Overview dump at `/admin/analytics`. Shows the `/api/analytics/overview`
/// payload verbatim; the charted view lives at `/analytics`.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let overview = RwSignal::new(None::<serde_json::Value>);
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
            match crate::net::api::fetch_overview().await {
                Ok(payload) => {
                    overview.set(Some(payload));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let rendered = move || {
        overview
            .get()
            .map(|payload| serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string()))
            .unwrap_or_default()
    };

    view! {
        <div class="overview-page">
            <Navbar/>
            <h1>"Analytics"</h1>
            <Show when=move || error.get().is_some()>
                <p class="overview-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading overview..."</p> }>
                <pre class="overview-page__json">{rendered}</pre>
            </Show>
        </div>
    }
}
