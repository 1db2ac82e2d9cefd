//! Approve/Reject controls for a content item under review.

use leptos::prelude::*;

use crate::net::types::Decision;

/// Submits one review decision for the given content id, then acknowledges
/// with a blocking alert. The busy flag guards against double-submit while
/// the POST is in flight; failures are logged and re-enable the buttons.
#[component]
pub fn DecisionButtons(id: String) -> impl IntoView {
    let busy = RwSignal::new(false);

    let on_decide = Callback::new(move |decision: Decision| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let content_id = id.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_decision(&content_id, decision).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Decision saved");
                    }
                }
                Err(e) => log::error!("review decision failed: {e}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (content_id, decision);
            busy.set(false);
        }
    });

    view! {
        <div class="decision-buttons">
            <button
                class="btn decision-buttons__approve"
                disabled=move || busy.get()
                on:click=move |_| on_decide.run(Decision::Approve)
            >
                "Approve"
            </button>
            <button
                class="btn decision-buttons__reject"
                disabled=move || busy.get()
                on:click=move |_| on_decide.run(Decision::Reject)
            >
                "Reject"
            </button>
        </div>
    }
}
