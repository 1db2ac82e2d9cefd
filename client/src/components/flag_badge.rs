//! Badge displaying the moderation reason attached to a content item.

use leptos::prelude::*;

/// Renders the flag reason verbatim (e.g. `"Spam"`).
#[component]
pub fn FlagBadge(reason: String) -> impl IntoView {
    view! { <span class="flag-badge">{reason}</span> }
}
