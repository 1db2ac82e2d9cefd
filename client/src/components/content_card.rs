//! Card for one flagged content item in queue listings.
//!
//! DESIGN
//! ======
//! Keeps item presentation consistent between the review queue and the
//! flagged-content page while centralizing the review-link affordance.

#[cfg(test)]
#[path = "content_card_test.rs"]
mod content_card_test;

use leptos::prelude::*;

use super::flag_badge::FlagBadge;
use crate::net::types::ContentItem;

fn review_href(id: &str) -> String {
    format!("/admin/review/{id}")
}

/// A flagged item: text, reason badge, and a link to its review page.
#[component]
pub fn ContentCard(content: ContentItem) -> impl IntoView {
    let href = review_href(&content.id);
    view! {
        <div class="content-card">
            <p class="content-card__text">{content.text}</p>
            <div class="content-card__footer">
                <FlagBadge reason=content.reason/>
                <a class="content-card__review-link" href=href>
                    "Review"
                </a>
            </div>
        </div>
    }
}
