//! Charted moderation analytics page.
//!
//! DESIGN
//! ======
//! Starts from sample category counts so the chart renders immediately, then
//! replaces them with live `by_category` data from the analytics overview
//! when the fetch succeeds. Fetch failures keep the sample data and log.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::components::navbar::Navbar;
use crate::net::types::CategoryCount;

fn sample_category_counts() -> Vec<CategoryCount> {
    vec![
        CategoryCount { category: "Hate Speech".to_owned(), count: 320 },
        CategoryCount { category: "NSFW".to_owned(), count: 450 },
        CategoryCount { category: "Spam".to_owned(), count: 210 },
    ]
}

/// Pull `by_category: [{category, count}]` pairs out of the overview
/// payload, skipping entries that don't match the expected shape.
#[cfg(any(test, feature = "hydrate"))]
fn extract_category_counts(overview: &serde_json::Value) -> Vec<CategoryCount> {
    overview
        .get("by_category")
        .and_then(serde_json::Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value::<CategoryCount>(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Chart page at `/analytics`.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let data = RwSignal::new(sample_category_counts());

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
                    let live = extract_category_counts(&payload);
                    if !live.is_empty() {
                        data.set(live);
                    }
                }
                Err(e) => log::warn!("analytics overview fetch failed: {e}"),
            }
        });
    });

    view! {
        <div class="analytics-page">
            <Navbar/>
            <h1>"Moderation Analytics"</h1>
            {move || view! { <BarChart data=data.get()/> }}
        </div>
    }
}
