//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    analytics::AnalyticsPage, flagged::FlaggedPage, login::LoginPage, overview::OverviewPage,
    queue::QueuePage, review::ReviewPage, users::UsersPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, bootstraps the current session from
/// `/api/auth/me`, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|state| {
            state.user = user;
            state.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/modqueue.css"/>
        <Title text="Moderation Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=QueuePage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("review"), ParamSegment("id"))
                    view=ReviewPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("analytics")) view=OverviewPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
                <Route path=StaticSegment("flagged-content") view=FlaggedPage/>
                <Route path=StaticSegment("analytics") view=AnalyticsPage/>
            </Routes>
        </Router>
    }
}

/// The bare origin has no screen of its own; land on the review queue.
#[component]
fn HomePage() -> impl IntoView {
    view! { <Redirect path="/admin"/> }
}
