//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the moderation backend client; the proxy keeps no sessions,
//! caches, or other state of its own.

use crate::services::backend::Backend;

#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}
