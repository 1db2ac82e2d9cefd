//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, param
//! resolution) and delegates rendering details to `components`.

pub mod analytics;
pub mod flagged;
pub mod login;
pub mod overview;
pub mod queue;
pub mod review;
pub mod users;
