//! Networking modules for the moderation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues same-origin REST calls against the server's `/api` surface
//! and `types` defines the shared wire schema.

pub mod api;
pub mod types;
