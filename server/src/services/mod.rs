//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own outbound-call logic so route handlers can stay
//! focused on protocol translation.

pub mod backend;
