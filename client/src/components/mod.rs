//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render whatever the pages hand them
//! and keep their own interaction state local. Only `Navbar` reads shared
//! context (the auth session).

pub mod bar_chart;
pub mod content_card;
pub mod decision_buttons;
pub mod flag_badge;
pub mod navbar;
