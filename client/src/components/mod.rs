//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and shared page fragments. They read
//! configuration from Leptos context and never issue requests themselves.

pub mod bonus_packages;
pub mod footer;
pub mod navbar;
pub mod notices;
pub mod office_card;
