//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting, validation, and fetch wiring out of page
//! bodies so the rules can be tested without a browser.

pub mod fetch;
pub mod format;
pub mod validation;
