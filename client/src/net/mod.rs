//! Networking modules for the booking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies their failures, and
//! `types` mirrors the backend's JSON schema.

pub mod api;
pub mod error;
pub mod types;
