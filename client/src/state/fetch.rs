//! Page data lifecycle shared by every route.
//!
//! DESIGN
//! ======
//! A page mounts in `Loading`, issues exactly one request for its resource,
//! and settles in `Ready`, `Missing` (backend answered `data: null`) or
//! `Failed`. Each state carries only what it renders, so a loading page can
//! never show stale data and a failed page can never show a half-loaded one.
//!
//! When the route parameter changes while a request is in flight, the page
//! starts a new one; `RequestSeq` lets the older response be dropped.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Missing,
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    /// Settle a finished request. HTTP failures keep their transport message;
    /// anything else is reported as `fallback`.
    pub fn from_result(result: Result<Option<T>, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(Some(data)) => Self::Ready(data),
            Ok(None) => Self::Missing,
            Err(err) => Self::Failed(err.page_message(fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic request counter for a single page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Start a new request and return its ticket. Earlier tickets go stale.
    pub fn begin(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}
