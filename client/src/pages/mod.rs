//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped request lifecycle and delegates shared
//! rendering details to `components`.

pub mod book_office;
pub mod check_booking;
pub mod city_details;
pub mod home;
pub mod office_details;
pub mod success_booking;

/// Message for resource pages when a failure did not come from the HTTP layer.
pub(crate) const FETCH_FALLBACK: &str = "An error occurred";
