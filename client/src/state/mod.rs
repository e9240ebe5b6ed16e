//! Page state types.
//!
//! DESIGN
//! ======
//! Plain data with pure transitions; pages wrap them in `RwSignal`s.

pub mod booking;
pub mod check_booking;
pub mod fetch;
