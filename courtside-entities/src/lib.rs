#![deny(missing_debug_implementations)]

//! # courtside-entities
//!
//! Reusable, agnostic domain entities for Courtside.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod booking;
pub mod email;
pub mod id;
pub mod password;
pub mod price;
pub mod review;
pub mod slot;
pub mod time;
pub mod user;
pub mod venue;
pub mod venue_status;
pub mod verification;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
