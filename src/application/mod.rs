//! Application layer: use cases and view models built on the ports.
//!
//! - [`auth`]: password hashing and session tokens
//! - [`header`]: navigation header view model
//! - [`inventory`]: inventory page view model
//! - [`seed`]: fixture population

pub mod auth;
pub mod header;
pub mod inventory;
pub mod seed;
