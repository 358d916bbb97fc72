//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the database, the REST API as seen from a
//! client, and the user-facing alert channel.

pub mod alert;
pub mod api;
pub mod store;
