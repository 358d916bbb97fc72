//! Outbound adapters (driven side).

pub mod alert;
pub mod sqlite;
