//! SQLite persistence adapters.
//!
//! [`SqliteStore`] implements every store port over one Diesel connection
//! pool. The port implementations are split by concern.

pub mod database;
mod habit;
mod pet;
mod seed;
mod store;

pub use store::SqliteStore;
