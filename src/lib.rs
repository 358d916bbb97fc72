//! habitpet - a habit tracker with a virtual pet.
//!
//! Completing habits earns gold; gold buys items; items feed or dress up
//! the user's pet. The crate holds the game rules, a SQLite store, a REST
//! service, a REST client, and the view models the pages are built from.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Storage- and transport-agnostic game types and rules
//! - **`port`** - Traits the application depends on (stores, pet API, alerts)
//! - **`application`** - View models (header, inventory page), the seeder
//!   and credentials
//! - **`adapter`** - SQLite store, HTTP service, CLI and alert sinks
//! - **`api`** - REST client and wire types
//! - **`infrastructure`** - Configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use habitpet::adapter::outbound::sqlite::{database::connection, SqliteStore};
//! use habitpet::application::auth::PasswordHasher;
//! use habitpet::application::seed::Seeder;
//!
//! # async fn seed() -> habitpet::error::Result<()> {
//! let store = SqliteStore::new(connection::open("habitpet.db")?);
//! let report = Seeder::new(&store, PasswordHasher::new()?).run().await?;
//! println!("created {:?}", report.users_created);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
