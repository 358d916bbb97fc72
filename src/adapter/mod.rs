//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - driving side: the CLI and the REST service
//! - [`outbound`] - driven side: SQLite persistence and alert sinks

pub mod inbound;
pub mod outbound;
