//! Wire types of the REST API and the `reqwest` client that speaks it.

pub mod client;
pub mod types;

pub use client::HttpPetApi;
