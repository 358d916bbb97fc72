//! CLI module graph.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod inventory;
pub mod output;
pub mod paths;
pub mod seed;
pub mod serve;
pub mod session;
pub mod shop;
