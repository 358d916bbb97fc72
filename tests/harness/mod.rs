#![allow(dead_code)]

pub mod api_server;
pub mod recording_alerter;
pub mod scripted_api;
pub mod temp_db;
