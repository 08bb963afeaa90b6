//! Inbound adapters (driving side).

pub mod cli;
pub mod discord;
