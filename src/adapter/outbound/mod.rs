//! Outbound adapters (driven side).

pub mod store;
