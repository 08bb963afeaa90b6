//! Infrastructure configuration modules.

pub mod discord;
pub mod logging;
pub mod session;
pub mod settings;
pub mod storage;
