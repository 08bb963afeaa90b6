//! ThotBot - Discord bot for futures market hours and per-user stock ports.
//!
//! # Architecture
//!
//! - [`domain`] - Command parsing, the [`domain::Portfolio`] holding set and the
//!   futures session calendar. No I/O.
//! - [`port`] - The [`port::PortfolioStore`] persistence trait.
//! - [`app`] - [`app::CommandRouter`], which turns inbound messages into replies
//!   and serializes read-modify-write per user.
//! - [`adapter`] - Discord gateway and CLI (inbound), file and memory stores
//!   (outbound).
//! - [`infrastructure`] - Configuration, logging and runtime wiring.
//! - [`error`] - Error types for the crate.
//!
//! # Example
//!
//! ```no_run
//! use thotbot::adapter::outbound::store::MemoryStore;
//! use thotbot::app::CommandRouter;
//! use thotbot::domain::SessionCalendar;
//!
//! let router = CommandRouter::new(MemoryStore::new(), SessionCalendar::default());
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
