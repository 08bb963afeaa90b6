//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   Discord gateway ──▶ CommandRouter ──▶ PortfolioStore
//!      (inbound)         (app)              (outbound: file, memory)
//! ```

mod store;

pub use store::PortfolioStore;
