//! Application layer - command routing and per-user serialization.

mod lock;
mod message;
mod router;

pub use lock::{UserGuard, UserLocks};
pub use message::{HelpEmbed, InboundMessage, Reply};
pub use router::{replies, CommandRouter};
