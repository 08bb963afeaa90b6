//! Discord gateway integration.
//!
//! Listens for guild messages, hands them to the [`CommandRouter`] and sends
//! the replies back to the originating channel.
//!
//! [`CommandRouter`]: crate::app::CommandRouter

mod gateway;
mod render;

pub use gateway::{inbound_message, run};
pub use render::help_embed;
