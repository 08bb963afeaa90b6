//! Platform-agnostic domain logic.

pub mod command;
pub mod id;
pub mod portfolio;
pub mod session;

pub use command::{parse_command, Command, CommandParseError, PortCommand};
pub use id::{ChannelKey, UserKey};
pub use portfolio::{AddOutcome, Portfolio, Quantity, RemoveOutcome};
pub use session::{is_session_closed, SessionCalendar};
