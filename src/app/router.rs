//! Command router: classifies chat messages and runs port commands.

use tracing::{debug, error, info};

use crate::domain::{
    parse_command, AddOutcome, Command, CommandParseError, PortCommand, Portfolio, Quantity,
    RemoveOutcome, SessionCalendar, UserKey,
};
use crate::error::PersistenceError;
use crate::port::PortfolioStore;

use super::lock::UserLocks;
use super::message::{HelpEmbed, InboundMessage, Reply};

/// Fixed reply texts.
pub mod replies {
    pub const INVALID_SYNTAX: &str = "Invalid syntax, look at `!port help` for help";
    pub const NO_PORT: &str =
        "You don't have anything in your port, take a look at `!port help` to see how to add symbols";
    pub const LOAD_FAILED: &str = "Unable to load your port (@Dev, wtf?)";
    pub const SAVE_FAILED: &str = "Unable to save your port (@Dev, wtf?)";
    pub const SHOW_UNIMPLEMENTED: &str = "Unimplemented feature, will implement soon....";
    pub const FUTURES_QUOTE: &str = "?quote /ES /NQ /RTY /YM /GC /SI /CL";
    pub const DEV_PORT_CHART: &str = "?c2 nio pltr open vldr coin";
    pub const CHART_PREFIX: &str = "?c2";
    pub const QUOTE_PREFIX: &str = "?quote";
}

/// Routes inbound messages to command handlers.
///
/// Never fails: parse and persistence errors become user-facing replies so
/// one bad message cannot affect the next.
pub struct CommandRouter<S> {
    store: S,
    calendar: SessionCalendar,
    locks: UserLocks,
}

impl<S: PortfolioStore> CommandRouter<S> {
    pub fn new(store: S, calendar: SessionCalendar) -> Self {
        Self {
            store,
            calendar,
            locks: UserLocks::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one message and return the replies for its channel.
    ///
    /// Messages authored by `bot` are dropped before parsing.
    pub async fn dispatch(&self, bot: &UserKey, message: &InboundMessage) -> Vec<Reply> {
        if &message.author == bot {
            return Vec::new();
        }

        let command = match parse_command(&message.text) {
            Ok(command) => command,
            Err(CommandParseError::NotACommand | CommandParseError::MissingSubcommand) => {
                return Vec::new();
            }
            Err(CommandParseError::InvalidQuantity(raw)) => {
                debug!(user = %message.author, quantity = %raw, "Unreadable quantity");
                return vec![Reply::text(format!("Unable to read quantity of: {raw}"))];
            }
            Err(err) => {
                debug!(user = %message.author, error = %err, "Invalid port command");
                return vec![Reply::text(replies::INVALID_SYNTAX)];
            }
        };

        match command {
            Command::Ping => {
                info!(user = %message.author, at = %message.timestamp, "pinged");
                vec![Reply::text("pong")]
            }
            Command::Pong => vec![Reply::text("ping")],
            Command::MarketStatus => self.market_status(message),
            Command::FuturesQuote => vec![Reply::text(replies::FUTURES_QUOTE)],
            Command::DevPort => vec![Reply::text(replies::DEV_PORT_CHART)],
            Command::Port(port_command) => self.run_port(port_command, &message.author).await,
        }
    }

    fn market_status(&self, message: &InboundMessage) -> Vec<Reply> {
        if self.calendar.is_closed_at(message.timestamp) {
            vec![Reply::text(format!(
                "Futures are closed {}",
                message.author_name
            ))]
        } else {
            Vec::new()
        }
    }

    async fn run_port(&self, command: PortCommand, user: &UserKey) -> Vec<Reply> {
        let reply = match command {
            PortCommand::Help => Reply::Embed(HelpEmbed::port_help()),
            PortCommand::Show => match self.existing_port(user).await {
                Ok(_) => Reply::text(replies::SHOW_UNIMPLEMENTED),
                Err(reply) => reply,
            },
            PortCommand::Chart => self.symbol_command(replies::CHART_PREFIX, user).await,
            PortCommand::Quote => self.symbol_command(replies::QUOTE_PREFIX, user).await,
            PortCommand::Add { quantity, symbol } => self.add(user, quantity, &symbol).await,
            PortCommand::Remove { quantity, symbol } => self.remove(user, quantity, &symbol).await,
        };
        vec![reply]
    }

    /// Load the user's port, or the reply to send when it is unavailable.
    ///
    /// A stored record with no holdings counts as no port.
    async fn existing_port(&self, user: &UserKey) -> Result<Portfolio, Reply> {
        match self.store.load(user).await {
            Ok(Some(port)) if !port.is_empty() => Ok(port),
            Ok(_) => Err(Reply::text(replies::NO_PORT)),
            Err(e) => {
                error!(user = %user, error = %e, "Failed to load port");
                Err(Reply::text(replies::LOAD_FAILED))
            }
        }
    }

    /// Build a request for the external quote/chart bot from the port's symbols.
    async fn symbol_command(&self, prefix: &str, user: &UserKey) -> Reply {
        match self.existing_port(user).await {
            Ok(port) => {
                let mut command = prefix.to_string();
                for symbol in port.symbols() {
                    command.push(' ');
                    command.push_str(symbol);
                }
                Reply::Text(command)
            }
            Err(reply) => reply,
        }
    }

    async fn add(&self, user: &UserKey, quantity: Quantity, symbol: &str) -> Reply {
        let _guard = self.locks.lock(user).await;

        let mut port = match self.store.load(user).await {
            Ok(port) => port.unwrap_or_default(),
            Err(e) => {
                error!(user = %user, error = %e, "Failed to load port");
                return Reply::text(replies::LOAD_FAILED);
            }
        };

        let text = match port.add(symbol, quantity) {
            AddOutcome::Started { quantity } => {
                format!("Started new holding in {symbol} of {quantity} shares")
            }
            AddOutcome::Increased { from, to } => {
                format!("Increased holdings in {symbol} from {from} to {to}")
            }
        };

        if let Err(e) = self.persist(user, &port).await {
            error!(user = %user, symbol, error = %e, "Failed to save port");
            return Reply::text(replies::SAVE_FAILED);
        }

        info!(user = %user, symbol, quantity, "Added to port");
        Reply::Text(text)
    }

    async fn remove(&self, user: &UserKey, quantity: Quantity, symbol: &str) -> Reply {
        let _guard = self.locks.lock(user).await;

        let mut port = match self.existing_port(user).await {
            Ok(port) => port,
            Err(reply) => return reply,
        };

        let (from, to) = match port.remove(symbol, quantity) {
            RemoveOutcome::Decreased { from, to } => (from, to),
            RemoveOutcome::NotHeld => {
                return Reply::text(format!("Unable to find {symbol} in port"));
            }
        };

        if let Err(e) = self.persist(user, &port).await {
            error!(user = %user, symbol, error = %e, "Failed to update port");
            return Reply::text(replies::SAVE_FAILED);
        }

        info!(user = %user, symbol, from, to, "Removed from port");
        Reply::text(format!(
            "Decreased holdings in {symbol} from {from} to {to}"
        ))
    }

    /// Save the port, or delete the record once it holds nothing.
    async fn persist(&self, user: &UserKey, port: &Portfolio) -> Result<(), PersistenceError> {
        if port.is_empty() {
            self.store.delete(user).await
        } else {
            self.store.save(user, port).await
        }
    }
}
