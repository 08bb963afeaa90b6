//! Chat command parsing.

use super::portfolio::Quantity;

/// Prefix of every port subcommand.
pub const PORT_PREFIX: &str = "!port";

/// Supported chat commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ping,
    Pong,
    /// `!futures` or `!market`.
    MarketStatus,
    /// `!f`: quote the fixed futures list.
    FuturesQuote,
    /// `!devport`: chart the fixed dev port.
    DevPort,
    Port(PortCommand),
}

/// Subcommands of `!port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortCommand {
    Help,
    Show,
    Chart,
    Quote,
    Add { quantity: Quantity, symbol: String },
    Remove { quantity: Quantity, symbol: String },
}

/// Parse error for chat messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("message is not a command")]
    NotACommand,

    #[error("`!port` needs a subcommand")]
    MissingSubcommand,

    #[error("unknown port subcommand `{0}`")]
    UnknownSubcommand(String),

    #[error("`{verb}` takes QUANTITY SYMBOL, got {got} arguments")]
    WrongArity { verb: &'static str, got: usize },

    #[error("invalid quantity `{0}`")]
    InvalidQuantity(String),

    #[error("invalid symbol `{0}`")]
    InvalidSymbol(String),
}

/// Parse a chat message into a command.
///
/// Top-level triggers must match the whole message exactly. Port
/// subcommands are split on single spaces, so repeated spaces produce
/// empty tokens.
pub fn parse_command(text: &str) -> Result<Command, CommandParseError> {
    match text {
        "ping" => return Ok(Command::Ping),
        "pong" => return Ok(Command::Pong),
        "!futures" | "!market" => return Ok(Command::MarketStatus),
        "!f" => return Ok(Command::FuturesQuote),
        "!devport" => return Ok(Command::DevPort),
        _ => {}
    }

    if !text.starts_with(PORT_PREFIX) {
        return Err(CommandParseError::NotACommand);
    }

    parse_port_command(text).map(Command::Port)
}

fn parse_port_command(text: &str) -> Result<PortCommand, CommandParseError> {
    let route: Vec<&str> = text.split(' ').collect();
    let Some(&subcommand) = route.get(1) else {
        return Err(CommandParseError::MissingSubcommand);
    };

    match subcommand {
        "help" => Ok(PortCommand::Help),
        "show" => Ok(PortCommand::Show),
        "chart" => Ok(PortCommand::Chart),
        "quote" => Ok(PortCommand::Quote),
        "add" => {
            let (quantity, symbol) = parse_quantity_and_symbol("add", &route)?;
            Ok(PortCommand::Add { quantity, symbol })
        }
        "remove" => {
            let (quantity, symbol) = parse_quantity_and_symbol("remove", &route)?;
            Ok(PortCommand::Remove { quantity, symbol })
        }
        other => Err(CommandParseError::UnknownSubcommand(other.to_string())),
    }
}

fn parse_quantity_and_symbol(
    verb: &'static str,
    route: &[&str],
) -> Result<(Quantity, String), CommandParseError> {
    let [_, _, raw_quantity, symbol] = route else {
        return Err(CommandParseError::WrongArity {
            verb,
            got: route.len().saturating_sub(2),
        });
    };

    let quantity = raw_quantity
        .parse::<Quantity>()
        .ok()
        .filter(|q| *q >= 0)
        .ok_or_else(|| CommandParseError::InvalidQuantity((*raw_quantity).to_string()))?;

    if symbol.is_empty() || symbol.contains(char::is_whitespace) {
        return Err(CommandParseError::InvalidSymbol((*symbol).to_string()));
    }

    Ok((quantity, (*symbol).to_string()))
}

/// One entry of the port help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpField {
    pub name: &'static str,
    pub value: &'static str,
    pub inline: bool,
}

pub const HELP_TITLE: &str = "ThotBot Port App Help";
pub const HELP_DESCRIPTION: &str = "Quick intro on how to use the port app. To create a port all you need to do is run `!port add QUANTITY SYMBOL` and ThotBot will create a port for you.";
pub const HELP_COLOR: u32 = 10_177_720;

/// Fields of the `!port help` listing.
#[must_use]
pub const fn help_fields() -> [HelpField; 6] {
    [
        HelpField {
            name: "!port help",
            value: "Use to show help function",
            inline: true,
        },
        HelpField {
            name: "!port show",
            value: "Display your current port and daily change (UNIMPLEMENTED)",
            inline: true,
        },
        HelpField {
            name: "!port chart",
            value: "Display 5 min chart for every symbol in your port",
            inline: true,
        },
        HelpField {
            name: "!port quote",
            value: "Display quotes for every symbol in your port",
            inline: true,
        },
        HelpField {
            name: "!port add QUANTITY SYMBOL",
            value: "Add a quantity of stock to your port (!port add 10 AAPL)",
            inline: false,
        },
        HelpField {
            name: "!port remove QUANTITY SYMBOL",
            value: "Remove a quantity of stock from your port (!port remove 10 AAPL). Will not go below 0",
            inline: false,
        },
    ]
}
