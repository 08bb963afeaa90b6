//! Platform-neutral inbound messages and outbound replies.

use chrono::{DateTime, Utc};

use crate::domain::command::{help_fields, HelpField, HELP_COLOR, HELP_DESCRIPTION, HELP_TITLE};
use crate::domain::{ChannelKey, UserKey};

/// A chat message as seen by the router.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub author: UserKey,
    pub author_name: String,
    pub channel: ChannelKey,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured help listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEmbed {
    pub title: &'static str,
    pub description: &'static str,
    pub color: u32,
    pub fields: Vec<HelpField>,
}

impl HelpEmbed {
    /// The `!port help` listing.
    #[must_use]
    pub fn port_help() -> Self {
        Self {
            title: HELP_TITLE,
            description: HELP_DESCRIPTION,
            color: HELP_COLOR,
            fields: help_fields().to_vec(),
        }
    }
}

/// One outbound message for the channel the command came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(HelpEmbed),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Text content, if this is a plain text reply.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Embed(_) => None,
        }
    }
}
