#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use thotbot::app::{CommandRouter, InboundMessage, Reply};
use thotbot::domain::{ChannelKey, SessionCalendar, UserKey};
use thotbot::port::PortfolioStore;

pub const BOT: &str = "999";
pub const ALICE: &str = "1001";
pub const BOB: &str = "1002";

/// 2024-01-01 is a Monday; `day` 1..=7 walks Monday through Sunday.
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
        .and_utc()
}

/// A Wednesday mid-session instant.
pub fn midweek() -> DateTime<Utc> {
    at(3, 15)
}

pub fn message_at(author: &str, text: &str, timestamp: DateTime<Utc>) -> InboundMessage {
    InboundMessage {
        author: UserKey::new(author),
        author_name: format!("trader{author}"),
        channel: ChannelKey::new(42),
        text: text.to_string(),
        timestamp,
    }
}

pub fn message(author: &str, text: &str) -> InboundMessage {
    message_at(author, text, midweek())
}

pub fn router<S: PortfolioStore>(store: S) -> CommandRouter<S> {
    CommandRouter::new(store, SessionCalendar::default())
}

/// Dispatch `text` from `author` and return the plain-text replies.
pub async fn say<S: PortfolioStore>(router: &CommandRouter<S>, author: &str, text: &str) -> Vec<String> {
    router
        .dispatch(&UserKey::new(BOT), &message(author, text))
        .await
        .into_iter()
        .map(|reply| match reply {
            Reply::Text(text) => text,
            Reply::Embed(embed) => format!("<embed {}>", embed.title),
        })
        .collect()
}
