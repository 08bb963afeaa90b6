//! Identifier newtypes for chat participants and channels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a message author.
///
/// Keys a user's port record, so it must be the platform's immutable user
/// ID rather than a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserKey(String);

impl UserKey {
    /// Create a new `UserKey` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the user key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this user's port record.
    #[must_use]
    pub fn record_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for UserKey {
    fn from(id: u64) -> Self {
        Self::new(id.to_string())
    }
}

/// Channel a message arrived on and replies are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelKey(u64);

impl ChannelKey {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_name_appends_json_extension() {
        assert_eq!(UserKey::new("1234").record_name(), "1234.json");
    }

    #[test]
    fn user_key_from_numeric_id() {
        assert_eq!(UserKey::from(42_u64).as_str(), "42");
    }
}
