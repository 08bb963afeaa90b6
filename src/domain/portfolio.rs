//! A user's port: symbol to share-count holdings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Share count for one symbol.
pub type Quantity = i64;

/// Result of adding shares to a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The symbol was not held before.
    Started { quantity: Quantity },
    /// The symbol was already held.
    Increased { from: Quantity, to: Quantity },
}

/// Result of removing shares from a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Holding decreased, clamped at zero. A zero holding is dropped.
    Decreased { from: Quantity, to: Quantity },
    /// The symbol is not in the port.
    NotHeld,
}

/// Holdings owned by a single user.
///
/// Symbols are kept in a `BTreeMap` so iteration (and therefore every
/// symbol list sent to chat) is lexicographic. Quantities stored here are
/// always positive; a holding that reaches zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PortfolioRecord")]
pub struct Portfolio {
    holdings: BTreeMap<String, Quantity>,
}

/// On-disk shape of a port, before non-positive and unnamed entries are dropped.
#[derive(Deserialize)]
struct PortfolioRecord {
    #[serde(default)]
    holdings: BTreeMap<String, Quantity>,
}

impl From<PortfolioRecord> for Portfolio {
    fn from(record: PortfolioRecord) -> Self {
        let holdings = record
            .holdings
            .into_iter()
            .filter(|(symbol, quantity)| {
                *quantity > 0 && !symbol.is_empty() && !symbol.contains(char::is_whitespace)
            })
            .collect();
        Self { holdings }
    }
}

impl Portfolio {
    /// Create an empty port.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` shares of `symbol`.
    pub fn add(&mut self, symbol: &str, quantity: Quantity) -> AddOutcome {
        match self.holdings.get(symbol).copied() {
            Some(from) => {
                let to = from.saturating_add(quantity);
                self.holdings.insert(symbol.to_string(), to);
                AddOutcome::Increased { from, to }
            }
            None => {
                if quantity > 0 {
                    self.holdings.insert(symbol.to_string(), quantity);
                }
                AddOutcome::Started { quantity }
            }
        }
    }

    /// Remove up to `quantity` shares of `symbol`, never going below zero.
    pub fn remove(&mut self, symbol: &str, quantity: Quantity) -> RemoveOutcome {
        let Some(from) = self.holdings.get(symbol).copied() else {
            return RemoveOutcome::NotHeld;
        };

        let to = from.saturating_sub(quantity).max(0);
        if to == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), to);
        }
        RemoveOutcome::Decreased { from, to }
    }

    /// Quantity held for `symbol`, if any.
    #[must_use]
    pub fn quantity(&self, symbol: &str) -> Option<Quantity> {
        self.holdings.get(symbol).copied()
    }

    /// Held symbols in lexicographic order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.holdings.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_starts_then_increases() {
        let mut port = Portfolio::new();
        assert_eq!(port.add("AAPL", 10), AddOutcome::Started { quantity: 10 });
        assert_eq!(
            port.add("AAPL", 10),
            AddOutcome::Increased { from: 10, to: 20 }
        );
        assert_eq!(port.quantity("AAPL"), Some(20));
    }

    #[test]
    fn add_zero_to_new_symbol_is_not_kept() {
        let mut port = Portfolio::new();
        assert_eq!(port.add("AAPL", 0), AddOutcome::Started { quantity: 0 });
        assert!(port.is_empty());
    }

    #[test]
    fn remove_clamps_at_zero_and_drops_symbol() {
        let mut port = Portfolio::new();
        port.add("AAPL", 5);
        assert_eq!(
            port.remove("AAPL", 10),
            RemoveOutcome::Decreased { from: 5, to: 0 }
        );
        assert!(port.is_empty());
    }

    #[test]
    fn remove_partial_keeps_remainder() {
        let mut port = Portfolio::new();
        port.add("TSLA", 8);
        assert_eq!(
            port.remove("TSLA", 3),
            RemoveOutcome::Decreased { from: 8, to: 5 }
        );
        assert_eq!(port.quantity("TSLA"), Some(5));
    }

    #[test]
    fn remove_unknown_symbol_is_not_held() {
        let mut port = Portfolio::new();
        port.add("AAPL", 1);
        assert_eq!(port.remove("MSFT", 1), RemoveOutcome::NotHeld);
        assert_eq!(port.len(), 1);
    }

    #[test]
    fn symbols_are_case_sensitive_and_sorted() {
        let mut port = Portfolio::new();
        port.add("pltr", 1);
        port.add("AAPL", 1);
        port.add("MSFT", 1);
        port.add("aapl", 1);
        let symbols: Vec<_> = port.symbols().collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "aapl", "pltr"]);
    }

    #[test]
    fn add_saturates_instead_of_overflowing() {
        let mut port = Portfolio::new();
        port.add("AAPL", Quantity::MAX);
        assert_eq!(
            port.add("AAPL", 1),
            AddOutcome::Increased {
                from: Quantity::MAX,
                to: Quantity::MAX
            }
        );
    }

    #[test]
    fn serializes_under_holdings_field() {
        let mut port = Portfolio::new();
        port.add("AAPL", 10);
        let json = serde_json::to_string(&port).unwrap();
        assert_eq!(json, r#"{"holdings":{"AAPL":10}}"#);

        let parsed: Portfolio = serde_json::from_str(r#"{"holdings":{"NIO":3}}"#).unwrap();
        assert_eq!(parsed.quantity("NIO"), Some(3));
    }

    #[test]
    fn loading_drops_entries_that_cannot_be_held() {
        let parsed: Portfolio =
            serde_json::from_str(r#"{"holdings":{"AAPL":4,"X":0,"Y":-2,"":7}}"#).unwrap();
        assert_eq!(parsed.symbols().collect::<Vec<_>>(), vec!["AAPL"]);

        let parsed: Portfolio = serde_json::from_str(r#"{"holdings":{"X":0}}"#).unwrap();
        assert!(parsed.is_empty());
    }
}
