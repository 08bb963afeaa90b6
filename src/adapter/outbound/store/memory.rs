//! In-memory store implementation for testing.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::{Portfolio, UserKey};
use crate::error::PersistenceError;
use crate::port::PortfolioStore;

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ports: RwLock<HashMap<UserKey, Portfolio>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.ports.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.read().is_empty()
    }

    /// Whether a record exists for `user`.
    pub fn contains(&self, user: &UserKey) -> bool {
        self.ports.read().contains_key(user)
    }
}

impl PortfolioStore for MemoryStore {
    async fn load(&self, user: &UserKey) -> Result<Option<Portfolio>, PersistenceError> {
        Ok(self.ports.read().get(user).cloned())
    }

    async fn save(&self, user: &UserKey, portfolio: &Portfolio) -> Result<(), PersistenceError> {
        self.ports.write().insert(user.clone(), portfolio.clone());
        Ok(())
    }

    async fn delete(&self, user: &UserKey) -> Result<(), PersistenceError> {
        self.ports.write().remove(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn crud_operations() {
        let store = MemoryStore::new();
        let user = UserKey::new("1");

        assert!(store.load(&user).await.unwrap().is_none());

        let mut port = Portfolio::new();
        port.add("AAPL", 3);
        store.save(&user, &port).await.unwrap();
        assert_eq!(store.load(&user).await.unwrap(), Some(port));
        assert!(store.contains(&user));

        store.delete(&user).await.unwrap();
        assert!(store.load(&user).await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_record_succeeds() {
        let store = MemoryStore::new();
        store.delete(&UserKey::new("nobody")).await.unwrap();
    }
}
