//! Persistence port for user ports.

use std::future::Future;

use crate::domain::{Portfolio, UserKey};
use crate::error::PersistenceError;

/// Storage operations for per-user port records.
///
/// Callers never save an empty port; they delete the record instead, so an
/// existing record always holds at least one symbol.
pub trait PortfolioStore: Send + Sync {
    /// Load a user's port. `Ok(None)` means the user has no record yet.
    fn load(
        &self,
        user: &UserKey,
    ) -> impl Future<Output = Result<Option<Portfolio>, PersistenceError>> + Send;

    /// Save a port, replacing any existing record atomically.
    fn save(
        &self,
        user: &UserKey,
        portfolio: &Portfolio,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    /// Delete a user's record. Deleting a missing record succeeds.
    fn delete(&self, user: &UserKey) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}
