//! Per-user mutual exclusion for read-modify-write on port records.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::UserKey;

/// One async mutex per user key.
///
/// Commands from different users run concurrently; commands from the same
/// user that mutate the port are serialized by holding the guard across
/// load, mutate and save. An entry lives only while someone holds or waits
/// for it.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: DashMap<UserKey, Arc<Mutex<()>>>,
}

/// Exclusive access to one user's record. Dropping it releases the lock.
#[derive(Debug)]
pub struct UserGuard<'a> {
    guard: Option<OwnedMutexGuard<()>>,
    user: UserKey,
    locks: &'a DashMap<UserKey, Arc<Mutex<()>>>,
}

impl Drop for UserGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters hold their own clone of the Arc, so a count of one means
        // the map is the only owner left.
        self.locks
            .remove_if(&self.user, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `user`'s record.
    pub async fn lock(&self, user: &UserKey) -> UserGuard<'_> {
        // Clone the Arc out so the shard lock is released before awaiting.
        let mutex = self.locks.entry(user.clone()).or_default().clone();
        let guard = mutex.lock_owned().await;
        UserGuard {
            guard: Some(guard),
            user: user.clone(),
            locks: &self.locks,
        }
    }

    /// Number of users currently holding or waiting for a lock.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_user_is_serialized() {
        let locks = Arc::new(UserLocks::new());
        let user = UserKey::new("1");

        let guard = locks.lock(&user).await;
        let pending = {
            let locks = Arc::clone(&locks);
            let user = user.clone();
            tokio::spawn(async move {
                let _guard = locks.lock(&user).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!pending.is_finished());

        drop(guard);
        pending.await.unwrap();
    }

    #[tokio::test]
    async fn different_users_do_not_block() {
        let locks = UserLocks::new();
        let _a = locks.lock(&UserKey::new("a")).await;
        let _b = tokio::time::timeout(Duration::from_secs(1), locks.lock(&UserKey::new("b")))
            .await
            .expect("lock for another user should not wait");
        assert_eq!(locks.len(), 2);
    }

    #[tokio::test]
    async fn released_locks_are_forgotten() {
        let locks = UserLocks::new();
        let guard = locks.lock(&UserKey::new("a")).await;
        assert_eq!(locks.len(), 1);

        drop(guard);
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn entry_survives_while_another_task_waits() {
        let locks = Arc::new(UserLocks::new());
        let user = UserKey::new("1");

        let guard = locks.lock(&user).await;
        let pending = {
            let locks = Arc::clone(&locks);
            let user = user.clone();
            tokio::spawn(async move {
                let _guard = locks.lock(&user).await;
                tokio::time::sleep(Duration::from_millis(20)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(guard);
        assert_eq!(locks.len(), 1);

        pending.await.unwrap();
        assert!(locks.is_empty());
    }
}
