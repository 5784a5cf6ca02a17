//! Per-user mutation locks.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::error::gacha::GachaError;

/// Registry size above which idle entries are dropped.
const PRUNE_THRESHOLD: usize = 1024;

/// Registry of per-user async mutexes.
///
/// Every operation mutating a user's balance, pity counters or inventory holds that
/// user's lock for its whole transaction. Acquisition waits at most `timeout` and then
/// fails with `GachaError::Concurrency`.
#[derive(Clone)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<u64, Arc<AsyncMutex<()>>>>>,
    timeout: Duration,
}

/// Held locks. Released on drop.
pub struct UserGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl UserLocks {
    pub fn new(timeout: Duration) -> Self {
        Self {
            locks: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    fn entry(&self, user_id: u64) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());

        // Only the registry references an idle entry
        if locks.len() > PRUNE_THRESHOLD {
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        }

        locks.entry(user_id).or_default().clone()
    }

    async fn acquire(&self, user_id: u64) -> Result<OwnedMutexGuard<()>, GachaError> {
        let lock = self.entry(user_id);

        tokio::time::timeout(self.timeout, lock.lock_owned())
            .await
            .map_err(|_| {
                tracing::warn!("Timed out waiting for the lock of user {}", user_id);
                GachaError::Concurrency
            })
    }

    /// Locks one user.
    ///
    /// # Returns
    /// - `Ok(UserGuard)` - Lock held until the guard is dropped
    /// - `Err(GachaError::Concurrency)` - Lock not acquired within the timeout
    pub async fn lock(&self, user_id: u64) -> Result<UserGuard, GachaError> {
        Ok(UserGuard {
            _guards: vec![self.acquire(user_id).await?],
        })
    }

    /// Locks two users in ascending id order.
    ///
    /// The fixed order keeps opposite transfers between the same users from deadlocking.
    /// Locking the same user twice takes a single lock.
    ///
    /// # Returns
    /// - `Ok(UserGuard)` - Both locks held until the guard is dropped
    /// - `Err(GachaError::Concurrency)` - Either lock not acquired within the timeout
    pub async fn lock_pair(&self, a: u64, b: u64) -> Result<UserGuard, GachaError> {
        if a == b {
            return self.lock(a).await;
        }

        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let first = self.acquire(first).await?;
        let second = self.acquire(second).await?;

        Ok(UserGuard {
            _guards: vec![first, second],
        })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
