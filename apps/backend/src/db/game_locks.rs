//! Per-game async locks.
//!
//! Mutating operations on one game take its lock before opening a
//! transaction, so load-modify-save cycles for the same game never
//! interleave. Different games do not contend. An entry lives only while
//! someone holds or waits for it.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

/// Exclusive access to one game. Dropping it releases the lock and
/// removes the entry when no other task is waiting.
#[derive(Debug)]
pub struct GameLockGuard<'a> {
    locks: &'a GameLocks,
    game_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for GameLockGuard<'_> {
    fn drop(&mut self) {
        // Release first so our own Arc no longer counts.
        self.guard.take();
        self.locks.evict_idle(self.game_id);
    }
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, game_id: i64) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Wait for exclusive access to `game_id`. Released when the guard drops.
    pub async fn acquire(&self, game_id: i64) -> GameLockGuard<'_> {
        let guard = self.lock_for(game_id).lock_owned().await;
        GameLockGuard {
            locks: self,
            game_id,
            guard: Some(guard),
        }
    }

    /// Drop the entry unless a holder or waiter still references it.
    /// Runs under the shard lock, so it cannot race with `lock_for`.
    fn evict_idle(&self, game_id: i64) {
        self.locks
            .remove_if(&game_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
