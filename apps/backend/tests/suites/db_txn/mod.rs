pub mod optimistic_lock;
pub mod with_txn;
