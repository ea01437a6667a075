use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::db::GameLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Per-game serialization for mutating operations
    pub game_locks: Arc<GameLocks>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Some(db),
            game_locks: Arc::new(GameLocks::new()),
        }
    }

    /// State without a database connection
    pub fn without_db() -> Self {
        Self {
            db: None,
            game_locks: Arc::new(GameLocks::new()),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
