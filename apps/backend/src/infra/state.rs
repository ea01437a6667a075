use crate::config::db::{DbProfile, DbSettings};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in tests and binaries)
pub struct StateBuilder {
    db_settings: Option<DbSettings>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_settings: None }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_settings = Some(DbSettings::for_profile(profile));
        self
    }

    pub fn with_db_settings(mut self, settings: DbSettings) -> Self {
        self.db_settings = Some(settings);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_settings {
            // single entrypoint: connect + migrate
            Some(settings) => Ok(AppState::new(bootstrap_db(&settings).await?)),
            None => Ok(AppState::without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
