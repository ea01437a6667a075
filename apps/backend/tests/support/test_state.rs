use darts_backend::config::db::DbProfile;
use darts_backend::infra::state::build_state;
use darts_backend::state::app_state::AppState;
use darts_backend::{AppError, ThrowProcessor};

/// Fresh, migrated in-memory database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbProfile::InMemory).build().await
}

pub async fn build_test_processor() -> Result<ThrowProcessor, AppError> {
    Ok(ThrowProcessor::new(build_test_state().await?))
}
