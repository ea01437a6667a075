//! Infrastructure layer - database bootstrap, state building and error mapping.

pub mod db;
pub mod db_errors;
pub mod state;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Access the database connection from AppState, or fail with
/// `DB_UNAVAILABLE` when none is configured.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or_else(AppError::db_unavailable)
}
