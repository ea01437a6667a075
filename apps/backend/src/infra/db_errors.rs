//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and higher layers then map
//! `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..]
        .split_whitespace()
        .next()
        .map(|s| s.trim_end_matches(','))
}

fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "profiles.name" => Some((
            ConflictKind::Other("UniqueProfileName".into()),
            "Profile name already exists",
        )),
        "match_sets.game_id" => Some((
            ConflictKind::Other("DuplicateSet".into()),
            "Set already recorded for this game",
        )),
        _ => None,
    }
}

/// Parse the id out of structured `<PREFIX>:<id>` adapter errors.
fn parse_structured_id(msg: &str, prefix: &str) -> Option<i64> {
    msg.strip_prefix(prefix)?.parse::<i64>().ok()
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("GAME_NOT_FOUND:") => {
            if let Some(game_id) = parse_structured_id(msg, "GAME_NOT_FOUND:") {
                warn!(game_id, "Game not found");
                return DomainError::not_found(
                    NotFoundKind::Game,
                    format!("Game {game_id} not found"),
                );
            }
            warn!(raw_error = %msg, "Failed to parse GAME_NOT_FOUND error");
            return DomainError::not_found(NotFoundKind::Game, "Game not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
            if let Some(json_str) = msg.strip_prefix("OPTIMISTIC_LOCK:") {
                #[derive(serde::Deserialize)]
                struct LockInfo {
                    expected: i32,
                    actual: i32,
                }

                if let Ok(info) = serde_json::from_str::<LockInfo>(json_str) {
                    warn!(
                        expected = info.expected,
                        actual = info.actual,
                        "Optimistic lock conflict detected"
                    );
                    return DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Game was modified concurrently (expected version {}, actual version {}); retry",
                            info.expected, info.actual
                        ),
                    );
                }
            }

            warn!("Optimistic lock conflict detected (version info unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Game was modified by another transaction; retry",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if error_msg.contains("UNIQUE constraint failed") {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        if let Some((kind, detail)) =
            extract_sqlite_table_column(&error_msg).and_then(map_sqlite_table_column_to_conflict)
        {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if error_msg.contains("FOREIGN KEY constraint failed") {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("CHECK constraint failed") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("database is locked") || error_msg.contains("timed out") {
        warn!(raw_error = %error_msg, "Database busy or timed out");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
