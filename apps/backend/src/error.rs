use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

/// Error surfaced by services and the throw processor.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Out of range: {detail}")]
    OutOfRange { detail: String },
    #[error("Game finished: {detail}")]
    Finished { detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Storage error: {detail}")]
    Storage { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::OutOfRange { .. } => ErrorCode::OutOfRange,
            AppError::Finished { .. } => ErrorCode::GameFinished,
            AppError::Conflict { code, .. } => *code,
            AppError::Storage { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::OutOfRange { detail }
            | AppError::Finished { detail }
            | AppError::Conflict { detail, .. }
            | AppError::Storage { detail, .. }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn out_of_range(detail: impl Into<String>) -> Self {
        Self::OutOfRange {
            detail: detail.into(),
        }
    }

    pub fn finished(detail: impl Into<String>) -> Self {
        Self::Finished {
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn storage(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Storage {
            code,
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::storage(ErrorCode::DbUnavailable, "Database unavailable")
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Rejections the caller caused; storage and internal failures are not.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::Validation { .. }
                | AppError::NotFound { .. }
                | AppError::OutOfRange { .. }
                | AppError::Finished { .. }
        )
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => match kind {
                ValidationKind::InvalidThrow => AppError::invalid(ErrorCode::InvalidThrow, detail),
                ValidationKind::InvalidCoordinates => {
                    AppError::invalid(ErrorCode::InvalidCoordinates, detail)
                }
                ValidationKind::OutOfRange => AppError::out_of_range(detail),
                ValidationKind::TooManyPlayers => {
                    AppError::invalid(ErrorCode::TooManyPlayers, detail)
                }
                ValidationKind::MissingTarget => {
                    AppError::invalid(ErrorCode::MissingTarget, detail)
                }
                ValidationKind::Other(_) => AppError::invalid(ErrorCode::ValidationError, detail),
            },
            DomainError::Conflict(kind, detail) => match kind {
                ConflictKind::GameFinished => AppError::finished(detail),
                ConflictKind::OptimisticLock => {
                    AppError::conflict(ErrorCode::OptimisticLock, detail)
                }
                ConflictKind::Other(_) => AppError::conflict(ErrorCode::Conflict, detail),
            },
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Game => ErrorCode::GameNotFound,
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Profile => ErrorCode::ProfileNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                    InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                    InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                    InfraErrorKind::Other(_) => ErrorCode::DbError,
                };
                AppError::storage(code, detail)
            }
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e).into()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
