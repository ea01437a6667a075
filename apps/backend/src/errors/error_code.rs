//! Error codes for the darts backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Dart value or multiplier outside the board
    InvalidThrow,
    /// Board coordinates malformed or out of range
    InvalidCoordinates,
    /// Player index or id outside the game
    OutOfRange,
    /// Game already has the maximum number of players
    TooManyPlayers,
    /// Turn pointer update without player id or index
    MissingTarget,
    /// General validation error
    ValidationError,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    ProfileNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Match already finished
    GameFinished,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Data corruption detected
    DataCorruption,

    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidThrow => "INVALID_THROW",
            Self::InvalidCoordinates => "INVALID_COORDINATES",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::TooManyPlayers => "TOO_MANY_PLAYERS",
            Self::MissingTarget => "MISSING_TARGET",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameFinished => "GAME_FINISHED",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
