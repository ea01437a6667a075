use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_DB_FILE: &str = "darts.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Private in-memory database; gone when the pool closes
    InMemory,
    /// On-disk database file, created if missing
    File(PathBuf),
}

/// Connection settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub profile: DbProfile,
    pub busy_timeout: Duration,
}

impl DbSettings {
    pub fn for_profile(profile: DbProfile) -> Self {
        Self {
            profile,
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    /// Read `DARTS_DB`, `DARTS_DB_FILE` and `DARTS_DB_BUSY_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let profile = match lookup("DARTS_DB").as_deref().map(str::trim) {
            None | Some("") | Some("file") => {
                let file = lookup("DARTS_DB_FILE").unwrap_or_else(|| DEFAULT_DB_FILE.to_string());
                DbProfile::File(PathBuf::from(file))
            }
            Some("memory") => DbProfile::InMemory,
            Some(other) => {
                return Err(AppError::config(format!(
                    "DARTS_DB must be 'memory' or 'file', got '{other}'"
                )))
            }
        };

        let busy_timeout_ms = match lookup("DARTS_DB_BUSY_TIMEOUT_MS") {
            None => DEFAULT_BUSY_TIMEOUT_MS,
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "DARTS_DB_BUSY_TIMEOUT_MS must be a number of milliseconds, got '{raw}'"
                ))
            })?,
        };

        Ok(Self {
            profile,
            busy_timeout: Duration::from_millis(busy_timeout_ms),
        })
    }
}

/// SQLite connection URL for a profile.
pub fn db_url(profile: &DbProfile) -> String {
    match profile {
        DbProfile::InMemory => "sqlite::memory:".to_string(),
        DbProfile::File(path) => format!("sqlite://{}?mode=rwc", path.display()),
    }
}
