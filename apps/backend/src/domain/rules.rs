use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const MAX_PLAYERS: usize = 6;
pub const DEFAULT_MODE: &str = "501";
pub const DEFAULT_LEGS_TO_WIN: u32 = 3;
pub const DEFAULT_SETS_TO_WIN: u32 = 1;

/// Game mode as far as scoring is concerned.
///
/// X01 modes are all-digit strings ending in "01" ("301", "501", "701",
/// "1001", ...). Anything else is recorded but not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    X01 { starting_score: i32 },
    Unscored,
}

impl GameMode {
    pub fn parse(mode: &str) -> Self {
        let mode = mode.trim();
        if mode.is_empty() || !mode.bytes().all(|b| b.is_ascii_digit()) || !mode.ends_with("01")
        {
            return GameMode::Unscored;
        }
        match mode.parse::<i32>() {
            Ok(starting_score) if starting_score >= 101 => GameMode::X01 { starting_score },
            _ => GameMode::Unscored,
        }
    }

    pub fn starting_score(&self) -> i32 {
        match self {
            GameMode::X01 { starting_score } => *starting_score,
            GameMode::Unscored => 0,
        }
    }

    pub fn is_x01(&self) -> bool {
        matches!(self, GameMode::X01 { .. })
    }
}

/// How the opener of the first leg is picked. Recorded for the client,
/// which runs the draw or bull-off and then sets the starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstThrowMethod {
    Random,
    Bulls,
}

impl FirstThrowMethod {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(FirstThrowMethod::Random),
            "bulls" => Ok(FirstThrowMethod::Bulls),
            other => Err(DomainError::validation(
                ValidationKind::Other("FIRST_THROW_METHOD".into()),
                format!("first_throw_method must be 'random' or 'bulls', got '{other}'"),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FirstThrowMethod::Random => "random",
            FirstThrowMethod::Bulls => "bulls",
        }
    }
}

/// Win thresholds. `None` disables counting at that level: with no
/// `legs_to_win` every leg win is recorded but never promotes to a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchRules {
    pub legs_to_win: Option<u32>,
    pub sets_to_win: Option<u32>,
}

impl MatchRules {
    /// Build from stored columns, where 0 or a missing value means disabled.
    pub fn from_stored(legs_to_win: Option<i32>, sets_to_win: Option<i32>) -> Self {
        let threshold = |v: Option<i32>| v.filter(|n| *n > 0).map(|n| n as u32);
        Self {
            legs_to_win: threshold(legs_to_win),
            sets_to_win: threshold(sets_to_win),
        }
    }

    pub fn wins_set(&self, leg_wins: u32) -> bool {
        self.legs_to_win.is_some_and(|n| leg_wins >= n)
    }

    pub fn wins_match(&self, set_wins: u32) -> bool {
        self.sets_to_win.is_some_and(|n| set_wins >= n)
    }
}
