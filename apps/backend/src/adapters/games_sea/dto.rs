//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub mode: String,
    pub legs_to_win: Option<i32>,
    pub sets_to_win: Option<i32>,
    pub first_throw_method: String,
}

impl GameCreate {
    pub fn new(mode: impl Into<String>, first_throw_method: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            legs_to_win: None,
            sets_to_win: None,
            first_throw_method: first_throw_method.into(),
        }
    }

    pub fn with_thresholds(mut self, legs_to_win: Option<i32>, sets_to_win: Option<i32>) -> Self {
        self.legs_to_win = legs_to_win;
        self.sets_to_win = sets_to_win;
        self
    }
}

/// Match progress written back after every state transition.
///
/// `expected_lock_version` must match the stored version; the update bumps it.
#[derive(Debug, Clone)]
pub struct GameProgressUpdate {
    pub id: i64,
    pub current_set: i32,
    pub current_leg: i32,
    pub current_start_index: i32,
    pub current_active_index: i32,
    pub finished: bool,
    pub expected_lock_version: i32,
}
