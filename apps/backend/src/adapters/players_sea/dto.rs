//! DTOs for players_sea adapter.

#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: i64,
    pub profile_id: Option<i64>,
    pub name: String,
    pub turn_order: i32,
    pub starting_score: i32,
}

/// Scoring counters written back after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScoreUpdate {
    pub id: i64,
    pub current_score: i32,
    pub leg_wins: i32,
    pub set_wins: i32,
}
