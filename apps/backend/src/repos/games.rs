//! Game repository functions for the service layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::domain::rules::{GameMode, MatchRules};
use crate::entities::games;
use crate::errors::domain::DomainError;

/// Game domain model, converted from `games::Model` when loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub mode: String,
    pub legs_to_win: Option<i32>,
    pub sets_to_win: Option<i32>,
    pub current_set: i32,
    pub current_leg: i32,
    pub first_throw_method: String,
    pub current_start_index: i32,
    pub current_active_index: i32,
    pub finished: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub lock_version: i32,
}

impl Game {
    pub fn game_mode(&self) -> GameMode {
        GameMode::parse(&self.mode)
    }

    pub fn rules(&self) -> MatchRules {
        MatchRules::from_stored(self.legs_to_win, self.sets_to_win)
    }
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            mode: model.mode,
            legs_to_win: model.legs_to_win,
            sets_to_win: model.sets_to_win,
            current_set: model.current_set,
            current_leg: model.current_leg,
            first_throw_method: model.first_throw_method,
            current_start_index: model.current_start_index,
            current_active_index: model.current_active_index,
            finished: model.finished,
            created_at: model.created_at,
            updated_at: model.updated_at,
            lock_version: model.lock_version,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Find game by ID or fail with `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Ok(Game::from(game))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: games_adapter::GameCreate,
) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

/// Write match progress with optimistic locking; bumps `lock_version`.
pub async fn update_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: games_adapter::GameProgressUpdate,
) -> Result<Game, DomainError> {
    let game = games_adapter::update_progress(conn, dto).await?;
    Ok(Game::from(game))
}

/// Returns whether a row was deleted.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, DomainError> {
    Ok(games_adapter::delete_game(conn, game_id).await? > 0)
}
