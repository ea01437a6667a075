use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub game_id: i64,
    pub profile_id: Option<i64>,
    pub name: String,
    pub turn_order: i32,
    pub starting_score: i32,
    pub current_score: i32,
    pub leg_wins: i32,
    pub set_wins: i32,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            profile_id: model.profile_id,
            name: model.name,
            turn_order: model.turn_order,
            starting_score: model.starting_score,
            current_score: model.current_score,
            leg_wins: model.leg_wins,
            set_wins: model.set_wins,
        }
    }
}

/// Players of a game in turn order.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let rows = players_adapter::list_by_game(conn, game_id).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let row = players_adapter::find_in_game(conn, game_id, player_id).await?;
    Ok(row.map(Player::from))
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    Ok(players_adapter::count_by_game(conn, game_id).await?)
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: players_adapter::PlayerCreate,
) -> Result<Player, DomainError> {
    let row = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(row))
}

pub async fn update_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: players_adapter::PlayerScoreUpdate,
) -> Result<(), DomainError> {
    let touched = players_adapter::update_scores(conn, dto).await?;
    if touched == 0 {
        return Err(DomainError::not_found(
            crate::errors::domain::NotFoundKind::Player,
            format!("Player {} not found", dto.id),
        ));
    }
    Ok(())
}

pub async fn delete_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    Ok(players_adapter::delete_by_game(conn, game_id).await?)
}
