//! Game setup and read models: creation, joining players, snapshots, deletion.

use sea_orm::DatabaseTransaction;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapters::games_sea::GameCreate;
use crate::adapters::players_sea::PlayerCreate;
use crate::domain::checkout::suggestion_for;
use crate::domain::rules::{
    DEFAULT_LEGS_TO_WIN, DEFAULT_MODE, DEFAULT_SETS_TO_WIN, MAX_PLAYERS,
};
use crate::domain::{validate_throw, FirstThrowMethod, GameMode};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::games::{self as games_repo, Game};
use crate::repos::players::{self as players_repo, Player};
use crate::repos::{history, profiles, throws as throws_repo};

/// Darts shown as a player's last visit.
pub const LAST_VISIT_DARTS: u64 = 3;

/// How a caller names a player when creating a game or joining one.
///
/// Deserializes from a bare integer (profile id), a bare string (name) or an
/// object with optional `profile_id` and `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerRef {
    ById(i64),
    ByName(String),
    Structured {
        #[serde(default)]
        profile_id: Option<i64>,
        #[serde(default)]
        name: Option<String>,
    },
}

/// Game creation request. Omitted options fall back to the stored defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewGame {
    pub mode: Option<String>,
    pub players: Vec<PlayerRef>,
    /// `Some(0)` disables set promotion.
    pub legs_to_win: Option<u32>,
    /// `Some(0)` disables match completion.
    pub sets_to_win: Option<u32>,
    pub first_throw_method: Option<FirstThrowMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedPlayer {
    pub id: i64,
    pub name: String,
    pub profile_id: Option<i64>,
    pub current_score: i32,
}

impl From<Player> for CreatedPlayer {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            profile_id: player.profile_id,
            current_score: player.current_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedGame {
    pub game_id: i64,
    pub players: Vec<CreatedPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
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
}

impl From<&Game> for GameInfo {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            mode: game.mode.clone(),
            legs_to_win: game.legs_to_win,
            sets_to_win: game.sets_to_win,
            current_set: game.current_set,
            current_leg: game.current_leg,
            first_throw_method: game.first_throw_method.clone(),
            current_start_index: game.current_start_index,
            current_active_index: game.current_active_index,
            finished: game.finished,
        }
    }
}

/// One dart of a last visit, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitDart {
    pub value: i32,
    pub multiplier: i32,
    pub label: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub id: i64,
    pub name: String,
    pub profile_id: Option<i64>,
    pub starting_score: i32,
    pub current_score: i32,
    pub leg_wins: i32,
    pub set_wins: i32,
    pub suggestion: Option<Vec<&'static str>>,
    pub last_visit_score: i32,
    pub last_visit: Vec<VisitDart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegHistory {
    pub leg_number: i32,
    pub winner_player_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetHistory {
    pub set_number: i32,
    pub winner_player_id: Option<i64>,
    pub legs: Vec<LegHistory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub game: GameInfo,
    pub players: Vec<PlayerSnapshot>,
    pub history: Vec<SetHistory>,
}

/// Profile link and display name a `PlayerRef` resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedPlayer {
    profile_id: Option<i64>,
    name: String,
}

fn threshold(value: Option<u32>, default: u32, field: &str) -> Result<i32, AppError> {
    let value = value.unwrap_or(default);
    i32::try_from(value).map_err(|_| {
        AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} {value} is too large"),
        )
    })
}

fn visit_dart(throw: &throws_repo::Throw) -> Result<VisitDart, DomainError> {
    let dart = validate_throw(throw.value, throw.multiplier).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("stored throw {} is not a legal dart: {e}", throw.id),
        )
    })?;
    Ok(VisitDart {
        value: throw.value,
        multiplier: throw.multiplier,
        label: dart.label(),
        x: throw.x,
        y: throw.y,
    })
}

/// Game setup service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GamesService;

impl GamesService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a player reference against stored profiles.
    ///
    /// With `strict`, an explicit profile id that does not exist is an error;
    /// otherwise it falls back to a plain "Player {id}" entry.
    async fn resolve_player(
        &self,
        txn: &DatabaseTransaction,
        player: &PlayerRef,
        strict: bool,
    ) -> Result<ResolvedPlayer, AppError> {
        let (explicit_id, requested_name) = match player {
            PlayerRef::ById(id) => (Some(*id), None),
            PlayerRef::ByName(name) => (None, Some(name.as_str())),
            PlayerRef::Structured { profile_id, name } => (*profile_id, name.as_deref()),
        };
        let requested_name = requested_name.map(str::trim).filter(|n| !n.is_empty());

        let mut profile = None;
        if let Some(id) = explicit_id {
            profile = profiles::find_by_id(txn, id).await?;
            if profile.is_none() && strict {
                return Err(DomainError::not_found(
                    NotFoundKind::Profile,
                    format!("Profile {id} not found"),
                )
                .into());
            }
        }
        if profile.is_none() {
            if let Some(name) = requested_name {
                profile = profiles::find_by_name(txn, name).await?;
            }
        }

        let name = match (requested_name, &profile, player) {
            (Some(name), _, _) => name.to_string(),
            (None, Some(profile), _) => profile.name.clone(),
            (None, None, PlayerRef::ById(id)) => format!("Player {id}"),
            (None, None, _) => "Player".to_string(),
        };

        Ok(ResolvedPlayer {
            profile_id: profile.map(|p| p.id),
            name,
        })
    }

    /// Create a game with its players (at most six, extras are ignored) and
    /// open set 1.
    pub async fn create_game(
        &self,
        txn: &DatabaseTransaction,
        request: NewGame,
    ) -> Result<CreatedGame, AppError> {
        let mode = request
            .mode
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODE)
            .to_string();
        let starting_score = GameMode::parse(&mode).starting_score();
        let method = request.first_throw_method.unwrap_or(FirstThrowMethod::Random);

        let dto = GameCreate::new(mode.clone(), method.as_str()).with_thresholds(
            Some(threshold(request.legs_to_win, DEFAULT_LEGS_TO_WIN, "legs_to_win")?),
            Some(threshold(request.sets_to_win, DEFAULT_SETS_TO_WIN, "sets_to_win")?),
        );
        let game = games_repo::create_game(txn, dto).await?;

        if request.players.len() > MAX_PLAYERS {
            debug!(
                game_id = game.id,
                requested = request.players.len(),
                "ignoring players beyond the table limit"
            );
        }

        let mut players = Vec::new();
        for (turn_order, player) in request.players.iter().take(MAX_PLAYERS).enumerate() {
            let resolved = self.resolve_player(txn, player, false).await?;
            let created = players_repo::create_player(
                txn,
                PlayerCreate {
                    game_id: game.id,
                    profile_id: resolved.profile_id,
                    name: resolved.name,
                    turn_order: turn_order as i32,
                    starting_score,
                },
            )
            .await?;
            players.push(CreatedPlayer::from(created));
        }

        history::ensure_set(txn, game.id, 1).await?;

        info!(
            game_id = game.id,
            mode = %mode,
            players = players.len(),
            "game created"
        );
        Ok(CreatedGame {
            game_id: game.id,
            players,
        })
    }

    /// Seat one more player at the end of the turn order.
    pub async fn add_player(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        player: PlayerRef,
    ) -> Result<CreatedPlayer, AppError> {
        let game = games_repo::require_game(txn, game_id).await?;

        let seated = players_repo::count_by_game(txn, game_id).await?;
        if seated >= MAX_PLAYERS as u64 {
            return Err(DomainError::validation(
                ValidationKind::TooManyPlayers,
                format!("Game already has maximum number of players ({MAX_PLAYERS})"),
            )
            .into());
        }

        let resolved = self.resolve_player(txn, &player, true).await?;
        let created = players_repo::create_player(
            txn,
            PlayerCreate {
                game_id,
                profile_id: resolved.profile_id,
                name: resolved.name,
                turn_order: seated as i32,
                starting_score: game.game_mode().starting_score(),
            },
        )
        .await?;

        info!(game_id, player_id = created.id, "player added");
        Ok(CreatedPlayer::from(created))
    }

    /// Everything a scoreboard needs for one game.
    pub async fn game_snapshot(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
    ) -> Result<GameSnapshot, AppError> {
        let game = games_repo::require_game(txn, game_id).await?;
        let mode = game.game_mode();

        let mut players = Vec::new();
        for player in players_repo::list_by_game(txn, game_id).await? {
            let mut recent = throws_repo::recent_for_player(txn, player.id, LAST_VISIT_DARTS).await?;
            recent.reverse();
            let last_visit = recent
                .iter()
                .map(visit_dart)
                .collect::<Result<Vec<_>, _>>()?;

            players.push(PlayerSnapshot {
                id: player.id,
                suggestion: suggestion_for(&mode, player.current_score),
                last_visit_score: recent.iter().map(|t| t.value * t.multiplier).sum(),
                last_visit,
                name: player.name,
                profile_id: player.profile_id,
                starting_score: player.starting_score,
                current_score: player.current_score,
                leg_wins: player.leg_wins,
                set_wins: player.set_wins,
            });
        }

        let sets = history::list_sets(txn, game_id).await?;
        let set_ids: Vec<i64> = sets.iter().map(|s| s.id).collect();
        let legs = history::list_legs(txn, &set_ids).await?;
        let history = sets
            .into_iter()
            .map(|set| {
                let mut set_legs: Vec<LegHistory> = legs
                    .iter()
                    .filter(|leg| leg.match_set_id == set.id)
                    .map(|leg| LegHistory {
                        leg_number: leg.leg_number,
                        winner_player_id: leg.winner_player_id,
                    })
                    .collect();
                set_legs.sort_by_key(|leg| leg.leg_number);
                SetHistory {
                    set_number: set.set_number,
                    winner_player_id: set.winner_player_id,
                    legs: set_legs,
                }
            })
            .collect();

        Ok(GameSnapshot {
            game: GameInfo::from(&game),
            players,
            history,
        })
    }

    /// Remove a game with its players, throws and history.
    pub async fn delete_game(&self, txn: &DatabaseTransaction, game_id: i64) -> Result<(), AppError> {
        games_repo::require_game(txn, game_id).await?;

        let player_ids: Vec<i64> = players_repo::list_by_game(txn, game_id)
            .await?
            .iter()
            .map(|p| p.id)
            .collect();
        let throws_removed = throws_repo::delete_for_players(txn, &player_ids).await?;
        history::clear_for_game(txn, game_id).await?;
        players_repo::delete_by_game(txn, game_id).await?;
        games_repo::delete_game(txn, game_id).await?;

        info!(
            game_id,
            players = player_ids.len(),
            throws_removed,
            "game deleted"
        );
        Ok(())
    }
}
