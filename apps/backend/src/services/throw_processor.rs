//! Entry point for callers: one per-game lock plus one transaction per call.

use serde::Serialize;
use tracing::{debug, warn};

use crate::db::with_txn;
use crate::domain::{suggest_checkout, RawThrow, Seat, ThrowOutcome};
use crate::error::AppError;
use crate::services::games::{CreatedGame, CreatedPlayer, GameSnapshot, GamesService, NewGame, PlayerRef};
use crate::services::match_flow::{LegAdvance, MatchFlowService, ThrowApplied, TurnTarget};
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrowStatus {
    Ok,
    Bust,
    InvalidFinishNeedsDouble,
    LegWon,
    SetWon,
    MatchWon,
    FinishedError,
    NotFound,
    ValidationError,
}

impl From<ThrowOutcome> for ThrowStatus {
    fn from(outcome: ThrowOutcome) -> Self {
        match outcome {
            ThrowOutcome::Ok => ThrowStatus::Ok,
            ThrowOutcome::Bust => ThrowStatus::Bust,
            ThrowOutcome::InvalidFinishNeedsDouble => ThrowStatus::InvalidFinishNeedsDouble,
            ThrowOutcome::LegWon => ThrowStatus::LegWon,
            ThrowOutcome::SetWon => ThrowStatus::SetWon,
            ThrowOutcome::MatchWon => ThrowStatus::MatchWon,
        }
    }
}

/// Structured answer to a submitted dart.
///
/// Rejections carry no score: nothing was recorded and the player may not
/// exist. Counters are present only when a leg was won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThrowReport {
    pub status: ThrowStatus,
    pub player_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_set: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_leg: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ThrowReport {
    fn applied(applied: ThrowApplied) -> Self {
        let message = match applied.outcome {
            ThrowOutcome::LegWon => Some(format!(
                "{} has won leg {} of set {}.",
                applied.player_name, applied.played_leg, applied.played_set
            )),
            ThrowOutcome::SetWon => Some(format!(
                "{} has won set {}.",
                applied.player_name, applied.played_set
            )),
            ThrowOutcome::MatchWon => {
                Some(format!("{} has won the match!", applied.player_name))
            }
            ThrowOutcome::Ok | ThrowOutcome::Bust | ThrowOutcome::InvalidFinishNeedsDouble => None,
        };
        let won = message.is_some();

        Self {
            status: applied.outcome.into(),
            player_id: applied.player_id,
            current_score: Some(applied.current_score),
            leg_wins: won.then_some(applied.leg_wins),
            set_wins: won.then_some(applied.set_wins),
            current_set: won.then_some(applied.current_set),
            current_leg: won.then_some(applied.current_leg),
            message,
        }
    }

    fn rejected(player_id: i64, err: &AppError) -> Self {
        let status = match err {
            AppError::Finished { .. } => ThrowStatus::FinishedError,
            AppError::NotFound { .. } => ThrowStatus::NotFound,
            _ => ThrowStatus::ValidationError,
        };
        Self {
            status,
            player_id,
            current_score: None,
            leg_wins: None,
            set_wins: None,
            current_set: None,
            current_leg: None,
            message: Some(err.detail().to_string()),
        }
    }
}

/// Serializes mutations per game and runs each in its own transaction.
#[derive(Debug, Clone)]
pub struct ThrowProcessor {
    state: AppState,
    games: GamesService,
    flow: MatchFlowService,
}

impl ThrowProcessor {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            games: GamesService::new(),
            flow: MatchFlowService::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Record a dart. Caller mistakes come back as a report; storage
    /// failures stay errors.
    pub async fn process_throw(
        &self,
        game_id: i64,
        player_id: i64,
        raw: RawThrow,
    ) -> Result<ThrowReport, AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let flow = self.flow;

        let result = with_txn(&self.state, |txn| async move {
            flow.record_throw(txn.as_ref(), game_id, player_id, raw).await
        })
        .await;

        match result {
            Ok(applied) => Ok(ThrowReport::applied(applied)),
            Err(err) if err.is_rejection() => {
                debug!(game_id, player_id, code = %err.code(), detail = err.detail(), "throw rejected");
                Ok(ThrowReport::rejected(player_id, &err))
            }
            Err(err) => {
                warn!(game_id, player_id, error = %err, "throw failed");
                Err(err)
            }
        }
    }

    /// Checkout for a remaining score, if one exists within three darts.
    pub fn suggest(&self, remaining: i32) -> Option<Vec<&'static str>> {
        suggest_checkout(remaining)
    }

    pub async fn set_starter(&self, game_id: i64, target: TurnTarget) -> Result<Seat, AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let flow = self.flow;
        with_txn(&self.state, |txn| async move {
            flow.set_starter(txn.as_ref(), game_id, target).await
        })
        .await
    }

    pub async fn set_active(&self, game_id: i64, target: TurnTarget) -> Result<Seat, AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let flow = self.flow;
        with_txn(&self.state, |txn| async move {
            flow.set_active(txn.as_ref(), game_id, target).await
        })
        .await
    }

    pub async fn next_leg(&self, game_id: i64) -> Result<LegAdvance, AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let flow = self.flow;
        with_txn(&self.state, |txn| async move {
            flow.next_leg(txn.as_ref(), game_id).await
        })
        .await
    }

    pub async fn restart(&self, game_id: i64) -> Result<(), AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let flow = self.flow;
        with_txn(&self.state, |txn| async move {
            flow.restart(txn.as_ref(), game_id).await
        })
        .await
    }

    pub async fn end(&self, game_id: i64) -> Result<(), AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let flow = self.flow;
        with_txn(&self.state, |txn| async move { flow.end(txn.as_ref(), game_id).await }).await
    }

    pub async fn create_game(&self, request: NewGame) -> Result<CreatedGame, AppError> {
        let games = self.games;
        with_txn(&self.state, |txn| async move {
            games.create_game(txn.as_ref(), request).await
        })
        .await
    }

    pub async fn add_player(
        &self,
        game_id: i64,
        player: PlayerRef,
    ) -> Result<CreatedPlayer, AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let games = self.games;
        with_txn(&self.state, |txn| async move {
            games.add_player(txn.as_ref(), game_id, player).await
        })
        .await
    }

    pub async fn game_snapshot(&self, game_id: i64) -> Result<GameSnapshot, AppError> {
        let games = self.games;
        with_txn(&self.state, |txn| async move {
            games.game_snapshot(txn.as_ref(), game_id).await
        })
        .await
    }

    pub async fn delete_game(&self, game_id: i64) -> Result<(), AppError> {
        let _guard = self.state.game_locks.acquire(game_id).await;
        let games = self.games;
        with_txn(&self.state, |txn| async move {
            games.delete_game(txn.as_ref(), game_id).await
        })
        .await
    }
}
