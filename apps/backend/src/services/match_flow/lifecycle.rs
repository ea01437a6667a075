use sea_orm::DatabaseTransaction;
use serde::Serialize;
use tracing::info;

use super::MatchFlowService;
use crate::domain::{transition, Seat};
use crate::error::AppError;
use crate::repos::{games as games_repo, history, throws as throws_repo};

/// Pointers after a manual leg skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegAdvance {
    pub current_leg: u32,
    pub current_start_index: Seat,
}

impl MatchFlowService {
    /// Skip to the next leg of the current set: scores reset, the opener
    /// rotates and becomes the active player. Rejected once finished.
    pub async fn next_leg(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
    ) -> Result<LegAdvance, AppError> {
        let game = games_repo::require_game(txn, game_id).await?;
        let loaded = self.load_match(txn, game).await?;

        let next = transition::next_leg(&loaded.state)?;
        self.save_match(txn, &loaded, &next).await?;

        info!(
            game_id,
            current_leg = next.current_leg,
            start_index = next.start_index,
            "advanced to next leg"
        );
        Ok(LegAdvance {
            current_leg: next.current_leg,
            current_start_index: next.start_index,
        })
    }

    /// Start the match over, finished or not. All throws of the game's
    /// players and the set/leg history are removed; set 1 is opened again.
    pub async fn restart(&self, txn: &DatabaseTransaction, game_id: i64) -> Result<(), AppError> {
        let game = games_repo::require_game(txn, game_id).await?;
        let loaded = self.load_match(txn, game).await?;

        let removed = throws_repo::delete_for_players(txn, &loaded.player_ids()).await?;
        history::clear_for_game(txn, game_id).await?;

        let next = transition::restart(&loaded.state);
        self.save_match(txn, &loaded, &next).await?;
        history::ensure_set(txn, game_id, 1).await?;

        info!(
            game_id,
            players = loaded.players.len(),
            throws_removed = removed,
            "game restarted"
        );
        Ok(())
    }

    /// Mark the game finished; later throws are rejected.
    pub async fn end(&self, txn: &DatabaseTransaction, game_id: i64) -> Result<(), AppError> {
        let game = games_repo::require_game(txn, game_id).await?;
        let loaded = self.load_match(txn, game).await?;

        let next = transition::end(&loaded.state);
        if next != loaded.state {
            self.save_match(txn, &loaded, &next).await?;
        }

        info!(game_id, "game ended");
        Ok(())
    }
}
