//! Stale `lock_version` writes are refused and leave the row untouched.

use darts_backend::adapters::games_sea::{GameCreate, GameProgressUpdate};
use darts_backend::db::with_txn;
use darts_backend::repos::games as games_repo;
use darts_backend::{AppError, ErrorCode};

use crate::support::test_state::build_test_state;

fn progress(id: i64, current_leg: i32, expected_lock_version: i32) -> GameProgressUpdate {
    GameProgressUpdate {
        id,
        current_set: 1,
        current_leg,
        current_start_index: 0,
        current_active_index: 0,
        finished: false,
        expected_lock_version,
    }
}

#[tokio::test]
async fn matching_version_bumps_it() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let (before, after) = with_txn(&state, |txn| async move {
        let game = games_repo::create_game(txn.as_ref(), GameCreate::new("501", "random")).await?;
        let updated =
            games_repo::update_progress(txn.as_ref(), progress(game.id, 2, game.lock_version))
                .await?;
        Ok::<_, AppError>((game, updated))
    })
    .await?;

    assert_eq!(after.lock_version, before.lock_version + 1);
    assert_eq!(after.current_leg, 2);
    assert!(after.updated_at >= before.updated_at);
    Ok(())
}

#[tokio::test]
async fn stale_version_is_a_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let game = with_txn(&state, |txn| async move {
        let game = games_repo::create_game(txn.as_ref(), GameCreate::new("501", "random")).await?;
        games_repo::update_progress(txn.as_ref(), progress(game.id, 2, game.lock_version)).await?;
        Ok::<_, AppError>(game)
    })
    .await?;

    // The version read at creation is now stale.
    let (game_id, stale_version) = (game.id, game.lock_version);
    let err = with_txn(&state, |txn| async move {
        games_repo::update_progress(txn.as_ref(), progress(game_id, 3, stale_version))
            .await
            .map_err(AppError::from)
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::OptimisticLock);
    assert!(matches!(err, AppError::Conflict { .. }));

    let db = darts_backend::infra::require_db(&state)?;
    let stored = games_repo::require_game(db, game_id).await?;
    assert_eq!(stored.current_leg, 2);
    assert_eq!(stored.lock_version, stale_version + 1);
    Ok(())
}

#[tokio::test]
async fn missing_game_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let err = with_txn(&state, |txn| async move {
        games_repo::update_progress(txn.as_ref(), progress(31_337, 1, 1))
            .await
            .map_err(AppError::from)
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    Ok(())
}
