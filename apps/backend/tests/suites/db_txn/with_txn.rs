//! `with_txn` commits on Ok and rolls back on Err.

use darts_backend::adapters::games_sea::GameCreate;
use darts_backend::db::with_txn;
use darts_backend::repos::games as games_repo;
use darts_backend::state::app_state::AppState;
use darts_backend::{AppError, ErrorCode};
use tracing::debug;

use crate::support::test_state::build_test_state;

async fn game_exists(state: &AppState, game_id: i64) -> Result<bool, AppError> {
    let db = darts_backend::infra::require_db(state)?;
    Ok(games_repo::find_by_id(db, game_id).await?.is_some())
}

#[tokio::test]
async fn commits_on_ok() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let game_id = with_txn(&state, |txn| async move {
        let game = games_repo::create_game(txn.as_ref(), GameCreate::new("501", "random")).await?;
        debug!(game_id = game.id, "inserted games row inside txn");
        Ok::<_, AppError>(game.id)
    })
    .await?;

    assert!(game_exists(&state, game_id).await?);
    Ok(())
}

#[tokio::test]
async fn rolls_back_on_error() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let mut inserted = None;
    let result = with_txn(&state, |txn| {
        let inserted = &mut inserted;
        async move {
            let game =
                games_repo::create_game(txn.as_ref(), GameCreate::new("501", "random")).await?;
            *inserted = Some(game.id);
            Err::<(), _>(AppError::internal("test error triggered"))
        }
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);

    let game_id = inserted.expect("insert ran before the error");
    assert!(!game_exists(&state, game_id).await?);
    Ok(())
}

#[tokio::test]
async fn without_db_is_unavailable() {
    let state = AppState::without_db();
    let err = with_txn(&state, |_txn| async move { Ok::<_, AppError>(()) })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
