//! Leg, set and match progression with the history rows written alongside.

use darts_backend::ThrowStatus;

use crate::support::game_setup::{bring_501_to_40, create_x01, finish_on_d20, throw};
use crate::support::test_state::build_test_processor;

#[tokio::test]
async fn two_legs_win_a_set_then_two_sets_win_the_match() -> Result<(), Box<dyn std::error::Error>>
{
    let processor = build_test_processor().await?;
    let game = create_x01(&processor, "501", &["Anna", "Ben"], 2, 2).await?;
    let (game_id, anna) = (game.game_id, game.players[0].id);

    // Set 1, leg 1
    bring_501_to_40(&processor, game_id, anna).await?;
    let report = finish_on_d20(&processor, game_id, anna).await?;
    assert_eq!(report.status, ThrowStatus::LegWon);

    // Set 1, leg 2
    bring_501_to_40(&processor, game_id, anna).await?;
    let report = finish_on_d20(&processor, game_id, anna).await?;
    assert_eq!(report.status, ThrowStatus::SetWon);
    assert_eq!(report.set_wins, Some(1));
    assert_eq!(report.leg_wins, Some(0));
    assert_eq!(report.current_set, Some(2));
    assert_eq!(report.current_leg, Some(1));
    assert_eq!(report.message.as_deref(), Some("Anna has won set 1."));

    let snapshot = processor.game_snapshot(game_id).await?;
    assert!(snapshot.players.iter().all(|p| p.leg_wins == 0));
    assert!(snapshot.players.iter().all(|p| p.current_score == 501));
    assert_eq!(snapshot.history.len(), 2);
    assert_eq!(snapshot.history[0].winner_player_id, Some(anna));
    assert_eq!(
        snapshot.history[0]
            .legs
            .iter()
            .map(|l| (l.leg_number, l.winner_player_id))
            .collect::<Vec<_>>(),
        vec![(1, Some(anna)), (2, Some(anna))]
    );
    assert_eq!(snapshot.history[1].set_number, 2);
    assert!(snapshot.history[1].legs.is_empty());

    // Set 2
    bring_501_to_40(&processor, game_id, anna).await?;
    assert_eq!(
        finish_on_d20(&processor, game_id, anna).await?.status,
        ThrowStatus::LegWon
    );
    bring_501_to_40(&processor, game_id, anna).await?;
    let report = finish_on_d20(&processor, game_id, anna).await?;
    assert_eq!(report.status, ThrowStatus::MatchWon);
    assert_eq!(report.set_wins, Some(2));

    let snapshot = processor.game_snapshot(game_id).await?;
    assert!(snapshot.game.finished);
    assert_eq!(snapshot.players[0].set_wins, 2);
    assert_eq!(snapshot.history[1].winner_player_id, Some(anna));
    assert_eq!(snapshot.history[1].legs.len(), 2);

    // Nothing is accepted once the match is over.
    let report = throw(&processor, game_id, anna, 20, 1).await?;
    assert_eq!(report.status, ThrowStatus::FinishedError);
    let report = throw(&processor, game_id, game.players[1].id, 20, 1).await?;
    assert_eq!(report.status, ThrowStatus::FinishedError);
    Ok(())
}

#[tokio::test]
async fn disabled_leg_threshold_never_promotes() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let game = create_x01(&processor, "501", &["Anna", "Ben"], 0, 1).await?;
    let (game_id, anna) = (game.game_id, game.players[0].id);

    for leg in 1..=3u32 {
        bring_501_to_40(&processor, game_id, anna).await?;
        let report = finish_on_d20(&processor, game_id, anna).await?;
        assert_eq!(report.status, ThrowStatus::LegWon);
        assert_eq!(report.leg_wins, Some(leg));
        assert_eq!(report.set_wins, Some(0));
        assert_eq!(report.current_set, Some(1));
    }

    let snapshot = processor.game_snapshot(game_id).await?;
    assert_eq!(snapshot.history.len(), 1);
    assert_eq!(snapshot.history[0].winner_player_id, None);
    assert_eq!(snapshot.history[0].legs.len(), 3);
    assert!(!snapshot.game.finished);
    Ok(())
}

#[tokio::test]
async fn starter_rotates_every_leg() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let game = create_x01(&processor, "501", &["Anna", "Ben", "Cleo"], 5, 1).await?;
    let (game_id, anna) = (game.game_id, game.players[0].id);

    let mut starters = Vec::new();
    for _ in 0..4 {
        bring_501_to_40(&processor, game_id, anna).await?;
        finish_on_d20(&processor, game_id, anna).await?;
        let snapshot = processor.game_snapshot(game_id).await?;
        assert_eq!(
            snapshot.game.current_active_index,
            snapshot.game.current_start_index
        );
        starters.push(snapshot.game.current_start_index);
    }
    assert_eq!(starters, vec![1, 2, 0, 1]);
    Ok(())
}
