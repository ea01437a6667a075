//! Game creation, joining, snapshots and deletion.

use darts_backend::domain::RawThrow;
use darts_backend::repos::{games as games_repo, history, profiles};
use darts_backend::services::{NewGame, PlayerRef};
use darts_backend::{AppError, ErrorCode, ThrowStatus};

use crate::support::game_setup::{create_x01, named, throw, throw_all_ok};
use crate::support::test_state::build_test_processor;

#[tokio::test]
async fn defaults_apply_when_options_are_missing() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let created = processor
        .create_game(NewGame {
            players: named(&["Anna"]),
            ..NewGame::default()
        })
        .await?;

    let snapshot = processor.game_snapshot(created.game_id).await?;
    assert_eq!(snapshot.game.mode, "501");
    assert_eq!(snapshot.game.legs_to_win, Some(3));
    assert_eq!(snapshot.game.sets_to_win, Some(1));
    assert_eq!(snapshot.game.first_throw_method, "random");
    assert_eq!(snapshot.game.current_set, 1);
    assert_eq!(snapshot.game.current_leg, 1);
    assert!(!snapshot.game.finished);
    assert_eq!(snapshot.players[0].starting_score, 501);
    assert_eq!(snapshot.history.len(), 1);
    Ok(())
}

#[tokio::test]
async fn starting_score_follows_the_mode() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    for (mode, expected) in [("301", 301), ("701", 701), ("1001", 1001), ("cricket", 0)] {
        let game = create_x01(&processor, mode, &["Anna"], 3, 1).await?;
        assert_eq!(game.players[0].current_score, expected, "mode {mode}");
    }
    Ok(())
}

#[tokio::test]
async fn player_refs_resolve_against_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let db = darts_backend::infra::require_db(processor.state())?;
    let anna = profiles::create_profile(db, "Anna").await?;
    let ben = profiles::create_profile(db, "Ben").await?;

    let created = processor
        .create_game(NewGame {
            players: vec![
                PlayerRef::ById(anna.id),
                PlayerRef::ById(4242),
                PlayerRef::ByName("Ben".into()),
                PlayerRef::ByName("Guest".into()),
                PlayerRef::Structured {
                    profile_id: Some(anna.id),
                    name: Some("Annie".into()),
                },
                PlayerRef::Structured {
                    profile_id: None,
                    name: None,
                },
            ],
            ..NewGame::default()
        })
        .await?;

    let resolved: Vec<(&str, Option<i64>)> = created
        .players
        .iter()
        .map(|p| (p.name.as_str(), p.profile_id))
        .collect();
    assert_eq!(
        resolved,
        vec![
            ("Anna", Some(anna.id)),
            ("Player 4242", None),
            ("Ben", Some(ben.id)),
            ("Guest", None),
            ("Annie", Some(anna.id)),
            ("Player", None),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn extra_players_are_ignored_and_a_seventh_is_rejected(
) -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let game = create_x01(
        &processor,
        "501",
        &["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8"],
        3,
        1,
    )
    .await?;
    assert_eq!(game.players.len(), 6);
    assert_eq!(game.players[5].name, "P6");

    let err = processor
        .add_player(game.game_id, PlayerRef::ByName("P7".into()))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooManyPlayers);
    Ok(())
}

#[tokio::test]
async fn add_player_joins_at_the_end() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let game = create_x01(&processor, "301", &["Anna"], 3, 1).await?;

    let ben = processor
        .add_player(game.game_id, PlayerRef::ByName("Ben".into()))
        .await?;
    assert_eq!(ben.current_score, 301);

    let err = processor
        .add_player(
            game.game_id,
            PlayerRef::Structured {
                profile_id: Some(777),
                name: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ProfileNotFound);

    let err = processor
        .add_player(999, PlayerRef::ByName("Cleo".into()))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let snapshot = processor.game_snapshot(game.game_id).await?;
    let names: Vec<&str> = snapshot.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anna", "Ben"]);

    // The new player can throw straight away.
    let report = throw(&processor, game.game_id, ben.id, 20, 1).await?;
    assert_eq!(report.status, ThrowStatus::Ok);
    assert_eq!(report.current_score, Some(281));
    Ok(())
}

#[tokio::test]
async fn snapshot_shows_last_visit_and_suggestion() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let game = create_x01(&processor, "301", &["Anna", "Ben"], 3, 1).await?;
    let anna = game.players[0].id;

    // 301 -> 121 -> 71 -> 61
    throw_all_ok(&processor, game.game_id, anna, &[(20, 3), (20, 3), (20, 3)]).await?;
    processor
        .process_throw(game.game_id, anna, RawThrow::new(25, 2).at(0.5, 0.5))
        .await?;
    throw_all_ok(&processor, game.game_id, anna, &[(5, 2)]).await?;

    let snapshot = processor.game_snapshot(game.game_id).await?;
    let player = &snapshot.players[0];
    assert_eq!(player.current_score, 61);
    let labels: Vec<&str> = player.last_visit.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["T20", "BULL", "D5"]);
    assert_eq!(player.last_visit_score, 120);
    assert_eq!(player.last_visit[1].x, Some(0.5));
    assert_eq!(player.suggestion, Some(vec!["T19", "D2"]));

    // Ben has not thrown; 301 is out of checkout range.
    assert!(snapshot.players[1].last_visit.is_empty());
    assert_eq!(snapshot.players[1].suggestion, None);

    let json = serde_json::to_value(&snapshot)?;
    assert_eq!(json["players"][0]["last_visit"][1]["label"], "BULL");
    assert_eq!(json["game"]["mode"], "301");
    Ok(())
}

#[tokio::test]
async fn delete_game_removes_everything() -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_test_processor().await?;
    let game = create_x01(&processor, "501", &["Anna"], 3, 1).await?;
    throw_all_ok(&processor, game.game_id, game.players[0].id, &[(20, 3)]).await?;

    processor.delete_game(game.game_id).await?;
    assert!(processor.state().game_locks.is_empty());

    let db = darts_backend::infra::require_db(processor.state())?;
    assert!(games_repo::find_by_id(db, game.game_id).await?.is_none());
    assert!(history::list_sets(db, game.game_id).await?.is_empty());

    let err: AppError = processor.delete_game(game.game_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let report = throw(&processor, game.game_id, game.players[0].id, 20, 1).await?;
    assert_eq!(report.status, ThrowStatus::NotFound);
    Ok(())
}
