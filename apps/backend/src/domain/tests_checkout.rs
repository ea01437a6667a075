use crate::domain::checkout::{
    is_finishing_label, label_score, preferred_checkout, search_checkout, suggest_checkout,
    MAX_CHECKOUT,
};

const NO_THREE_DART_FINISH: [i32; 7] = [159, 162, 163, 165, 166, 168, 169];

#[test]
fn every_reachable_score_gets_a_double_out_finish() {
    for score in 2..=MAX_CHECKOUT {
        let suggestion = suggest_checkout(score);
        if NO_THREE_DART_FINISH.contains(&score) {
            assert_eq!(suggestion, None, "score {score}");
            continue;
        }
        let darts = suggestion.unwrap_or_else(|| panic!("no checkout for {score}"));
        assert!(!darts.is_empty() && darts.len() <= 3, "score {score}: {darts:?}");

        let total: i32 = darts
            .iter()
            .map(|d| label_score(d).expect("known label"))
            .sum();
        assert_eq!(total, score, "score {score}: {darts:?}");

        let last = darts.last().expect("non-empty");
        assert!(is_finishing_label(last), "score {score} ends on {last}");
    }
}

#[test]
fn out_of_range_scores_have_no_checkout() {
    for score in [-5, 0, 1, 171, 180, 501] {
        assert_eq!(suggest_checkout(score), None, "score {score}");
    }
}

#[test]
fn one_dart_finishes_scan_doubles_first() {
    assert_eq!(suggest_checkout(40), Some(vec!["D20"]));
    assert_eq!(suggest_checkout(2), Some(vec!["D1"]));
    assert_eq!(suggest_checkout(50), Some(vec!["BULL"]));
}

#[test]
fn two_dart_finishes_follow_search_order() {
    // Triples are tried before anything else for the first dart.
    assert_eq!(suggest_checkout(100), Some(vec!["T20", "D20"]));
    assert_eq!(suggest_checkout(3), Some(vec!["S1", "D1"]));
    assert_eq!(suggest_checkout(41), Some(vec!["T13", "D1"]));
}

#[test]
fn three_dart_finish_from_search() {
    assert_eq!(suggest_checkout(140), Some(vec!["T20", "T20", "D10"]));
}

#[test]
fn curated_table_wins_over_search() {
    assert_eq!(suggest_checkout(170), Some(vec!["T20", "T20", "BULL"]));
    assert_eq!(suggest_checkout(154), Some(vec!["T20", "T18", "D20"]));
    assert_eq!(search_checkout(154), Some(vec!["T20", "T20", "D17"]));
}

#[test]
fn search_agrees_with_curated_table_at_the_top() {
    for score in [170, 160, 158, 157, 156, 155] {
        assert_eq!(
            search_checkout(score),
            preferred_checkout(score),
            "score {score}"
        );
    }
}

#[test]
fn per_player_suggestion_only_for_x01() {
    use crate::domain::checkout::suggestion_for;
    use crate::domain::rules::GameMode;

    let x01 = GameMode::parse("501");
    assert_eq!(suggestion_for(&x01, 40), Some(vec!["D20"]));
    assert_eq!(suggestion_for(&x01, 0), None);
    assert_eq!(suggestion_for(&x01, 301), None);
    assert_eq!(suggestion_for(&GameMode::parse("cricket"), 40), None);
}
