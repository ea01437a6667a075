//! Checkout suggestions for X01 finishes.
//!
//! A checkout is a sequence of at most three darts that takes a remaining
//! score to exactly zero with the last dart on a double (or the double bull).
//! Known preferred finishes are looked up first; everything else comes from
//! an ordered search whose iteration order decides which of several valid
//! finishes is returned.

use crate::domain::rules::GameMode;

/// Highest score that can be finished with three darts.
pub const MAX_CHECKOUT: i32 = 170;
/// Lowest finishable score (D1).
pub const MIN_CHECKOUT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    label: &'static str,
    score: i32,
}

impl Segment {
    const fn new(label: &'static str, score: i32) -> Self {
        Self { label, score }
    }
}

/// Preferred finishes for the top of the range.
const PREFERRED: [(i32, [&str; 3]); 14] = [
    (170, ["T20", "T20", "BULL"]),
    (167, ["T20", "T19", "BULL"]),
    (164, ["T20", "T18", "BULL"]),
    (161, ["T20", "T17", "BULL"]),
    (160, ["T20", "T20", "D20"]),
    (158, ["T20", "T20", "D19"]),
    (157, ["T20", "T19", "D20"]),
    (156, ["T20", "T20", "D18"]),
    (155, ["T20", "T19", "D19"]),
    (154, ["T20", "T18", "D20"]),
    (153, ["T20", "T19", "D18"]),
    (152, ["T20", "T20", "D16"]),
    (151, ["T20", "T17", "D20"]),
    (150, ["T20", "T18", "D18"]),
];

/// Every scoring dart in search order: T20..T1, D20..D1, S1..S20, SBULL, BULL.
const SCORING_ORDER: [Segment; 62] = [
    Segment::new("T20", 60),
    Segment::new("T19", 57),
    Segment::new("T18", 54),
    Segment::new("T17", 51),
    Segment::new("T16", 48),
    Segment::new("T15", 45),
    Segment::new("T14", 42),
    Segment::new("T13", 39),
    Segment::new("T12", 36),
    Segment::new("T11", 33),
    Segment::new("T10", 30),
    Segment::new("T9", 27),
    Segment::new("T8", 24),
    Segment::new("T7", 21),
    Segment::new("T6", 18),
    Segment::new("T5", 15),
    Segment::new("T4", 12),
    Segment::new("T3", 9),
    Segment::new("T2", 6),
    Segment::new("T1", 3),
    Segment::new("D20", 40),
    Segment::new("D19", 38),
    Segment::new("D18", 36),
    Segment::new("D17", 34),
    Segment::new("D16", 32),
    Segment::new("D15", 30),
    Segment::new("D14", 28),
    Segment::new("D13", 26),
    Segment::new("D12", 24),
    Segment::new("D11", 22),
    Segment::new("D10", 20),
    Segment::new("D9", 18),
    Segment::new("D8", 16),
    Segment::new("D7", 14),
    Segment::new("D6", 12),
    Segment::new("D5", 10),
    Segment::new("D4", 8),
    Segment::new("D3", 6),
    Segment::new("D2", 4),
    Segment::new("D1", 2),
    Segment::new("S1", 1),
    Segment::new("S2", 2),
    Segment::new("S3", 3),
    Segment::new("S4", 4),
    Segment::new("S5", 5),
    Segment::new("S6", 6),
    Segment::new("S7", 7),
    Segment::new("S8", 8),
    Segment::new("S9", 9),
    Segment::new("S10", 10),
    Segment::new("S11", 11),
    Segment::new("S12", 12),
    Segment::new("S13", 13),
    Segment::new("S14", 14),
    Segment::new("S15", 15),
    Segment::new("S16", 16),
    Segment::new("S17", 17),
    Segment::new("S18", 18),
    Segment::new("S19", 19),
    Segment::new("S20", 20),
    Segment::new("SBULL", 25),
    Segment::new("BULL", 50),
];

/// Finishing darts: D1..D20 then the double bull.
const FINISHING_ORDER: [Segment; 21] = [
    Segment::new("D1", 2),
    Segment::new("D2", 4),
    Segment::new("D3", 6),
    Segment::new("D4", 8),
    Segment::new("D5", 10),
    Segment::new("D6", 12),
    Segment::new("D7", 14),
    Segment::new("D8", 16),
    Segment::new("D9", 18),
    Segment::new("D10", 20),
    Segment::new("D11", 22),
    Segment::new("D12", 24),
    Segment::new("D13", 26),
    Segment::new("D14", 28),
    Segment::new("D15", 30),
    Segment::new("D16", 32),
    Segment::new("D17", 34),
    Segment::new("D18", 36),
    Segment::new("D19", 38),
    Segment::new("D20", 40),
    Segment::new("BULL", 50),
];

/// Suggest a finishing sequence for `remaining`.
///
/// Returns `None` outside `2..=170` and for the scores that have no
/// three-dart double finish (159, 162, 163, 165, 166, 168, 169).
pub fn suggest_checkout(remaining: i32) -> Option<Vec<&'static str>> {
    if !(MIN_CHECKOUT..=MAX_CHECKOUT).contains(&remaining) {
        return None;
    }
    preferred_checkout(remaining).or_else(|| search_checkout(remaining))
}

/// Suggestion shown next to a player's score: only X01 games, only
/// while the player still has something left to finish.
pub fn suggestion_for(mode: &GameMode, current_score: i32) -> Option<Vec<&'static str>> {
    if !mode.is_x01() || current_score <= 0 {
        return None;
    }
    suggest_checkout(current_score)
}

/// Curated finish for `remaining`, if one is listed.
pub fn preferred_checkout(remaining: i32) -> Option<Vec<&'static str>> {
    PREFERRED
        .iter()
        .find(|(score, _)| *score == remaining)
        .map(|(_, darts)| darts.to_vec())
}

/// Ordered search for a one, two or three dart finish, ignoring the
/// curated table. The first hit in iteration order wins.
pub fn search_checkout(remaining: i32) -> Option<Vec<&'static str>> {
    if !(MIN_CHECKOUT..=MAX_CHECKOUT).contains(&remaining) {
        return None;
    }

    if let Some(last) = finishing_dart(remaining) {
        return Some(vec![last.label]);
    }

    for first in SCORING_ORDER.iter() {
        if let Some(last) = finishing_dart(remaining - first.score) {
            return Some(vec![first.label, last.label]);
        }
    }

    for first in SCORING_ORDER.iter() {
        for second in SCORING_ORDER.iter() {
            let required = remaining - first.score - second.score;
            if let Some(last) = finishing_dart(required) {
                return Some(vec![first.label, second.label, last.label]);
            }
        }
    }

    None
}

fn finishing_dart(required: i32) -> Option<&'static Segment> {
    FINISHING_ORDER.iter().find(|seg| seg.score == required)
}

/// Score of a checkout label as produced by this module.
pub fn label_score(label: &str) -> Option<i32> {
    SCORING_ORDER
        .iter()
        .find(|seg| seg.label == label)
        .map(|seg| seg.score)
}

/// Whether `label` is a valid last dart (any double or the double bull).
pub fn is_finishing_label(label: &str) -> bool {
    FINISHING_ORDER.iter().any(|seg| seg.label == label)
}
