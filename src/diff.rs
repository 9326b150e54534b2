// src/diff.rs

// Scorecard change detection. Pure comparison; the runner owns loading
// and re-seeding the baseline.

use crate::scorecard::Scorecard;

/// Compare the current card against the previous baseline.
/// Checks, in order: round count, per-round strokes / score-to-par,
/// hole-list length, per-hole strokes. First difference wins and names
/// itself in the reason string.
pub fn compare(current: &Scorecard, previous: &Scorecard) -> (bool, String) {
    if current.rounds.len() != previous.rounds.len() {
        return (
            true,
            format!("new round detected: {} rounds now", current.rounds.len()),
        );
    }

    for (i, (curr, prev)) in current.rounds.iter().zip(&previous.rounds).enumerate() {
        let round_no = i + 1;

        if curr.strokes != prev.strokes || curr.score_to_par != prev.score_to_par {
            return (true, format!("score change in round {round_no}"));
        }

        if curr.holes.len() != prev.holes.len() {
            return (true, format!("new hole data in round {round_no}"));
        }

        for (h_curr, h_prev) in curr.holes.iter().zip(&prev.holes) {
            if h_curr.strokes != h_prev.strokes {
                let hole = h_curr
                    .hole_no
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| s!("?"));
                return (true, format!("score update on hole {hole} in round {round_no}"));
            }
        }
    }

    (false, s!("no change detected"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorecard::parse;

    fn card(raw: &str) -> Scorecard {
        parse(raw).unwrap()
    }

    #[test]
    fn new_round_wins_over_everything() {
        let prev = card(r#"{"Rounds": [{"Strokes": 70}]}"#);
        let curr = card(r#"{"Rounds": [{"Strokes": 70}, {"Strokes": 68}]}"#);
        let (changed, reason) = compare(&curr, &prev);
        assert!(changed);
        assert_eq!(reason, "new round detected: 2 rounds now");
    }

    #[test]
    fn round_score_change() {
        let prev = card(r#"{"Rounds": [{"Strokes": 70, "ScoreToPar": -2}]}"#);
        let curr = card(r#"{"Rounds": [{"Strokes": 69, "ScoreToPar": -3}]}"#);
        let (changed, reason) = compare(&curr, &prev);
        assert!(changed);
        assert_eq!(reason, "score change in round 1");
    }

    #[test]
    fn hole_strokes_change_names_the_hole() {
        let prev = card(
            r#"{"Rounds": [{"Strokes": 70, "ScoreToPar": -2,
                "Holes": [{"HoleNo": 1, "Strokes": 4}, {"HoleNo": 2, "Strokes": 5}]}]}"#,
        );
        let curr = card(
            r#"{"Rounds": [{"Strokes": 70, "ScoreToPar": -2,
                "Holes": [{"HoleNo": 1, "Strokes": 4}, {"HoleNo": 2, "Strokes": 4}]}]}"#,
        );
        let (changed, reason) = compare(&curr, &prev);
        assert!(changed);
        assert_eq!(reason, "score update on hole 2 in round 1");
    }

    #[test]
    fn more_holes_is_new_hole_data() {
        let prev = card(r#"{"Rounds": [{"Holes": [{"HoleNo": 1, "Strokes": 4}]}]}"#);
        let curr = card(
            r#"{"Rounds": [{"Holes": [{"HoleNo": 1, "Strokes": 4}, {"HoleNo": 2, "Strokes": 3}]}]}"#,
        );
        let (changed, reason) = compare(&curr, &prev);
        assert!(changed);
        assert_eq!(reason, "new hole data in round 1");
    }

    #[test]
    fn identical_cards_do_not_change() {
        let a = card(r#"{"Rounds": [{"Strokes": 70, "Holes": [{"HoleNo": 1, "Strokes": 4}]}]}"#);
        let (changed, reason) = compare(&a, &a.clone());
        assert!(!changed);
        assert_eq!(reason, "no change detected");
    }
}
