// src/scorecard.rs

// Typed mirror of the sportdata scorecard payload, plus the compact
// per-round artifact the notifier consumes.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::net::{self, Fetch, FetchError};
use crate::params::{SCORECARD_API, SITE_BASE};

// The API omits fields freely; everything leaf-level is optional.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Scorecard {
    pub event_id: Option<u64>,
    pub player_id: Option<u64>,
    pub rounds: Vec<Round>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Round {
    pub round_no: Option<u32>,
    pub course_no: Option<u32>,
    pub strokes: Option<i32>,
    pub score_to_par: Option<i32>,
    pub holes: Vec<Hole>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Hole {
    pub hole_no: Option<u32>,
    pub strokes: Option<i32>,
    pub score_class: Option<String>,
    pub is_am_score: Option<bool>,
    pub penalty: Option<i32>,
}

pub fn api_url(event_id: u64, player_id: u32) -> String {
    format!("{SITE_BASE}{SCORECARD_API}/{event_id}/Player/{player_id}")
}

/// Raw scorecard body for one event/player. Direct fetch, no proxy; the
/// engine that found the event id never looks inside this.
pub fn fetch_raw(fetch: &dyn Fetch, event_id: u64, player_id: u32) -> Result<String, FetchError> {
    let url = api_url(event_id, player_id);
    logf!("fetching scorecard {url}");
    net::get_text(fetch, &url)
}

pub fn parse(raw: &str) -> Result<Scorecard, serde_json::Error> {
    serde_json::from_str(raw)
}

/* ---------------- parsed artifact ---------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedScorecard {
    pub event_id: Option<u64>,
    pub player_id: Option<u64>,
    pub timestamp: String,
    pub rounds: Vec<ParsedRound>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedRound {
    pub round_no: Option<u32>,
    pub course_no: Option<u32>,
    pub strokes: Option<i32>,
    pub score_to_par: Option<i32>,
    pub holes_played: usize,
    pub holes: Vec<ParsedHole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedHole {
    pub hole_no: Option<u32>,
    pub strokes: Option<i32>,
    pub score_class: Option<String>,
    pub is_am_score: Option<bool>,
    pub penalty: Option<i32>,
}

/// Flatten the raw card into the per-round summary, stamped with the
/// current UTC time.
pub fn build_artifact(card: &Scorecard) -> ParsedScorecard {
    let rounds = card
        .rounds
        .iter()
        .map(|r| ParsedRound {
            round_no: r.round_no,
            course_no: r.course_no,
            strokes: r.strokes,
            score_to_par: r.score_to_par,
            holes_played: r.holes.len(),
            holes: r
                .holes
                .iter()
                .map(|h| ParsedHole {
                    hole_no: h.hole_no,
                    strokes: h.strokes,
                    score_class: h.score_class.clone(),
                    is_am_score: h.is_am_score,
                    penalty: h.penalty,
                })
                .collect(),
        })
        .collect();

    ParsedScorecard {
        event_id: card.event_id,
        player_id: card.player_id,
        timestamp: Utc::now().to_rfc3339(),
        rounds,
    }
}
