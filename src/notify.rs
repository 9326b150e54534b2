// src/notify.rs

// Discord webhook posts. Fire-and-forget: every failure is logged and
// swallowed, nothing propagates.

use chrono::Utc;
use serde_json::{Value, json};

use crate::params::{WEBHOOK_ENV, WEBHOOK_TIMEOUT};
use crate::scorecard::ParsedScorecard;
use crate::upcoming::Upcoming;

pub fn webhook_url() -> Option<String> {
    std::env::var(WEBHOOK_ENV).ok().filter(|v| !v.is_empty())
}

/// Embed for the latest round of the artifact; None when there is no
/// round to report.
pub fn round_embed(art: &ParsedScorecard) -> Option<Value> {
    let latest = art.rounds.last()?;

    let round_no = latest.round_no.map(|n| n.to_string()).unwrap_or_else(|| s!("?"));
    let strokes = latest.strokes.map(|n| n.to_string()).unwrap_or_else(|| s!("?"));
    let par = latest
        .score_to_par
        .map(|n| format!("{n:+}"))
        .unwrap_or_else(|| s!("?"));

    let mut holes_text = s!();
    for hole in &latest.holes {
        let no = hole.hole_no.map(|n| n.to_string()).unwrap_or_else(|| s!("?"));
        let hs = hole.strokes.map(|n| n.to_string()).unwrap_or_else(|| s!("-"));
        let class = hole.score_class.as_deref().unwrap_or("-");
        holes_text.push_str(&format!("Hole {no}: {hs} ({class})\n"));
    }

    let footer = format!(
        "Event {} | Player {} | {}",
        art.event_id.map(|n| n.to_string()).unwrap_or_else(|| s!("?")),
        art.player_id.map(|n| n.to_string()).unwrap_or_else(|| s!("?")),
        art.timestamp
    );

    Some(json!({
        "title": format!("🏌️ Marcel Schneider – Round {round_no}"),
        "description": format!("Strokes: **{strokes}**, Par: **{par}**\n\n{holes_text}"),
        "color": 3447003,
        "footer": { "text": footer },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub fn upcoming_embed(t: &Upcoming) -> Value {
    json!({
        "title": "🏆 New tournament for Marcel Schneider",
        "description": format!("{}\n{}\n\nStarts tomorrow!", t.name, t.url),
        "color": 15844367,
        "timestamp": Utc::now().to_rfc3339(),
    })
}

/// Post the latest round. No webhook configured, empty artifact, or a
/// failed POST all end here with a log line.
pub fn post_round(client: &reqwest::blocking::Client, art: &ParsedScorecard) {
    let Some(embed) = round_embed(art) else {
        logf!("no rounds in artifact, nothing to post");
        return;
    };
    post(client, json!({ "embeds": [embed] }), "round post");
}

pub fn post_upcoming(client: &reqwest::blocking::Client, t: &Upcoming) {
    post(client, json!({ "embeds": [upcoming_embed(t)] }), "pre-announcement");
}

fn post(client: &reqwest::blocking::Client, payload: Value, what: &str) {
    let Some(url) = webhook_url() else {
        loge!("{WEBHOOK_ENV} not set, skipping {what}");
        return;
    };
    let sent = client
        .post(&url)
        .timeout(WEBHOOK_TIMEOUT)
        .json(&payload)
        .send();
    match sent {
        Ok(resp) if resp.status().is_success() => logf!("discord {what} delivered"),
        Ok(resp) => loge!("discord {what} rejected: http {}", resp.status().as_u16()),
        Err(e) => loge!("discord {what} failed: {e}"),
    }
}
