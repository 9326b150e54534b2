// src/core/patterns.rs

// Ordered regex list for pulling the event id out of arbitrary text.

use regex::Regex;

/// Priority is list order, not match position: the first expression that
/// matches anywhere in the text wins, even if a later expression would
/// have matched earlier in the string.
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// The canonical set, strongest marker first:
    /// 1. sportdata leaderboard load url
    /// 2. `"id": "leaderboard-strokeplay-<N>"` document id
    /// 3. bare `"EventId": <N>` key
    pub fn canonical() -> Self {
        Self::from_exprs(&[
            r"(?i)/api/sportdata/Leaderboard/Strokeplay/(\d+)/type/load",
            r#"(?i)"id"\s*:\s*"leaderboard-strokeplay-(\d+)""#,
            r#"(?i)"(?:EventId|eventId)"\s*:\s*(\d+)"#,
        ])
    }

    /// Build from literal expressions; each must capture the id in group 1.
    /// Panics on an invalid expression, which is a programming error here.
    pub fn from_exprs(exprs: &[&str]) -> Self {
        let patterns = exprs
            .iter()
            .map(|e| Regex::new(e).expect("invalid id pattern"))
            .collect();
        PatternSet { patterns }
    }

    /// First positive integer captured by the highest-priority matching
    /// expression. A capture that fails to parse (or is zero) counts as
    /// no match for that expression, not an error.
    pub fn find_id(&self, text: &str) -> Option<u64> {
        for rx in &self.patterns {
            if let Some(caps) = rx.captures(text) {
                if let Some(id) = caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok()) {
                    if id > 0 {
                        return Some(id);
                    }
                }
            }
        }
        None
    }
}
