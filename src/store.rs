// src/store.rs

// Data-directory persistence: raw scorecard, diff baseline, timestamped
// parsed artifacts.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::scorecard::{ParsedScorecard, Scorecard};

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn ensure(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    pub fn raw_path(&self, player_id: u32) -> PathBuf {
        self.dir.join(format!("scorecard_{player_id}.json"))
    }

    fn baseline_path(&self) -> PathBuf {
        self.dir.join("last_scorecard.json")
    }

    /// Persist the API body verbatim.
    pub fn save_raw(&self, player_id: u32, body: &str) -> io::Result<PathBuf> {
        self.ensure()?;
        let path = self.raw_path(player_id);
        fs::write(&path, body)?;
        Ok(path)
    }

    /// Previous baseline, if any. An unreadable or malformed baseline is
    /// treated as absent — the next save overwrites it.
    pub fn load_baseline(&self) -> Option<Scorecard> {
        let txt = fs::read_to_string(self.baseline_path()).ok()?;
        match serde_json::from_str(&txt) {
            Ok(card) => Some(card),
            Err(e) => {
                logd!("baseline unreadable, discarding: {e}");
                None
            }
        }
    }

    pub fn save_baseline(&self, card: &Scorecard) -> io::Result<()> {
        self.ensure()?;
        let txt = serde_json::to_string_pretty(card)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.baseline_path(), txt)
    }

    /// Timestamped artifact file: `parsed_scorecard_<player>_<ts>.json`.
    /// The timestamp comes from the artifact itself, with `:` made
    /// filename-safe.
    pub fn save_parsed(&self, player_id: u32, art: &ParsedScorecard) -> io::Result<PathBuf> {
        self.ensure()?;
        let ts: String = art
            .timestamp
            .chars()
            .map(|c| match c {
                ':' => '-',
                '+' => '_',
                c => c,
            })
            .collect();
        let path = self.dir.join(format!("parsed_scorecard_{player_id}_{ts}.json"));
        let txt = serde_json::to_string_pretty(art)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&path, txt)?;
        Ok(path)
    }
}
