// src/runner.rs

// Top-level run logic: wire the pipeline to its collaborators per mode.

use std::error::Error;

use crate::core::net::Http;
use crate::params::{Params, RunMode};
use crate::resolve::Resolver;
use crate::store::Store;
use crate::{diff, notify, scorecard, upcoming};

/// Run one invocation. Returns the process exit code: scheduled runs
/// stay at 0 even when nothing is found; only `--resolve-only` turns
/// exhaustion into 1 so shell callers can branch on it.
pub fn run(params: &Params) -> Result<i32, Box<dyn Error>> {
    crate::log::init(&params.data_dir);
    let http = Http::new();

    match params.mode {
        RunMode::Scorecard => run_scorecard(params, &http),
        RunMode::ResolveOnly => run_resolve_only(params, &http),
        RunMode::CheckUpcoming => Ok(run_upcoming(params, &http)),
    }
}

fn event_url(params: &Params) -> Result<&str, Box<dyn Error>> {
    params
        .event_url
        .as_deref()
        .ok_or_else(|| "Missing --url <tournament page>".into())
}

fn run_resolve_only(params: &Params, http: &Http) -> Result<i32, Box<dyn Error>> {
    let url = event_url(params)?;
    match Resolver::new(http).resolve(url) {
        Some(found) => {
            println!("{}", found.id);
            Ok(0)
        }
        None => Ok(1),
    }
}

fn run_scorecard(params: &Params, http: &Http) -> Result<i32, Box<dyn Error>> {
    let url = event_url(params)?;
    logf!("starting scorecard run for {url}");

    let Some(found) = Resolver::new(http).resolve(url) else {
        loge!("event id not found, skipping scorecard fetch");
        return Ok(0);
    };

    let raw = match scorecard::fetch_raw(http, found.id, params.player_id) {
        Ok(raw) => raw,
        Err(e) => {
            loge!("scorecard fetch failed: {e}");
            return Ok(0);
        }
    };

    let store = Store::new(&params.data_dir);
    store.save_raw(params.player_id, &raw)?;

    let card = match scorecard::parse(&raw) {
        Ok(card) => card,
        Err(e) => {
            loge!("scorecard response is not valid json: {e}");
            return Ok(0);
        }
    };

    let artifact = scorecard::build_artifact(&card);
    let parsed_path = store.save_parsed(params.player_id, &artifact)?;
    logf!("parsed scorecard saved to {}", parsed_path.display());

    // Diff against the baseline; first run seeds it and counts as change.
    let (changed, reason) = match store.load_baseline() {
        Some(prev) => diff::compare(&card, &prev),
        None => (true, s!("first snapshot, seeding baseline")),
    };

    if !changed {
        logf!("{reason}");
        return Ok(0);
    }

    store.save_baseline(&card)?;
    logf!("change detected: {reason}");

    if params.notify {
        notify::post_round(http.client(), &artifact);
    } else {
        logf!("--no-notify set, skipping discord post");
    }
    Ok(0)
}

fn run_upcoming(params: &Params, http: &Http) -> i32 {
    logf!("checking whether Marcel Schneider plays this week");
    let Some(t) = upcoming::check(http) else {
        logf!("no upcoming tournament found");
        return 0;
    };
    logf!("upcoming tournament: {} ({})", t.name, t.url);

    if params.notify {
        notify::post_upcoming(http.client(), &t);
    } else {
        logf!("--no-notify set, skipping pre-announcement");
    }
    0
}
