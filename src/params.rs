// src/params.rs
use std::path::PathBuf;
use std::time::Duration;

pub const SITE_BASE: &str = "https://www.europeantour.com";

/// Read-only text-extraction proxy. The scheme of the target url is
/// stripped before it is appended here.
pub const READ_PROXY: &str = "https://r.jina.ai/http://";

/// Resolver endpoints, tried strictly in this order.
pub const RESOLVER_PATHS: &[&str] = &[
    "/api/cms/page-resolver",
    "/api/cms/resolve",
    "/api/seo/resolve",
];

pub const SCORECARD_API: &str = "/api/sportdata/Scorecard/Strokeplay/Event";

pub const USER_AGENT: &str = "dpwt-marcel-bot/eventid/3.0 (+github-actions)";

pub const DEFAULT_PLAYER_ID: u32 = 35703; // Marcel Schneider
pub const DEFAULT_DATA_DIR: &str = "data";
pub const PROFILE_URL: &str =
    "https://www.europeantour.com/players/marcel-schneider-35703/?tour=dpworld-tour";

pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK_URL";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Wall-clock cap across all pipeline stages. Checked between stages;
/// a stage already in flight runs to its own request timeouts.
pub const PIPELINE_BUDGET: Duration = Duration::from_secs(180);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Scorecard,      // resolve id, fetch scorecard, diff, notify
    ResolveOnly,    // resolve id, print it, exit
    CheckUpcoming,  // profile page "playing this week" pre-announcement
}

#[derive(Clone)]
pub struct Params {
    pub mode: RunMode,
    pub event_url: Option<String>, // tournament base page; required unless CheckUpcoming
    pub player_id: u32,
    pub data_dir: PathBuf,
    pub notify: bool,              // false = --no-notify
}

impl Params {
    pub fn new() -> Self {
        Self {
            mode: RunMode::Scorecard,
            event_url: None,
            player_id: DEFAULT_PLAYER_ID,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            notify: true,
        }
    }
}
