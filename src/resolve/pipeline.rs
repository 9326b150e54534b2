// src/resolve/pipeline.rs

// The resolution pipeline. Five stages, fixed order, first positive id
// wins and every later stage is skipped. Exhaustion is a normal absent
// result, never an error: each stage swallows and logs its own failures.

use std::time::{Duration, Instant};

use crate::core::net::{self, Fetch};
use crate::core::patterns::PatternSet;
use crate::core::walk;
use crate::params::{PIPELINE_BUDGET, RESOLVER_PATHS, SITE_BASE};

use super::{bundles, probe};

/// Which stage produced the id. Attached to the result so a stale source
/// can at least be spotted in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    ProxyLeaderboard,
    DirectLeaderboard,
    ResolverPath,
    ResolverRoot,
    BundleSweep,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::ProxyLeaderboard => "leaderboard (proxy)",
            Stage::DirectLeaderboard => "leaderboard (direct)",
            Stage::ResolverPath => "resolver (page path)",
            Stage::ResolverRoot => "resolver (root path)",
            Stage::BundleSweep => "js bundle",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Resolved {
    pub id: u64,
    pub stage: Stage,
}

/// One resolver per run. Holds only read-only configuration; every call
/// to `resolve` is an independent pipeline pass.
pub struct Resolver<'a> {
    fetch: &'a dyn Fetch,
    patterns: PatternSet,
    endpoints: Vec<String>,
    base: String,
    budget: Duration,
}

impl<'a> Resolver<'a> {
    pub fn new(fetch: &'a dyn Fetch) -> Self {
        Self::with_config(fetch, PatternSet::canonical(), RESOLVER_PATHS, SITE_BASE, PIPELINE_BUDGET)
    }

    /// Ordering of `patterns` and `endpoints` is the tie-break policy and
    /// is owned by the caller, not hidden in here.
    pub fn with_config(
        fetch: &'a dyn Fetch,
        patterns: PatternSet,
        endpoints: &[&str],
        base: &str,
        budget: Duration,
    ) -> Self {
        Resolver {
            fetch,
            patterns,
            endpoints: endpoints.iter().map(|e| s!(*e)).collect(),
            base: s!(base),
            budget,
        }
    }

    /// Resolve the event id from the tournament's base page url.
    ///
    /// Stages, each terminal on success:
    /// 1. round-4 leaderboard page via read proxy
    /// 2. same page, direct
    /// 3. resolver endpoints with the leaderboard path (query dropped;
    ///    resolvers ignore it)
    /// 4. resolver endpoints with the tournament root path
    /// 5. sweep of the page's /dist/js bundles
    pub fn resolve(&self, event_page_url: &str) -> Option<Resolved> {
        let started = Instant::now();
        let lb_url = leaderboard_url(event_page_url);

        // 1) leaderboard via proxy — proxy only, so a direct-fetch hit
        //    is always stage 2's and attributed as such
        match net::get_proxied(self.fetch, &lb_url) {
            Ok(html) => {
                if let Some(id) = walk::id_from_text(&html, &self.patterns) {
                    return self.hit(id, Stage::ProxyLeaderboard);
                }
            }
            Err(e) => logd!("leaderboard via proxy miss: {}", e.last_reason),
        }

        // 2) leaderboard direct — body kept for the bundle sweep
        let mut direct_html: Option<String> = None;
        if self.within_budget(started, Stage::DirectLeaderboard) {
            match net::get_text(self.fetch, &lb_url) {
                Ok(html) => {
                    if let Some(id) = walk::id_from_text(&html, &self.patterns) {
                        return self.hit(id, Stage::DirectLeaderboard);
                    }
                    direct_html = Some(html);
                }
                Err(e) => logd!("leaderboard direct miss: {}", e.last_reason),
            }
        }

        // 3) resolvers with the leaderboard path
        if self.within_budget(started, Stage::ResolverPath) {
            let path = url_path(&lb_url);
            if let Some(id) =
                probe::probe(self.fetch, &self.base, &self.endpoints, &self.patterns, &path)
            {
                return self.hit(id, Stage::ResolverPath);
            }
        }

        // 4) resolvers with the tournament root path
        if self.within_budget(started, Stage::ResolverRoot) {
            let root = url_path(event_page_url);
            let root = root.trim_end_matches('/');
            if let Some(id) =
                probe::probe(self.fetch, &self.base, &self.endpoints, &self.patterns, root)
            {
                return self.hit(id, Stage::ResolverRoot);
            }
        }

        // 5) bundle sweep over whatever page html we have
        if self.within_budget(started, Stage::BundleSweep) {
            let html = match direct_html {
                Some(h) => Some(h),
                None => match net::get_text(self.fetch, &lb_url) {
                    Ok(h) => Some(h),
                    Err(e) => {
                        logd!("bundle sweep miss: {}", e.last_reason);
                        None
                    }
                },
            };
            if let Some(html) = html {
                if let Some(id) = bundles::sweep(self.fetch, &html, &self.base, &self.patterns) {
                    return self.hit(id, Stage::BundleSweep);
                }
            }
        }

        logf!("event id not found for {event_page_url}");
        None
    }

    fn hit(&self, id: u64, stage: Stage) -> Option<Resolved> {
        logf!("event id {} via {}", id, stage.label());
        Some(Resolved { id, stage })
    }

    fn within_budget(&self, started: Instant, next: Stage) -> bool {
        if started.elapsed() < self.budget {
            return true;
        }
        loge!("pipeline budget exhausted before {}", next.label());
        false
    }
}

/// Round-4 leaderboard page for a tournament base page url.
pub fn leaderboard_url(event_page_url: &str) -> String {
    format!("{}/leaderboard?round=4", event_page_url.trim_end_matches('/'))
}

/// Path component of an absolute url, query and fragment dropped.
pub fn url_path(url: &str) -> String {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    let rest = &url[after_scheme..];
    let path = match rest.find('/') {
        Some(i) => &rest[i..],
        None => "/",
    };
    let end = path.find(['?', '#']).unwrap_or(path.len());
    s!(&path[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_url_appends_round_4() {
        assert_eq!(
            leaderboard_url("https://www.example.com/tour/open-2025/"),
            "https://www.example.com/tour/open-2025/leaderboard?round=4"
        );
        assert_eq!(
            leaderboard_url("https://www.example.com/tour/open-2025"),
            "https://www.example.com/tour/open-2025/leaderboard?round=4"
        );
    }

    #[test]
    fn url_path_drops_query_and_fragment() {
        assert_eq!(
            url_path("https://h.test/a/b/leaderboard?round=4"),
            "/a/b/leaderboard"
        );
        assert_eq!(url_path("https://h.test/a#frag"), "/a");
        assert_eq!(url_path("https://h.test"), "/");
    }
}
