// src/resolve/bundles.rs

// Last-ditch source: the page's packaged script assets sometimes embed
// the sportdata routes with the id baked in.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::net::{self, Fetch};
use crate::core::patterns::PatternSet;

fn src_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| {
        // `*?` before /dist/js: root-relative srcs have nothing in front
        Regex::new(r#"(?i)<script[^>]+src="([^"]*?/dist/js/[^"]+?\.js)""#).unwrap()
    })
}

/// Script srcs under the distribution directory, resolved against `base`
/// and deduplicated by absolute url, in document order.
pub fn bundle_urls(page_html: &str, base: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for caps in src_rx().captures_iter(page_html) {
        let src = &caps[1];
        let abs = if src.starts_with("http") {
            s!(src)
        } else if src.starts_with('/') {
            format!("{base}{src}")
        } else {
            format!("{base}/{src}")
        };
        if !out.contains(&abs) {
            out.push(abs);
        }
    }
    out
}

/// Fetch each bundle directly and pattern-match its content. First hit
/// wins; a failed bundle fetch is logged and skipped.
pub fn sweep(
    fetch: &dyn Fetch,
    page_html: &str,
    base: &str,
    patterns: &PatternSet,
) -> Option<u64> {
    for url in bundle_urls(page_html, base) {
        let js = match net::get_text(fetch, &url) {
            Ok(t) => t,
            Err(e) => {
                logd!("bundle miss {url}: {}", e.last_reason);
                continue;
            }
        };
        if let Some(id) = patterns.find_id(&js) {
            let name = url.rsplit('/').next().unwrap_or(&url);
            logd!("bundle hit in {name}");
            return Some(id);
        }
    }
    None
}
