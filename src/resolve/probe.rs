// src/resolve/probe.rs

// Resolver endpoints map a page path to page metadata, which happens to
// include the event id.

use serde_json::Value;

use crate::core::net::{self, Fetch};
use crate::core::patterns::PatternSet;
use crate::core::walk;

/// Try each endpoint in its configured order with `?path=<page path>`.
/// Direct fetches only; a miss or fetch failure just moves to the next
/// endpoint. Exhausting the list is a plain no-match.
pub fn probe(
    fetch: &dyn Fetch,
    base: &str,
    endpoints: &[String],
    patterns: &PatternSet,
    page_path: &str,
) -> Option<u64> {
    for ep in endpoints {
        let url = format!("{base}{ep}?path={}", encode_query(page_path));
        let txt = match net::get_text(fetch, &url) {
            Ok(t) => t,
            Err(e) => {
                logd!("resolver miss {url} because {}", e.last_reason);
                continue;
            }
        };

        // Quick literal hits first
        if let Some(id) = patterns.find_id(&txt) {
            return Some(id);
        }

        // Then a full-document parse, if it is structured at all
        if let Ok(parsed) = serde_json::from_str::<Value>(&txt) {
            if let Some(id) = walk::deep_find(&parsed, patterns) {
                return Some(id);
            }
        }
    }
    None
}

/// Form-style percent encoding for a single query value.
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
