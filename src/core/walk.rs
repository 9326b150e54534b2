// src/core/walk.rs

// Recursive id search through parsed JSON, plus extraction of embedded
// <script> JSON blocks from raw markup.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::patterns::PatternSet;

/// Keys that carry the event id directly. Case-sensitive on purpose; the
/// site emits exactly these two spellings.
const ID_KEYS: &[&str] = &["EventId", "eventId"];

fn block_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| Regex::new(r"(?is)<script[^>]*>\s*(\{.*?\})\s*</script>").unwrap())
}

fn comment_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").unwrap())
}

/// Depth-first search for the event id.
///
/// Mappings: an id key with a positive integer value wins immediately;
/// otherwise recurse per key, in the document's own key order. That order
/// is deterministic but arbitrary when several subtrees could hit — the
/// document decides, not us. Sequences recurse element by element; string
/// leaves go through the pattern set; null/bool/number leaves never match.
pub fn deep_find(value: &Value, patterns: &PatternSet) -> Option<u64> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                if ID_KEYS.contains(&k.as_str()) {
                    if let Some(id) = v.as_u64() {
                        if id > 0 {
                            return Some(id);
                        }
                    }
                }
                if let Some(id) = deep_find(v, patterns) {
                    return Some(id);
                }
            }
            None
        }
        Value::Array(items) => items.iter().find_map(|v| deep_find(v, patterns)),
        Value::String(text) => patterns.find_id(text),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// Candidate `{…}` bodies of inline script tags, document order.
pub fn script_blocks(markup: &str) -> Vec<&str> {
    block_rx()
        .captures_iter(markup)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Strip `//` line comments and `/* */` block comments. Blunt (a `//`
/// inside a string literal is also eaten), which is why blocks are always
/// parsed verbatim first.
pub fn strip_js_comments(raw: &str) -> String {
    comment_rx().replace_all(raw, "").into_owned()
}

/// Parse each embedded block — verbatim, then comment-stripped — and walk
/// whatever parses. Malformed blocks are skipped, never fatal.
pub fn id_from_blocks(markup: &str, patterns: &PatternSet) -> Option<u64> {
    for raw in script_blocks(markup) {
        let stripped = strip_js_comments(raw);
        for candidate in [raw, stripped.as_str()] {
            let Ok(parsed) = serde_json::from_str::<Value>(candidate) else {
                continue;
            };
            if let Some(id) = deep_find(&parsed, patterns) {
                return Some(id);
            }
        }
    }
    None
}

/// Full text extraction: direct patterns over the raw text first, then
/// the embedded-block walk.
pub fn id_from_text(text: &str, patterns: &PatternSet) -> Option<u64> {
    patterns.find_id(text).or_else(|| id_from_blocks(text, patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PatternSet {
        PatternSet::canonical()
    }

    #[test]
    fn finds_id_nested_three_deep_in_array_of_maps() {
        let v: Value = serde_json::from_str(
            r#"{"page":{"widgets":[{"kind":"ticker"},{"props":{"EventId":77001}}]}}"#,
        )
        .unwrap();
        assert_eq!(deep_find(&v, &patterns()), Some(77001));
    }

    #[test]
    fn string_leaf_goes_through_patterns() {
        let v: Value = serde_json::from_str(
            r#"{"routes":["/api/sportdata/Leaderboard/Strokeplay/4242/type/load"]}"#,
        )
        .unwrap();
        assert_eq!(deep_find(&v, &patterns()), Some(4242));
    }

    #[test]
    fn non_numeric_id_key_is_skipped() {
        let v: Value = serde_json::from_str(r#"{"EventId":"soon","inner":{"eventId":9}}"#).unwrap();
        assert_eq!(deep_find(&v, &patterns()), Some(9));
    }

    #[test]
    fn key_order_is_document_order() {
        // Both subtrees hit; the one written first in the document wins.
        let v: Value =
            serde_json::from_str(r#"{"b":{"EventId":2},"a":{"EventId":1}}"#).unwrap();
        assert_eq!(deep_find(&v, &patterns()), Some(2));
    }

    #[test]
    fn block_with_comments_parses_after_strip() {
        let html = r#"
            <html><script type="application/json">
            {
                // embedded config
                "page": { "eventId": 31337 } /* trailing */
            }
            </script></html>"#;
        assert_eq!(id_from_blocks(html, &patterns()), Some(31337));
    }

    #[test]
    fn malformed_block_is_skipped_for_next_candidate() {
        let html = r#"
            <script>{ this is not json }</script>
            <script>{"EventId": 555}</script>"#;
        assert_eq!(id_from_blocks(html, &patterns()), Some(555));
    }

    #[test]
    fn text_patterns_outrank_block_walk() {
        let html = r#"
            /api/sportdata/Leaderboard/Strokeplay/100/type/load
            <script>{"EventId": 200}</script>"#;
        assert_eq!(id_from_text(html, &patterns()), Some(100));
    }
}
