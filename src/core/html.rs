// src/core/html.rs

// Just enough HTML slicing for the profile page. Case-insensitive on tag
// names, tolerant of attribute quoting. Not a parser, on purpose.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `open…close` block at or after `from`. Returns byte offsets of the
/// whole block (opening tag through closing tag).
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    Some((start, open_end + end_rel + close.len()))
}

/// Content between the block's opening tag and its last `<`.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Attribute value from an opening tag, tolerating single quotes, double
/// quotes, or none.
pub fn attr_value<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let needle = format!("{}=", to_lower(name));
    let at = lc.find(&needle)? + needle.len();
    let rest = &opener[at..];
    match rest.as_bytes().first() {
        Some(b'"') => rest[1..].find('"').map(|e| &rest[1..1 + e]),
        Some(b'\'') => rest[1..].find('\'').map(|e| &rest[1..1 + e]),
        _ => {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(rest.len());
            Some(&rest[..end])
        }
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_quote_variants() {
        assert_eq!(attr_value(r#"<a href="/x/y">"#, "href"), Some("/x/y"));
        assert_eq!(attr_value(r#"<a href='/x/y'>"#, "href"), Some("/x/y"));
        assert_eq!(attr_value(r#"<a href=/x/y>"#, "href"), Some("/x/y"));
        assert_eq!(attr_value(r#"<a class="z">"#, "href"), None);
    }

    #[test]
    fn block_and_inner_roundtrip() {
        let doc = r#"<div><P class="t"> Hello <b>World</b> </p></div>"#;
        let (s, e) = next_tag_block_ci(doc, "<p", "</p>", 0).unwrap();
        let inner = inner_after_open_tag(&doc[s..e]);
        assert_eq!(strip_tags(normalize_entities(&inner)), "Hello World");
    }
}
