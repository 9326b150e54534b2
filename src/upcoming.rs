// src/upcoming.rs

// "Playing this week" check against the player's profile page.

use crate::core::html::{attr_value, inner_after_open_tag, next_tag_block_ci, normalize_entities, strip_tags};
use crate::core::net::{self, Fetch};
use crate::params::{PROFILE_URL, SITE_BASE};

#[derive(Debug, Clone, PartialEq)]
pub struct Upcoming {
    pub name: String,
    pub slug: String,
    pub url: String,
}

/// Fetch the profile page and extract the upcoming tournament, if any.
/// Absence (no section, no link, fetch failure) is a normal None.
pub fn check(fetch: &dyn Fetch) -> Option<Upcoming> {
    let html = match net::get_text(fetch, PROFILE_URL) {
        Ok(h) => h,
        Err(e) => {
            loge!("profile page fetch failed: {}", e.last_reason);
            return None;
        }
    };
    extract(&html)
}

/// Pull name + slug out of the `playing-this-week` section: the first
/// anchor's href is the tournament slug, its first `<p>` the name.
pub fn extract(profile_html: &str) -> Option<Upcoming> {
    let section = playing_section(profile_html)?;

    let (a_s, a_e) = first_anchor(section)?;
    let anchor = &section[a_s..a_e];
    let opener = &anchor[..anchor.find('>').unwrap_or(anchor.len())];
    let slug = attr_value(opener, "href")?;

    let name = match next_tag_block_ci(anchor, "<p", "</p>", 0) {
        Some((p_s, p_e)) => {
            let inner = inner_after_open_tag(&anchor[p_s..p_e]);
            strip_tags(normalize_entities(&inner))
        }
        None => s!("Unknown tournament"),
    };

    Some(Upcoming {
        name,
        slug: s!(slug),
        url: format!("{SITE_BASE}{slug}"),
    })
}

/// First real `<a>` block. `<a` alone would also hit `<article>`,
/// `<aside>` or `<abbr>`, so the tag name must end right there.
fn first_anchor(section: &str) -> Option<(usize, usize)> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(section, "<a", "</a>", pos) {
        match section[s + 2..].chars().next() {
            Some(c) if c.is_whitespace() || c == '>' => return Some((s, e)),
            _ => pos = s + 2,
        }
    }
    None
}

fn playing_section(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<section", "</section>", pos) {
        let block = &doc[s..e];
        pos = e;
        let opener = &block[..block.find('>').unwrap_or(block.len())];
        if attr_value(opener, "data-testid") == Some("playing-this-week") {
            return Some(block);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
        <section data-testid="stats">ignore me</section>
        <section data-testid="playing-this-week">
            <h2>Playing this week</h2>
            <a href="/dpworld-tour/dp-world-india-championship-2025/">
                <p>DP World India Championship</p>
                <span>Oct 16</span>
            </a>
        </section>
        </body></html>"#;

    #[test]
    fn extracts_name_and_slug() {
        let t = extract(FIXTURE).unwrap();
        assert_eq!(t.name, "DP World India Championship");
        assert_eq!(t.slug, "/dpworld-tour/dp-world-india-championship-2025/");
        assert_eq!(
            t.url,
            "https://www.europeantour.com/dpworld-tour/dp-world-india-championship-2025/"
        );
    }

    #[test]
    fn no_section_is_none() {
        assert_eq!(extract("<html><section data-testid='stats'>x</section></html>"), None);
    }

    #[test]
    fn section_without_link_is_none() {
        let html = r#"<section data-testid="playing-this-week"><p>tbd</p></section>"#;
        assert_eq!(extract(html), None);
    }

    #[test]
    fn article_before_anchor_is_not_the_link() {
        let html = r#"<section data-testid="playing-this-week">
            <article class="teaser">Week preview</article>
            <a href="/t/open-2025/"><p>Open 2025</p></a>
        </section>"#;
        let t = extract(html).unwrap();
        assert_eq!(t.slug, "/t/open-2025/");
        assert_eq!(t.name, "Open 2025");
    }

    #[test]
    fn anchor_without_name_falls_back() {
        let html = r#"<section data-testid="playing-this-week">
            <a href="/t/x-2025/">X 2025</a></section>"#;
        let t = extract(html).unwrap();
        assert_eq!(t.name, "Unknown tournament");
        assert_eq!(t.slug, "/t/x-2025/");
    }
}
