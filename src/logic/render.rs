//! Article card rendering
//!
//! Turns backend articles into `NewsView` values. Everything coming from the
//! backend is untrusted: text is stripped of terminal control sequences and
//! links must be plain http(s) URLs before they reach the screen.

use std::time::Instant;
use url::Url;

use crate::api::Article;
use crate::model::{Card, NewsView};

/// Maximum number of cards shown per fetch
pub const MAX_CARDS: usize = 5;

/// Delay between consecutive card reveals
pub const CARD_STAGGER_MS: u128 = 150;

/// Image shown when an article has no usable image
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x225?text=No+Image";

pub const EMPTY_MESSAGE: &str = "No news found for this country";
pub const FAILED_MESSAGE: &str = "Could not load news. Please try again later.";

pub fn loading_message(country_name: &str) -> String {
    format!("Fetching news for {}...", country_name)
}

/// Build the results view for a fetched article list
///
/// Absent or empty lists give the empty placeholder. Longer lists are cut to
/// the first five, in order.
pub fn display_news(articles: Option<&[Article]>, now: Instant) -> NewsView {
    let articles = match articles {
        Some(a) if !a.is_empty() => a,
        _ => return NewsView::Empty,
    };

    let cards = articles.iter().take(MAX_CARDS).map(build_card).collect();

    NewsView::Cards {
        cards,
        revealed_at: now,
    }
}

pub fn build_card(article: &Article) -> Card {
    Card {
        title: sanitize_text(&article.title),
        summary: sanitize_text(&article.summary),
        link: safe_link(&article.url),
        image_src: article
            .image
            .as_deref()
            .and_then(safe_link)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
    }
}

/// Number of cards visible `elapsed_ms` after the reveal started
///
/// Card N (0-indexed) appears at `N * 150` ms.
pub fn visible_cards(elapsed_ms: u128, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let revealed = (elapsed_ms / CARD_STAGGER_MS) as usize + 1;
    revealed.min(total)
}

/// Accept only absolute http(s) URLs with a host
pub fn safe_link(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Some(url.to_string()),
        _ => None,
    }
}

/// Strip terminal escape sequences and control characters
///
/// Line breaks and tabs become spaces and whitespace runs collapse, so the
/// result is a single clean line of text.
pub fn sanitize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{1b}' => match chars.next() {
                // CSI: parameters until a final byte in @..~
                Some('[') => {
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                // OSC: until BEL or ESC \
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == '\u{7}' {
                            break;
                        }
                        if next == '\u{1b}' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            },
            '\n' | '\r' | '\t' => out.push(' '),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            summary: format!("{} summary", title),
            url: format!("https://news.example/{}", title),
            image: None,
        }
    }

    #[test]
    fn test_empty_and_absent_lists() {
        let now = Instant::now();
        assert_eq!(display_news(None, now), NewsView::Empty);
        assert_eq!(display_news(Some(&[]), now), NewsView::Empty);
    }

    #[test]
    fn test_truncates_to_five_in_order() {
        let articles: Vec<Article> = (0..8).map(|i| article(&format!("a{}", i))).collect();
        let view = display_news(Some(&articles), Instant::now());
        let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["a0", "a1", "a2", "a3", "a4"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let articles = vec![article("same"), article("same")];
        let view = display_news(Some(&articles), Instant::now());
        assert_eq!(view.cards().len(), 2);
    }

    #[test]
    fn test_placeholder_image() {
        let mut a = article("x");
        assert_eq!(build_card(&a).image_src, PLACEHOLDER_IMAGE);

        a.image = Some("not a url".to_string());
        assert_eq!(build_card(&a).image_src, PLACEHOLDER_IMAGE);

        a.image = Some("https://img.example/pic.jpg".to_string());
        assert_eq!(build_card(&a).image_src, "https://img.example/pic.jpg");
    }

    #[test]
    fn test_unsafe_links_are_dropped() {
        assert_eq!(safe_link("javascript:alert(1)"), None);
        assert_eq!(safe_link("file:///etc/passwd"), None);
        assert_eq!(safe_link(""), None);
        assert_eq!(safe_link("/relative/path"), None);
        assert_eq!(safe_link(" https://ok.example/a "), Some("https://ok.example/a".to_string()));
    }

    #[test]
    fn test_sanitize_strips_escapes() {
        assert_eq!(sanitize_text("\u{1b}[31mred\u{1b}[0m text"), "red text");
        assert_eq!(sanitize_text("\u{1b}]0;pwned\u{7}title"), "title");
        assert_eq!(sanitize_text("\u{1b}]8;;http://x\u{1b}\\link"), "link");
        assert_eq!(sanitize_text("bell\u{7}"), "bell");
    }

    #[test]
    fn test_sanitize_whitespace() {
        assert_eq!(sanitize_text("  line one\nline\ttwo \r\n"), "line one line two");
        assert_eq!(sanitize_text("<b>kept as text</b>"), "<b>kept as text</b>");
    }

    #[test]
    fn test_stagger_schedule() {
        assert_eq!(visible_cards(0, 5), 1);
        assert_eq!(visible_cards(149, 5), 1);
        assert_eq!(visible_cards(150, 5), 2);
        assert_eq!(visible_cards(600, 5), 5);
        assert_eq!(visible_cards(10_000, 3), 3);
        assert_eq!(visible_cards(10_000, 0), 0);
    }

    #[test]
    fn test_loading_message() {
        assert_eq!(loading_message("Japan"), "Fetching news for Japan...");
    }
}
