//! Bare-URL preparation pass.
//!
//! DokuWiki treats a bare `http://` or `https://` URL as a link, but the
//! segmenter only recognizes bracketed `[[...]]` tokens. This pass rewrites a
//! line so that every bare URL is bracketed before segmentation. URLs that
//! already sit inside a link span are left alone, which makes the pass
//! idempotent.

use std::sync::LazyLock;

use regex::Regex;

static LINK_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").unwrap());

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Wrap bare URLs in link brackets, leaving existing `[[...]]` spans
/// untouched (including any padding inside the brackets).
pub fn prepare(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for span in LINK_SPAN.find_iter(text) {
        out.push_str(&wrap_bare_urls(&text[last..span.start()]));
        out.push_str(span.as_str());
        last = span.end();
    }
    out.push_str(&wrap_bare_urls(&text[last..]));

    out
}

fn wrap_bare_urls(text: &str) -> String {
    BARE_URL.replace_all(text, "[[${0}]]").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_url_is_wrapped() {
        assert_eq!(prepare("http://www.google.com"), "[[http://www.google.com]]");
        assert_eq!(
            prepare("http://www.google.com/hey"),
            "[[http://www.google.com/hey]]"
        );
    }

    #[test]
    fn test_https_is_wrapped() {
        assert_eq!(prepare("see https://example.org."), "see [[https://example.org.]]");
    }

    #[test]
    fn test_existing_link_is_untouched() {
        assert_eq!(prepare("[[http://www.google.com]]"), "[[http://www.google.com]]");
    }

    #[test]
    fn test_padded_link_is_untouched() {
        assert_eq!(prepare("[[ http://www.google.com ]]"), "[[ http://www.google.com ]]");
    }

    #[test]
    fn test_url_before_link() {
        assert_eq!(
            prepare("http://www.google.com [[link]]"),
            "[[http://www.google.com]] [[link]]"
        );
    }

    #[test]
    fn test_url_after_link() {
        assert_eq!(
            prepare("[[link]] http://www.google.com"),
            "[[link]] [[http://www.google.com]]"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(prepare("no urls here"), "no urls here");
        assert_eq!(prepare(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = prepare("a http://x.com b https://y.com c");
        assert_eq!(prepare(&once), once);
    }
}
