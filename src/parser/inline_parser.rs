//! Inline tokenizer for a single line of DokuWiki markup.
//!
//! [`segment`] splits a line into an ordered sequence of literal runs and
//! markup tokens. The scan is position-based: the two-character delimiters
//! `**`, `//`, and `__` are only recognized as exact pairs at the current
//! position, so a lone `/` inside ordinary text (`gps/gprs`) never splits a
//! literal run. Link (`[[...]]`) and image (`{{...}}`) tokens are extracted
//! as whole balanced units, pipes and all; an opener with no closer on the
//! same line degrades to literal text.
//!
//! Concatenating the returned tokens always reproduces the input line
//! byte-for-byte: the segmenter classifies, it never rewrites.

pub mod autolink;
pub mod elements;

pub use autolink::prepare;
pub use elements::{InlineElement, InvalidAccess};

/// Receiver for the per-line inline parse.
///
/// One method per event keeps renderers free to ignore whichever side they
/// do not care about.
pub trait InlineSink {
    /// A classified markup element, in document order.
    fn on_markup(&mut self, element: InlineElement);
    /// A literal text run, verbatim.
    fn on_text(&mut self, text: &str);
}

/// Split one line into literal runs and markup tokens.
pub fn segment(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        if rest.starts_with("**") || rest.starts_with("//") || rest.starts_with("__") {
            push_literal(&mut tokens, line, literal_start, pos);
            tokens.push(&line[pos..pos + 2]);
            pos += 2;
            literal_start = pos;
            continue;
        }

        if let Some(len) =
            balanced_token(rest, "[[", "]]").or_else(|| balanced_token(rest, "{{", "}}"))
        {
            push_literal(&mut tokens, line, literal_start, pos);
            tokens.push(&line[pos..pos + len]);
            pos += len;
            literal_start = pos;
            continue;
        }

        pos += char_width(rest);
    }

    push_literal(&mut tokens, line, literal_start, line.len());
    tokens
}

/// Run the segmenter over a line and dispatch each token to the sink:
/// markup tokens to [`InlineSink::on_markup`], literal runs to
/// [`InlineSink::on_text`].
pub fn parse_inline_text(line: &str, sink: &mut dyn InlineSink) {
    for token in segment(line) {
        match InlineElement::classify(token) {
            Some(element) => sink.on_markup(element),
            None => sink.on_text(token),
        }
    }
}

/// Length of a whole `open ... close` token starting at the beginning of
/// `rest`, or `None` if the opener is absent or never closed. Nesting is not
/// supported; the first closer wins.
fn balanced_token(rest: &str, open: &str, close: &str) -> Option<usize> {
    if !rest.starts_with(open) {
        return None;
    }
    rest.find(close).map(|end| end + close.len())
}

fn push_literal<'a>(tokens: &mut Vec<&'a str>, line: &'a str, start: usize, end: usize) {
    if start < end {
        tokens.push(&line[start..end]);
    }
}

fn char_width(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Literal runs ===

    #[test]
    fn test_normal() {
        assert_eq!(segment("foo bar"), vec!["foo bar"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(segment("").is_empty());
    }

    // === Delimiters ===

    #[test]
    fn test_bold() {
        assert_eq!(segment("**foo** bar"), vec!["**", "foo", "**", " bar"]);
    }

    #[test]
    fn test_italic() {
        assert_eq!(segment("//foo bar//"), vec!["//", "foo bar", "//"]);
        assert_eq!(segment("gps/gprs"), vec!["gps/gprs"]);
        assert_eq!(segment("//gps/gprs//"), vec!["//", "gps/gprs", "//"]);
    }

    #[test]
    fn test_bold_italic() {
        assert_eq!(
            segment("**//foo bar//**"),
            vec!["**", "//", "foo bar", "//", "**"]
        );
    }

    #[test]
    fn test_underline() {
        assert_eq!(segment("__foo bar__"), vec!["__", "foo bar", "__"]);
    }

    #[test]
    fn test_bold_italic_underline() {
        assert_eq!(
            segment("**//__foo bar__//**"),
            vec!["**", "//", "__", "foo bar", "__", "//", "**"]
        );
        assert_eq!(segment("**_**"), vec!["**", "_", "**"]);
        assert_eq!(segment("**  _**"), vec!["**", "  _", "**"]);
    }

    #[test]
    fn test_whitespace_stays_in_literals() {
        assert_eq!(segment(" **x** "), vec![" ", "**", "x", "**", " "]);
    }

    // === Links and images ===

    #[test]
    fn test_links() {
        assert_eq!(
            segment("[[http://www.google.com|This Link points to google]]"),
            vec!["[[http://www.google.com|This Link points to google]]"]
        );
        assert_eq!(segment("[1] one"), vec!["[1] one"]);
        assert_eq!(segment("[1]"), vec!["[1]"]);
        assert_eq!(segment("[]"), vec!["[]"]);
    }

    #[test]
    fn test_link_with_surrounding_text() {
        assert_eq!(
            segment("see [[wiki:page]] for details"),
            vec!["see ", "[[wiki:page]]", " for details"]
        );
    }

    #[test]
    fn test_images() {
        assert_eq!(segment("{{img.png}}"), vec!["{{img.png}}"]);
    }

    #[test]
    fn test_unterminated_brackets_stay_literal() {
        assert_eq!(segment("[[no close"), vec!["[[no close"]);
        assert_eq!(segment("{{no close"), vec!["{{no close"]);
    }

    #[test]
    fn test_adjacent_tokens() {
        assert_eq!(segment("[[a]]{{b.png}}**"), vec!["[[a]]", "{{b.png}}", "**"]);
    }

    // === Round-trip property ===

    #[test]
    fn test_round_trip() {
        let lines = [
            "foo bar",
            "**foo** bar",
            "//gps/gprs//",
            "**//__foo bar__//**",
            "[[url|title]] tail {{img.png}}",
            "[1] one [] [[open",
            "über **straße**",
        ];
        for line in lines {
            assert_eq!(segment(line).concat(), line);
        }
    }

    // === Dispatch ===

    struct Recorder {
        log: Vec<String>,
    }

    impl InlineSink for Recorder {
        fn on_markup(&mut self, element: InlineElement) {
            self.log.push(format!("markup:{element:?}"));
        }
        fn on_text(&mut self, text: &str) {
            self.log.push(format!("text:{text}"));
        }
    }

    #[test]
    fn test_parse_inline_text_dispatch() {
        let mut sink = Recorder { log: Vec::new() };
        parse_inline_text("**foo** bar", &mut sink);
        assert_eq!(
            sink.log,
            vec![
                "markup:Bold".to_string(),
                "text:foo".to_string(),
                "markup:Bold".to_string(),
                "text: bar".to_string(),
            ]
        );
    }
}
