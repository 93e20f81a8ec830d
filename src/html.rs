//! HTML rendering of the event stream.
//!
//! [`HtmlRenderer`] is an [`EventHandler`] that assembles an HTML string.
//! The parser knows nothing about HTML; any other renderer can subscribe to
//! the same events.
//!
//! Inline markup is rendered only inside paragraphs. Delimiter elements
//! toggle their tag; a delimiter left open when the paragraph ends is closed
//! then, so the output never leaks an unbalanced tag.

use crate::event::{EventHandler, ListKind};
use crate::parser::inline_parser::InlineElement;

/// Escape text for HTML output.
///
/// `&` must be replaced first; otherwise the `&` introduced by the other
/// replacements would be escaped a second time.
pub fn html_encode(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn encode_attr(text: &str) -> String {
    html_encode(text).replace('"', "&quot;")
}

fn list_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Unordered => "ul",
        ListKind::Ordered => "ol",
    }
}

/// Split image parameters into `(source, alt text)` on the first pipe.
fn split_image_params(params: &str) -> (&str, &str) {
    match params.split_once('|') {
        Some((src, alt)) => (src.trim(), alt.trim()),
        None => (params.trim(), ""),
    }
}

/// Event handler that renders the document as HTML.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    html: String,
    in_paragraph: bool,
    open_inline: Vec<&'static str>,
    list_kind: Option<ListKind>,
    list_depth: usize,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered document.
    pub fn into_html(self) -> String {
        self.html
    }

    fn toggle(&mut self, tag: &'static str) {
        if let Some(pos) = self.open_inline.iter().rposition(|open| *open == tag) {
            // Closing a tag also closes anything opened inside it.
            while self.open_inline.len() > pos {
                if let Some(open) = self.open_inline.pop() {
                    self.html.push_str("</");
                    self.html.push_str(open);
                    self.html.push('>');
                }
            }
        } else {
            self.html.push('<');
            self.html.push_str(tag);
            self.html.push('>');
            self.open_inline.push(tag);
        }
    }

    fn set_list_depth(&mut self, level: usize) {
        let Some(kind) = self.list_kind else {
            return;
        };
        let tag = list_tag(kind);
        while self.list_depth < level {
            self.html.push('<');
            self.html.push_str(tag);
            self.html.push_str(">\n");
            self.list_depth += 1;
        }
        while self.list_depth > level {
            self.html.push_str("</");
            self.html.push_str(tag);
            self.html.push_str(">\n");
            self.list_depth -= 1;
        }
    }
}

impl EventHandler for HtmlRenderer {
    fn heading(&mut self, level: u8, text: &str) {
        let level = level.clamp(1, 6);
        self.html
            .push_str(&format!("<h{level}>{}</h{level}>\n", html_encode(text)));
    }

    fn list_start(&mut self, kind: ListKind) {
        self.list_kind = Some(kind);
        self.list_depth = 0;
    }

    fn list_item(&mut self, level: usize, text: &str) {
        self.set_list_depth(level);
        self.html
            .push_str(&format!("<li>{}</li>\n", html_encode(text)));
    }

    fn list_end(&mut self) {
        self.set_list_depth(0);
        self.list_kind = None;
    }

    fn code_start(&mut self, language: &str, filename: &str) {
        self.html.push_str("<pre><code");
        if !language.is_empty() {
            self.html
                .push_str(&format!(" class=\"language-{}\"", encode_attr(language)));
        }
        if !filename.is_empty() {
            self.html
                .push_str(&format!(" data-filename=\"{}\"", encode_attr(filename)));
        }
        self.html.push('>');
    }

    fn code(&mut self, text: &str) {
        self.html.push_str(&html_encode(text));
        self.html.push('\n');
    }

    fn code_end(&mut self) {
        self.html.push_str("</code></pre>\n");
    }

    fn paragraph_start(&mut self) {
        self.html.push_str("<p>");
        self.in_paragraph = true;
        self.open_inline.clear();
    }

    fn markup(&mut self, element: &InlineElement) {
        // List item text is emitted plain; inline tags only make sense
        // between the paragraph events.
        if !self.in_paragraph {
            return;
        }
        match element {
            InlineElement::Bold => self.toggle("strong"),
            InlineElement::Italic => self.toggle("em"),
            InlineElement::Underline => self.toggle("u"),
            InlineElement::Link { url, title } => {
                let label = if title.is_empty() { url } else { title };
                self.html.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    encode_attr(url),
                    html_encode(label)
                ));
            }
            InlineElement::Image { params } => {
                let (src, alt) = split_image_params(params);
                if alt.is_empty() {
                    self.html
                        .push_str(&format!("<img src=\"{}\" />", encode_attr(src)));
                } else {
                    self.html.push_str(&format!(
                        "<img src=\"{}\" alt=\"{}\" />",
                        encode_attr(src),
                        encode_attr(alt)
                    ));
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        self.html.push_str(&html_encode(text));
    }

    fn paragraph_end(&mut self) {
        while let Some(open) = self.open_inline.pop() {
            self.html.push_str("</");
            self.html.push_str(open);
            self.html.push('>');
        }
        self.html.push_str("</p>\n");
        self.in_paragraph = false;
    }
}
