//! Classification of markup tokens into inline elements.
//!
//! The segmenter hands over token strings exactly as they appeared in the
//! source line; this module decides what they mean. The two-character
//! delimiters map by exact match, bracketed tokens carry a payload that is
//! extracted here (link target and title, raw image parameters).

use serde::Serialize;
use thiserror::Error;

/// Accessing a payload on an element variant that does not carry it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("accessor `{wanted}` is invalid for a {found} element")]
pub struct InvalidAccess {
    pub wanted: &'static str,
    pub found: &'static str,
}

/// An inline markup element recognized within a line.
///
/// `Bold`, `Italic`, and `Underline` are toggle delimiters; `Link` and
/// `Image` are self-contained tokens with their payload already split out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineElement {
    Bold,
    Italic,
    Underline,
    Link { url: String, title: String },
    Image { params: String },
}

impl InlineElement {
    /// Classify a token string produced by the segmenter.
    ///
    /// Returns `None` for anything that is not one of the five markup forms,
    /// so literal runs can never be misread as markup.
    pub fn classify(token: &str) -> Option<Self> {
        match token {
            "**" => return Some(InlineElement::Bold),
            "//" => return Some(InlineElement::Italic),
            "__" => return Some(InlineElement::Underline),
            _ => {}
        }

        if let Some(inner) = enclosed(token, "[[", "]]") {
            // Title is everything after the first pipe; both halves trimmed.
            let (url, title) = match inner.split_once('|') {
                Some((url, title)) => (url.trim(), title.trim()),
                None => (inner.trim(), ""),
            };
            return Some(InlineElement::Link {
                url: url.to_string(),
                title: title.to_string(),
            });
        }

        if let Some(inner) = enclosed(token, "{{", "}}") {
            return Some(InlineElement::Image {
                params: inner.to_string(),
            });
        }

        None
    }

    /// The target of a `Link` element.
    pub fn url(&self) -> Result<&str, InvalidAccess> {
        match self {
            InlineElement::Link { url, .. } => Ok(url),
            other => Err(other.invalid_access("url")),
        }
    }

    /// The display title of a `Link` element; empty when the source had none.
    pub fn title(&self) -> Result<&str, InvalidAccess> {
        match self {
            InlineElement::Link { title, .. } => Ok(title),
            other => Err(other.invalid_access("title")),
        }
    }

    /// The raw parameter string of an `Image` element, verbatim from between
    /// the braces.
    pub fn params(&self) -> Result<&str, InvalidAccess> {
        match self {
            InlineElement::Image { params } => Ok(params),
            other => Err(other.invalid_access("params")),
        }
    }

    fn invalid_access(&self, wanted: &'static str) -> InvalidAccess {
        InvalidAccess {
            wanted,
            found: self.kind_name(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            InlineElement::Bold => "bold",
            InlineElement::Italic => "italic",
            InlineElement::Underline => "underline",
            InlineElement::Link { .. } => "link",
            InlineElement::Image { .. } => "image",
        }
    }
}

/// The contents of `token` if it is wrapped in the given fences and long
/// enough that they do not overlap.
fn enclosed<'a>(token: &'a str, open: &str, close: &str) -> Option<&'a str> {
    if token.len() >= open.len() + close.len()
        && token.starts_with(open)
        && token.ends_with(close)
    {
        Some(&token[open.len()..token.len() - close.len()])
    } else {
        None
    }
}
