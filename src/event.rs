//! Semantic events produced by the block parser.
//!
//! The parser never renders anything itself; it drives an [`EventHandler`]
//! whose methods all default to no-ops, so a consumer implements exactly the
//! hooks it cares about. [`Event`] is the same stream reified as a value,
//! which is what the `events` CLI subcommand and the test suite consume.

use serde::Serialize;

use crate::parser::inline_parser::InlineElement;

/// Whether a list was opened with `*` (unordered) or `-` (ordered) bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// Receiver for the document event stream.
///
/// Events arrive strictly in document order. Start/end pairs are always
/// balanced, including at end of input where open blocks are closed
/// implicitly.
#[allow(unused_variables)]
pub trait EventHandler {
    /// Fired exactly once, before any line of the document is processed.
    fn document_start(&mut self) {}

    /// A standalone heading. `level` is the number of `=` characters in the
    /// fence, capped at 6.
    fn heading(&mut self, level: u8, text: &str) {}

    fn list_start(&mut self, kind: ListKind) {}

    /// One list item. `level` is the nesting depth derived from indentation,
    /// starting at 1. `text` is the item's literal content with markup
    /// delimiters removed.
    fn list_item(&mut self, level: usize, text: &str) {}

    fn list_end(&mut self) {}

    /// A code block opened. Both strings are empty for indented code blocks.
    fn code_start(&mut self, language: &str, filename: &str) {}

    /// One verbatim line of code block content, never inline-tokenized.
    fn code(&mut self, text: &str) {}

    fn code_end(&mut self) {}

    fn paragraph_start(&mut self) {}

    /// An inline markup element, in document order within the enclosing
    /// paragraph or list item.
    fn markup(&mut self, element: &InlineElement) {}

    /// Literal paragraph text. Contributions from consecutive source lines
    /// are joined so that a single space separates them.
    fn text(&mut self, text: &str) {}

    fn paragraph_end(&mut self) {}
}

/// The event stream as plain data, mirroring [`EventHandler`] one-to-one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    DocumentStart,
    Heading { level: u8, text: String },
    ListStart { kind: ListKind },
    ListItem { level: usize, text: String },
    ListEnd,
    CodeStart { language: String, filename: String },
    Code { text: String },
    CodeEnd,
    ParagraphStart,
    Markup { element: InlineElement },
    Text { text: String },
    ParagraphEnd,
}

/// Handler that records every event, for tests and debugging dumps.
#[derive(Debug, Default)]
pub struct EventCollector {
    pub events: Vec<Event>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for EventCollector {
    fn document_start(&mut self) {
        self.events.push(Event::DocumentStart);
    }

    fn heading(&mut self, level: u8, text: &str) {
        self.events.push(Event::Heading {
            level,
            text: text.to_string(),
        });
    }

    fn list_start(&mut self, kind: ListKind) {
        self.events.push(Event::ListStart { kind });
    }

    fn list_item(&mut self, level: usize, text: &str) {
        self.events.push(Event::ListItem {
            level,
            text: text.to_string(),
        });
    }

    fn list_end(&mut self) {
        self.events.push(Event::ListEnd);
    }

    fn code_start(&mut self, language: &str, filename: &str) {
        self.events.push(Event::CodeStart {
            language: language.to_string(),
            filename: filename.to_string(),
        });
    }

    fn code(&mut self, text: &str) {
        self.events.push(Event::Code {
            text: text.to_string(),
        });
    }

    fn code_end(&mut self) {
        self.events.push(Event::CodeEnd);
    }

    fn paragraph_start(&mut self) {
        self.events.push(Event::ParagraphStart);
    }

    fn markup(&mut self, element: &InlineElement) {
        self.events.push(Event::Markup {
            element: element.clone(),
        });
    }

    fn text(&mut self, text: &str) {
        self.events.push(Event::Text {
            text: text.to_string(),
        });
    }

    fn paragraph_end(&mut self) {
        self.events.push(Event::ParagraphEnd);
    }
}
