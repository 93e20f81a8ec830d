//! Block-level state machine.
//!
//! The parser consumes a document one line at a time and tracks which block
//! construct it is inside: nothing, a list, a code block, or a paragraph.
//! Exactly one mode holds between [`BlockParser::feed`] calls, and every
//! transition closes the open block before starting the next one, so the
//! emitted start/end events are always balanced.
//!
//! Paragraph content is not emitted line by line. Each paragraph line is
//! inline-parsed into a span buffer where markup elements keep their
//! position between the literal runs; the whole buffer is flushed in
//! document order when a blank line, a mode transition, or the end of input
//! closes the paragraph. Consecutive line contributions are joined so that a
//! single space separates them.

use std::borrow::Cow;

use crate::config::Config;
use crate::event::{EventHandler, ListKind};
use crate::parser::inline_parser::{InlineElement, InlineSink, parse_inline_text, prepare};

mod code_blocks;
mod headings;
mod indented_code;
mod lists;
mod utils;

use code_blocks::{is_fence_close, is_fence_open, split_declarator};
use headings::try_parse_heading;
use indented_code::{is_indented_code_line, strip_indent};
use lists::{indent_to_level, try_parse_list_item};
use utils::is_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeKind {
    /// Between `<code>` and `</code>`. `awaiting_declarator` holds until the
    /// language line has been seen.
    Fenced { awaiting_declarator: bool },
    /// Opened by an indented line outside any other block.
    Indented,
}

/// The block construct currently open. `None` is both the initial state and
/// the state between blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    None,
    List(ListKind),
    Code(CodeKind),
    Paragraph,
}

/// Inline content buffered for the open paragraph.
#[derive(Debug)]
enum InlineSpan {
    Text(String),
    Element(InlineElement),
}

/// Sink that appends inline content to a span buffer, merging adjacent
/// literal runs so a markup-free paragraph flushes as a single text event.
struct SpanCollector<'a> {
    spans: &'a mut Vec<InlineSpan>,
}

impl InlineSink for SpanCollector<'_> {
    fn on_markup(&mut self, element: InlineElement) {
        self.spans.push(InlineSpan::Element(element));
    }

    fn on_text(&mut self, text: &str) {
        if let Some(InlineSpan::Text(last)) = self.spans.last_mut() {
            last.push_str(text);
        } else {
            self.spans.push(InlineSpan::Text(text.to_string()));
        }
    }
}

/// The document-level parser: feed it lines, it drives an [`EventHandler`].
pub struct BlockParser<'a, H: EventHandler> {
    handler: &'a mut H,
    config: &'a Config,
    mode: Mode,
    paragraph: Vec<InlineSpan>,
}

impl<'a, H: EventHandler> BlockParser<'a, H> {
    /// Create a parser driving `handler`. The document-start event fires
    /// here, before any line is processed.
    pub fn new(handler: &'a mut H, config: &'a Config) -> Self {
        handler.document_start();
        Self {
            handler,
            config,
            mode: Mode::None,
            paragraph: Vec::new(),
        }
    }

    /// Process one line of input, supplied without its trailing newline.
    pub fn feed(&mut self, line: &str) {
        log::trace!("feed in {:?}: {:?}", self.mode, line);

        if let Mode::Code(kind) = self.mode {
            match kind {
                CodeKind::Fenced { awaiting_declarator } => {
                    self.feed_fenced(line, awaiting_declarator);
                    return;
                }
                CodeKind::Indented => {
                    if is_indented_code_line(line) {
                        self.handler.code(strip_indent(line));
                        return;
                    }
                    self.handler.code_end();
                    self.mode = Mode::None;
                    if is_blank(line) {
                        return;
                    }
                    // Neither indented nor blank: fall through and process
                    // the line as the start of a new block.
                }
            }
        }

        if is_blank(line) {
            self.close_block();
            return;
        }

        if let Some((level, text)) = try_parse_heading(line) {
            self.close_block();
            self.handler.heading(level, text);
            return;
        }

        if is_fence_open(line) {
            self.close_block();
            self.mode = Mode::Code(CodeKind::Fenced {
                awaiting_declarator: true,
            });
            return;
        }

        if let Some((kind, indent, text)) = try_parse_list_item(line, self.config.tab_width) {
            self.open_list(kind);
            let level = indent_to_level(indent, self.config.list_indent);
            self.emit_list_item(level, text);
            return;
        }

        if self.mode == Mode::None && is_indented_code_line(line) {
            self.handler.code_start("", "");
            self.handler.code(strip_indent(line));
            self.mode = Mode::Code(CodeKind::Indented);
            return;
        }

        self.push_paragraph_line(line);
    }

    /// Signal end of input: acts as an implicit blank line, additionally
    /// closing an open code block.
    pub fn finish(&mut self) {
        match self.mode {
            Mode::Code(CodeKind::Fenced {
                awaiting_declarator,
            }) => {
                if awaiting_declarator {
                    self.handler.code_start("", "");
                }
                self.handler.code_end();
                self.mode = Mode::None;
            }
            Mode::Code(CodeKind::Indented) => {
                self.handler.code_end();
                self.mode = Mode::None;
            }
            _ => self.close_block(),
        }
    }

    fn feed_fenced(&mut self, line: &str, awaiting_declarator: bool) {
        if is_fence_close(line) {
            // A fence closed before its declarator line still emits a
            // balanced start/end pair.
            if awaiting_declarator {
                self.handler.code_start("", "");
            }
            self.handler.code_end();
            self.mode = Mode::None;
        } else if awaiting_declarator {
            // Blank lines before the declarator are skipped, not content.
            if !is_blank(line) {
                let (language, filename) = split_declarator(line);
                log::debug!("code block: language={language:?} filename={filename:?}");
                self.handler.code_start(language, filename);
                self.mode = Mode::Code(CodeKind::Fenced {
                    awaiting_declarator: false,
                });
            }
        } else {
            self.handler.code(line);
        }
    }

    /// Close whatever block is open and return to the between-blocks state.
    fn close_block(&mut self) {
        match self.mode {
            Mode::Paragraph => {
                self.flush_paragraph();
                self.handler.paragraph_end();
            }
            Mode::List(_) => self.handler.list_end(),
            Mode::None | Mode::Code(_) => {}
        }
        self.mode = Mode::None;
    }

    fn open_list(&mut self, kind: ListKind) {
        match self.mode {
            Mode::List(current) if current == kind => return,
            // A bullet change closes the list and opens one of the other
            // kind.
            Mode::List(_) => self.handler.list_end(),
            Mode::Paragraph => {
                self.flush_paragraph();
                self.handler.paragraph_end();
            }
            Mode::None | Mode::Code(_) => {}
        }
        self.handler.list_start(kind);
        self.mode = Mode::List(kind);
    }

    /// Inline-parse an item line and emit it. Markup elements fire as they
    /// are found; the item text is the concatenation of the literal runs.
    fn emit_list_item(&mut self, level: usize, text: &str) {
        let prepared = self.prepare_line(text);
        let mut spans = Vec::new();
        parse_inline_text(prepared.as_ref(), &mut SpanCollector { spans: &mut spans });

        let mut plain = String::new();
        for span in &spans {
            match span {
                InlineSpan::Element(element) => self.handler.markup(element),
                InlineSpan::Text(text) => plain.push_str(text),
            }
        }
        self.handler.list_item(level, &plain);
    }

    fn push_paragraph_line(&mut self, line: &str) {
        match self.mode {
            Mode::Paragraph => {
                if self.needs_joining_space() {
                    SpanCollector {
                        spans: &mut self.paragraph,
                    }
                    .on_text(" ");
                }
            }
            Mode::List(_) => {
                self.handler.list_end();
                self.handler.paragraph_start();
                self.mode = Mode::Paragraph;
            }
            Mode::None | Mode::Code(_) => {
                self.handler.paragraph_start();
                self.mode = Mode::Paragraph;
            }
        }

        let prepared = self.prepare_line(line);
        parse_inline_text(
            prepared.as_ref(),
            &mut SpanCollector {
                spans: &mut self.paragraph,
            },
        );
    }

    /// Whether the next line's contribution needs a separating space: only
    /// when buffered literal text exists and does not already end with
    /// whitespace.
    fn needs_joining_space(&self) -> bool {
        self.paragraph
            .iter()
            .rev()
            .find_map(|span| match span {
                InlineSpan::Text(text) => Some(!text.ends_with(char::is_whitespace)),
                InlineSpan::Element(_) => None,
            })
            .unwrap_or(false)
    }

    /// Emit the buffered paragraph spans in document order.
    fn flush_paragraph(&mut self) {
        let spans = std::mem::take(&mut self.paragraph);
        for span in &spans {
            match span {
                InlineSpan::Element(element) => self.handler.markup(element),
                InlineSpan::Text(text) => self.handler.text(text),
            }
        }
    }

    fn prepare_line<'l>(&self, line: &'l str) -> Cow<'l, str> {
        if self.config.autolink {
            Cow::Owned(prepare(line))
        } else {
            Cow::Borrowed(line)
        }
    }
}

#[cfg(test)]
mod tests {
    mod code;
    mod helpers;
    mod paragraphs;
    mod transitions;
}
