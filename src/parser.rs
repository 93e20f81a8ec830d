//! Parser module containing the block state machine and the inline
//! tokenizer.

use crate::config::Config;
use crate::event::EventHandler;

pub mod block_parser;
pub mod inline_parser;

// Re-export commonly used types
pub use block_parser::BlockParser;
pub use inline_parser::{InlineElement, InlineSink, InvalidAccess, parse_inline_text, prepare, segment};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a whole DokuWiki document, driving `handler` with the resulting
/// event stream.
///
/// This is the whole-document convenience over [`BlockParser`]: it splits
/// the input into lines (both LF and CRLF endings), feeds them through the
/// state machine, and performs the implicit end-of-input flush.
///
/// # Examples
///
/// ```rust
/// use dokura::event::EventCollector;
///
/// let mut collector = EventCollector::new();
/// dokura::parser::parse("===HI===\n\nfirst paragraph\n", &mut collector, None);
/// println!("{:#?}", collector.events);
/// ```
///
/// # Arguments
///
/// * `input` - The document content to parse
/// * `handler` - The event receiver
/// * `config` - Optional configuration. If None, uses default config.
pub fn parse(input: &str, handler: &mut impl EventHandler, config: Option<Config>) {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let mut parser = BlockParser::new(handler, &config);
    for line in input.lines() {
        parser.feed(line);
    }
    parser.finish();
}
