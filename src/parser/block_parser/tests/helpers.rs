//! Shared helpers for block parser tests.

use crate::config::Config;
use crate::event::Event;
use crate::event::EventCollector;
use crate::parser::block_parser::BlockParser;

/// Feed every line through a fresh parser and return the recorded events,
/// including the implicit end-of-input flush.
pub(crate) fn events_for(lines: &[&str]) -> Vec<Event> {
    let config = Config::default();
    let mut collector = EventCollector::new();
    let mut parser = BlockParser::new(&mut collector, &config);
    for line in lines {
        parser.feed(line);
    }
    parser.finish();
    collector.events
}
