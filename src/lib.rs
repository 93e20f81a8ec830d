pub mod config;
pub mod event;
pub mod html;
pub mod parser;

pub use config::Config;
pub use config::ConfigBuilder;
pub use event::{Event, EventCollector, EventHandler, ListKind};
pub use html::{HtmlRenderer, html_encode};
pub use parser::{BlockParser, InlineElement, parse};

/// Renders a DokuWiki document string as HTML.
///
/// This runs the block parser over the input and feeds the event stream to
/// the built-in [`HtmlRenderer`].
///
/// # Examples
///
/// ```rust
/// let html = dokura::render("===HI===\n\nSome **bold** text.\n", None);
/// assert!(html.contains("<h3>HI</h3>"));
/// ```
///
/// # Arguments
///
/// * `input` - The document content to render
/// * `config` - Optional configuration (defaults to default config)
pub fn render(input: &str, config: Option<Config>) -> String {
    let mut renderer = HtmlRenderer::new();
    parse(input, &mut renderer, config);
    renderer.into_html()
}

/// Parses a DokuWiki document and returns the recorded event stream.
///
/// Convenience over [`parser::parse`] for callers that want events as data
/// rather than implementing [`EventHandler`] themselves.
pub fn collect_events(input: &str, config: Option<Config>) -> Vec<Event> {
    let mut collector = EventCollector::new();
    parse(input, &mut collector, config);
    collector.events
}
