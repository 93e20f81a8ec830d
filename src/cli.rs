use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dokura")]
#[command(author, version)]
#[command(about = "A parser and HTML renderer for DokuWiki markup")]
#[command(
    long_about = "Dokura converts DokuWiki-flavored markup (headings, lists, code blocks, \
    paragraphs, bold/italic/underline, links, images) into HTML, or dumps the parser's \
    semantic event stream for debugging and downstream tooling."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a page to HTML on stdout
    dokura render page.txt

    # Render from stdin
    cat page.txt | dokura render

    # Inspect the event stream
    dokura events page.txt

    # Event stream as JSON, one document array
    dokura events --json page.txt

CONFIGURATION:

Dokura looks for configuration files in this order:
  1. Explicit --config path
  2. dokura.toml or .dokura.toml in the input's directory or its parents
  3. ~/.config/dokura/config.toml (XDG)
  4. Built-in defaults

Example dokura.toml:

    list_indent = 2
    tab_width = 4
    autolink = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a DokuWiki document to HTML
    #[command(
        long_about = "Render a DokuWiki document to HTML on stdout. Reads from the given \
        file, or from stdin when no file is provided."
    )]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Parse and display the semantic event stream for debugging
    #[command(
        long_about = "Parse a document and print the semantic events the renderer would \
        consume: headings, list items, code blocks, paragraphs, and inline markup. Useful \
        for debugging how dokura interprets a document."
    )]
    Events {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Emit the events as a JSON array
        #[arg(long)]
        json: bool,
    },
}
