//! Fenced code block markers.
//!
//! DokuWiki fences code between literal `<code>` and `</code>` lines. The
//! first non-blank line after the opening fence is not content: it declares
//! the language and, optionally, a filename (`bash build.sh`).

/// Whether a line opens a fenced code block.
pub(crate) fn is_fence_open(line: &str) -> bool {
    line.trim() == "<code>"
}

/// Whether a line closes a fenced code block.
pub(crate) fn is_fence_close(line: &str) -> bool {
    line.trim() == "</code>"
}

/// Split a declarator line into `(language, filename)`. Missing parts come
/// back empty; anything past the second token is ignored.
pub(crate) fn split_declarator(line: &str) -> (&str, &str) {
    let mut parts = line.split_whitespace();
    let language = parts.next().unwrap_or("");
    let filename = parts.next().unwrap_or("");
    (language, filename)
}
