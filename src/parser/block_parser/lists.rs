//! List line recognition.
//!
//! A list line is optional leading whitespace, a bullet marker, then at
//! least one whitespace character before the item text. `*` opens an
//! unordered list, `-` an ordered one. Nesting depth is not encoded in the
//! marker; it comes from the indentation width, which the block parser maps
//! to a level with a fixed divisor.

use crate::event::ListKind;

use super::utils::leading_indent;

/// Try to parse a list line, returning the list kind, the indentation width
/// in columns, and the item text with the marker stripped.
pub(crate) fn try_parse_list_item(
    line: &str,
    tab_width: usize,
) -> Option<(ListKind, usize, &str)> {
    let (indent_cols, indent_bytes) = leading_indent(line, tab_width);
    let rest = &line[indent_bytes..];

    let kind = match rest.chars().next() {
        Some('*') => ListKind::Unordered,
        Some('-') => ListKind::Ordered,
        _ => return None,
    };

    let after_marker = &rest[1..];
    if !after_marker.starts_with([' ', '\t']) {
        return None;
    }

    Some((kind, indent_cols, after_marker.trim_start()))
}

/// Map an indentation width to a nesting level. Level 1 is the outermost
/// list; every `divisor` columns of indentation adds one level.
pub(crate) fn indent_to_level(indent_cols: usize, divisor: usize) -> usize {
    if divisor == 0 {
        return 1;
    }
    (indent_cols / divisor).max(1)
}
