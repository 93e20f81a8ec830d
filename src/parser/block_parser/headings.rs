//! Heading fence recognition.

/// Try to parse a heading line, returning `(level, text)` if found.
///
/// A heading is a line whose trimmed form starts and ends with runs of `=`.
/// The level is the length of the leading run, capped at 6; `=` characters
/// between the fences belong to the text (`===P=NP===` is a level-3 heading
/// titled `P=NP`). A line consisting only of `=` characters is not a
/// heading.
pub(crate) fn try_parse_heading(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim();
    if !trimmed.starts_with('=') {
        return None;
    }

    let leading = trimmed.chars().take_while(|&c| c == '=').count();
    let rest = &trimmed[leading..];
    if rest.is_empty() {
        return None;
    }

    let trailing = rest.chars().rev().take_while(|&c| c == '=').count();
    if trailing == 0 {
        return None;
    }

    let text = rest[..rest.len() - trailing].trim();
    let level = leading.min(6) as u8;
    Some((level, text))
}
