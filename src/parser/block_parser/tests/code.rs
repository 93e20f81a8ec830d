use crate::event::Event;

use super::helpers::events_for;

fn code_start(language: &str, filename: &str) -> Event {
    Event::CodeStart {
        language: language.to_string(),
        filename: filename.to_string(),
    }
}

fn code(text: &str) -> Event {
    Event::Code {
        text: text.to_string(),
    }
}

#[test]
fn fenced_block_with_language() {
    assert_eq!(
        events_for(&["<code>", "bash", "echo hi", "</code>"]),
        vec![
            Event::DocumentStart,
            code_start("bash", ""),
            code("echo hi"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn declarator_carries_optional_filename() {
    assert_eq!(
        events_for(&["<code>", "bash build.sh", "set -e", "</code>"]),
        vec![
            Event::DocumentStart,
            code_start("bash", "build.sh"),
            code("set -e"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn blank_lines_before_declarator_are_skipped() {
    assert_eq!(
        events_for(&["<code>", "", "python", "x = 1", "</code>"]),
        vec![
            Event::DocumentStart,
            code_start("python", ""),
            code("x = 1"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn blank_lines_inside_fence_are_content() {
    assert_eq!(
        events_for(&["<code>", "txt", "a", "", "b", "</code>"]),
        vec![
            Event::DocumentStart,
            code_start("txt", ""),
            code("a"),
            code(""),
            code("b"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn code_content_is_never_inline_tokenized() {
    assert_eq!(
        events_for(&["<code>", "txt", "**not bold** [[not a link]]", "</code>"]),
        vec![
            Event::DocumentStart,
            code_start("txt", ""),
            code("**not bold** [[not a link]]"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn heading_fence_inside_code_is_content() {
    assert_eq!(
        events_for(&["<code>", "txt", "===not a heading===", "</code>"]),
        vec![
            Event::DocumentStart,
            code_start("txt", ""),
            code("===not a heading==="),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn unterminated_fence_closes_at_end_of_input() {
    assert_eq!(
        events_for(&["<code>", "rust", "let x = 1;"]),
        vec![
            Event::DocumentStart,
            code_start("rust", ""),
            code("let x = 1;"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn fence_closed_before_declarator_stays_balanced() {
    assert_eq!(
        events_for(&["<code>", "</code>"]),
        vec![Event::DocumentStart, code_start("", ""), Event::CodeEnd]
    );
}

#[test]
fn indented_line_opens_a_code_block() {
    assert_eq!(
        events_for(&["  bash"]),
        vec![
            Event::DocumentStart,
            code_start("", ""),
            code("bash"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn indented_block_ends_at_blank_line() {
    assert_eq!(
        events_for(&["  a", "", "  b"]),
        vec![
            Event::DocumentStart,
            code_start("", ""),
            code("a"),
            Event::CodeEnd,
            code_start("", ""),
            code("b"),
            Event::CodeEnd,
        ]
    );
}

#[test]
fn indented_block_ends_at_unindented_line() {
    assert_eq!(
        events_for(&["  make", "done", ""]),
        vec![
            Event::DocumentStart,
            code_start("", ""),
            code("make"),
            Event::CodeEnd,
            Event::ParagraphStart,
            Event::Text {
                text: "done".to_string()
            },
            Event::ParagraphEnd,
        ]
    );
}

#[test]
fn indented_continuation_of_paragraph_is_not_code() {
    assert_eq!(
        events_for(&["first", "  second", ""]),
        vec![
            Event::DocumentStart,
            Event::ParagraphStart,
            Event::Text {
                text: "first   second".to_string()
            },
            Event::ParagraphEnd,
        ]
    );
}
