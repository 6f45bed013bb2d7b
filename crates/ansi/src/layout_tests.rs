// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use rstest::rstest;

fn strings(lines: &[AnsiString]) -> Vec<&str> {
    lines.iter().map(AnsiString::as_str).collect()
}

// =============================================================================
// truncate
// =============================================================================

#[test]
fn truncate_leaves_short_text_alone() {
    let text = AnsiString::new("\x1b[31mHello\x1b[0m");
    assert_eq!(truncate(&text, 5, ELLIPSIS), text);
    assert_eq!(truncate(&text, 10, ELLIPSIS), text);
}

#[test]
fn truncate_closes_formatting_before_marker() {
    let text = AnsiString::new("\x1b[31mHello\x1b[0m World");
    let short = truncate(&text, 6, ELLIPSIS);
    assert_eq!(short.as_str(), "\x1b[31mHello\x1b[39m…");
    assert_eq!(short.len(), 6);
    assert!(short.is_closed());
}

#[rstest]
#[case("Hello World", 8, "...", "Hello...")]
#[case("Hello World", 3, "...", "...")]
#[case("Hello World", 2, "...", "..")]
#[case("Hello World", 0, "...", "")]
#[case("Hello World", 4, "", "Hell")]
fn truncate_plain(#[case] input: &str, #[case] max: usize, #[case] marker: &str, #[case] expected: &str) {
    let out = truncate(&AnsiString::new(input), max, marker);
    assert_eq!(out.as_str(), expected);
    assert!(out.len() <= max);
}

#[test]
fn truncate_with_styled_marker() {
    let marker = "\x1b[2m…\x1b[22m";
    let out = truncate(&AnsiString::new("abcdef"), 4, marker);
    assert_eq!(out.as_str(), "abc\x1b[2m…\x1b[22m");
    assert_eq!(out.len(), 4);
}

// =============================================================================
// pad_end
// =============================================================================

#[test]
fn pad_end_counts_logical_width() {
    let text = AnsiString::new("\x1b[1mab\x1b[22m");
    let padded = pad_end(&text, 5, '.');
    assert_eq!(padded.as_str(), "\x1b[1mab\x1b[22m...");
    assert_eq!(padded.len(), 5);
}

#[test]
fn pad_end_never_shrinks() {
    let text = AnsiString::new("abcdef");
    assert_eq!(pad_end(&text, 3, ' '), text);
}

// =============================================================================
// lines
// =============================================================================

#[test]
fn lines_reopen_formatting_after_break() {
    let text = AnsiString::new("\x1b[31mred\nstill red\x1b[0m\nplain");
    let lines = lines(&text);
    assert_eq!(
        strings(&lines),
        vec![
            "\x1b[31mred\x1b[39m",
            "\x1b[31mstill red\x1b[39m",
            "plain",
        ]
    );
    assert!(lines.iter().all(AnsiString::is_closed));
}

#[test]
fn lines_handle_crlf_and_trailing_separator() {
    let text = AnsiString::new("\x1b[1ma\r\nb\x1b[22m\r\n");
    let lines = lines(&text);
    assert_eq!(strings(&lines), vec!["\x1b[1ma\x1b[22m", "\x1b[1mb\x1b[22m", ""]);
}

#[test]
fn lines_of_empty_text() {
    let lines = lines(&AnsiString::default());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_empty());
}

proptest! {
    #[test]
    fn lines_match_unformatted_lines(parts in prop::collection::vec("[a-z]{0,4}", 1..5), color in 30u32..38) {
        let raw = format!("\x1b[{}m{}\x1b[0m", color, parts.join("\n"));
        let text = AnsiString::new(raw.as_str());
        let split = lines(&text);
        prop_assert_eq!(split.len(), parts.len());
        for (line, part) in split.iter().zip(&parts) {
            prop_assert_eq!(&line.unformatted(), part);
            prop_assert!(line.is_closed());
        }
    }
}
