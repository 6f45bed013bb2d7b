// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line separators and line splitting.

use std::ops::Range;

/// Carriage return + line feed
pub const CRLF: &str = "\r\n";
/// Line feed
pub const LF: &str = "\n";
/// Carriage return
pub const CR: &str = "\r";
/// Next line (U+0085)
pub const NEL: &str = "\u{0085}";
/// Line separator (U+2028)
pub const LS: &str = "\u{2028}";
/// Paragraph separator (U+2029)
pub const PS: &str = "\u{2029}";

/// Every recognized separator. `CRLF` comes before `CR` so it wins.
pub const ALL: [&str; 6] = [CRLF, LF, CR, NEL, LS, PS];

fn separator_at(rest: &str) -> Option<&'static str> {
    ALL.into_iter().find(|sep| rest.starts_with(sep))
}

/// Byte ranges of each line, separators excluded.
///
/// A trailing separator produces a trailing empty line, and the empty string
/// is one empty line.
pub fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut line_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        if let Some(sep) = separator_at(rest) {
            ranges.push(line_start..pos);
            pos += sep.len();
            line_start = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    ranges.push(line_start..text.len());
    ranges
}

/// Split `text` on every line separator.
pub fn lines(text: &str) -> Vec<&str> {
    line_ranges(text).into_iter().map(|r| &text[r]).collect()
}

/// The separator `text` ends with, if any.
pub fn trailing_separator(text: &str) -> Option<&'static str> {
    ALL.into_iter().find(|sep| text.ends_with(sep))
}

pub fn has_trailing_separator(text: &str) -> bool {
    trailing_separator(text).is_some()
}

#[cfg(test)]
#[path = "separators_tests.rs"]
mod tests;
