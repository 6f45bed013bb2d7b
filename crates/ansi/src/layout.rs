// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Width-aware layout helpers for formatted text.

use crate::ansi_string::AnsiString;
use crate::separators;

/// Default marker appended by [`truncate`].
pub const ELLIPSIS: &str = "…";

/// Shorten `text` to at most `max_len` logical characters, ending with `marker`.
///
/// Text that already fits is returned unchanged. The kept prefix has its
/// formatting closed before the marker. A marker longer than `max_len` is
/// itself cut to `max_len`.
pub fn truncate(text: &AnsiString, max_len: usize, marker: &str) -> AnsiString {
    if text.len() <= max_len {
        return text.clone();
    }
    let marker = AnsiString::new(marker);
    if marker.len() >= max_len {
        return marker.slice_clamped(0, max_len);
    }
    let prefix = text.slice_clamped(0, max_len - marker.len());
    AnsiString::new(format!("{}{}", prefix, marker))
}

/// Append `fill` until `text` is `width` logical characters wide.
pub fn pad_end(text: &AnsiString, width: usize, fill: char) -> AnsiString {
    if text.len() >= width {
        return text.clone();
    }
    let padding = fill.to_string().repeat(width - text.len());
    AnsiString::new(format!("{}{}", text, padding))
}

/// Split `text` into lines, each formatted on its own.
///
/// Formatting open across a line break is closed at the end of the line
/// and re-opened at the start of the next one.
pub fn lines(text: &AnsiString) -> Vec<AnsiString> {
    let plain = text.unformatted();
    let mut result = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for range in separators::line_ranges(&plain) {
        char_pos += plain[byte_pos..range.start].chars().count();
        let start = char_pos;
        char_pos += plain[range.clone()].chars().count();
        byte_pos = range.end;
        result.push(text.slice_clamped(start, char_pos));
    }

    result
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
