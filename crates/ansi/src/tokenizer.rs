// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splits text into SGR escape tokens and plain-text runs.
//!
//! Only SGR sequences (`ESC [ params m`) are zero-width. Other CSI sequences
//! such as cursor movement count as ordinary characters.

use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Regex for a CSI control sequence: ESC [ parameter bytes, intermediate
/// bytes, final byte.
///
/// This is a compile-time constant regex pattern that is guaranteed to be valid.
static CSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-?]*)([ -/]*)([@-~])").expect("CSI regex pattern is invalid")
});

/// A run of text and the width it occupies on screen.
///
/// `display_length` is zero exactly when the run is an SGR escape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    text: String,
    display_length: usize,
}

impl Token {
    /// A zero-width SGR sequence.
    pub fn sgr(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            display_length: 0,
        }
    }

    /// A plain-text run, one column per `char`.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let display_length = text.chars().count();
        Token {
            text,
            display_length,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn display_length(&self) -> usize {
        self.display_length
    }

    pub fn is_escape(&self) -> bool {
        self.display_length == 0
    }

    /// Parameters of an escape token (between `ESC[` and `m`).
    pub fn sgr_params(&self) -> Option<&str> {
        if !self.is_escape() {
            return None;
        }
        self.text.strip_prefix("\x1b[")?.strip_suffix('m')
    }
}

/// Tokenize `text` left to right.
///
/// Adjacent plain characters, including any non-SGR control sequences, form
/// one token; every SGR sequence is its own token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain_start = 0;

    for cap in CSI_REGEX.captures_iter(text) {
        // cap.get(0) is the full match, which is always present when the regex matches
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let intermediate = cap.get(2).map(|m| m.as_str()).unwrap_or("");
        let final_byte = cap.get(3).map(|m| m.as_str()).unwrap_or("");
        if final_byte != "m" || !intermediate.is_empty() {
            continue;
        }

        if plain_start < full_match.start() {
            tokens.push(Token::plain(&text[plain_start..full_match.start()]));
        }
        tokens.push(Token::sgr(full_match.as_str()));
        plain_start = full_match.end();
    }

    if plain_start < text.len() {
        tokens.push(Token::plain(&text[plain_start..]));
    }

    tokens
}

/// Strip SGR sequences, returning plain text.
///
/// Borrows the input when it contains no escape character.
pub fn strip(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        tokenize(text)
            .iter()
            .filter(|t| !t.is_escape())
            .map(Token::as_str)
            .collect(),
    )
}

/// Logical length of `text`: its `char` count with SGR sequences excluded.
pub fn display_length(text: &str) -> usize {
    tokenize(text).iter().map(Token::display_length).sum()
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
