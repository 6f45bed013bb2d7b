// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-blind view of a formatted string.
//!
//! [`AnsiString`] measures, indexes and slices text as a terminal shows it:
//! SGR sequences have no width. Slices carry the formatting in effect at
//! their start and close whatever is still open at their end, so every
//! slice renders correctly on its own.

use crate::cache;
use crate::error::AnsiError;
use crate::escape::EscapeCode;
use crate::state::SgrState;
use crate::tokenizer::{tokenize, Token};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Immutable formatted string with logical (escape-blind) length and indices.
///
/// Cloning is cheap; the text and its tokens are shared.
#[derive(Debug, Clone)]
pub struct AnsiString {
    raw: Arc<str>,
    tokens: Arc<[Token]>,
    len: usize,
}

impl AnsiString {
    pub fn new(text: impl Into<String>) -> Self {
        let raw: String = text.into();
        if raw.is_empty() {
            return Self::default();
        }
        let raw: Arc<str> = Arc::from(raw);
        let tokens = cache::tokens().get_or_insert_with(&raw, || Arc::from(tokenize(&raw)));
        let len = tokens.iter().map(Token::display_length).sum();
        Self { raw, tokens, len }
    }

    /// Logical length: characters excluding SGR sequences.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The raw text, escape sequences included.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The text with every SGR sequence removed.
    pub fn unformatted(&self) -> String {
        self.chars().collect()
    }

    /// Logical characters, skipping escape sequences.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.tokens
            .iter()
            .filter(|t| !t.is_escape())
            .flat_map(|t| t.as_str().chars())
    }

    /// Character at logical `index`.
    pub fn char_at(&self, index: usize) -> Result<char, AnsiError> {
        let out_of_bounds = AnsiError::IndexOutOfBounds {
            index,
            len: self.len,
        };
        let mut offset = 0;
        for token in self.tokens.iter().filter(|t| !t.is_escape()) {
            let width = token.display_length();
            if index < offset + width {
                return token.as_str().chars().nth(index - offset).ok_or(out_of_bounds);
            }
            offset += width;
        }
        Err(out_of_bounds)
    }

    /// Slice by logical range `start..end`.
    ///
    /// The result re-opens the formatting in effect at `start`, keeps every
    /// escape sequence inside the range, and closes whatever is open at
    /// `end`. Requires `start <= end <= len()`.
    pub fn sub_sequence(&self, start: usize, end: usize) -> Result<AnsiString, AnsiError> {
        if start > end || end > self.len {
            return Err(AnsiError::RangeOutOfBounds {
                start,
                end,
                len: self.len,
            });
        }
        Ok(self.slice_clamped(start, end))
    }

    /// Slice with bounds clamped to the string; for callers that already
    /// derived the range from this string.
    pub(crate) fn slice_clamped(&self, start: usize, end: usize) -> AnsiString {
        let end = end.min(self.len);
        let start = start.min(end);
        if start == end {
            return AnsiString::default();
        }
        let key: cache::SliceKey = (Arc::clone(&self.raw), start, end);
        let rendered = cache::slices().get_or_insert_with(&key, || self.render(start, end));
        AnsiString::new(rendered)
    }

    fn render(&self, start: usize, end: usize) -> String {
        let mut state = SgrState::new();
        let mut out = String::new();
        let mut started = false;
        let mut offset = 0;

        for token in self.tokens.iter() {
            if offset >= end {
                break;
            }

            if let Some(params) = token.sgr_params() {
                state.apply(params);
                if started {
                    out.push_str(token.as_str());
                }
                continue;
            }

            let token_end = offset + token.display_length();
            if token_end > start {
                if !started {
                    out.push_str(&state.open_sequence());
                    started = true;
                }
                let skip = start.saturating_sub(offset);
                let take = end.min(token_end) - offset - skip;
                out.extend(token.as_str().chars().skip(skip).take(take));
            }
            offset = token_end;
        }

        out.push_str(&state.close_sequence());
        out
    }

    /// Escape codes in effect for the character at logical `index`.
    pub fn open_codes_at(&self, index: usize) -> Result<Vec<EscapeCode>, AnsiError> {
        if index >= self.len {
            return Err(AnsiError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let mut state = SgrState::new();
        let mut offset = 0;
        for token in self.tokens.iter() {
            if let Some(params) = token.sgr_params() {
                state.apply(params);
                continue;
            }
            offset += token.display_length();
            if offset > index {
                break;
            }
        }
        Ok(state.open_codes().to_vec())
    }

    /// Whether no formatting is left open at the end of the string.
    pub fn is_closed(&self) -> bool {
        let mut state = SgrState::new();
        for params in self.tokens.iter().filter_map(Token::sgr_params) {
            state.apply(params);
        }
        state.is_empty()
    }
}

impl Default for AnsiString {
    fn default() -> Self {
        Self {
            raw: Arc::from(""),
            tokens: Arc::from(Vec::new()),
            len: 0,
        }
    }
}

impl fmt::Display for AnsiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for AnsiString {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for AnsiString {}

impl Hash for AnsiString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl From<&str> for AnsiString {
    fn from(text: &str) -> Self {
        AnsiString::new(text)
    }
}

impl From<String> for AnsiString {
    fn from(text: String) -> Self {
        AnsiString::new(text)
    }
}

#[cfg(test)]
#[path = "ansi_string_tests.rs"]
mod tests;
