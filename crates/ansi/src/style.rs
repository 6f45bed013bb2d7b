// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Styled text built from typed directives.
//!
//! Every directive a [`Style`] emits is known to the registry, so styled
//! output slices cleanly through [`AnsiString`](crate::AnsiString).

use crate::directive::{Color, Directive};
use crate::escape::{self, EscapeCode};

/// An ordered set of directives applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    directives: Vec<Directive>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive. A color replaces an earlier color of the same slot;
    /// repeating an attribute has no effect.
    pub fn with(mut self, directive: Directive) -> Self {
        if self.directives.contains(&directive) {
            return self;
        }
        self.directives.retain(|d| !d.shares_slot(directive));
        self.directives.push(directive);
        self
    }

    pub fn fg(self, color: Color) -> Self {
        self.with(Directive::Foreground(color))
    }

    pub fn bg(self, color: Color) -> Self {
        self.with(Directive::Background(color))
    }

    pub fn underline_color(self, color: Color) -> Self {
        self.with(Directive::UnderlineColor(color))
    }

    pub fn bold(self) -> Self {
        self.with(Directive::Bold)
    }

    pub fn dim(self) -> Self {
        self.with(Directive::Dim)
    }

    pub fn italic(self) -> Self {
        self.with(Directive::Italic)
    }

    pub fn underline(self) -> Self {
        self.with(Directive::Underline)
    }

    pub fn double_underline(self) -> Self {
        self.with(Directive::DoubleUnderline)
    }

    pub fn blink(self) -> Self {
        self.with(Directive::Blink)
    }

    pub fn rapid_blink(self) -> Self {
        self.with(Directive::RapidBlink)
    }

    pub fn inverse(self) -> Self {
        self.with(Directive::Inverse)
    }

    pub fn hidden(self) -> Self {
        self.with(Directive::Hidden)
    }

    pub fn strikethrough(self) -> Self {
        self.with(Directive::Strikethrough)
    }

    pub fn overline(self) -> Self {
        self.with(Directive::Overline)
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn is_plain(&self) -> bool {
        self.directives.is_empty()
    }

    fn escape_codes(&self) -> Vec<EscapeCode> {
        self.directives.iter().map(|d| d.escape_code()).collect()
    }

    /// One sequence opening every directive; empty for a plain style.
    pub fn open_sequence(&self) -> String {
        escape::open_all(&self.escape_codes())
    }

    /// One sequence closing every directive; empty for a plain style.
    pub fn close_sequence(&self) -> String {
        escape::close_all(&self.escape_codes())
    }

    /// Format `text` with this style.
    pub fn apply(&self, text: &str) -> String {
        if self.is_plain() || text.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", self.open_sequence(), text, self.close_sequence())
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
