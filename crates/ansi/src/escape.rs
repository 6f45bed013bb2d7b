// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR escape-code model.
//!
//! An [`EscapeCode`] pairs the numeric codes that switch a formatting
//! directive on with the single code that switches it off again.

use serde::Serialize;
use std::fmt::Write;

/// The escape character starting every control sequence.
pub const ESC: char = '\x1b';

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";

/// Render an SGR sequence from its numeric parameters: `ESC[a;b;cm`.
pub fn sgr(codes: &[u32]) -> String {
    let mut out = String::from("\x1b[");
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", code);
    }
    out.push('m');
    out
}

/// A formatting directive as an open/close code pair.
///
/// Opening may need several codes (`38;2;r;g;b`), closing always needs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EscapeCode {
    open_codes: Vec<u32>,
    close_code: u32,
}

impl EscapeCode {
    pub fn new(open_codes: impl Into<Vec<u32>>, close_code: u32) -> Self {
        Self {
            open_codes: open_codes.into(),
            close_code,
        }
    }

    pub fn open_codes(&self) -> &[u32] {
        &self.open_codes
    }

    pub fn close_code(&self) -> u32 {
        self.close_code
    }

    /// `ESC[<open codes>m`
    pub fn open_sequence(&self) -> String {
        sgr(&self.open_codes)
    }

    /// `ESC[<close code>m`
    pub fn close_sequence(&self) -> String {
        sgr(&[self.close_code])
    }

    /// Surround `text` with this code's open and close sequences.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open_sequence(), text, self.close_sequence())
    }
}

/// One sequence opening every code in order, or an empty string if there are none.
pub fn open_all(codes: &[EscapeCode]) -> String {
    if codes.is_empty() {
        return String::new();
    }
    let params: Vec<u32> = codes
        .iter()
        .flat_map(|c| c.open_codes.iter().copied())
        .collect();
    sgr(&params)
}

/// One sequence closing every code, most recently opened first.
///
/// Directives sharing a close code (bold and dim) are closed once.
pub fn close_all(codes: &[EscapeCode]) -> String {
    let mut params: Vec<u32> = Vec::new();
    for code in codes.iter().rev() {
        if !params.contains(&code.close_code) {
            params.push(code.close_code);
        }
    }
    if params.is_empty() {
        return String::new();
    }
    sgr(&params)
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
