// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracking which SGR directives are open at a point in a string.

use crate::escape::{self, EscapeCode};
use crate::registry;

/// Ordered set of escape codes currently open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SgrState {
    open: Vec<EscapeCode>,
}

impl SgrState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the state from the parameters of one SGR sequence (the part
    /// between `ESC[` and `m`).
    pub fn apply(&mut self, params: &str) {
        for group in parse_params(params) {
            self.apply_group(&group);
        }
    }

    fn apply_group(&mut self, group: &[u32]) {
        let Some(&code) = group.first() else {
            return;
        };

        if code == 0 {
            self.open.clear();
            return;
        }

        if let Some(close) = registry::close_code_for(code) {
            if registry::is_extended_color(code) && !is_complete_extended(group) {
                return;
            }
            let entry = EscapeCode::new(group.to_vec(), close);
            if registry::is_color_close(close) {
                // one color per slot
                self.open.retain(|open| open.close_code() != close);
            } else if self.open.contains(&entry) {
                return;
            }
            self.open.push(entry);
        } else if registry::is_close_code(code) {
            self.open.retain(|open| open.close_code() != code);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn open_codes(&self) -> &[EscapeCode] {
        &self.open
    }

    /// Minimal sequence re-establishing this state; empty if nothing is open.
    pub fn open_sequence(&self) -> String {
        escape::open_all(&self.open)
    }

    /// Sequence closing everything open; empty if nothing is open.
    pub fn close_sequence(&self) -> String {
        escape::close_all(&self.open)
    }
}

/// `x;5;n` or `x;2;r;g;b`; anything shorter or with another mode is malformed.
fn is_complete_extended(group: &[u32]) -> bool {
    matches!((group.get(1), group.len()), (Some(5), 3) | (Some(2), 5))
}

/// Split SGR parameters into code groups.
///
/// Extended colors keep their arguments together (`38;5;n`, `38;2;r;g;b`,
/// likewise `48` and `58`);
/// every other number is a group of its own. An empty parameter list or an
/// empty field means `0`. Fields that are not plain numbers are dropped.
pub fn parse_params(params: &str) -> Vec<Vec<u32>> {
    if params.is_empty() {
        return vec![vec![0]];
    }

    let values: Vec<u32> = params
        .split(';')
        .filter_map(|field| {
            if field.is_empty() {
                Some(0)
            } else {
                field.parse().ok()
            }
        })
        .collect();

    let mut groups = Vec::new();
    let mut i = 0;
    while i < values.len() {
        let width = match (values[i], values.get(i + 1)) {
            (38 | 48 | 58, Some(5)) => 3,
            (38 | 48 | 58, Some(2)) => 5,
            _ => 1,
        };
        let end = (i + width).min(values.len());
        groups.push(values[i..end].to_vec());
        i = end;
    }
    groups
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
