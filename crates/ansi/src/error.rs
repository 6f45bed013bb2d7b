// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for logical string operations.

use thiserror::Error;

/// Errors raised by [`AnsiString`](crate::AnsiString) and color parsing.
///
/// Out-of-bounds requests always fail; indices and ranges are never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnsiError {
    #[error("index {index} out of bounds for logical length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("range {start}..{end} out of bounds for logical length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("unknown color: {0}")]
    UnknownColor(String),
}
