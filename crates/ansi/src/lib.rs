// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI-aware strings.
//!
//! Measures, indexes and slices terminal text as it appears on screen: SGR
//! escape sequences (`ESC [ ... m`) have zero width, and slicing keeps the
//! formatting that was in effect, re-opening it at the start of a slice and
//! closing it at the end.
//!
//! ```
//! use kommons_ansi::AnsiString;
//!
//! let text = AnsiString::new("\x1b[31mHello\x1b[0m World");
//! assert_eq!(text.len(), 11);
//! assert_eq!(text.char_at(0), Ok('H'));
//!
//! let cut = text.sub_sequence(2, 8).unwrap();
//! assert_eq!(cut.unformatted(), "llo Wo");
//! assert!(cut.as_str().starts_with("\x1b[31m"));
//! ```
//!
//! Only SGR sequences are zero-width. Other CSI sequences (cursor movement,
//! erase) count as ordinary characters.

pub mod ansi_string;
pub mod cache;
pub mod directive;
pub mod env;
pub mod error;
pub mod escape;
pub mod layout;
pub mod registry;
pub mod separators;
pub mod state;
pub mod style;
pub mod tokenizer;

pub use ansi_string::AnsiString;
pub use directive::{Color, Directive};
pub use error::AnsiError;
pub use escape::EscapeCode;
pub use layout::{pad_end, truncate, ELLIPSIS};
pub use state::SgrState;
pub use style::Style;
pub use tokenizer::{display_length, strip, tokenize, Token};
