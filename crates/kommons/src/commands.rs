// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution.

use crate::cli::{Command, StyleArgs};
use anyhow::Context;
use kommons_ansi::{layout, AnsiString, Style};

/// Run `command` against `input` and return what should be printed.
pub fn execute(command: &Command, input: &str) -> anyhow::Result<String> {
    tracing::debug!(?command, input_bytes = input.len(), "executing");

    let text = AnsiString::new(input);
    let output = match command {
        Command::Length => text.len().to_string(),
        Command::Strip => text.unformatted(),
        Command::Slice { start, end } => text
            .sub_sequence(*start, *end)
            .with_context(|| format!("cannot slice {}..{}", start, end))?
            .to_string(),
        Command::CharAt { index } => text
            .char_at(*index)
            .with_context(|| format!("cannot read character {}", index))?
            .to_string(),
        Command::Truncate { width, marker } => {
            layout::truncate(&text, *width, marker).to_string()
        }
        Command::Pad { width, fill } => layout::pad_end(&text, *width, *fill).to_string(),
        Command::Lines => layout::lines(&text)
            .iter()
            .map(AnsiString::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Tokens => serde_json::to_string_pretty(text.tokens())
            .context("failed to serialize tokens")?,
        Command::Style(args) => style(args).apply(&args.text),
    };
    Ok(output)
}

fn style(args: &StyleArgs) -> Style {
    let mut style = Style::new();
    if let Some(fg) = args.fg {
        style = style.fg(fg);
    }
    if let Some(bg) = args.bg {
        style = style.bg(bg);
    }
    if args.bold {
        style = style.bold();
    }
    if args.dim {
        style = style.dim();
    }
    if args.italic {
        style = style.italic();
    }
    if args.underline {
        style = style.underline();
    }
    if args.inverse {
        style = style.inverse();
    }
    if args.strikethrough {
        style = style.strikethrough();
    }
    style
}

/// Text read from standard input, without the final line separator a shell
/// pipeline usually adds.
pub fn trim_input(mut raw: String) -> String {
    if let Some(sep) = kommons_ansi::separators::trailing_separator(&raw) {
        raw.truncate(raw.len() - sep.len());
    }
    raw
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
