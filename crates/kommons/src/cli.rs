// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use kommons_ansi::Color;

/// Inspect, slice and style ANSI-formatted text
#[derive(Parser, Debug)]
#[command(name = "kommons", version, about = "Inspect, slice and style ANSI-formatted text")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Text to process instead of standard input
    #[arg(long, global = true, value_name = "TEXT")]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the logical length, escape sequences excluded
    Length,

    /// Print the text with SGR sequences removed
    Strip,

    /// Print the characters START..END with their formatting
    Slice { start: usize, end: usize },

    /// Print the character at INDEX
    CharAt { index: usize },

    /// Shorten the text to at most WIDTH characters
    Truncate {
        width: usize,

        /// Appended when the text is cut
        #[arg(long, default_value = kommons_ansi::ELLIPSIS)]
        marker: String,
    },

    /// Pad the text to WIDTH characters
    Pad {
        width: usize,

        /// Padding character
        #[arg(long, default_value_t = ' ')]
        fill: char,
    },

    /// Print each line with its own formatting opened and closed
    Lines,

    /// Print the token sequence as JSON
    Tokens,

    /// Print TEXT with the given style
    Style(StyleArgs),
}

impl Command {
    /// Whether the command reads text from `--input` or standard input.
    pub fn reads_input(&self) -> bool {
        !matches!(self, Command::Style(_))
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StyleArgs {
    /// Text to style
    pub text: String,

    /// Foreground color: name, palette index or #rrggbb
    #[arg(long)]
    pub fg: Option<Color>,

    /// Background color: name, palette index or #rrggbb
    #[arg(long)]
    pub bg: Option<Color>,

    #[arg(long)]
    pub bold: bool,

    #[arg(long)]
    pub dim: bool,

    #[arg(long)]
    pub italic: bool,

    #[arg(long)]
    pub underline: bool,

    #[arg(long)]
    pub inverse: bool,

    #[arg(long)]
    pub strikethrough: bool,
}
